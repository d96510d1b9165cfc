/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve abstraction and the two supported backends.
//!
//! The protocol in [`crate::signature`] is generic over [`Curve`]
//! and is monomorphized per backend; there is no runtime dispatch.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use crate::errors::SerializationError;

mod secp256k1;
pub use secp256k1::Secp256k1;
mod ed25519;
pub use ed25519::Ed25519;

///Number of attempts hash-to-curve makes before declaring the curve broken.
///
///Each attempt succeeds with probability about 1/2,
///so 128 failures cannot happen on an honest curve.
pub(crate) const HASH_TO_CURVE_SAFETY: usize = 128;

///An elliptic curve suitable for ring signatures.
///
///Implementors are unit types; every capability is an associated
///function so that `Ring<C>` and `RingSignature<C>` carry the curve
///in their type. Scalars and points are the backend library's native
///types, bounded by the arithmetic the protocol needs.
pub trait Curve: 'static + Send + Sync + Copy + Clone + PartialEq + Eq + Debug {
    ///Scalar field element, prime order `n`.
    type Scalar: Copy + Clone + Debug + PartialEq + Send + Sync
        + Add<Output = Self::Scalar>
        + Sub<Output = Self::Scalar>
        + Mul<Output = Self::Scalar>
        + Neg<Output = Self::Scalar>;
    ///Group element.
    type Point: Copy + Clone + Debug + PartialEq + Send + Sync
        + Add<Output = Self::Point>
        + Sub<Output = Self::Point>
        + Mul<Self::Scalar, Output = Self::Point>;

    ///Human-readable curve name.
    const NAME: &'static str;
    ///Size of a compressed point encoding in bytes.
    const COMPRESSED_POINT_SIZE: usize;
    ///Size of a scalar encoding in bytes.
    ///The wire format relies on this being 32 for every supported curve.
    const SCALAR_SIZE: usize = 32;
    ///Bit size of the scalar field.
    const BIT_SIZE: u32;

    ///The basepoint `G` of the curve.
    fn basepoint() -> Self::Point;
    ///A fixed alternate basepoint with unknown discrete log relative to `G`.
    ///Derived deterministically by hashing `G`'s compressed encoding to a point.
    fn alt_basepoint() -> Self::Point;
    ///The identity element.
    fn identity() -> Self::Point;
    fn is_identity(point: &Self::Point) -> bool;

    ///Sample a uniform scalar in `[1, n)` from the OS RNG.
    ///Failure to gather entropy panics; there is no recovery from a broken RNG.
    fn random_scalar() -> Self::Scalar;
    fn scalar_zero() -> Self::Scalar;
    fn scalar_is_zero(scalar: &Self::Scalar) -> bool;
    fn scalar_from_u32(value: u32) -> Self::Scalar;
    ///Interpret 32 bytes as a scalar, reduced mod `n`.
    fn scalar_from_bytes(bytes: [u8; 32]) -> Self::Scalar;
    ///Multiplicative inverse, or `None` for zero.
    fn scalar_invert(scalar: &Self::Scalar) -> Option<Self::Scalar>;
    ///Hash arbitrary bytes to a scalar: SHA3-256 reduced mod `n`.
    fn hash_to_scalar(data: &[u8]) -> Self::Scalar;
    ///Fixed-width scalar encoding.
    fn encode_scalar(scalar: &Self::Scalar) -> [u8; 32];
    ///Decode a canonical 32-byte scalar encoding.
    ///Non-canonical or wrong-length input is a `DecodingError`.
    fn decode_scalar(data: &[u8]) -> Result<Self::Scalar, SerializationError>;

    ///Canonical compressed point encoding.
    ///Always exactly `COMPRESSED_POINT_SIZE` bytes, the identity included.
    fn encode_point(point: &Self::Point) -> Vec<u8>;
    ///Decode a compressed point encoding; fails on anything malformed.
    fn decode_point(data: &[u8]) -> Result<Self::Point, SerializationError>;

    ///Deterministically map a point to another point whose discrete log
    ///is unknown. Used for the per-key generators of the key image.
    ///
    ///Panics if the retry bound is exhausted, which indicates a broken
    ///curve backend rather than bad input.
    fn hash_to_curve(point: &Self::Point) -> Self::Point;

    ///Normalize a key image before linkability comparison.
    ///The default is the identity map; curves with a cofactor override this
    ///to canonicalize within the prime-order subgroup.
    fn canonicalize_for_link(point: Self::Point) -> Self::Point {
        return point
    }
}
