/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use curve25519_dalek::{
    constants,
    edwards::{CompressedEdwardsY, EdwardsPoint},
    scalar::Scalar,
    traits::{Identity, IsIdentity}
};
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroize;

use crate::curve::{Curve, HASH_TO_CURVE_SAFETY};
use crate::errors::SerializationError;
use crate::hashes::h_bytes;

///The ed25519 curve.
///
///Backed by `curve25519-dalek`'s Edwards API. Points use the 32-byte
///compressed Edwards-y encoding; scalars are 32 bytes.
///
///ed25519 has cofactor 8, so key images are multiplied by the cofactor
///before linkability comparison to canonicalize them within the
///prime-order subgroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ed25519;

lazy_static! {
    static ref ALT_BASEPOINT: EdwardsPoint = hash_to_curve_encoded(
        constants::ED25519_BASEPOINT_COMPRESSED.as_bytes());
}

///Hash the encoding, read the digest as a compressed point, and rehash
///until decompression succeeds; the cofactor multiplication clears any
///small-order component so the result lies in the prime-order subgroup.
fn hash_to_curve_encoded(encoded: &[u8]) -> EdwardsPoint {
    let mut hash = h_bytes(encoded);

    for _ in 0..HASH_TO_CURVE_SAFETY {
        if let Some(point) = CompressedEdwardsY(hash).decompress() {
            let point = point.mul_by_cofactor();
            //small-order candidates collapse to the identity
            if !point.is_identity() {
                return point
            }
        }
        hash = h_bytes(&hash);
    }

    panic!("ed25519 hash-to-curve exhausted its retry bound")
}

impl Curve for Ed25519 {
    type Scalar = Scalar;
    type Point = EdwardsPoint;

    const NAME: &'static str = "ed25519";
    const COMPRESSED_POINT_SIZE: usize = 32;
    const BIT_SIZE: u32 = 252;

    fn basepoint() -> EdwardsPoint {
        return constants::ED25519_BASEPOINT_POINT
    }

    fn alt_basepoint() -> EdwardsPoint {
        return *ALT_BASEPOINT
    }

    fn identity() -> EdwardsPoint {
        return EdwardsPoint::identity()
    }

    fn is_identity(point: &EdwardsPoint) -> bool {
        return point.is_identity()
    }

    fn random_scalar() -> Scalar {
        let mut bytes = [0u8; 64];
        loop {
            OsRng.fill_bytes(&mut bytes);
            let scalar = Scalar::from_bytes_mod_order_wide(&bytes);
            if scalar != Scalar::zero() {
                bytes.zeroize();
                return scalar
            }
        }
    }

    fn scalar_zero() -> Scalar {
        return Scalar::zero()
    }

    fn scalar_is_zero(scalar: &Scalar) -> bool {
        return scalar == &Scalar::zero()
    }

    fn scalar_from_u32(value: u32) -> Scalar {
        return Scalar::from(value)
    }

    fn scalar_from_bytes(bytes: [u8; 32]) -> Scalar {
        return Scalar::from_bytes_mod_order(bytes)
    }

    fn scalar_invert(scalar: &Scalar) -> Option<Scalar> {
        if scalar == &Scalar::zero() {
            return None
        }
        return Some(scalar.invert())
    }

    fn hash_to_scalar(data: &[u8]) -> Scalar {
        return Scalar::from_bytes_mod_order(h_bytes(data))
    }

    fn encode_scalar(scalar: &Scalar) -> [u8; 32] {
        return scalar.to_bytes()
    }

    fn decode_scalar(data: &[u8]) -> Result<Scalar, SerializationError> {
        let bytes: [u8; 32] = data.try_into()
            .map_err(|_| SerializationError::DecodingError)?;
        return Scalar::from_canonical_bytes(bytes)
            .ok_or(SerializationError::DecodingError)
    }

    fn encode_point(point: &EdwardsPoint) -> Vec<u8> {
        return point.compress().to_bytes().to_vec()
    }

    fn decode_point(data: &[u8]) -> Result<EdwardsPoint, SerializationError> {
        if data.len() != Self::COMPRESSED_POINT_SIZE {
            return Err(SerializationError::DecodingError)
        }
        return match CompressedEdwardsY::from_slice(data).decompress() {
            Some(point) => Ok(point),
            None => Err(SerializationError::DecodingError)
        }
    }

    fn hash_to_curve(point: &EdwardsPoint) -> EdwardsPoint {
        return hash_to_curve_encoded(point.compress().as_bytes())
    }

    fn canonicalize_for_link(point: EdwardsPoint) -> EdwardsPoint {
        return point.mul_by_cofactor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let point = Ed25519::basepoint() * Ed25519::random_scalar();
        let encoded = Ed25519::encode_point(&point);
        assert_eq!(encoded.len(), 32);
        assert_eq!(Ed25519::decode_point(&encoded).unwrap(), point);
    }

    #[test]
    fn rejects_bad_encodings() {
        assert!(Ed25519::decode_point(&[0u8; 31]).is_err());
        assert!(Ed25519::decode_point(&[0u8; 33]).is_err());
        assert!(Ed25519::decode_point(&[]).is_err());

        //a non-canonical scalar: the group order plus one
        let mut order_plus_one = constants::BASEPOINT_ORDER.to_bytes();
        order_plus_one[0] += 1;
        assert!(Ed25519::decode_scalar(&order_plus_one).is_err());
    }

    #[test]
    fn scalar_round_trip() {
        let scalar = Ed25519::random_scalar();
        let encoded = Ed25519::encode_scalar(&scalar);
        assert_eq!(Ed25519::decode_scalar(&encoded).unwrap(), scalar);
    }

    #[test]
    fn alt_basepoint_is_not_g() {
        assert_ne!(Ed25519::alt_basepoint(), Ed25519::basepoint());
        assert!(!Ed25519::is_identity(&Ed25519::alt_basepoint()));
    }

    #[test]
    fn hash_to_curve_lands_in_prime_subgroup() {
        let point = Ed25519::basepoint() * Ed25519::scalar_from_u32(7);
        let mapped = Ed25519::hash_to_curve(&point);
        assert_eq!(mapped, Ed25519::hash_to_curve(&point));
        assert!(mapped.is_torsion_free());
    }
}
