/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The LSAG signing and verification protocol.

mod lsag;
pub use lsag::{link, RingSignature};

mod serde;

use crate::curve::Curve;
use crate::pool;

///The challenge function `H_ch(m, L, R)`.
///
///Hashes the 32-byte message followed by the compressed encodings of
///both points, in a buffer of exactly `32 + 2 * COMPRESSED_POINT_SIZE`
///bytes, then reduces into the scalar field. The buffer is fully
///overwritten before hashing, so its prior contents never matter.
pub(crate) fn challenge<C: Curve>(msg: &[u8; 32], left: &C::Point, right: &C::Point) -> C::Scalar {
    let point_size = C::COMPRESSED_POINT_SIZE;
    let mut buffer = pool::take_buffer(32 + 2 * point_size);

    buffer[..32].copy_from_slice(msg);
    buffer[32..32 + point_size].copy_from_slice(&C::encode_point(left));
    buffer[32 + point_size..].copy_from_slice(&C::encode_point(right));

    let scalar = C::hash_to_scalar(&buffer);
    pool::give_buffer(buffer);
    return scalar
}
