/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Canonical byte layout of a signature and its embedded ring.
//!
//! ```text
//! offset  length            field
//! 0       4                 ring size n (big-endian u32)
//! 4       32                c
//! 36      P                 key image (compressed)
//! 36+P    n * (32 + P)      s[i] || pubkey[i], for i in 0..n
//! ```
//!
//! `P` is the curve's compressed point size, so the curve must be known
//! out of band; it is the type parameter on deserialization.

use crate::curve::Curve;
use crate::errors::SerializationError;
use crate::ring::Ring;
use crate::signature::RingSignature;

impl<C: Curve> RingSignature<C> {
    ///Serialize to the canonical byte layout.
    pub fn serialize(&self) -> Vec<u8> {
        let n = self.ring.size();
        let point_size = C::COMPRESSED_POINT_SIZE;

        let mut out = Vec::with_capacity(
            4 + C::SCALAR_SIZE + point_size + n * (C::SCALAR_SIZE + point_size));
        out.extend_from_slice(&(n as u32).to_be_bytes());
        out.extend_from_slice(&C::encode_scalar(&self.c));
        out.extend_from_slice(&C::encode_point(&self.image));
        for i in 0..n {
            out.extend_from_slice(&C::encode_scalar(&self.s[i]));
            out.extend_from_slice(&C::encode_point(&self.ring.pubkeys[i]));
        }

        return out
    }

    ///Deserialize from the canonical byte layout.
    ///
    ///The total length must match the declared ring size exactly.
    ///The ring's hash-to-curve images are recomputed from the decoded
    ///public keys, so a deserialized signature verifies like a fresh one.
    pub fn deserialize(input: &[u8]) -> Result<Self, SerializationError> {
        let point_size = C::COMPRESSED_POINT_SIZE;

        if input.len() < 4 {
            return Err(SerializationError::Truncated)
        }
        let n = u32::from_be_bytes(input[..4].try_into().unwrap()) as usize;
        if n < 2 {
            return Err(SerializationError::InvalidSize)
        }
        let expected = 4 + (C::SCALAR_SIZE + point_size) as u64 * (n as u64 + 1);
        if input.len() as u64 != expected {
            return Err(SerializationError::Truncated)
        }

        let mut cursor = 4;
        let c = C::decode_scalar(&input[cursor..cursor + C::SCALAR_SIZE])?;
        cursor += C::SCALAR_SIZE;
        let image = C::decode_point(&input[cursor..cursor + point_size])?;
        cursor += point_size;

        let mut s = Vec::with_capacity(n);
        let mut pubkeys = Vec::with_capacity(n);
        for _ in 0..n {
            s.push(C::decode_scalar(&input[cursor..cursor + C::SCALAR_SIZE])?);
            cursor += C::SCALAR_SIZE;
            pubkeys.push(C::decode_point(&input[cursor..cursor + point_size])?);
            cursor += point_size;
        }

        return Ok(Self{
            ring: Ring::precomputed(pubkeys),
            c,
            s,
            image
        })
    }
}
