/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::curve::Curve;
use crate::errors::RingError;

///A ring of public keys, one of which belongs to the signer.
///
///Alongside the keys themselves the ring stores the hash-to-curve image
///`hp[i]` of every key, precomputed at construction so that signing and
///verification never recompute them. Rings are immutable once built.
#[derive(Debug, Clone)]
pub struct Ring<C: Curve> {
    pub(crate) pubkeys: Vec<C::Point>,
    pub(crate) hp: Vec<C::Point>

} impl<C: Curve> Ring<C> {
    ///Create a ring of `size` members with the signer's public key
    ///`secret * G` at position `idx` and fresh random keys everywhere else.
    pub fn new_random(size: usize, secret: &C::Scalar, idx: usize) -> Result<Self, RingError> {
        if size < 2 {
            return Err(RingError::InvalidSize)
        }
        if idx >= size {
            return Err(RingError::IndexOutOfRange)
        }
        if C::scalar_is_zero(secret) {
            return Err(RingError::ZeroScalar)
        }

        let mut pubkeys = vec![C::identity(); size];
        pubkeys[idx] = C::basepoint() * *secret;
        for i in 1..size {
            pubkeys[(i + idx) % size] = C::basepoint() * C::random_scalar();
        }

        return Self::from_pubkeys(pubkeys)
    }

    ///Create a ring of `pubkeys.len() + 1` members by inserting the
    ///signer's public key `secret * G` at position `idx` and shifting the
    ///provided keys around it.
    pub fn new_with_pubkeys(pubkeys: &[C::Point], secret: &C::Scalar, idx: usize) -> Result<Self, RingError> {
        let size = pubkeys.len() + 1;
        if size < 2 {
            return Err(RingError::InvalidSize)
        }
        if idx > pubkeys.len() {
            return Err(RingError::IndexOutOfRange)
        }
        if C::scalar_is_zero(secret) {
            return Err(RingError::ZeroScalar)
        }

        let mut members = vec![C::identity(); size];
        members[idx] = C::basepoint() * *secret;
        for i in 1..size {
            members[(i + idx) % size] = pubkeys[i - 1];
        }

        return Self::from_pubkeys(members)
    }

    ///Create a ring from a verbatim list of public keys.
    ///The caller is responsible for the signer's key being among them.
    pub fn new_fixed(pubkeys: &[C::Point]) -> Result<Self, RingError> {
        if pubkeys.len() < 2 {
            return Err(RingError::InvalidSize)
        }
        return Self::from_pubkeys(pubkeys.to_vec())
    }

    ///Validate the members and precompute their hash-to-curve images.
    fn from_pubkeys(pubkeys: Vec<C::Point>) -> Result<Self, RingError> {
        for (i, pubkey) in pubkeys.iter().enumerate() {
            //the identity is the public key of the zero scalar
            if C::is_identity(pubkey) {
                return Err(RingError::ZeroScalar)
            }
            if pubkeys[..i].contains(pubkey) {
                return Err(RingError::DuplicatePubkey)
            }
        }
        return Ok(Self::precomputed(pubkeys))
    }

    ///Build a ring without membership validation.
    ///Deserialization uses this: a decoded ring is taken as-is, and only
    ///the hash-to-curve images are recomputed.
    pub(crate) fn precomputed(pubkeys: Vec<C::Point>) -> Self {
        let hp = pubkeys.iter().map(C::hash_to_curve).collect();
        return Self{ pubkeys, hp }
    }

    ///Number of ring members.
    pub fn size(&self) -> usize {
        return self.pubkeys.len()
    }

    ///Copies of the member public keys, in ring order.
    pub fn public_keys(&self) -> Vec<C::Point> {
        return self.pubkeys.clone()
    }

} impl<C: Curve> PartialEq for Ring<C> {
    ///Rings are equal iff they hold the same keys at the same positions.
    ///A rotation of the same keys is a different ring.
    fn eq(&self, other: &Self) -> bool {
        return self.pubkeys == other.pubkeys
    }

} impl<C: Curve> Eq for Ring<C> {}
