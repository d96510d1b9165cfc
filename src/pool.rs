/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Reusable buffers for the hot loops.
//!
//! The challenge function hashes a `32 + 2 * COMPRESSED_POINT_SIZE`
//! byte buffer once per ring slot; with the `pool` feature those
//! buffers come from a process-wide, size-bucketed pool instead of a
//! fresh allocation each time. Challenge scratch vectors are a
//! per-operation arena. Neither affects the values computed.

use std::ops::{Deref, DerefMut};
#[cfg(feature = "pool")]
use std::sync::Mutex;

use zeroize::Zeroize;

use crate::curve::Curve;

#[cfg(feature = "pool")]
const BUCKET_SIZES: [usize; 5] = [64, 96, 128, 256, 512];
#[cfg(feature = "pool")]
const MAX_POOLED_PER_BUCKET: usize = 32;

#[cfg(feature = "pool")]
lazy_static! {
    static ref BUFFER_BUCKETS: [Mutex<Vec<Vec<u8>>>; 5] = Default::default();
}

#[cfg(feature = "pool")]
fn bucket_index(len: usize) -> Option<usize> {
    return BUCKET_SIZES.iter().position(|&cap| len <= cap)
}

#[cfg(feature = "pool")]
fn lock_bucket(index: usize) -> std::sync::MutexGuard<'static, Vec<Vec<u8>>> {
    return match BUFFER_BUCKETS[index].lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner()
    }
}

///Take a zeroed buffer of exactly `len` bytes.
#[cfg(feature = "pool")]
pub(crate) fn take_buffer(len: usize) -> Vec<u8> {
    if let Some(index) = bucket_index(len) {
        if let Some(mut buffer) = lock_bucket(index).pop() {
            buffer.resize(len, 0);
            return buffer
        }
        let mut buffer = Vec::with_capacity(BUCKET_SIZES[index]);
        buffer.resize(len, 0);
        return buffer
    }
    return vec![0u8; len]
}

///Return a buffer to its bucket. The contents are cleared first so the
///pool never retains bytes from a previous signature.
#[cfg(feature = "pool")]
pub(crate) fn give_buffer(mut buffer: Vec<u8>) {
    buffer.zeroize();
    if let Some(index) = bucket_index(buffer.capacity()) {
        let mut bucket = lock_bucket(index);
        if bucket.len() < MAX_POOLED_PER_BUCKET {
            bucket.push(buffer);
        }
    }
}

#[cfg(not(feature = "pool"))]
pub(crate) fn take_buffer(len: usize) -> Vec<u8> {
    return vec![0u8; len]
}

#[cfg(not(feature = "pool"))]
pub(crate) fn give_buffer(mut buffer: Vec<u8>) {
    buffer.zeroize();
}

///Per-operation scratch for the challenge chain `c[0..n]`.
///
///Capacity is rounded up to a size bucket; the slots start at zero and
///are overwritten with zeros again when the operation finishes.
pub(crate) struct ScalarScratch<C: Curve> {
    slots: Vec<C::Scalar>

} impl<C: Curve> ScalarScratch<C> {
    const BUCKET_SIZES: [usize; 5] = [16, 32, 64, 128, 256];

    pub fn new(len: usize) -> Self {
        let capacity = Self::BUCKET_SIZES.iter().copied()
            .find(|&bucket| len <= bucket)
            .unwrap_or(len);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize(len, C::scalar_zero());
        return Self{ slots }
    }

} impl<C: Curve> Deref for ScalarScratch<C> {
    type Target = [C::Scalar];

    fn deref(&self) -> &[C::Scalar] {
        return &self.slots
    }

} impl<C: Curve> DerefMut for ScalarScratch<C> {
    fn deref_mut(&mut self) -> &mut [C::Scalar] {
        return &mut self.slots
    }

} impl<C: Curve> Drop for ScalarScratch<C> {
    fn drop(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = C::scalar_zero();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Curve, Ed25519};

    #[test]
    fn buffers_are_zeroed_and_sized() {
        let buffer = take_buffer(96);
        assert_eq!(buffer.len(), 96);
        assert!(buffer.iter().all(|&byte| byte == 0));

        let mut dirty = buffer;
        dirty[0] = 0xaa;
        give_buffer(dirty);

        //a pooled buffer comes back zeroed
        let again = take_buffer(96);
        assert!(again.iter().all(|&byte| byte == 0));
        give_buffer(again);
    }

    #[test]
    fn oversized_requests_fall_through() {
        let buffer = take_buffer(4096);
        assert_eq!(buffer.len(), 4096);
        give_buffer(buffer);
    }

    #[test]
    fn scratch_starts_zeroed() {
        let scratch = ScalarScratch::<Ed25519>::new(5);
        assert_eq!(scratch.len(), 5);
        assert!(scratch.iter().all(|slot| Ed25519::scalar_is_zero(slot)));
    }
}
