/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sha3::{Digest, Sha3_256};

///Hash bytes to bytes with SHA3-256.
///
///Every hashed value in this crate (challenges, hash-to-scalar,
///hash-to-curve candidates) goes through this function;
///the curve backends reduce its output into their scalar fields.
pub fn h_bytes(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::default();
    hasher.update(msg);
    return hasher.finalize().as_slice().try_into()
        .expect("Wrong digest length");
}
