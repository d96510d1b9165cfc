/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Linkable spontaneous anonymous group (LSAG) ring signatures.
//!
//! A ring signature proves that one member of a set of public keys
//! (the "ring") signed a message, without revealing which member.
//! Signatures also carry a *key image*, a deterministic function of the
//! signer's private key: two signatures made with the same key share a
//! key image and can therefore be linked, while the signer stays
//! anonymous within the ring.
//!
//! Two curves are supported, secp256k1 and ed25519, behind the
//! compile-time [`curve::Curve`] trait.

#[macro_use]
extern crate lazy_static;


//internal modules
mod ring;
pub use ring::Ring;
mod pool;


//uncommon public modules
pub mod hashes;


//"normal" public modules
pub mod errors;
pub mod curve;

pub mod signature;
pub use signature::{link, RingSignature};


pub mod common {
    //! A collection of commonly-used things in this crate.
    //! Errors, the curve trait, both curve backends, rings, and
    //! signatures are all included.
    //!
    //! This is intended for situations where you don't want to bother with
    //! manually specifying everything you need.
    //! Relying on something like this is generally considered bad practice,
    //! and is intended for use in tests, examples, mockups, etc.
    //!
    //! Use `common::*` if you wish to automatically import everything.

    pub use crate::{
        errors::*, curve::*, ring::Ring, signature::{link, RingSignature}
    };
}
