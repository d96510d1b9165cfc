/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Ring construction errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    ///The ring would have fewer than two members.
    InvalidSize,
    ///The signer's index is outside the ring.
    IndexOutOfRange,
    ///The secret scalar is zero.
    ZeroScalar,
    ///Two ring members share a public key,
    ///or a provided key collides with the signer's.
    DuplicatePubkey,

} impl Display for RingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::InvalidSize => "Ring size must be at least two.",
            Self::IndexOutOfRange => "Signer index out of range.",
            Self::ZeroScalar => "Secret scalar is zero.",
            Self::DuplicatePubkey => "Duplicate public key in ring."
        })
    }

} impl Error for RingError {}

///Signing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    ///The secret key's public key is not a member of the ring.
    NotSigner,
    ///The secret scalar is zero.
    ZeroScalar,
    ///The cyclic challenge chain did not close over the signer's slot.
    ///This indicates a bug or a broken curve backend, not bad input.
    RingClosureFailed,

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::NotSigner => "Secret key is not a ring member.",
            Self::ZeroScalar => "Secret scalar is zero.",
            Self::RingClosureFailed => "Failed to close the ring."
        })
    }

} impl Error for SignatureError {}

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///The serialized ring size is below two.
    InvalidSize,
    ///The input is shorter or longer than its declared size.
    Truncated,
    ///A point or scalar failed to decode.
    DecodingError,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::InvalidSize => "Invalid ring size.",
            Self::Truncated => "Input length does not match the declared size.",
            Self::DecodingError => "Decoding error."
        })
    }

} impl Error for SerializationError {}
