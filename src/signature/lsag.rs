/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::curve::Curve;
use crate::errors::SignatureError;
use crate::pool::ScalarScratch;
use crate::ring::Ring;
use crate::signature::challenge;

///A linkable ring signature.
///
///LSAG stands for "Linkable Spontaneous Anonymous Group (signature)".
///
///The signature proves that the holder of one of the ring's private
///keys signed the message, and carries the signer's key image
///`I = x * H_p(x * G)`. Two signatures by the same key always carry the
///same key image, whatever the ring or message, which is what makes
///them linkable; see [`link`].
#[derive(Debug, Clone)]
pub struct RingSignature<C: Curve> {
    pub(crate) ring: Ring<C>,
    ///the starting challenge `c[0]` of the cyclic chain
    pub(crate) c: C::Scalar,
    pub(crate) s: Vec<C::Scalar>,
    pub(crate) image: C::Point

} impl<C: Curve> RingSignature<C> {
    ///Create a ring signature over a 32-byte message.
    ///
    ///The signer is located by searching the ring for `secret * G`;
    ///`NotSigner` is returned when the key is not a member. The returned
    ///signature embeds a copy of the ring.
    pub fn sign(ring: &Ring<C>, msg: &[u8; 32], secret: &C::Scalar) -> Result<Self, SignatureError> {
        if C::scalar_is_zero(secret) {
            return Err(SignatureError::ZeroScalar)
        }

        let n = ring.size();
        let pubkey = C::basepoint() * *secret;
        let j = match ring.pubkeys.iter().position(|member| member == &pubkey) {
            Some(index) => index,
            None => return Err(SignatureError::NotSigner)
        };

        //the key image: I = x * H_p(P_j)
        let image = ring.hp[j] * *secret;

        let mut c = ScalarScratch::<C>::new(n);
        let mut s: Vec<C::Scalar> = (0..n).map(|_| C::random_scalar()).collect();

        //probe the signer's slot with a random glue scalar u
        let u = C::random_scalar();
        let l_probe = C::basepoint() * u;
        let r_probe = ring.hp[j] * u;
        c[(j + 1) % n] = challenge::<C>(msg, &l_probe, &r_probe);

        //walk the ring from the slot after the signer back around to it,
        //chaining each challenge off the previous slot's L and R
        for k in 1..n {
            let i = (j + k) % n;
            let l = C::basepoint() * s[i] + ring.pubkeys[i] * c[i];
            let r = ring.hp[i] * s[i] + image * c[i];
            c[(i + 1) % n] = challenge::<C>(msg, &l, &r);
        }

        //close the ring: s[j] makes the signer's slot consistent with c[j]
        s[j] = u - c[j] * *secret;

        //the closed slot must reproduce the probe exactly
        let l_closed = C::basepoint() * s[j] + ring.pubkeys[j] * c[j];
        let r_closed = ring.hp[j] * s[j] + image * c[j];
        if l_closed != l_probe
            || r_closed != r_probe
            || challenge::<C>(msg, &l_closed, &r_closed) != c[(j + 1) % n] {
            return Err(SignatureError::RingClosureFailed)
        }

        return Ok(Self{
            ring: ring.clone(),
            c: c[0],
            s,
            image
        })
    }

    ///Check the signature against a 32-byte message.
    ///
    ///Re-walks the full challenge cycle from `c[0]` and accepts iff the
    ///chain closes back onto `c[0]`. Malformed signatures return `false`;
    ///verification never fails with an error. All ring slots are always
    ///processed, so the time taken does not reveal where a mismatch
    ///originated.
    pub fn verify(&self, msg: &[u8; 32]) -> bool {
        let n = self.ring.size();
        if n < 2 || self.s.len() != n {
            return false
        }

        //hp is precomputed on construction and deserialization,
        //but re-derive defensively if it is ever missing
        let rederived;
        let hp = if self.ring.hp.len() == n {
            &self.ring.hp
        } else {
            rederived = self.ring.pubkeys.iter().map(C::hash_to_curve).collect::<Vec<_>>();
            &rederived
        };

        let mut c = ScalarScratch::<C>::new(n);
        c[0] = self.c;
        let mut closing = C::scalar_zero();

        for i in 0..n {
            let l = C::basepoint() * self.s[i] + self.ring.pubkeys[i] * c[i];
            let r = hp[i] * self.s[i] + self.image * c[i];
            let next = challenge::<C>(msg, &l, &r);
            if i < n - 1 {
                c[i + 1] = next;
            } else {
                closing = next;
            }
        }

        return closing == self.c
    }

    ///The key image `I = x * H_p(x * G)` carried by this signature.
    pub fn key_image(&self) -> C::Point {
        return self.image
    }

    ///Copies of the ring's public keys, in ring order.
    pub fn public_keys(&self) -> Vec<C::Point> {
        return self.ring.public_keys()
    }

    ///The ring this signature was made over.
    pub fn ring(&self) -> &Ring<C> {
        return &self.ring
    }
}

impl<C: Curve> Ring<C> {
    ///Create a ring signature over a 32-byte message with this ring.
    ///See [`RingSignature::sign`].
    pub fn sign(&self, msg: &[u8; 32], secret: &C::Scalar) -> Result<RingSignature<C>, SignatureError> {
        return RingSignature::sign(self, msg, secret)
    }
}

///Check whether two signatures were created by the same private key.
///
///Key images are normalized per curve before comparison: on ed25519 both
///are multiplied by the cofactor, so images differing by a small-subgroup
///element still link. The rings and messages play no part; only the key
///images are compared.
pub fn link<C: Curve>(sig_a: &RingSignature<C>, sig_b: &RingSignature<C>) -> bool {
    return C::canonicalize_for_link(sig_a.image) == C::canonicalize_for_link(sig_b.image)
}
