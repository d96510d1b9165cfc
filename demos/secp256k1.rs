// SPDX short identifier: Unlicense

use ring_lsag::{
    common::*,
    hashes::h_bytes
};

const RINGSIZE: usize = 16;

fn main() {
    //The signer's private key.
    //In practice this would be a long-lived key; for demonstration it is
    //randomly generated.
    let secret = Secp256k1::random_scalar();

    //Build a ring of RINGSIZE members with the signer hidden at index 7.
    //The other members are freshly generated decoys; in practice they would
    //be real public keys collected from elsewhere.
    let ring = Ring::<Secp256k1>::new_random(RINGSIZE, &secret, 7)
        .expect("Real software should have proper error handling.");

    //The message to be signed and verified.
    //The protocol signs exactly 32 bytes, so hash your message first.
    let message = h_bytes(b"helloworld");

    //Create a signature
    let signature = ring.sign(&message, &secret)
        .expect("Real software should have proper error handling.");

    //Verify the signature
    assert!(signature.verify(&message));
    //...and nobody can move it to another message
    assert!(!signature.verify(&h_bytes(b"goodbyeworld")));

    //The signature travels as bytes, ring included.
    //The curve must be known out of band.
    let bytes = signature.serialize();
    let received = RingSignature::<Secp256k1>::deserialize(&bytes).unwrap();
    assert!(received.verify(&message));

    //Sign again with the same key over a completely different ring.
    //Key images will always be the same when signing with the same key,
    //regardless of other ring members or the message, so the two
    //signatures link.
    let other_ring = Ring::<Secp256k1>::new_random(RINGSIZE, &secret, 2).unwrap();
    let signature2 = other_ring.sign(&h_bytes(b"another test"), &secret).unwrap();
    assert!(link(&signature, &signature2));

    //A different key never links.
    let stranger = Secp256k1::random_scalar();
    let signature3 = Ring::<Secp256k1>::new_random(RINGSIZE, &stranger, 0).unwrap()
        .sign(&message, &stranger).unwrap();
    assert!(!link(&signature, &signature3));

    println!("signed, verified, and linked over a ring of {RINGSIZE}");
}
