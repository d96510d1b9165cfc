// SPDX short identifier: Unlicense

use ring_lsag::{
    common::*,
    hashes::h_bytes
};

fn main() {
    //Two parties with long-lived keys
    let alice = Ed25519::random_scalar();
    let bob = Ed25519::random_scalar();

    //Suppose a service accepts one anonymous vote per registered key.
    //Voters sign their ballot over the ring of all registered keys.
    let registered: Vec<_> = (0..7)
        .map(|_| Ed25519::basepoint() * Ed25519::random_scalar())
        .collect();

    let ballot = h_bytes(b"proposal 42: yes");

    //Alice inserts her key at a position of her choosing and signs.
    let ring_a = Ring::<Ed25519>::new_with_pubkeys(&registered, &alice, 3)
        .expect("Real software should have proper error handling.");
    let vote_a = ring_a.sign(&ballot, &alice).unwrap();
    assert!(vote_a.verify(&ballot));

    //Bob does the same; nobody can tell which member cast which vote.
    let ring_b = Ring::<Ed25519>::new_with_pubkeys(&registered, &bob, 5).unwrap();
    let vote_b = ring_b.sign(&ballot, &bob).unwrap();
    assert!(vote_b.verify(&ballot));
    assert!(!link(&vote_a, &vote_b));

    //If Alice tries to vote twice, even over a different ring and with a
    //different ballot, her key image gives the duplicate away.
    let ring_c = Ring::<Ed25519>::new_with_pubkeys(&registered, &alice, 0).unwrap();
    let vote_c = ring_c.sign(&h_bytes(b"proposal 42: no"), &alice).unwrap();
    assert!(link(&vote_a, &vote_c));

    println!("two voters, three votes, one duplicate caught");
}
