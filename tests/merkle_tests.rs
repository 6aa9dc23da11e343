//! Merkle tree construction, proof and verification tests

use anyhow::Result;
use merkle_whitelist::{
    core::hash::keccak256, verify, verify_leaf, Hash, Keccak256Hasher, LeafEncoding, MerkleError,
    MerkleHasher, MerkleTree, Proof, Sha256Hasher,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

const ADDR_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1";
const ADDR_B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb2";
const ADDR_C: &str = "0xccccccccccccccccccccccccccccccccccccccc3";

fn hash(hex: &str) -> Hash {
    Hash::from_hex(hex).unwrap()
}

#[test]
fn test_three_address_tree_matches_known_root() -> Result<()> {
    let tree: MerkleTree =
        MerkleTree::from_values(&[ADDR_A, ADDR_B, ADDR_C], LeafEncoding::Address)?;

    assert_eq!(
        tree.root(),
        hash("0x8dd0c2feeae02c00113fd7637e46c88ba6abc847aa094c7aa7cc8392ec3d588e")
    );
    assert_eq!(tree.leaf_count(), 3);
    assert_eq!(tree.depth(), 2);

    // Leaves are sorted: A (0x316d..) < C (0xa916..) < B (0xaff8..)
    assert_eq!(
        tree.leaves(),
        &[
            hash("0x316dae836fc67f17145122b6320bbc6dcacb306cd7c19d910d575f1af0c33dff"),
            hash("0xa9164d8c2d856d77c99e143220b01d444c7c84123b8e37f27dba6553f69b3da7"),
            hash("0xaff83f74fde7c7fda07c842493a508117268f6cdf0c0d4e13415bca1a70719eb"),
        ]
    );

    Ok(())
}

#[test]
fn test_known_proofs_for_three_addresses() -> Result<()> {
    let tree: MerkleTree =
        MerkleTree::from_values(&[ADDR_A, ADDR_B, ADDR_C], LeafEncoding::Address)?;

    let proof_a = tree.proof_for_value(ADDR_A, LeafEncoding::Address)?;
    assert_eq!(
        proof_a.to_hex_vec(),
        vec![
            "0xa9164d8c2d856d77c99e143220b01d444c7c84123b8e37f27dba6553f69b3da7".to_string(),
            "0x8a911af8ec8b6da95c23b2cb20f0ca40506dc37243dd3c3b0868ed986ddab9e9".to_string(),
        ]
    );

    // B is the padded last leaf, so its first sibling is itself
    let proof_b = tree.proof_for_value(ADDR_B, LeafEncoding::Address)?;
    assert_eq!(
        proof_b.to_hex_vec(),
        vec![
            "0xaff83f74fde7c7fda07c842493a508117268f6cdf0c0d4e13415bca1a70719eb".to_string(),
            "0x32f5fddcd738a6224ad399e6f17f6d7befbda8e289e312e5f668739e5b1d9f31".to_string(),
        ]
    );

    for value in [ADDR_A, ADDR_B, ADDR_C] {
        let proof = tree.proof_for_value(value, LeafEncoding::Address)?;
        assert!(verify::<Keccak256Hasher>(
            &tree.root(),
            value,
            LeafEncoding::Address,
            &proof
        )?);
    }

    Ok(())
}

#[test]
fn test_root_is_independent_of_input_order() -> Result<()> {
    let forward: MerkleTree =
        MerkleTree::from_values(&[ADDR_A, ADDR_B, ADDR_C], LeafEncoding::Address)?;
    let reversed: MerkleTree =
        MerkleTree::from_values(&[ADDR_C, ADDR_B, ADDR_A], LeafEncoding::Address)?;
    let shuffled: MerkleTree =
        MerkleTree::from_values(&[ADDR_B, ADDR_A, ADDR_C], LeafEncoding::Address)?;

    assert_eq!(forward.root(), reversed.root());
    assert_eq!(forward.root(), shuffled.root());
    Ok(())
}

#[test]
fn test_address_case_does_not_change_root() -> Result<()> {
    let lower: MerkleTree = MerkleTree::from_values(
        &["0x292398ce6f4806420347854ad42bebd80fb81d78"],
        LeafEncoding::Address,
    )?;
    let checksummed: MerkleTree = MerkleTree::from_values(
        &["0x292398ce6f4806420347854Ad42BeBd80Fb81d78"],
        LeafEncoding::Address,
    )?;
    assert_eq!(lower.root(), checksummed.root());
    Ok(())
}

#[test]
fn test_single_leaf_tree() -> Result<()> {
    let tree: MerkleTree = MerkleTree::from_values(&[ADDR_A], LeafEncoding::Address)?;
    let leaf = MerkleTree::<Keccak256Hasher>::hash_value(ADDR_A, LeafEncoding::Address)?;

    assert_eq!(tree.root(), leaf);
    assert_eq!(tree.depth(), 0);

    let proof = tree.proof_for_value(ADDR_A, LeafEncoding::Address)?;
    assert!(proof.is_empty());
    assert!(proof.verify::<Keccak256Hasher>(&tree.root(), &leaf));
    Ok(())
}

#[test]
fn test_odd_level_duplicates_last_node() -> Result<()> {
    // Three leaves where the largest one is padded
    let leaves = [keccak256(b"a"), keccak256(b"b"), keccak256(b"c")];
    let mut sorted = leaves;
    sorted.sort();
    let largest = sorted[2];

    let odd: MerkleTree = MerkleTree::from_leaf_hashes(&leaves)?;
    let padded: MerkleTree =
        MerkleTree::from_leaf_hashes(&[leaves[0], leaves[1], leaves[2], largest])?;
    assert_eq!(odd.root(), padded.root());

    let expected = Keccak256Hasher::hash_sorted_pair(
        &Keccak256Hasher::hash_sorted_pair(&sorted[0], &sorted[1]),
        &Keccak256Hasher::hash_sorted_pair(&largest, &largest),
    );
    assert_eq!(odd.root(), expected);
    Ok(())
}

#[test]
fn test_duplicate_values_are_kept_as_leaves() -> Result<()> {
    let tree: MerkleTree =
        MerkleTree::from_values(&[ADDR_A, ADDR_A, ADDR_B], LeafEncoding::Address)?;
    assert_eq!(tree.leaf_count(), 3);

    let proof = tree.proof_for_value(ADDR_A, LeafEncoding::Address)?;
    assert!(verify::<Keccak256Hasher>(
        &tree.root(),
        ADDR_A,
        LeafEncoding::Address,
        &proof
    )?);
    Ok(())
}

#[test]
fn test_every_leaf_proves_for_many_sizes() -> Result<()> {
    for size in 1..=33u32 {
        let values: Vec<String> = (0..size).map(|i| format!("value-{}", i)).collect();
        let tree: MerkleTree = MerkleTree::from_values(&values, LeafEncoding::Utf8)?;

        for value in &values {
            let proof = tree.proof_for_value(value, LeafEncoding::Utf8)?;
            assert_eq!(proof.len(), tree.depth(), "proof length for size {}", size);
            assert!(
                verify::<Keccak256Hasher>(&tree.root(), value, LeafEncoding::Utf8, &proof)?,
                "{} failed to verify in a tree of {}",
                value,
                size
            );
        }
    }
    Ok(())
}

#[test]
fn test_value_outside_tree_has_no_proof() -> Result<()> {
    let tree: MerkleTree = MerkleTree::from_values(&[ADDR_A, ADDR_B], LeafEncoding::Address)?;

    let result = tree.proof_for_value(ADDR_C, LeafEncoding::Address);
    assert!(matches!(result, Err(MerkleError::LeafNotFound { .. })));
    Ok(())
}

#[test]
fn test_proof_does_not_verify_other_values() -> Result<()> {
    let tree: MerkleTree =
        MerkleTree::from_values(&[ADDR_A, ADDR_B, ADDR_C], LeafEncoding::Address)?;
    let proof = tree.proof_for_value(ADDR_A, LeafEncoding::Address)?;

    let outsider = "0xdddddddddddddddddddddddddddddddddddddd04";
    assert!(!verify::<Keccak256Hasher>(
        &tree.root(),
        outsider,
        LeafEncoding::Address,
        &proof
    )?);
    Ok(())
}

#[test]
fn test_tampered_proof_is_rejected() -> Result<()> {
    let tree: MerkleTree =
        MerkleTree::from_values(&[ADDR_A, ADDR_B, ADDR_C], LeafEncoding::Address)?;
    let proof = tree.proof_for_value(ADDR_C, LeafEncoding::Address)?;

    let mut tampered = proof.clone();
    let mut bytes = *tampered.elements()[0].hash.as_bytes();
    bytes[0] ^= 0x01;
    tampered.elements_mut()[0].hash = Hash::from_bytes(bytes);
    assert!(!verify::<Keccak256Hasher>(
        &tree.root(),
        ADDR_C,
        LeafEncoding::Address,
        &tampered
    )?);

    let truncated: Proof = proof.elements()[..1].iter().copied().collect();
    assert!(!verify::<Keccak256Hasher>(
        &tree.root(),
        ADDR_C,
        LeafEncoding::Address,
        &truncated
    )?);

    assert!(!verify::<Keccak256Hasher>(
        &Hash::zero(),
        ADDR_C,
        LeafEncoding::Address,
        &proof
    )?);
    Ok(())
}

#[test]
fn test_positions_are_ignored_when_verifying() -> Result<()> {
    use merkle_whitelist::ProofPosition;

    let tree: MerkleTree =
        MerkleTree::from_values(&[ADDR_A, ADDR_B, ADDR_C], LeafEncoding::Address)?;
    let mut proof = tree.proof_for_value(ADDR_A, LeafEncoding::Address)?;
    for element in proof.elements_mut() {
        element.position = match element.position {
            ProofPosition::Left => ProofPosition::Right,
            ProofPosition::Right => ProofPosition::Left,
        };
    }

    assert!(verify::<Keccak256Hasher>(
        &tree.root(),
        ADDR_A,
        LeafEncoding::Address,
        &proof
    )?);
    Ok(())
}

#[test]
fn test_verify_leaf_with_bare_siblings() -> Result<()> {
    let tree: MerkleTree =
        MerkleTree::from_values(&[ADDR_A, ADDR_B, ADDR_C], LeafEncoding::Address)?;
    let leaf = MerkleTree::<Keccak256Hasher>::hash_value(ADDR_B, LeafEncoding::Address)?;
    let siblings: Vec<Hash> = tree.proof_for_leaf(&leaf)?.siblings().copied().collect();

    assert!(verify_leaf::<Keccak256Hasher>(&tree.root(), &leaf, &siblings));
    assert!(!verify_leaf::<Keccak256Hasher>(&tree.root(), &leaf, &siblings[..1]));
    Ok(())
}

#[test]
fn test_empty_and_invalid_input() {
    let empty: Vec<&str> = Vec::new();
    let result = MerkleTree::<Keccak256Hasher>::from_values(&empty, LeafEncoding::Address);
    assert!(matches!(result, Err(MerkleError::EmptyInput)));

    let result =
        MerkleTree::<Keccak256Hasher>::from_values(&[ADDR_A, "0x1234"], LeafEncoding::Address);
    assert!(matches!(result, Err(MerkleError::InvalidInput { .. })));

    let result = verify::<Keccak256Hasher>(
        &Hash::zero(),
        "not hex",
        LeafEncoding::Address,
        &Proof::default(),
    );
    assert!(matches!(result, Err(MerkleError::InvalidInput { .. })));
}

#[test]
fn test_hash_functions_produce_different_roots() -> Result<()> {
    let keccak: MerkleTree<Keccak256Hasher> =
        MerkleTree::from_values(&[ADDR_A, ADDR_B], LeafEncoding::Address)?;
    let sha: MerkleTree<Sha256Hasher> =
        MerkleTree::from_values(&[ADDR_A, ADDR_B], LeafEncoding::Address)?;
    assert_ne!(keccak.root(), sha.root());

    // A keccak proof does not verify under sha256
    let proof = keccak.proof_for_value(ADDR_A, LeafEncoding::Address)?;
    assert!(!verify::<Sha256Hasher>(
        &keccak.root(),
        ADDR_A,
        LeafEncoding::Address,
        &proof
    )?);
    Ok(())
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_shared_tree_across_threads() -> Result<()> {
    assert_send_sync::<MerkleTree<Keccak256Hasher>>();
    assert_send_sync::<MerkleTree<Sha256Hasher>>();

    let values: Vec<String> = (0..37).map(|i| format!("member-{}", i)).collect();
    let tree: Arc<MerkleTree> = Arc::new(MerkleTree::from_values(&values, LeafEncoding::Utf8)?);
    let values = Arc::new(values);

    let handles: Vec<_> = (0..values.len())
        .map(|index| {
            let tree = Arc::clone(&tree);
            let values = Arc::clone(&values);
            thread::spawn(move || -> merkle_whitelist::Result<bool> {
                // Building concurrently gives the same root as the shared tree
                let rebuilt: MerkleTree = MerkleTree::from_values(&values, LeafEncoding::Utf8)?;
                let value = &values[index];
                let proof = tree.proof_for_value(value, LeafEncoding::Utf8)?;
                let valid =
                    verify::<Keccak256Hasher>(&tree.root(), value, LeafEncoding::Utf8, &proof)?;
                Ok(valid && rebuilt.root() == tree.root())
            })
        })
        .collect();

    for handle in handles {
        let valid = handle.join().expect("proof thread panicked")?;
        assert!(valid);
    }
    Ok(())
}
