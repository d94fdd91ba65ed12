//! Statistical tests for the shuffle reorder
//!
//! A Fisher-Yates walk makes every permutation equally likely. These
//! tests run thousands of seeded shuffles and check that the counts
//! stay near uniform. Tolerances sit around eight standard deviations,
//! so a correct shuffle practically never trips them while a biased
//! one (e.g. swapping with a fully random index) reliably does.

use galtui::api::ImageRecord;
use galtui::logic::shuffle::fisher_yates;
use galtui::model::GalleryModel;
use rand::rngs::StdRng;
use rand::SeedableRng;

const TRIALS: u64 = 6000;

/// Test: each item lands in each position about equally often
#[test]
fn test_positions_are_roughly_uniform() {
    let mut counts = [0u32; 3];

    for seed in 0..TRIALS {
        let mut items = vec![0, 1, 2];
        fisher_yates(&mut items, &mut StdRng::seed_from_u64(seed));

        let landed = items.iter().position(|&x| x == 0).unwrap();
        counts[landed] += 1;
    }

    // Expected 2000 per bucket; sigma is ~37
    for (position, &count) in counts.iter().enumerate() {
        assert!(
            (1700..=2300).contains(&count),
            "Item 0 landed in position {} {} times out of {}, expected ~2000",
            position,
            count,
            TRIALS
        );
    }
}

/// Test: all six permutations of three items occur about equally often
#[test]
fn test_permutations_are_roughly_uniform() {
    use std::collections::HashMap;

    let mut counts: HashMap<Vec<u8>, u32> = HashMap::new();

    for seed in 0..TRIALS {
        let mut items = vec![1u8, 2, 3];
        fisher_yates(&mut items, &mut StdRng::seed_from_u64(seed));
        *counts.entry(items).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6, "All six permutations should show up");

    // Expected 1000 per permutation; sigma is ~29
    for (permutation, &count) in &counts {
        assert!(
            (800..=1200).contains(&count),
            "Permutation {:?} occurred {} times out of {}, expected ~1000",
            permutation,
            count,
            TRIALS
        );
    }
}

/// Test: the grid cursor follows its record through a shuffle
#[test]
fn test_cursor_follows_record_through_shuffle() {
    for seed in 0..20 {
        let mut gallery = GalleryModel::new();
        gallery.replace(
            (0..8)
                .map(|i| ImageRecord {
                    name: Some(format!("Image {}", i)),
                    url: format!("http://x/{}.jpg", i),
                })
                .collect(),
        );
        gallery.selected = Some(5);
        let followed = gallery.images[5].clone();

        gallery.shuffle(&mut StdRng::seed_from_u64(seed));

        let landed = gallery.selected.expect("Cursor should survive a shuffle");
        assert_eq!(
            gallery.images[landed], followed,
            "Cursor drifted off its record under seed {}",
            seed
        );
    }
}
