//! Mask rotation properties through the public facade.

use blockfall::core::{standard_catalog, Mask};

#[test]
fn test_rotation_is_transpose_then_row_reverse() {
    // S mask: .##        #.
    //         ##.   ->   ##
    //                    .#
    let mask = Mask::from_bits(&[&[0, 1, 1], &[1, 1, 0]]).unwrap();
    let rotated = mask.rotated();
    assert_eq!(
        rotated.to_bits(),
        vec![vec![1, 0], vec![1, 1], vec![0, 1]]
    );
}

#[test]
fn test_full_turn_identity_for_whole_catalog() {
    for mask in standard_catalog() {
        let full_turn = mask.rotated().rotated().rotated().rotated();
        assert_eq!(full_turn, mask);
    }
}

#[test]
fn test_half_turn_twice_is_identity() {
    for mask in standard_catalog() {
        let half = mask.rotated().rotated();
        assert_eq!(half.rotated().rotated(), mask);
    }
}

#[test]
fn test_rotation_preserves_filled_count() {
    for mask in standard_catalog() {
        let count = mask.filled_cells().count();
        assert_eq!(mask.rotated().filled_cells().count(), count);
    }
}

#[test]
fn test_rotation_swaps_bounding_box() {
    for mask in standard_catalog() {
        let rotated = mask.rotated();
        assert_eq!(rotated.width(), mask.height());
        assert_eq!(rotated.height(), mask.width());
    }
}
