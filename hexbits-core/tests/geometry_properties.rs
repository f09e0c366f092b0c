//! Property tests over random board subsets
//!
//! Every check draws seeded random bitboards restricted to the 91 board
//! cells and compares the fast bit tricks against slower reference paths.

use hexbits_core::{
    audit, blocked, board_cells, flood_fill, geometry, is_connected, iter_ones, jump_over,
    neighbours, ray, render_source, second_ring, shift, Bitboard, Cell, CompositeShift, Direction,
    GeometryTable, RenderConfig, COMPOSITE_FNS, COMPOSITE_SHIFTS, VALID_FIELDS,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SAMPLES: usize = 2_000;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn random_board(rng: &mut ChaCha8Rng) -> Bitboard {
    rng.gen::<u128>() & VALID_FIELDS
}

/// Sparse boards, roughly one cell in eight
fn random_sparse_board(rng: &mut ChaCha8Rng) -> Bitboard {
    rng.gen::<u128>() & rng.gen::<u128>() & rng.gen::<u128>() & VALID_FIELDS
}

/// Cell-by-cell reference: union of on-board grid neighbours
fn reference_neighbours(bitboard: Bitboard) -> Bitboard {
    let mut out = 0;
    for i in iter_ones(bitboard) {
        let cell = Cell::from_index(i).unwrap();
        for d in Direction::ALL {
            if let Some(n) = cell.neighbour(d) {
                if n.is_on_board() {
                    out |= n.bit();
                }
            }
        }
    }
    out & !bitboard
}

// ============================================================================
// SHIFT PROPERTIES
// ============================================================================

#[test]
fn test_shift_never_leaves_board() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let bb = random_board(&mut rng);
        for d in Direction::ALL {
            assert_eq!(shift(bb, d) & !VALID_FIELDS, 0, "{d} from {bb:#x}");
        }
    }
}

#[test]
fn test_shift_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let bb = random_board(&mut rng);
        for d in Direction::ALL {
            let interior = bb & !blocked(d);
            assert_eq!(shift(shift(interior, d), d.opposite()), interior, "{d}");
        }
    }
}

#[test]
fn test_shift_preserves_count_away_from_edge() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    for _ in 0..SAMPLES {
        let bb = random_board(&mut rng);
        for d in Direction::ALL {
            let moved = shift(bb, d).count_ones();
            assert_eq!(moved, (bb & !blocked(d)).count_ones(), "{d}");
        }
    }
}

// ============================================================================
// COMPOSITE PROPERTIES
// ============================================================================

#[test]
fn test_composite_matches_two_step() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let bb = random_board(&mut rng);
        for entry in COMPOSITE_SHIFTS.iter() {
            let expected = shift(shift(bb, entry.first()), entry.dest);
            assert_eq!(entry.apply(bb), expected, "{} -> {} on {bb:#x}", entry.src, entry.dest);
        }
    }
}

#[test]
fn test_named_composites_match_table() {
    let mut rng = ChaCha8Rng::seed_from_u64(43);
    for _ in 0..SAMPLES / 4 {
        let bb = random_board(&mut rng);
        for (src, dest, f) in COMPOSITE_FNS.iter() {
            let entry = CompositeShift::lookup(*src, *dest).unwrap();
            assert_eq!(f(bb), entry.apply(bb));
        }
    }
}

#[test]
fn test_composite_is_linear_over_union() {
    // Masked shifts act bit by bit, so they distribute over OR
    let mut rng = ChaCha8Rng::seed_from_u64(44);
    for _ in 0..SAMPLES / 4 {
        let a = random_board(&mut rng);
        let b = random_board(&mut rng);
        for entry in COMPOSITE_SHIFTS.iter() {
            assert_eq!(entry.apply(a | b), entry.apply(a) | entry.apply(b));
        }
    }
}

// ============================================================================
// TRAVERSAL PROPERTIES
// ============================================================================

#[test]
fn test_neighbours_match_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..SAMPLES {
        let bb = random_sparse_board(&mut rng);
        assert_eq!(neighbours(bb), reference_neighbours(bb), "{bb:#x}");
    }
}

#[test]
fn test_flood_fill_is_closed_component() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..SAMPLES / 4 {
        let within = random_board(&mut rng);
        let Some(seed_index) = iter_ones(within).next() else { continue };
        let component = flood_fill(1 << seed_index, within);

        assert_eq!(component & !within, 0);
        assert!(is_connected(component));
        // Nothing left in `within` touches the component
        assert_eq!(neighbours(component) & within & !component, 0);
    }
}

#[test]
fn test_second_ring_excludes_first_ring() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    for _ in 0..SAMPLES / 4 {
        let bb = random_sparse_board(&mut rng);
        let ring = second_ring(bb);
        assert_eq!(ring & (bb | neighbours(bb)), 0);
        // Every ring cell is a neighbour of a neighbour
        assert_eq!(ring & !neighbours(neighbours(bb) | bb), 0);
    }
}

#[test]
fn test_ray_and_jump_agree_on_empty_board() {
    // With nothing occupied, jumping lands on the first cell of the ray
    for cell in board_cells() {
        for d in Direction::ALL {
            let first_step = shift(cell.bit(), d);
            assert_eq!(jump_over(cell.bit(), d, 0), first_step);
            assert_eq!(ray(cell.bit(), d, 0) & first_step, first_step);
        }
    }
}

// ============================================================================
// OUTPUTS
// ============================================================================

#[test]
fn test_audit_passes() {
    let report = audit();
    assert!(report.is_clean(), "{:?}", report.failures().collect::<Vec<_>>());
}

#[test]
fn test_exported_table_reloads() {
    let json = geometry().to_json().unwrap();
    let reloaded: GeometryTable = serde_json::from_str(&json).unwrap();
    assert_eq!(&reloaded, geometry());
    assert_eq!(
        render_source(&reloaded, &RenderConfig::default()),
        render_source(geometry(), &RenderConfig::default())
    );
}
