//! Self-check of the derived geometry
//!
//! Re-verifies the properties downstream engines rely on, so a changed
//! mask or predicate is caught before any constants are emitted.

use serde::Serialize;

use crate::bitboard::{iter_ones, Bitboard, GRID_MASK};
use crate::board::{
    board_cells, index_of, Cell, BOARD_CELLS, CENTER_ROW, GRID_CELLS, PADDING_CELLS, VALID_FIELDS,
};
use crate::composite::COMPOSITE_SHIFTS;
use crate::direction::Direction;
use crate::shift::{blocked, shift};
use crate::traverse::{neighbours, second_ring};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckOutcome {
    fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            detail: String::new(),
        }
    }

    fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            detail: detail.into(),
        }
    }

    fn expect(name: impl Into<String>, ok: bool, detail: impl FnOnce() -> String) -> Self {
        if ok {
            Self::pass(name)
        } else {
            Self::fail(name, detail())
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct AuditReport {
    pub checks: Vec<CheckOutcome>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Run every check against the compiled-in constants
pub fn audit() -> AuditReport {
    let mut checks = Vec::new();
    checks.push(check_cell_counts());
    checks.push(check_predicate());
    for d in Direction::ALL {
        checks.push(check_no_leakage(d));
        checks.push(check_neighbour_exact(d));
        checks.push(check_round_trip(d));
    }
    for entry in COMPOSITE_SHIFTS.iter() {
        checks.push(check_composite(entry.src, entry.dest, |bb| entry.apply(bb)));
    }
    checks.push(check_second_ring());
    AuditReport { checks }
}

fn describe(bits: Bitboard) -> String {
    let cells: Vec<String> = iter_ones(bits)
        .map(|i| format!("({}, {})", i % 11, i / 11))
        .collect();
    cells.join(" ")
}

fn check_cell_counts() -> CheckOutcome {
    let board = VALID_FIELDS.count_ones() as usize;
    let padding = (GRID_MASK & !VALID_FIELDS).count_ones() as usize;
    CheckOutcome::expect(
        "cell counts",
        board == BOARD_CELLS && padding == PADDING_CELLS && VALID_FIELDS & !GRID_MASK == 0,
        || format!("{} board cells, {} padding", board, padding),
    )
}

fn check_predicate() -> CheckOutcome {
    let mismatched: Bitboard = (0..GRID_CELLS)
        .filter_map(|i| Cell::from_index(i).ok())
        .filter(|c| (VALID_FIELDS & c.bit() != 0) != c.is_on_board())
        .fold(0, |acc, c| acc | c.bit());
    CheckOutcome::expect("valid fields match hexagon predicate", mismatched == 0, || {
        describe(mismatched)
    })
}

fn check_no_leakage(d: Direction) -> CheckOutcome {
    let leaked = shift(VALID_FIELDS, d) & !VALID_FIELDS;
    CheckOutcome::expect(format!("{} shift stays on board", d), leaked == 0, || {
        describe(leaked)
    })
}

fn check_neighbour_exact(d: Direction) -> CheckOutcome {
    let wrong: Bitboard = board_cells()
        .filter(|c| {
            let expected = match c.neighbour(d) {
                Some(n) if n.is_on_board() => n.bit(),
                _ => 0,
            };
            shift(c.bit(), d) != expected
        })
        .fold(0, |acc, c| acc | c.bit());
    CheckOutcome::expect(format!("{} shift hits hex neighbour", d), wrong == 0, || {
        describe(wrong)
    })
}

fn check_round_trip(d: Direction) -> CheckOutcome {
    let interior = VALID_FIELDS & !blocked(d);
    let back = shift(shift(interior, d), d.opposite());
    CheckOutcome::expect(format!("{} then {} is identity", d, d.opposite()), back == interior, || {
        describe(back ^ interior)
    })
}

fn check_composite(
    src: Direction,
    dest: Direction,
    fused: impl Fn(Bitboard) -> Bitboard,
) -> CheckOutcome {
    let first = src.opposite();
    let wrong: Bitboard = board_cells()
        .filter(|c| fused(c.bit()) != shift(shift(c.bit(), first), dest))
        .fold(0, |acc, c| acc | c.bit());
    let whole_board = fused(VALID_FIELDS) == shift(shift(VALID_FIELDS, first), dest);
    CheckOutcome::expect(
        format!("{}_to_{} equals {} then {}", src, dest, first, dest),
        wrong == 0 && whole_board,
        || format!("differs from {}", describe(wrong)),
    )
}

fn check_second_ring() -> CheckOutcome {
    let center: Bitboard = 1 << index_of(CENTER_ROW, CENTER_ROW);
    let ring = second_ring(center).count_ones();
    let adjacent = neighbours(center).count_ones();
    CheckOutcome::expect(
        "centre has 6 neighbours and 12 at distance 2",
        ring == 12 && adjacent == 6,
        || format!("{} neighbours, {} at distance 2", adjacent, ring),
    )
}
