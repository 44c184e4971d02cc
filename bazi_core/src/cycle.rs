//! The sexagenary cycle: sixty ordered stem-branch pairs (六十甲子).
//!
//! Entry `i` pairs `STEMS[i % 10]` with `BRANCHES[i % 12]`, so the table
//! wraps after 60 entries (lcm of 10 and 12). Index 0 is 甲子.

use crate::types::{Branch, Pillar, Stem};
use crate::{Error, Result};
use once_cell::sync::Lazy;

/// Stems in cycle order
pub const STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

/// Branches in cycle order
pub const BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Cached cycle table - composed once and shared by all lookups
static SEXAGENARY_CYCLE: Lazy<[Pillar; 60]> = Lazy::new(build_cycle);

fn build_cycle() -> [Pillar; 60] {
    let mut table = [Pillar::new(Stem::Jia, Branch::Zi); 60];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = Pillar::new(STEMS[i % 10], BRANCHES[i % 12]);
    }
    table
}

/// The full sixty-entry cycle in order.
pub fn all_pillars() -> &'static [Pillar; 60] {
    &SEXAGENARY_CYCLE
}

/// Pillar at a cycle index in `[0, 60)`.
///
/// Callers reduce their arithmetic mod 60 first; an out-of-range index is an
/// internal bug, not an input error.
pub fn pillar_at(index: usize) -> Pillar {
    SEXAGENARY_CYCLE[index]
}

/// Cycle index of a pillar.
///
/// Only 60 of the 120 stem-branch combinations are cycle members, and a
/// pillar built from a hand-entered string may fall outside the cycle.
pub fn index_of(pillar: Pillar) -> Result<usize> {
    SEXAGENARY_CYCLE
        .iter()
        .position(|&entry| entry == pillar)
        .ok_or_else(|| Error::PillarNotFound(pillar.to_string()))
}
