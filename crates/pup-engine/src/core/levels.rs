//! Hardcoded level layouts.

use glam::DVec2;

use crate::core::units::METERS;

/// Level one: 52 columns by 30 rows. `1` blocks, `0` is open space.
const LEVEL_ONE: [&str; 30] = [
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000010000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000010000000000000000000000000000000000000011",
    "1111111111110000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000011110000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000110000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1100000000000000000000000000000000000000000000000011",
    "1111111111111111111111111111111111111111111111111111",
    "1111111111111111111111111111111111111111111111111111",
];

/// Player spawn point (midbottom) for level one.
pub const LEVEL_ONE_SPAWN: DVec2 = DVec2::new(2.0 * METERS, 5.8 * METERS);

/// Level one as rows of cell values.
pub fn level_one_grid() -> Vec<Vec<u8>> {
    LEVEL_ONE
        .iter()
        .map(|row| row.bytes().map(|b| b - b'0').collect())
        .collect()
}
