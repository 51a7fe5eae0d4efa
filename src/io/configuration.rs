//! Puzzle constants and runtime configuration defaults

// Standard puzzle board
/// Lowest board coordinate on both axes
pub const BOARD_LOW: i32 = 1;
/// Highest board coordinate on both axes
pub const BOARD_HIGH: i32 = 8;

// Progress reporting settings
// Checked against the visit counter so the clock is only read once per 2048 visits
/// Bit mask applied to the visit counter before a progress refresh is considered
pub const PROGRESS_CHECK_MASK: u64 = (2 << 10) - 1;
/// Minimum delay between two progress message refreshes
pub const PROGRESS_REFRESH_INTERVAL_MS: u64 = 500;
/// Spinner animation tick
pub const SPINNER_TICK_MS: u64 = 120;

// Output settings
/// Default edge length of one board cell in exported images
pub const DEFAULT_CELL_SIZE: u32 = 32;
/// Largest accepted cell size for exported images
pub const MAX_CELL_SIZE: u32 = 512;
/// Fill color of black figure cells
pub const BLACK_CELL_RGBA: [u8; 4] = [30, 30, 30, 255];
/// Fill color of white figure cells
pub const WHITE_CELL_RGBA: [u8; 4] = [235, 235, 225, 255];
/// Fill color of uncovered cells
pub const EMPTY_CELL_RGBA: [u8; 4] = [128, 128, 128, 255];
/// Color of the outline drawn between different placements
pub const OUTLINE_RGBA: [u8; 4] = [200, 40, 40, 255];
