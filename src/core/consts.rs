/// Row count of a standard level file.
pub const BOARD_ROWS: i32 = 12;
/// Column count of a standard level file.
pub const BOARD_COLS: i32 = 12;
