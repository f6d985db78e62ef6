//! Common CSV tables for heatman tests.

/// A 5 x 4 data table with a label row and a label column.
///
/// Missing values form a staircase in the lower left.
pub const HEADERED_TABLE: &str = ",c1,c2,c3,c4
r1,0.0,0.1,0.2,0.3
r2,,0.2,0.3,0.4
r3,,,0.4,0.5
r4,,,,0.6
r5,,,,0.7
";

/// Same data as [`HEADERED_TABLE`] without any labels.
pub const PLAIN_TABLE: &str = "0.0,0.1,0.2,0.3
,0.2,0.3,0.4
,,0.4,0.5
,,,0.6
,,,0.7
";

/// Rows of different lengths; the longest has 4 cells.
pub const RAGGED_TABLE: &str = "0.1
0.2,0.3,0.4,0.5
0.6,0.7
";

/// Non-numeric text mixed with numbers.
pub const MALFORMED_TABLE: &str = "0.5,abc,1.0
n/a,,0.25
";

/// Single row holding the extremes and the middle of the range.
pub const EXTREMES_TABLE: &str = "0.0,0.5,1.0\n";
