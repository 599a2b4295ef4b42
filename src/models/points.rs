//! Points policy: how many table points each match outcome is worth.

use serde::{Deserialize, Serialize};

/// Points awarded per outcome. Defaults to the standard 3/1/0.
///
/// Fields missing from a JSON body fall back to their standard value, so
/// `{"win": 2}` means 2/1/0.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsPolicy {
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
}

impl PointsPolicy {
    /// Three points for a win, one for a draw, none for a loss.
    pub const STANDARD: PointsPolicy = PointsPolicy {
        win: 3,
        draw: 1,
        loss: 0,
    };

    pub fn new(win: i32, draw: i32, loss: i32) -> Self {
        Self { win, draw, loss }
    }
}

impl Default for PointsPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}
