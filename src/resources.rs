use serde::{Deserialize, Serialize};

use crate::tile::MineralYield;

/// What the drill has mined so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Earnings {
    pub haul: u32,
    pub money: u64,
}

impl Earnings {
    pub fn new() -> Self {
        Self { haul: 0, money: 0 }
    }

    pub fn add(&mut self, y: MineralYield) {
        self.haul = self.haul.saturating_add(y.haul);
        self.money = self.money.saturating_add(y.money);
    }
}
