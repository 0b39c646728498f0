use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    /// Layout for `config`. Implementations must match its size and mine count.
    fn generate(self, config: BoardConfig) -> Result<MineLayout>;
}

/// Places mines exactly where it is told to, for hand-built boards and replays.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    layout: MineLayout,
}

impl FixedMineGenerator {
    pub fn new(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        Ok(Self {
            layout: MineLayout::from_mine_coords(size, mine_coords)?,
        })
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: BoardConfig) -> Result<MineLayout> {
        if let Err(err) = self.layout.check_config(config) {
            log::warn!(
                "Fixed layout {:?} with {} mines does not match requested {:?} with {}",
                self.layout.size(),
                self.layout.mine_count(),
                config.size(),
                config.mines()
            );
            return Err(err);
        }
        Ok(self.layout)
    }
}
