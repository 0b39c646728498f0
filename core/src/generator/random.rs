use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Uniform placement: every subset of `mines` cells is equally likely for a given seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig) -> Result<MineLayout> {
        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines()).min(total_cells);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        // draw without replacement over the flattened grid
        for flat in index::sample(&mut rng, total_cells, mines) {
            mine_mask[coords_from_index(flat, config.width()).to_nd_index()] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask)?;
        // double check mine count
        if layout.mine_count() != config.mines() {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines()
            );
        }
        log::debug!(
            "Generated {}x{} layout with {} mines from seed {}",
            config.height(),
            config.width(),
            layout.mine_count(),
            self.seed
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count_on_every_preset() {
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            for seed in 0..32 {
                let layout = RandomMineGenerator::new(seed).generate(config).unwrap();
                assert_eq!(layout.size(), config.size());
                assert_eq!(layout.mine_count(), config.mines(), "{difficulty} seed {seed}");
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = Difficulty::Intermediate.config();

        let a = RandomMineGenerator::new(42).generate(config).unwrap();
        let b = RandomMineGenerator::new(42).generate(config).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn nearly_full_board_leaves_one_safe_cell() {
        let config = BoardConfig::new(4, 4, 15).unwrap();

        let layout = RandomMineGenerator::new(7).generate(config).unwrap();

        assert_eq!(layout.mine_count(), 15);
        assert_eq!(layout.safe_cell_count(), 1);
    }
}
