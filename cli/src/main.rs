use std::io;

use anyhow::Context;
use clap::Parser;
use sweeper_core::{Board, BoardConfig, CellCount, Coord, Difficulty, GlyphSet, RandomMineGenerator};

mod command;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal minesweeper", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset
    #[arg(short, long, default_value_t = Difficulty::Beginner)]
    difficulty: Difficulty,

    /// Custom board height, overrides the preset
    #[arg(long, requires_all = ["width", "mines"])]
    height: Option<Coord>,

    /// Custom board width, overrides the preset
    #[arg(long, requires_all = ["height", "mines"])]
    width: Option<Coord>,

    /// Custom mine count, overrides the preset
    #[arg(long, requires_all = ["height", "width"])]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Draw the board with plain ASCII instead of emoji
    #[arg(long)]
    ascii: bool,
}

impl Args {
    fn board_config(&self) -> anyhow::Result<BoardConfig> {
        match (self.height, self.width, self.mines) {
            (Some(height), Some(width), Some(mines)) => {
                BoardConfig::new(height, width, mines).context("Invalid custom board")
            }
            _ => Ok(self.difficulty.into()),
        }
    }

    fn glyphs(&self) -> GlyphSet {
        if self.ascii {
            GlyphSet::Ascii
        } else {
            GlyphSet::Emoji
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = args.board_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);
    log::info!(
        "Starting {}x{} board with {} mines",
        config.height(),
        config.width(),
        config.mines()
    );

    let mut board = Board::with_generator(config, RandomMineGenerator::new(seed))
        .context("Could not create board")?;

    session::play(&mut board, args.glyphs(), io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
