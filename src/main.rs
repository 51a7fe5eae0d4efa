//! CLI entry point for the chessboard tiling solver

use chesspuzzle::io::cli::{Cli, PuzzleRunner};
use clap::Parser;

fn main() -> chesspuzzle::Result<()> {
    let cli = Cli::parse();
    let runner = PuzzleRunner::new(cli);
    runner.run()?;
    Ok(())
}
