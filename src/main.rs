#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use clap::Parser;
use tile_dungeon::{config::Args, Dungeon, Grid};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let grid = match args.fill_edge()? {
        Some(edge) => Grid::filled(args.width, args.height, edge)?,
        None => Dungeon::new(args.rng()).generate(args.width, args.height)?,
    };
    tracing::info!(width = grid.width(), height = grid.height(), "dungeon ready");

    print!("{grid}");
    println!("Done");
    Ok(())
}
