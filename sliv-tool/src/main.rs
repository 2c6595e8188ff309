//! sliv-tool - convert between SLIVs and (start, length) pairs, or brute
//! force check the codec for one grid size.

use anyhow::{bail, Result};
use clap::Parser;
use ranwire::sliv::{Allocation, ResourceGrid};
use slog::{info, o, warn, Drain, Logger};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of resource units in the grid (N).
    grid_size: u32,

    /// Nothing to run the exhaustive check, a SLIV to decode, or a start and
    /// a length to encode.
    #[arg(num_args = 0..=2)]
    values: Vec<u32>,
}

fn main() -> Result<()> {
    let logger = init_logging();
    let args = Args::parse();
    let grid = ResourceGrid::new(args.grid_size)?;

    match args.values[..] {
        [] => brute_force(&grid, &logger),
        [sliv] => {
            if u64::from(sliv) >= grid.sliv_upper_bound() {
                warn!(logger, "SLIV out of range for grid"; "sliv" => sliv, "grid_size" => grid.size());
            }
            let alloc = grid.decode(sliv);
            println!(
                "SLIV={}; Start: {}; Length: {};",
                sliv, alloc.start, alloc.length
            );
            Ok(())
        }
        [start, length] => {
            let sliv = grid.encode(Allocation::new(start, length))?;
            println!("SLIV={}; Start: {}; Length: {};", sliv, start, length);
            Ok(())
        }
        _ => bail!("expected at most two values after the grid size"),
    }
}

fn brute_force(grid: &ResourceGrid, logger: &Logger) -> Result<()> {
    let mut checked = 0u64;
    for alloc in grid.allocations() {
        let sliv = grid.encode(alloc)?;
        let decoded = grid.decode(sliv);
        if decoded != alloc {
            bail!(
                "s={}; l={}; SLIV={}; Start: {}; Length: {};",
                alloc.start,
                alloc.length,
                sliv,
                decoded.start,
                decoded.length
            );
        }
        checked += 1;
    }
    info!(logger, "SLIV codec consistent"; "grid_size" => grid.size(), "allocations" => checked);
    Ok(())
}

fn init_logging() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    slog::Logger::root(drain, o!())
}
