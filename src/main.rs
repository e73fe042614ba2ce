use docopt::Docopt;
use error_chain::bail;
use rand::{SeedableRng, XorShiftRng};
use serde_derive::Deserialize;

use perfect_mazes::{generators, units::DimensionSize};

use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Perfect mazes

Usage:
    perfect_mazes_driver <size> [--seed=<n>] [--text-out=<path>]
    perfect_mazes_driver -h | --help

Options:
    -h --help          Show this screen.
    --seed=<n>         Seed the wall selection so the same maze is generated every run.
    --text-out=<path>  Output file path for the textual rendering of the maze.
";

#[derive(Debug, Deserialize)]
struct DriverArgs {
    arg_size: usize,
    flag_seed: Option<u32>,
    flag_text_out: String,
}

// We'll put our errors in an `errors` module; `error_chain!` creates the
// Error, ErrorKind, ResultExt and Result types.
mod errors {
    use error_chain::*;
    error_chain! {
        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    let args: DriverArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    if args.arg_size < 1 {
        bail!("the grid size must be at least 1, got {}", args.arg_size);
    }

    let mut rng = match args.flag_seed {
        Some(seed) => seeded_rng(seed),
        None => rand::weak_rng(),
    };

    let maze = generators::randomised_kruskal(DimensionSize(args.arg_size), &mut rng);
    let rendered = format!("{}", maze);

    if args.flag_text_out.is_empty() {
        print!("{}", rendered);
    } else {
        write_text_to_file(&rendered, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

// Xorshift rejects an all zero state, so the seed word travels with three
// constant non-zero fillers.
fn seeded_rng(seed: u32) -> XorShiftRng {
    XorShiftRng::from_seed([0x193a_6754, 0xa8a7_d469, 0x9783_0e05, seed])
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
