//! Command-line configuration.
//!
//! This module contains the clap-derived argument structures for the two subcommands, `generate`
//! and `solve`, together with the global verbosity switches.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;

use crate::{file_loader::DEFAULT_MAZE_FILE, grid::Coord};

/// Perfect maze generator and weighted shortest-path solver.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
    /// Print more diagnostics; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Print errors only; takes precedence over `--verbose`.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Maps the verbosity switches to a log level.
    ///
    /// Warnings are shown by default; each `-v` adds a level and `-q` keeps only errors.
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Carve a new maze and write it as text.
    Generate(GenerateArgs),
    /// Find the shortest path through a maze file.
    Solve(SolveArgs),
}

/// Arguments of the `generate` subcommand.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of rows, a positive odd integer.
    pub height: usize,
    /// Number of columns, a positive odd integer.
    pub width: usize,
    /// File the maze is written to.
    #[arg(default_value = DEFAULT_MAZE_FILE)]
    pub output: PathBuf,
    /// Seed for a reproducible maze.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments of the `solve` subcommand.
#[derive(Debug, Args)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each flag toggles an independent output of the solver."
)]
pub struct SolveArgs {
    /// File the maze is read from.
    #[arg(default_value = DEFAULT_MAZE_FILE)]
    pub input: PathBuf,
    /// Start cell as `row,col`; defaults to (1, 1).
    #[arg(long)]
    pub start: Option<Coord>,
    /// End cell as `row,col`; defaults to (height - 2, width - 2).
    #[arg(long)]
    pub end: Option<Coord>,
    /// Count the start cell's own weight in the path cost.
    #[arg(long)]
    pub include_start_cost: bool,
    /// Print the solved maze as text.
    #[arg(long)]
    pub print: bool,
    /// Write the maze and its solution as bitmap images.
    #[arg(long)]
    pub bitmap: bool,
    /// Bitmap file for the bare maze.
    #[arg(long, default_value = "maze.bmp")]
    pub maze_image: PathBuf,
    /// Bitmap file for the solved maze.
    #[arg(long, default_value = "maze_solution.bmp")]
    pub solution_image: PathBuf,
    /// Open the solved maze in the interactive viewer.
    #[arg(long)]
    pub view: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["mazepath", "generate", "21", "31"])
            .expect("arguments should parse");
        assert_eq!(cli.log_level(), LevelFilter::Warn);

        let Command::Generate(args) = cli.command else {
            panic!("expected the generate subcommand");
        };
        assert_eq!(args.height, 21);
        assert_eq!(args.width, 31);
        assert_eq!(args.output, PathBuf::from("maze.txt"));
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_parse_generate_rejects_negative_size() {
        assert!(Cli::try_parse_from(["mazepath", "generate", "-5", "7"]).is_err());
        assert!(Cli::try_parse_from(["mazepath", "generate", "five", "7"]).is_err());
    }

    #[test]
    fn test_parse_solve_options() {
        let cli = Cli::try_parse_from([
            "mazepath",
            "-vv",
            "solve",
            "custom.txt",
            "--start",
            "1,1",
            "--end",
            "9,19",
            "--bitmap",
            "--include-start-cost",
        ])
        .expect("arguments should parse");
        assert_eq!(cli.log_level(), LevelFilter::Debug);

        let Command::Solve(args) = cli.command else {
            panic!("expected the solve subcommand");
        };
        assert_eq!(args.input, PathBuf::from("custom.txt"));
        assert_eq!(args.start, Some(Coord::new(1, 1)));
        assert_eq!(args.end, Some(Coord::new(9, 19)));
        assert!(args.bitmap);
        assert!(args.include_start_cost);
        assert!(!args.view);
        assert_eq!(args.solution_image, PathBuf::from("maze_solution.bmp"));
    }

    #[test]
    fn test_parse_solve_rejects_bad_coordinate() {
        assert!(Cli::try_parse_from(["mazepath", "solve", "--start", "1;1"]).is_err());
    }

    #[test]
    fn test_quiet_level() {
        let cli =
            Cli::try_parse_from(["mazepath", "-q", "solve"]).expect("arguments should parse");

        assert_eq!(cli.log_level(), LevelFilter::Error);
    }
}
