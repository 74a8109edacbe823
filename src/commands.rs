//! Execution of the command-line subcommands.

use std::io::Write;

use color_eyre::eyre::{Result, WrapErr as _};
use log::{info, warn};

use crate::{
    app::App,
    carving,
    config::{Cli, Command, GenerateArgs, SolveArgs},
    file_loader,
    grid::Coord,
    pathfinding::{PathFinder, StartCost},
    render::{self, Endpoints},
};

/// Dispatches the parsed command line to its subcommand.
///
/// # Errors
///
/// This function returns whatever error the selected subcommand reports.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Generate(args) => generate(args),
        Command::Solve(args) => solve(args, out),
    }
}

/// Carves a maze of the requested size and writes it to the output file.
///
/// # Errors
///
/// This function may return errors if:
/// - The dimensions are even or zero
/// - The output file cannot be written
pub fn generate(args: &GenerateArgs) -> Result<()> {
    let maze = carving::generate(args.height, args.width, args.seed)
        .wrap_err("failed to generate maze")?;

    file_loader::write_tiles(&args.output, &maze)
        .wrap_err_with(|| format!("failed to write maze to {}", args.output.display()))?;

    Ok(())
}

/// Picks the endpoints used when none are given: the top-left and bottom-right chambers.
pub const fn default_endpoints(height: usize, width: usize) -> Endpoints {
    Endpoints {
        start: Coord::new(1, 1),
        end: Coord::new(height.saturating_sub(2), width.saturating_sub(2)),
    }
}

/// Reads a maze, solves it and produces the requested outputs.
///
/// The path cost, or `no path found`, is written to `out`, followed by the glyph rendering when
/// requested. Bitmaps and the interactive viewer are produced afterwards.
///
/// # Errors
///
/// This function may return errors if:
/// - The input file cannot be read or decoded
/// - An endpoint lies outside the grid or on a wall
/// - Writing to `out`, the bitmap files or the terminal fails
pub fn solve<W: Write>(args: &SolveArgs, out: &mut W) -> Result<()> {
    let weights = file_loader::read_weights(&args.input)
        .wrap_err_with(|| format!("failed to load maze from {}", args.input.display()))?;

    let defaults = default_endpoints(weights.height(), weights.width());
    let endpoints = Endpoints {
        start: args.start.unwrap_or(defaults.start),
        end: args.end.unwrap_or(defaults.end),
    };
    let start_cost = if args.include_start_cost {
        StartCost::Included
    } else {
        StartCost::Excluded
    };

    let mut finder = PathFinder::new(&weights).with_start_cost(start_cost);
    let solution = finder
        .solve(endpoints.start, endpoints.end)
        .wrap_err("failed to search maze")?;

    if let Some(solution) = &solution {
        info!(
            "path from {} to {} spans {} cells",
            endpoints.start,
            endpoints.end,
            solution.path.len()
        );
        writeln!(out, "path cost: {}", solution.cost)?;
    } else {
        warn!("{} and {} are not connected", endpoints.start, endpoints.end);
        writeln!(out, "no path found")?;
    }

    if args.print {
        write!(out, "{}", render::glyphs(finder.cells(), endpoints))?;
    }

    if args.bitmap {
        render::save_bitmaps(
            &args.maze_image,
            &args.solution_image,
            finder.cells(),
            endpoints,
        )
        .wrap_err("failed to write bitmaps")?;
    }

    if args.view {
        let mut terminal = ratatui::try_init()?;
        let result = App::new(
            finder.into_cells(),
            endpoints,
            solution.map(|solution| solution.cost),
        )
        .run(&mut terminal);
        ratatui::restore();
        result?;
    }

    Ok(())
}
