//! Wires generation, search and display together.

use std::error::Error;
use std::fs;
use std::io::Write;

use maze_core::Grid;
use maze_gen::MazeGen;
use maze_paths::{SearchMode, find_path};
use maze_term::{Renderer, format_path};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::Args;

/// Load the maze named by `--grid`, or generate one.
pub fn load_or_generate(args: &Args) -> Result<Grid, Box<dyn Error>> {
    if let Some(file) = &args.grid {
        let text = fs::read_to_string(file)
            .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
        let grid: Grid = text
            .parse()
            .map_err(|e| format!("{}: {e}", file.display()))?;
        log::info!("loaded {}x{} maze from {}", grid.rows(), grid.cols(), file.display());
        return Ok(grid);
    }

    let rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let mut mg = MazeGen::new(args.maze_config(), rng);
    Ok(mg.generate()?)
}

/// Print the maze, solve it, then print the path and the highlighted maze.
pub fn run<W: Write>(args: &Args, renderer: Renderer, out: &mut W) -> Result<(), Box<dyn Error>> {
    let grid = load_or_generate(args)?;

    writeln!(out, "Initial maze:")?;
    renderer.draw_grid(out, &grid)?;

    let path = find_path(&grid, SearchMode::Full)?;

    writeln!(out)?;
    writeln!(out, "Shortest path (coordinates):")?;
    writeln!(out, "{}", format_path(&grid, &path))?;
    writeln!(out)?;
    writeln!(out, "Maze with highlighted path:")?;
    renderer.draw_path(out, &grid, &path)?;
    Ok(())
}
