//! Terminal maze solver.
//!
//! Run: cargo run -- --help

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use maze_term::Renderer;
use pathfinder_lib::{Args, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let args = Args::parse();
    let color = !args.no_color && io::stdout().is_terminal();
    let renderer = Renderer::new().with_color(color);

    let mut stdout = io::stdout().lock();
    if let Err(e) = run(&args, renderer, &mut stdout) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
