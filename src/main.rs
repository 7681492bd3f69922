use std::process::ExitCode;

use clap::Parser;
use mazegen::{MazeConfig, config::Args, generate_maze, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = logging::init();

    let result = MazeConfig::try_from(args).and_then(|config| generate_maze(&config));
    match result {
        Ok(grid) => {
            print!("{}", grid);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Generation failed: {}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
