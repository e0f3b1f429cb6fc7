//! Mapstitch - command-line tool compositing map tiles into one PNG

use std::process::ExitCode;

use mapstitch::cli;

fn main() -> ExitCode {
    cli::run()
}
