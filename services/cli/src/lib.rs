mod cli;
mod commands;
mod infra;

use ayurdiet::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
