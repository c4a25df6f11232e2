mod cli;
mod commands;
mod infra;
mod routes;
mod server;
mod session;

use pams::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
