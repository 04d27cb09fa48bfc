mod check;
mod cli;
mod infra;
mod routes;
mod server;

use spm_scholarship::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
