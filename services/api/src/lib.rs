mod cli;
mod infra;
mod routes;
mod server;

use member_admin::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
