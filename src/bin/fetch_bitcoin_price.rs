use bitthought_jobs::application::jobs;
use bitthought_jobs::error::AppError;
use bitthought_jobs::utils::{load_env, setup_logger};
use std::process::ExitCode;
use tracing::error;

async fn run() -> Result<(), AppError> {
    jobs::fetch_price_coinmarketcap_from_env().await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    load_env();
    setup_logger();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Bitcoin price update failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
