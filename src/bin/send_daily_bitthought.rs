use bitthought_jobs::application::jobs;
use bitthought_jobs::error::AppError;
use bitthought_jobs::utils::{load_env, setup_logger};
use std::process::ExitCode;
use tracing::{error, info};

async fn run() -> Result<usize, AppError> {
    jobs::send_daily_bitthought_from_env().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    load_env();
    setup_logger();

    match run().await {
        Ok(0) => {
            info!("No users to notify");
            ExitCode::SUCCESS
        }
        Ok(sent) => {
            info!("Successfully sent daily bitthought notification to {} users", sent);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to send daily bitthought notification: {}", e);
            ExitCode::FAILURE
        }
    }
}
