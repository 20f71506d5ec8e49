/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use dotenv::dotenv;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

/// Loads a `.env` file from the working directory if there is one
///
/// Variables already present in the process environment win over the file.
pub fn load_env() {
    match dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {e}"),
    }
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets a required, non-empty environment variable
///
/// # Errors
/// * `AppError::MissingEnv` - if the variable is unset or blank
pub fn get_env_required(env_var: &str) -> Result<String, AppError> {
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => {
            error!("{} not found in environment variables or .env file", env_var);
            Err(AppError::MissingEnv(env_var.to_string()))
        }
    }
}
