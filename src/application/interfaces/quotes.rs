/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;

/// A newline-delimited text resource holding the quotes to rotate through
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Where the text comes from, for log lines
    fn location(&self) -> &str;

    /// Downloads the whole resource, uncached
    async fn fetch_text(&self) -> Result<String, AppError>;
}
