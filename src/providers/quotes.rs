/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::QuotesConfig;
use crate::application::interfaces::quotes::QuoteSource;
use crate::error::AppError;
use crate::model::http::{build_http_client, make_http_request};
use async_trait::async_trait;
use reqwest::{Client, Method};

/// Plain-text quote file served over HTTP
pub struct HttpQuoteSource {
    http_client: Client,
    config: QuotesConfig,
}

impl HttpQuoteSource {
    /// Creates a source with its own HTTP client
    ///
    /// # Errors
    /// * `AppError::Network` - if the HTTP client cannot be built
    pub fn new(config: QuotesConfig) -> Result<Self, AppError> {
        Ok(Self::with_http_client(build_http_client()?, config))
    }

    /// Creates a source sharing an existing HTTP client
    pub fn with_http_client(http_client: Client, config: QuotesConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    fn location(&self) -> &str {
        &self.config.url
    }

    async fn fetch_text(&self) -> Result<String, AppError> {
        let response = make_http_request(
            &self.http_client,
            Method::GET,
            &self.config.url,
            vec![],
            &[],
            &None::<()>,
            Some(self.config.timeout()),
        )
        .await?;
        Ok(response.text().await?)
    }
}
