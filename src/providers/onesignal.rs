/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::OneSignalConfig;
use crate::application::interfaces::notifier::PushNotifier;
use crate::error::AppError;
use crate::model::http::{build_http_client, join_url, make_http_request};
use crate::model::requests::{CreateNotificationRequest, NotificationMessage};
use crate::model::responses::CreateNotificationResponse;
use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::{debug, error, info, warn};

/// Client for the OneSignal create-notification endpoint
pub struct OneSignalClient {
    http_client: Client,
    config: OneSignalConfig,
}

impl OneSignalClient {
    /// Creates a client with its own HTTP client
    ///
    /// # Errors
    /// * `AppError::Network` - if the HTTP client cannot be built
    pub fn new(config: OneSignalConfig) -> Result<Self, AppError> {
        Ok(Self::with_http_client(build_http_client()?, config))
    }

    /// Creates a client sharing an existing HTTP client
    pub fn with_http_client(http_client: Client, config: OneSignalConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Posts a prepared notification body
    pub async fn create_notification(
        &self,
        notification: &CreateNotificationRequest,
    ) -> Result<CreateNotificationResponse, AppError> {
        let url = join_url(&self.config.base_url, "notifications");
        let authorization = format!("Key {}", self.config.app_key);
        debug!("Notification request: {}", notification);

        let response = make_http_request(
            &self.http_client,
            Method::POST,
            &url,
            vec![
                ("Authorization", authorization.as_str()),
                ("Accept", "application/json"),
            ],
            &[],
            &Some(notification),
            None,
        )
        .await?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PushNotifier for OneSignalClient {
    async fn send(
        &self,
        message: &NotificationMessage,
        recipients: &[String],
    ) -> Result<CreateNotificationResponse, AppError> {
        let notification = CreateNotificationRequest::new(&self.config.app_id, message, recipients);
        let response = self.create_notification(&notification).await?;

        if !response.is_created() {
            let errors = response
                .errors
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "no notification id returned".to_string());
            error!("OneSignal did not create the notification: {}", errors);
            return Err(AppError::Notification(errors));
        }
        if let Some(errors) = &response.errors {
            warn!("OneSignal reported errors for notification {}: {}", response.id, errors);
        }

        info!("Notification sent successfully! Response: {}", response);
        Ok(response)
    }
}
