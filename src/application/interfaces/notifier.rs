/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::NotificationMessage;
use crate::model::responses::CreateNotificationResponse;
use async_trait::async_trait;

/// A push-notification provider
#[async_trait]
pub trait PushNotifier: Send + Sync {
    /// Submits one notification addressed to every recipient by external id
    ///
    /// # Returns
    /// * `Ok(CreateNotificationResponse)` - The provider created the notification
    /// * `Err(AppError)` - Transport failure, or the provider created nothing
    async fn send(
        &self,
        message: &NotificationMessage,
        recipients: &[String],
    ) -> Result<CreateNotificationResponse, AppError>;
}
