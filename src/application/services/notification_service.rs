/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::notifier::PushNotifier;
use crate::application::interfaces::store::DataStore;
use crate::constants::CAPTAINS_LOG_PREFERENCE;
use crate::error::AppError;
use crate::model::requests::NotificationMessage;
use std::sync::Arc;
use tracing::info;

/// Sends one push notification to every profile with a preference enabled
pub struct NotificationService {
    store: Arc<dyn DataStore>,
    notifier: Arc<dyn PushNotifier>,
    preference: String,
}

impl NotificationService {
    /// Creates a service targeting the Captain's Log subscribers
    pub fn new(store: Arc<dyn DataStore>, notifier: Arc<dyn PushNotifier>) -> Self {
        Self::with_preference(store, notifier, CAPTAINS_LOG_PREFERENCE)
    }

    /// Creates a service targeting the profiles with `preference` enabled
    pub fn with_preference(
        store: Arc<dyn DataStore>,
        notifier: Arc<dyn PushNotifier>,
        preference: impl Into<String>,
    ) -> Self {
        Self {
            store,
            notifier,
            preference: preference.into(),
        }
    }

    /// Resolves the recipients and sends `message` to all of them
    ///
    /// # Returns
    /// * `Ok(n)` - Number of recipients addressed; `0` means nobody opted in
    ///   and the provider was not called
    /// * `Err(AppError)` - Recipient lookup or dispatch failed
    pub async fn dispatch(&self, message: &NotificationMessage) -> Result<usize, AppError> {
        let recipients = self.store.subscribed_profile_ids(&self.preference).await?;

        if recipients.is_empty() {
            info!("No users found with {} enabled.", self.preference);
            return Ok(0);
        }
        info!(
            "Found {} users subscribed to {} notifications",
            recipients.len(),
            self.preference
        );

        self.notifier.send(message, &recipients).await?;
        Ok(recipients.len())
    }
}
