/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{
    BITTHOUGHT_HEADING, CAPTAINS_LOG_HEADING, CAPTAINS_LOG_MESSAGE, IOS_BADGE_COUNT,
    IOS_BADGE_TYPE, NOTIFICATION_LANGUAGE, PUSH_CHANNEL,
};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Heading and body of a push notification
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationMessage {
    pub heading: String,
    pub body: String,
}

impl NotificationMessage {
    /// Creates a message from a heading and a body
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }

    /// Message carrying the BitThought of the day
    pub fn bitthought(quote: impl Into<String>) -> Self {
        Self::new(BITTHOUGHT_HEADING, quote)
    }

    /// Static Captain's Log message
    #[must_use]
    pub fn captains_log() -> Self {
        Self::new(CAPTAINS_LOG_HEADING, CAPTAINS_LOG_MESSAGE)
    }
}

/// Recipients addressed by alias
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncludeAliases {
    pub external_id: Vec<String>,
}

/// OneSignal `POST /notifications` body
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateNotificationRequest {
    pub app_id: String,
    pub headings: BTreeMap<String, String>,
    pub contents: BTreeMap<String, String>,
    pub include_aliases: IncludeAliases,
    pub target_channel: String,
    #[serde(rename = "ios_badgeType")]
    pub ios_badge_type: String,
    #[serde(rename = "ios_badgeCount")]
    pub ios_badge_count: u32,
}

impl CreateNotificationRequest {
    /// Builds a push notification for `recipients` in the default language
    pub fn new(app_id: &str, message: &NotificationMessage, recipients: &[String]) -> Self {
        let localized = |text: &str| {
            BTreeMap::from([(NOTIFICATION_LANGUAGE.to_string(), text.to_string())])
        };
        Self {
            app_id: app_id.to_string(),
            headings: localized(&message.heading),
            contents: localized(&message.body),
            include_aliases: IncludeAliases {
                external_id: recipients.to_vec(),
            },
            target_channel: PUSH_CHANNEL.to_string(),
            ios_badge_type: IOS_BADGE_TYPE.to_string(),
            ios_badge_count: IOS_BADGE_COUNT,
        }
    }
}
