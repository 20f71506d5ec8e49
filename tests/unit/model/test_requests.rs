use assert_json_diff::assert_json_eq;
use bitthought_jobs::constants::{BITTHOUGHT_HEADING, CAPTAINS_LOG_HEADING, CAPTAINS_LOG_MESSAGE};
use bitthought_jobs::model::requests::{CreateNotificationRequest, NotificationMessage};
use bitthought_jobs::model::responses::CreateNotificationResponse;
use serde_json::json;

#[test]
fn bitthought_notification_wire_format() {
    let message = NotificationMessage::bitthought("Stay humble, stack sats.");
    let recipients = vec!["user-1".to_string(), "user-2".to_string()];

    let request = CreateNotificationRequest::new("app-123", &message, &recipients);

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "app_id": "app-123",
            "headings": {"en": "Captain's Log 📜₿"},
            "contents": {"en": "Stay humble, stack sats."},
            "include_aliases": {"external_id": ["user-1", "user-2"]},
            "target_channel": "push",
            "ios_badgeType": "Increase",
            "ios_badgeCount": 1
        })
    );
}

#[test]
fn static_captains_log_message() {
    let message = NotificationMessage::captains_log();
    assert_eq!(message.heading, CAPTAINS_LOG_HEADING);
    assert_eq!(message.body, CAPTAINS_LOG_MESSAGE);
    assert_ne!(message.heading, BITTHOUGHT_HEADING);
}

#[test]
fn notification_response_created_only_with_id() {
    let created: CreateNotificationResponse =
        serde_json::from_str(r#"{"id": "b98881cc", "external_id": null}"#).unwrap();
    assert!(created.is_created());

    let rejected: CreateNotificationResponse =
        serde_json::from_str(r#"{"id": "", "errors": ["All included players are not subscribed"]}"#)
            .unwrap();
    assert!(!rejected.is_created());
    assert!(rejected.errors.is_some());
}
