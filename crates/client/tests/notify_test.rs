use pretty_assertions::assert_eq;
use rstest::rstest;
use slotdesk_client::notify::{Notice, NoticeLevel, report};
use slotdesk_core::{errors::DeskError, models::upload::MediaKind};

#[rstest]
#[case(DeskError::Validation("Pick at least one slot".into()), NoticeLevel::Warning)]
#[case(DeskError::LimitExceeded { kind: MediaKind::Image, max: 2, actual: 3 }, NoticeLevel::Warning)]
#[case(DeskError::NotFound("Brand".into()), NoticeLevel::Error)]
#[case(DeskError::Api(eyre::eyre!("timeout")), NoticeLevel::Error)]
fn test_notice_level(#[case] err: DeskError, #[case] expected: NoticeLevel) {
    assert_eq!(Notice::from(&err).level, expected);
}

#[test]
fn test_limit_message() {
    let err = DeskError::LimitExceeded {
        kind: MediaKind::Video,
        max: 1,
        actual: 4,
    };
    assert_eq!(report(&err).message, "You can attach at most 1 videos");
}

#[test]
fn test_api_failures_get_generic_message() {
    let notice = report(&DeskError::Api(eyre::eyre!("connection refused to 10.0.0.3")));
    assert_eq!(
        notice,
        Notice {
            level: NoticeLevel::Error,
            message: "Something went wrong, please try again".to_string(),
        }
    );
}

#[test]
fn test_notice_serialization() {
    let value = serde_json::to_value(Notice::success("Schedule saved")).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "level": "success", "message": "Schedule saved" })
    );
}
