use pretty_assertions::assert_eq;
use serde_json::json;
use slotdesk_client::{
    api::{ApiClient, FileApi, FilePart, SlotApi},
    config::ClientConfig,
};
use slotdesk_core::models::slot::WeekDay;
use tracing::Level;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, header_exists, method, path},
};

fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient {
    let config = ClientConfig {
        api_url: server.uri(),
        api_token: token.map(str::to_string),
        timeout_seconds: 5,
        start_hour: 0,
        end_hour: 24,
        slot_minutes: 60,
        log_level: Level::INFO,
    };
    ApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_fetch_working_slots_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/working-slots"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": "s1",
                    "weekDay": "MONDAY",
                    "startTime": "09:00",
                    "endTime": "10:00",
                    "isActive": true
                },
                {
                    "id": "s2",
                    "weekDay": "SATURDAY",
                    "startTime": "14:30",
                    "endTime": "15:00",
                    "isActive": false
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("secret"));
    let slots = client.fetch_working_slots().await.unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].id, "s1");
    assert_eq!(slots[1].week_day, WeekDay::Saturday);
    assert!(!slots[1].is_active);
}

#[tokio::test]
async fn test_set_active_slots_sends_ids() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/working-slots/active"))
        .and(body_json(json!({ "ids": ["s1", "s3"] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    client
        .set_active_slots(&["s1".to_string(), "s3".to_string()])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/working-slots/active"))
        .respond_with(ResponseTemplate::new(422).set_body_string("unknown slot id"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client
        .set_active_slots(&["missing".to_string()])
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Failed to set active slots"));
    assert!(message.contains("unknown slot id"));
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/working-slots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    assert!(client.fetch_working_slots().await.is_err());
}

#[tokio::test]
async fn test_upload_files_returns_urls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/files/upload"))
        .and(header_exists("content-type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": ["https://cdn.example.com/1.png", "https://cdn.example.com/2.mp4"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("secret"));
    let urls = client
        .upload_files(vec![
            FilePart {
                name: "1.png".to_string(),
                mime_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            },
            FilePart {
                name: "2.mp4".to_string(),
                mime_type: "video/mp4".to_string(),
                bytes: vec![4, 5],
            },
        ])
        .await
        .unwrap();

    assert_eq!(
        urls,
        vec![
            "https://cdn.example.com/1.png".to_string(),
            "https://cdn.example.com/2.mp4".to_string()
        ]
    );
}

#[tokio::test]
async fn test_invalid_mime_type_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let result = client
        .upload_files(vec![FilePart {
            name: "x".to_string(),
            mime_type: "not a mime".to_string(),
            bytes: vec![],
        }])
        .await;

    assert!(result.is_err());
}
