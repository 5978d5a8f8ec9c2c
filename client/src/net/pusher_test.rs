use super::*;

#[test]
fn socket_url_includes_cluster_key_and_protocol() {
    let url = socket_url("abc123", "us2");
    assert!(url.starts_with("wss://ws-us2.pusher.com/app/abc123?protocol=7&client=tldr-site&version="));
    assert!(url.ends_with("&flash=false"));
}

#[test]
fn parses_connection_established_with_string_data() {
    let text = r#"{"event":"pusher:connection_established","data":"{\"socket_id\":\"123.456\",\"activity_timeout\":120}"}"#;
    assert_eq!(
        parse_server_message(text).unwrap(),
        ServerMessage::ConnectionEstablished { socket_id: "123.456".to_owned(), activity_timeout: Some(120) }
    );
}

#[test]
fn parses_system_events() {
    let ok = r#"{"event":"pusher_internal:subscription_succeeded","channel":"user-subscription-channel","data":"{}"}"#;
    assert_eq!(
        parse_server_message(ok).unwrap(),
        ServerMessage::SubscriptionSucceeded { channel: "user-subscription-channel".to_owned() }
    );
    assert_eq!(parse_server_message(r#"{"event":"pusher:ping","data":{}}"#).unwrap(), ServerMessage::Ping);
    assert_eq!(
        parse_server_message(r#"{"event":"pusher:error","data":{"code":4001,"message":"App key not in this cluster"}}"#)
            .unwrap(),
        ServerMessage::Error { code: Some(4001), message: "App key not in this cluster".to_owned() }
    );
    assert_eq!(
        parse_server_message(r#"{"event":"pusher:signin_success","data":{}}"#).unwrap(),
        ServerMessage::Other("pusher:signin_success".to_owned())
    );
}

#[test]
fn malformed_text_is_an_error() {
    assert!(parse_server_message("not json").is_err());
    assert!(parse_server_message(r#"{"data":{}}"#).is_err());
    assert!(parse_server_message(r#"{"event":"pusher:connection_established","data":"{}"}"#).is_err());
}

#[test]
fn channel_event_data_is_unwrapped() {
    let text = r#"{"event":"new-subscription","channel":"user-subscription-channel","data":"{\"userId\":\"u-1\"}"}"#;
    let message = parse_server_message(text).unwrap();
    assert_eq!(
        subscription_notice(&message, "user-subscription-channel"),
        Some(SubscriptionNotice { user_id: "u-1".to_owned() })
    );
    assert_eq!(subscription_notice(&message, "other-channel"), None);
}

#[test]
fn other_channel_events_are_not_notices() {
    let text = r#"{"event":"something-else","channel":"user-subscription-channel","data":"{\"userId\":\"u-1\"}"}"#;
    let message = parse_server_message(text).unwrap();
    assert_eq!(subscription_notice(&message, "user-subscription-channel"), None);
}

#[test]
fn encoders_produce_pusher_envelopes() {
    let sub: serde_json::Value = serde_json::from_str(&subscribe_message("chan")).unwrap();
    assert_eq!(sub, serde_json::json!({ "event": "pusher:subscribe", "data": { "channel": "chan" } }));
    let unsub: serde_json::Value = serde_json::from_str(&unsubscribe_message("chan")).unwrap();
    assert_eq!(unsub["event"], "pusher:unsubscribe");
    let pong: serde_json::Value = serde_json::from_str(&pong_message()).unwrap();
    assert_eq!(pong["event"], "pusher:pong");
}

#[test]
fn fatal_error_codes_stop_reconnecting() {
    assert!(!should_reconnect(Some(4001)));
    assert!(should_reconnect(Some(4100)));
    assert!(should_reconnect(Some(4201)));
    assert!(should_reconnect(None));
}
