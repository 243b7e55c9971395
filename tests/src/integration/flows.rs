//! # Integration Test Flows
//!
//! Scenarios that cross subsystem boundaries through `ChannelsClient`:
//!
//! 1. **Encrypted channel**: authorize (ch-02) -> publish sealed data -> subscriber opens it
//! 2. **Webhook round trip**: sealed event data -> signed webhook -> verified, decrypted (ch-03)
//! 3. **Shared client**: one client used from many threads
//! 4. **Degraded config**: a bad master key disables only encrypted channels

#[cfg(test)]
mod tests {
    use crate::benchmarks::fixtures::{
        client, config, encrypted_webhook_body, webhook_headers, APP_ID, FIXED_NOW, KEY, MASTER_KEY,
        SECRET,
    };
    use channels_runtime::{ChannelsClient, ChannelsError, SessionRequest, SignRequest};
    use proptest::prelude::*;
    use shared_crypto::{derive_shared_secret, symmetric, EncryptedEnvelope};
    use shared_types::{ConfigurationError, ValidationError};
    use std::collections::HashSet;
    use std::sync::Arc;

    // =========================================================================
    // ENCRYPTED CHANNEL
    // =========================================================================

    #[test]
    fn test_subscriber_opens_published_event_with_shared_secret() {
        // Arrange
        let client = client();
        let channel = "private-encrypted-room";

        // Act: the subscriber is authorized, then an event is published
        let auth = client
            .authorize_channel(b"channel_name=private-encrypted-room&socket_id=1.2", None)
            .unwrap();
        let data = client.encrypt_event_data(channel, r#"{"msg":"hi"}"#).unwrap();

        // Assert: the key handed to the subscriber opens the event
        let shared = derive_shared_secret(channel, MASTER_KEY.as_bytes());
        assert_eq!(auth.shared_secret, Some(shared.to_base64()));

        let envelope = EncryptedEnvelope::from_json(&data).unwrap();
        assert_eq!(symmetric::open(&shared, &envelope).unwrap(), br#"{"msg":"hi"}"#);
    }

    #[test]
    fn test_other_channel_secret_cannot_open_event() {
        let client = client();
        let data = client.encrypt_event_data("private-encrypted-a", "secret").unwrap();

        let wrong = derive_shared_secret("private-encrypted-b", MASTER_KEY.as_bytes());
        let envelope = EncryptedEnvelope::from_json(&data).unwrap();

        assert!(symmetric::open(&wrong, &envelope).is_err());
    }

    // =========================================================================
    // WEBHOOK ROUND TRIP
    // =========================================================================

    #[test]
    fn test_encrypted_webhook_round_trip() {
        // Arrange
        let client = client();
        let body = encrypted_webhook_body(&client, "private-encrypted-room", 3);

        // Act
        let payload = client
            .webhook(&webhook_headers(body.as_bytes()), body.as_bytes())
            .unwrap();

        // Assert
        let data: Vec<_> = payload.events.iter().filter_map(|e| e.data.as_deref()).collect();
        assert_eq!(data, vec![r#"{"seq":0}"#, r#"{"seq":1}"#, r#"{"seq":2}"#]);
    }

    #[test]
    fn test_webhook_modified_after_signing_rejected() {
        let client = client();
        let body = encrypted_webhook_body(&client, "private-encrypted-room", 1);
        let headers = webhook_headers(body.as_bytes());
        let tampered = body.replace("client-tick", "client-tock");

        assert_eq!(
            client.webhook(&headers, tampered.as_bytes()).unwrap_err(),
            ChannelsError::AuthenticationFailure
        );
    }

    #[test]
    fn test_webhook_for_other_app_rejected() {
        let client = client();
        let body = br#"{"time_ms":1,"events":[]}"#;
        let signature = shared_crypto::sign(body, SECRET.as_bytes());

        assert_eq!(
            client.verify_webhook(&["some-other-key"], &signature, body).unwrap_err(),
            ChannelsError::AuthenticationFailure
        );
        assert!(client.verify_webhook(&["some-other-key", KEY], &signature, body).is_ok());
    }

    // =========================================================================
    // SHARED CLIENT
    // =========================================================================

    #[test]
    fn test_client_shared_across_threads() {
        let client = Arc::new(client());

        let envelopes: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let client = Arc::clone(&client);
                    scope.spawn(move || {
                        let body = format!("channel_name=private-encrypted-t{i}&socket_id={i}.{i}");
                        client.authorize_channel(body.as_bytes(), None).unwrap();
                        client
                            .encrypt_event_data("private-encrypted-shared", "payload")
                            .unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let nonces: HashSet<String> = envelopes
            .iter()
            .map(|json| EncryptedEnvelope::from_json(json).unwrap().nonce)
            .collect();
        assert_eq!(nonces.len(), envelopes.len(), "nonces must never repeat");
    }

    // =========================================================================
    // REST + SESSION THROUGH THE CLIENT
    // =========================================================================

    #[test]
    fn test_signed_events_url_through_client() {
        let mut config = config();
        config.secure = false;
        let client = ChannelsClient::with_clock(
            config,
            Arc::new(shared_types::FixedTimeSource(FIXED_NOW)),
        )
        .unwrap();

        let request = SignRequest::new("POST", client.app_path("events"))
            .with_body(r#"{"name":"foo","channels":["project-3"],"data":"{\"some\":\"data\"}"}"#);
        let url = client.signed_url(&request).unwrap();

        assert_eq!(
            url,
            format!(
                "http://api.pusherapp.com/apps/{APP_ID}/events?auth_key={KEY}\
                 &auth_timestamp={FIXED_NOW}&auth_version=1.0\
                 &body_md5=ec365a775a4cd0599faeb73354201b6f\
                 &auth_signature=da454824c97ba181a32ccc17a72625ba02771f50b50e1e7430e47a1f3f457e6c"
            )
        );
    }

    #[test]
    fn test_session_expires_sixty_seconds_after_clock() {
        let response = client()
            .authenticate_session(&SessionRequest::anonymous(["private-foo"]).for_user("u1"))
            .unwrap();

        let payload = response.auth.split('.').nth(1).unwrap();
        let claims: serde_json::Value = serde_json::from_slice(
            &base64::Engine::decode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, payload)
                .unwrap(),
        )
        .unwrap();

        assert_eq!(claims["iat"], FIXED_NOW);
        assert_eq!(claims["exp"], FIXED_NOW + 60);
        assert_eq!(claims["iss"], KEY);
        assert_eq!(claims["sub"], "u1");
    }

    // =========================================================================
    // DEGRADED CONFIG
    // =========================================================================

    #[test]
    fn test_short_master_key_disables_encrypted_paths_only() {
        // Arrange
        let mut config = config();
        config.encryption_master_key = Some("this is 31 bytes 12345678901234".to_string());
        let client = ChannelsClient::new(config).unwrap();

        // Act + Assert: plain paths work
        assert!(client
            .authorize_channel(b"channel_name=private-foobar&socket_id=1234.1234", None)
            .is_ok());
        assert!(client.encrypt_event_data("my-channel", "x").is_ok());

        // Encrypted paths report the key problem
        for err in [
            client
                .authorize_channel(b"channel_name=private-encrypted-x&socket_id=1.1", None)
                .unwrap_err(),
            client.encrypt_event_data("private-encrypted-x", "x").unwrap_err(),
        ] {
            assert!(matches!(err, ChannelsError::Configuration(ConfigurationError::MasterKey(_))));
            assert!(err.to_string().contains("32 bytes"));
        }
    }

    #[test]
    fn test_no_master_key_encrypted_webhook_rejected() {
        let keyed = client();
        let body = encrypted_webhook_body(&keyed, "private-encrypted-room", 1);

        let unkeyed = ChannelsClient::new(channels_runtime::ClientConfig::new(APP_ID, KEY, SECRET)).unwrap();
        let err = unkeyed
            .webhook(&webhook_headers(body.as_bytes()), body.as_bytes())
            .unwrap_err();

        assert_eq!(err, ChannelsError::Configuration(ConfigurationError::MasterKeyRequired));
    }

    #[test]
    fn test_rejected_authorization_has_no_signature() {
        let err = client()
            .authorize_channel(b"channel_name=private-foobar&socket_id=12341234", None)
            .unwrap_err();
        assert_eq!(err, ChannelsError::Validation(ValidationError::InvalidSocketId));
    }

    proptest! {
        #[test]
        fn prop_published_data_survives_webhook(data in "\\PC{0,200}") {
            let client = client();
            let sealed = client.encrypt_event_data("private-encrypted-prop", &data).unwrap();
            let body = serde_json::json!({
                "time_ms": 1,
                "events": [{"name": "client_event", "channel": "private-encrypted-prop", "data": sealed}]
            })
            .to_string();

            let payload = client.webhook(&webhook_headers(body.as_bytes()), body.as_bytes()).unwrap();

            prop_assert_eq!(payload.events[0].data.as_deref(), Some(data.as_str()));
        }
    }
}
