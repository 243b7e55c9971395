//! # Conformance Vectors
//!
//! Literal inputs and outputs that a remote verifier, or any other client
//! library, agrees on. A change in any of these breaks interoperability.

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use ch_01_request_signing::{HostConfig, RequestSigningApi, RequestSigningService, SignRequest};
    use ch_02_channel_authorization::{ChannelAuthorizationApi, ChannelAuthorizationService};
    use ch_03_webhook_verification::{WebhookVerificationApi, WebhookVerificationService};
    use ch_04_session_auth::{SessionAuthApi, SessionAuthService, SessionRequest};
    use shared_crypto::{derive_shared_secret, md5_hex, sign, symmetric, verify, EncryptedEnvelope};
    use shared_types::{
        Credential, FixedTimeSource, MasterKeySlot, MemberData, WebhookPayload,
    };
    use std::sync::Arc;

    const KEY: &str = "278d425bdf160c739803";
    const SECRET: &str = "7ad3773142a6692b25b8";

    fn credential() -> Credential {
        Credential::new(KEY, SECRET)
    }

    fn authorizer() -> ChannelAuthorizationService {
        ChannelAuthorizationService::new(credential(), Arc::new(MasterKeySlot::Absent))
    }

    // =========================================================================
    // SIGNATURE ENGINE
    // =========================================================================

    #[test]
    fn test_hmac_vector() {
        let signature = sign(b"Hello!", b"supersecret");
        assert_eq!(
            signature,
            "64e3f44166575febbc5de88c9476325ea7d4b3684752158d9fdb31fce34b980d"
        );
        assert!(verify(&signature, b"supersecret", b"Hello!"));
    }

    #[test]
    fn test_md5_vector() {
        assert_eq!(md5_hex(b"Hello!"), "952d2c56d0485958336747bcdd98590d");
    }

    // =========================================================================
    // CHANNEL AUTHORIZATION
    // =========================================================================

    #[test]
    fn test_private_channel_vector() {
        let response = authorizer()
            .authorize_channel(b"channel_name=private-foobar&socket_id=1234.1234", None)
            .unwrap();

        assert_eq!(
            response.auth,
            "278d425bdf160c739803:58df8b0c36d6982b82c3ecf6b4662e34fe8c25bba48f5369f135bf843651c3a4"
        );
    }

    #[test]
    fn test_presence_channel_vector() {
        let member = MemberData::new("10").with_info("name", "Mr. Pusher");

        let response = authorizer()
            .authorize_channel(b"channel_name=presence-foobar&socket_id=1234.1234", Some(&member))
            .unwrap();

        assert_eq!(
            response.auth,
            "278d425bdf160c739803:48dac51d2d7569e1e9c0f48c227d4b26f238fa68e5c0bb04222c966909c4f7c4"
        );
        assert_eq!(
            response.channel_data.as_deref(),
            Some(r#"{"user_id":"10","user_info":{"name":"Mr. Pusher"}}"#)
        );
    }

    #[test]
    fn test_user_authentication_vector() {
        let service = ChannelAuthorizationService::new(
            Credential::new("key", "secret"),
            Arc::new(MasterKeySlot::Absent),
        );

        let response = service
            .authenticate_user(b"socket_id=12345.12345", serde_json::json!({"id": "1234"}))
            .unwrap();

        assert_eq!(
            response.to_json().unwrap(),
            r#"{"auth":"key:e4c63b82c1e1d0955901f6a29ca51b244155bafda93968bc5664010f5ba54a41","user_data":"{\"id\":\"1234\"}"}"#
        );
    }

    // =========================================================================
    // REQUEST SIGNING
    // =========================================================================

    #[test]
    fn test_request_signing_vector() {
        // Arrange
        let signer = RequestSigningService::new(
            credential(),
            HostConfig {
                secure: false,
                ..HostConfig::default()
            },
            FixedTimeSource(1353088179),
        );
        let request = SignRequest::new("POST", "/apps/3/events")
            .with_body(r#"{"name":"foo","channels":["project-3"],"data":"{\"some\":\"data\"}"}"#);

        // Act
        let url = signer.signed_url(&request).unwrap();

        // Assert
        assert!(url.contains("body_md5=ec365a775a4cd0599faeb73354201b6f"));
        assert!(url.ends_with(
            "&auth_signature=da454824c97ba181a32ccc17a72625ba02771f50b50e1e7430e47a1f3f457e6c"
        ));
    }

    // =========================================================================
    // ENCRYPTION ENGINE
    // =========================================================================

    #[test]
    fn test_shared_secret_vector() {
        let secret = derive_shared_secret("private-encrypted-bla", b"This is a string that is 32 chars");
        assert_eq!(
            hex::encode(secret.as_bytes()),
            "004831f99d2a4e86723e893caded3a2897deeddbed9514fe9497dcddc52bd50b"
        );
    }

    #[test]
    fn test_historic_envelope_opens() {
        let secret = derive_shared_secret("private-encrypted-bla", b"This is a string that is 32 chars");
        let envelope = EncryptedEnvelope::from_json(
            r#"{"nonce":"sjklahvpWWQgAjTx5FfYHCCxd2AmaL9T","ciphertext":"zoDEe8dA3nDXKsybAWce/hXGW4szJw=="}"#,
        )
        .unwrap();

        assert_eq!(symmetric::open(&secret, &envelope).unwrap(), b"Hello!");
    }

    #[test]
    fn test_envelope_nonce_is_24_bytes() {
        let key = shared_crypto::MasterKey::from_bytes(b"this is 32 bytes 123456789012345").unwrap();
        let json = shared_crypto::encrypt("private-encrypted-x", b"data", &key).unwrap();
        let envelope = EncryptedEnvelope::from_json(&json).unwrap();

        assert_eq!(STANDARD.decode(&envelope.nonce).unwrap().len(), 24);
    }

    // =========================================================================
    // WEBHOOKS
    // =========================================================================

    #[test]
    fn test_webhook_vector() {
        let service = WebhookVerificationService::new(
            Credential::new("key", "secret"),
            Arc::new(MasterKeySlot::Absent),
        );

        let payload = service
            .verify(
                &["key"],
                "2677ad3e7c090b2fa2c0fb13020d66d5420879b8316eb356a2d60fb9073bc778",
                br#"{"hello":"world"}"#,
            )
            .unwrap();

        assert_eq!(payload, WebhookPayload::default());
    }

    // =========================================================================
    // SESSION TOKENS
    // =========================================================================

    #[test]
    fn test_session_token_vector() {
        let service = SessionAuthService::new(credential(), FixedTimeSource(1590155583));
        let mut info = serde_json::Map::new();
        info.insert("foo".to_string(), "bar".into());
        let request = SessionRequest::anonymous(["private-foo", "private-bar", "presence-foobar"])
            .for_user("callum")
            .with_user_info(info);

        let response = service.authenticate_session(&request).unwrap();

        assert!(response.auth.starts_with("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9."));
        assert!(response.auth.ends_with(".SvBsw-QQtX8chLmhb3kjkMeXx-i28mO6EwspW_o-HDg"));
    }
}
