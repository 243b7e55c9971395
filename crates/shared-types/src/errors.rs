//! # Error Types
//!
//! The error taxonomy shared by every subsystem. Each category has a fixed
//! handling rule:
//!
//! | Category | Handling |
//! |----------|----------|
//! | Validation | reported, never retried |
//! | Configuration | fails the operation before any crypto or network work |
//! | Cryptographic | generic, reveals neither cause nor partial plaintext |
//! | Parse | propagated verbatim |
//! | AuthenticationFailure | generic, key and signature mismatch look identical |

use shared_crypto::CryptoError;
use thiserror::Error;

/// Malformed caller input, detected before anything is signed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Authorization body has no `channel_name` field.
    #[error("channel_name not found")]
    MissingChannelName,

    /// `channel_name` is present but empty.
    #[error("Channel name cannot be blank")]
    BlankChannelName,

    /// Channel name has characters outside `[-a-zA-Z0-9_=@,.;]`.
    #[error("invalid channel name: '{0}'")]
    InvalidChannelName(String),

    /// Channel name longer than the protocol limit.
    #[error("channel name is {actual} characters, maximum is {max}")]
    ChannelNameTooLong { max: usize, actual: usize },

    /// Authorization body has no `socket_id` field.
    #[error("socket_id not found")]
    MissingSocketId,

    /// Socket id does not match `<digits>.<digits>`.
    #[error("socket_id invalid")]
    InvalidSocketId,

    /// User data has no `id`.
    #[error("Missing id in user data")]
    MissingUserId,

    /// User data `id` is not a JSON string.
    #[error("id field in user data is not a string")]
    UserIdNotString,

    /// User data `id` is empty or too long.
    #[error("Invalid id in user data: '{0}'")]
    InvalidUserId(String),

    /// Event payload exceeds the API limit once encoded.
    #[error("event data must be smaller than {max} bytes, got {actual}")]
    PayloadTooLarge { max: usize, actual: usize },
}

/// Client misconfiguration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// An encrypted-channel operation ran without a master key.
    #[error("an encryption master key is required for private-encrypted- channels")]
    MasterKeyRequired,

    /// The configured master key failed validation.
    #[error(transparent)]
    MasterKey(CryptoError),

    /// Any other invalid client setting.
    #[error("invalid client configuration: {0}")]
    Invalid(String),
}

/// Unparseable input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The url-encoded authorization body.
    #[error("invalid request body: {0}")]
    RequestBody(String),

    /// An encrypted event envelope.
    #[error("malformed encrypted envelope: {0}")]
    Envelope(String),

    /// The webhook JSON body.
    #[error("invalid webhook body: {0}")]
    WebhookBody(String),

    /// Caller-supplied data that could not be encoded as JSON.
    #[error("failed to encode JSON: {0}")]
    Json(String),
}

/// Top-level error for every Channels auth operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelsError {
    /// See [`ValidationError`].
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// See [`ConfigurationError`].
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Authenticated decryption failed.
    #[error("failed to decrypt event, possibly wrong key")]
    Cryptographic,

    /// Sealing could not run (RNG unavailable).
    #[error("encryption failed: {0}")]
    Encryption(CryptoError),

    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Webhook key or signature mismatch.
    #[error("invalid webhook")]
    AuthenticationFailure,

    /// Host or path could not form a URL.
    #[error("invalid request URL: {0}")]
    UrlConstruction(String),
}

impl From<CryptoError> for ChannelsError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidKeyLength { .. }
            | CryptoError::AmbiguousMasterKey
            | CryptoError::InvalidKeyEncoding => {
                ChannelsError::Configuration(ConfigurationError::MasterKey(err))
            }
            CryptoError::InvalidNonceLength { .. } | CryptoError::MalformedEnvelope(_) => {
                ChannelsError::Parse(ParseError::Envelope(err.to_string()))
            }
            CryptoError::DecryptionFailed => ChannelsError::Cryptographic,
            CryptoError::EncryptionFailed | CryptoError::EntropyUnavailable(_) => {
                ChannelsError::Encryption(err)
            }
        }
    }
}

/// Result alias used across the subsystems.
pub type ChannelsResult<T> = Result<T, ChannelsError>;
