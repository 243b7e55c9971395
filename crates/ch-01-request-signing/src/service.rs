//! # Request Signing Service
//!
//! Implements [`RequestSigningApi`]: stamps the request with the clock,
//! signs the canonical form and assembles the URL.

use crate::domain::canonical::{
    is_reserved, string_to_sign, CanonicalParams, SignRequest, AUTH_SIGNATURE_PARAM,
};
use crate::domain::config::HostConfig;
use crate::ports::inbound::RequestSigningApi;
use crate::ports::outbound::TimeSource;
use shared_crypto::sign;
use shared_types::{ChannelsError, ChannelsResult, Credential};
use tracing::{debug, warn};
use url::Url;

/// Request signing service.
pub struct RequestSigningService<T: TimeSource> {
    credential: Credential,
    hosts: HostConfig,
    clock: T,
}

impl<T: TimeSource> RequestSigningService<T> {
    /// Create a signer for one app.
    pub fn new(credential: Credential, hosts: HostConfig, clock: T) -> Self {
        Self {
            credential,
            hosts,
            clock,
        }
    }

    /// Host configuration in use.
    pub fn hosts(&self) -> &HostConfig {
        &self.hosts
    }

    fn base_url(&self, path: &str) -> ChannelsResult<Url> {
        if !path.starts_with('/') {
            return Err(ChannelsError::UrlConstruction(format!(
                "path must start with '/': {path}"
            )));
        }
        if path.contains(['?', '#']) {
            return Err(ChannelsError::UrlConstruction(format!(
                "path must not carry a query or fragment: {path}"
            )));
        }

        let url = Url::parse(&format!("{}{path}", self.hosts.base_url()))
            .map_err(|e| ChannelsError::UrlConstruction(e.to_string()))?;

        // The signature covers the path as given; the URL must carry it byte for byte.
        if url.path() != path {
            return Err(ChannelsError::UrlConstruction(format!(
                "path is not in normalized form: {path}"
            )));
        }
        Ok(url)
    }
}

impl<T: TimeSource> RequestSigningApi for RequestSigningService<T> {
    fn signed_url(&self, request: &SignRequest) -> ChannelsResult<String> {
        self.signed_url_at(request, self.clock.now())
    }

    fn signed_url_at(&self, request: &SignRequest, timestamp: u64) -> ChannelsResult<String> {
        let mut url = self.base_url(&request.path)?;

        if request.query.keys().any(|name| is_reserved(name)) {
            warn!(path = %request.path, "ignoring caller-supplied auth parameters");
        }

        let params = CanonicalParams::new(
            self.credential.key(),
            timestamp,
            request.body.as_deref(),
            &request.query,
        );
        let signature = sign(
            string_to_sign(&request.method, &request.path, &params).as_bytes(),
            self.credential.secret(),
        );

        url.set_query(Some(&format!(
            "{}&{AUTH_SIGNATURE_PARAM}={signature}",
            params.escaped()
        )));

        debug!(
            method = %request.method,
            path = %request.path,
            timestamp,
            has_body = request.body.is_some(),
            "signed REST request"
        );
        Ok(url.into())
    }
}
