/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use std::fmt;
use std::sync::Arc;

use tonic::Status;
use tonic::metadata::MetadataValue;

/// OAuth scopes the Firestore Admin API accepts. Whoever mints tokens for
/// this client requests these.
pub const AUTH_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/datastore",
];

/// Identifies this client library on the `x-goog-api-client` metadata entry.
const API_CLIENT_HEADER: &str = "gl-rust grpc-tonic fs-admin/0.0.0";

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Could not read token file {path}: {source}")]
    ReadTokenFile {
        path: String,
        source: std::io::Error,
    },
    #[error("Token file {0} is empty")]
    EmptyTokenFile(String),
    #[error("Access token is not valid request metadata")]
    InvalidToken,
}

/// Source of the bearer tokens attached to every RPC.
///
/// Token acquisition and refresh live behind this seam; the transport only
/// ever asks for the current token. Implementations must hand back a token
/// that is valid right now, so a refreshing source does its bookkeeping
/// internally.
pub trait TokenSource: Send + Sync + fmt::Debug + 'static {
    /// The current access token, without the `Bearer ` prefix.
    fn token(&self) -> Result<String, AuthError>;
}

/// A fixed token handed over at construction time. Suitable for short-lived
/// processes; the token is not refreshed.
#[derive(Clone)]
pub struct StaticTokenSource {
    token: String,
}

impl StaticTokenSource {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenSource for StaticTokenSource {
    fn token(&self) -> Result<String, AuthError> {
        Ok(self.token.clone())
    }
}

impl fmt::Debug for StaticTokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tokens must not end up in logs.
        f.debug_struct("StaticTokenSource")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Reads the token from a file on every call, so an external refresher can
/// rotate the file without this process reconnecting or restarting.
#[derive(Clone, Debug)]
pub struct FileTokenSource {
    path: String,
}

impl FileTokenSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenSource for FileTokenSource {
    fn token(&self) -> Result<String, AuthError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| {
            AuthError::ReadTokenFile {
                path: self.path.clone(),
                source,
            }
        })?;
        let token = raw.trim();
        if token.is_empty() {
            return Err(AuthError::EmptyTokenFile(self.path.clone()));
        }
        Ok(token.to_string())
    }
}

/// Per-call interceptor that attaches `authorization` and client
/// identification metadata. Without a token source it only adds the client
/// identification entry, which is what an externally managed channel gets.
#[derive(Clone, Debug)]
pub struct AuthInterceptor {
    token_source: Option<Arc<dyn TokenSource>>,
}

impl AuthInterceptor {
    pub fn new(token_source: Option<Arc<dyn TokenSource>>) -> Self {
        Self { token_source }
    }

    pub fn none() -> Self {
        Self { token_source: None }
    }
}

impl tonic::service::Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: tonic::Request<()>) -> Result<tonic::Request<()>, Status> {
        if let Some(source) = &self.token_source {
            let token = source
                .token()
                .map_err(|e| Status::unauthenticated(e.to_string()))?;
            let value = MetadataValue::try_from(format!("Bearer {token}"))
                .map_err(|_| Status::unauthenticated(AuthError::InvalidToken.to_string()))?;
            request.metadata_mut().insert("authorization", value);
        }
        request.metadata_mut().insert(
            "x-goog-api-client",
            MetadataValue::from_static(API_CLIENT_HEADER),
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use tonic::service::Interceptor;

    use super::*;

    #[test]
    fn interceptor_attaches_bearer_token() {
        let mut interceptor =
            AuthInterceptor::new(Some(Arc::new(StaticTokenSource::new("token-123"))));
        let request = interceptor.call(tonic::Request::new(())).unwrap();
        assert_eq!(
            request.metadata().get("authorization").unwrap(),
            "Bearer token-123"
        );
        assert!(request.metadata().get("x-goog-api-client").is_some());
    }

    #[test]
    fn interceptor_without_source_skips_authorization() {
        let mut interceptor = AuthInterceptor::none();
        let request = interceptor.call(tonic::Request::new(())).unwrap();
        assert!(request.metadata().get("authorization").is_none());
        assert!(request.metadata().get("x-goog-api-client").is_some());
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        let mut interceptor =
            AuthInterceptor::new(Some(Arc::new(StaticTokenSource::new("bad\ntoken"))));
        let status = interceptor.call(tonic::Request::new(())).unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
    }

    #[test]
    fn file_token_source_trims_and_rejects_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");

        std::fs::write(&path, "token-from-file\n").unwrap();
        let source = FileTokenSource::new(path.to_string_lossy());
        assert_eq!(source.token().unwrap(), "token-from-file");

        std::fs::write(&path, "  \n").unwrap();
        assert!(matches!(
            source.token().unwrap_err(),
            AuthError::EmptyTokenFile(_)
        ));
    }

    #[test]
    fn static_token_is_not_leaked_by_debug() {
        let source = StaticTokenSource::new("secret");
        assert!(!format!("{source:?}").contains("secret"));
    }
}
