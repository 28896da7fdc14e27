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
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use admin_tls::client_config::CertSource;
use admin_tls::default;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, Endpoint};

use crate::auth::{AUTH_SCOPES, AuthInterceptor, FileTokenSource, TokenSource};
use crate::errors::TransportError;
use crate::protos::firestore_admin::firestore_admin_client::FirestoreAdminClient;
use crate::protos::longrunning::operations_client::OperationsClient;

/// Time limit for the TCP/TLS handshake, separate from per-RPC deadlines.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Keep the HTTP/2 connection from being dropped by middleboxes while idle.
const TCP_KEEPALIVE: Duration = Duration::from_secs(30);

/// The channel with bearer-token metadata attached per call.
pub type AuthService = InterceptedService<Channel, AuthInterceptor>;

/// The service clients the wrappers in `protos/` hand out.
pub type FirestoreAdminClientT = FirestoreAdminClient<AuthService>;
pub type OperationsClientT = OperationsClient<AuthService>;

/// Credential and TLS configuration for connections to the Admin API.
#[derive(Clone, Debug)]
pub struct AdminClientConfig {
    /// Root CA bundle; the platform trust store is used when unset.
    pub root_ca: Option<String>,
    /// Client certificate material for mutual TLS.
    pub cert_source: Option<CertSource>,
    /// Source of bearer tokens attached to every call.
    pub token_source: Option<Arc<dyn TokenSource>>,
    /// File holding a bearer token; mutually exclusive with `token_source`.
    pub token_file: Option<String>,
    /// OAuth scopes to request when minting tokens for this client.
    pub scopes: Vec<String>,
    /// When set, overrides the endpoint host and requires a client
    /// certificate. `:443` is assumed when the override carries no port.
    pub mtls_endpoint: Option<String>,
}

impl AdminClientConfig {
    pub fn new(root_ca: Option<String>, cert_source: Option<CertSource>) -> Self {
        Self {
            root_ca,
            cert_source,
            token_source: None,
            token_file: None,
            scopes: AUTH_SCOPES.iter().map(|s| s.to_string()).collect(),
            mtls_endpoint: None,
        }
    }

    pub fn with_token_source(mut self, token_source: Arc<dyn TokenSource>) -> Self {
        self.token_source = Some(token_source);
        self
    }

    pub fn with_token_file(mut self, token_file: impl Into<String>) -> Self {
        self.token_file = Some(token_file.into());
        self
    }

    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    pub fn with_mtls_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.mtls_endpoint = Some(endpoint.into());
        self
    }

    /// The effective token source, rejecting ambiguous configuration.
    pub fn resolve_token_source(&self) -> Result<Option<Arc<dyn TokenSource>>, TransportError> {
        match (&self.token_source, &self.token_file) {
            (Some(_), Some(_)) => Err(TransportError::DuplicateCredentials),
            (Some(source), None) => Ok(Some(source.clone())),
            (None, Some(path)) => Ok(Some(Arc::new(FileTokenSource::new(path.clone())))),
            (None, None) => Ok(None),
        }
    }
}

impl Default for AdminClientConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// How often and how patiently to retry the initial connection.
#[derive(Clone, Copy, Debug)]
pub struct RetryConfig {
    pub retries: u32,
    pub interval: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            interval: Duration::from_secs(2),
        }
    }
}

/// Everything needed to reach one API endpoint.
#[derive(Clone, Debug)]
pub struct ApiConfig<'a> {
    pub url: &'a str,
    pub client_config: &'a AdminClientConfig,
    pub retry_config: RetryConfig,
}

impl<'a> ApiConfig<'a> {
    pub fn new(url: &'a str, client_config: &'a AdminClientConfig) -> Self {
        Self {
            url,
            client_config,
            retry_config: RetryConfig::default(),
        }
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }
}

/// Append the default gRPC port when the authority carries none.
fn host_with_default_port(host: &str) -> String {
    if host.contains(':') {
        host.to_string()
    } else {
        format!("{host}:{}", default::SERVICE_PORT)
    }
}

/// Turn a bare authority into a URL; `https` is assumed when no scheme is
/// given so `firestore.googleapis.com` works as-is.
fn endpoint_uri(host_or_url: &str) -> String {
    if host_or_url.contains("://") {
        host_or_url.to_string()
    } else {
        format!("https://{host_or_url}")
    }
}

/// The URL this configuration actually connects to: a mutual-TLS endpoint
/// override wins over the configured URL.
fn target_url(api: &ApiConfig<'_>) -> String {
    match &api.client_config.mtls_endpoint {
        Some(endpoint) => endpoint_uri(&host_with_default_port(endpoint)),
        None => endpoint_uri(api.url),
    }
}

/// Cache for the underlying channel.
///
/// A transport establishes at most one channel, lazily on first use, and
/// every service client built from that transport multiplexes over it. An
/// externally supplied channel pre-seeds the cache and is never replaced.
#[derive(Clone, Debug, Default)]
pub struct SharedChannel {
    inner: Arc<tokio::sync::Mutex<Option<CachedChannel>>>,
}

#[derive(Clone, Debug)]
struct CachedChannel {
    channel: Channel,
    connected: SystemTime,
    /// Externally supplied channels are never dropped from the cache.
    pinned: bool,
}

impl SharedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache pre-seeded with an externally managed channel.
    pub fn preseeded(channel: Channel) -> Self {
        Self {
            inner: Arc::new(tokio::sync::Mutex::new(Some(CachedChannel {
                channel,
                connected: SystemTime::now(),
                pinned: true,
            }))),
        }
    }

    /// When the cached channel was established, if one is cached.
    pub async fn connected_at(&self) -> Option<SystemTime> {
        self.inner.lock().await.as_ref().map(|c| c.connected)
    }

    /// Drop the cached channel so the next call reconnects. Pinned channels
    /// stay put.
    pub async fn invalidate(&self) {
        let mut guard = self.inner.lock().await;
        if guard.as_ref().is_some_and(|c| !c.pinned) {
            guard.take();
        }
    }

    /// Get the cached channel, or establish one with `connect`. The lock is
    /// held across the connect so concurrent first calls do not race into
    /// multiple channels.
    pub async fn get_or_connect<F, Fut>(&self, connect: F) -> Result<Channel, TransportError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Channel, TransportError>>,
    {
        let mut guard = self.inner.lock().await;
        if let Some(cached) = guard.as_ref() {
            return Ok(cached.channel.clone());
        }
        let channel = connect().await?;
        guard.replace(CachedChannel {
            channel: channel.clone(),
            connected: SystemTime::now(),
            pinned: false,
        });
        Ok(channel)
    }
}

/// Builds connected, authenticated service clients for the Admin API.
pub struct AdminTlsClient;

impl AdminTlsClient {
    /// Establish the underlying channel: endpoint normalization, TLS setup,
    /// then the TCP/HTTP2 connect. Plaintext `http://` URLs skip TLS, which
    /// is how local emulators and in-process test servers are reached.
    pub async fn connect_channel(api: &ApiConfig<'_>) -> Result<Channel, TransportError> {
        let url = target_url(api);
        let mut endpoint = Endpoint::from_shared(url.clone())
            .map_err(|source| TransportError::InvalidEndpoint {
                url: url.clone(),
                source,
            })?
            .connect_timeout(CONNECT_TIMEOUT)
            .tcp_keepalive(Some(TCP_KEEPALIVE));

        if url.starts_with("https://") {
            let identity = match (
                &api.client_config.mtls_endpoint,
                &api.client_config.cert_source,
            ) {
                (Some(_), Some(source)) | (None, Some(source)) => Some(source.identity()?),
                (Some(mtls_endpoint), None) => {
                    return Err(TransportError::MissingClientCert(mtls_endpoint.clone()));
                }
                (None, None) => None,
            };
            let tls =
                admin_tls::tls_config(api.client_config.root_ca.as_deref(), identity)?;
            endpoint = endpoint
                .tls_config(tls)
                .map_err(|source| TransportError::TlsSetup {
                    url: url.clone(),
                    source,
                })?;
        }

        tracing::debug!(%url, "connecting to Firestore Admin API");
        endpoint
            .connect()
            .await
            .map_err(|source| TransportError::Connect { url, source })
    }

    /// One connected admin client over a fresh channel.
    pub async fn build(api: &ApiConfig<'_>) -> Result<FirestoreAdminClientT, TransportError> {
        let channel = Self::connect_channel(api).await?;
        let interceptor = AuthInterceptor::new(api.client_config.resolve_token_source()?);
        Ok(FirestoreAdminClient::with_interceptor(channel, interceptor))
    }

    pub async fn retry_build(
        api: &ApiConfig<'_>,
    ) -> Result<FirestoreAdminClientT, TransportError> {
        tryhard::retry_fn(|| Self::build(api))
            .retries(api.retry_config.retries)
            .fixed_backoff(api.retry_config.interval)
            .await
    }

    /// One connected operations client over a fresh channel. Prefer
    /// [`crate::firestore_admin_client::FirestoreAdminApi`] when the admin
    /// surface is used too, so both clients share a channel.
    pub async fn build_operations(
        api: &ApiConfig<'_>,
    ) -> Result<OperationsClientT, TransportError> {
        let channel = Self::connect_channel(api).await?;
        let interceptor = AuthInterceptor::new(api.client_config.resolve_token_source()?);
        Ok(OperationsClient::with_interceptor(channel, interceptor))
    }

    pub async fn retry_build_operations(
        api: &ApiConfig<'_>,
    ) -> Result<OperationsClientT, TransportError> {
        tryhard::retry_fn(|| Self::build_operations(api))
            .retries(api.retry_config.retries)
            .fixed_backoff(api.retry_config.interval)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn default_port_is_appended_only_when_missing() {
        assert_eq!(
            host_with_default_port("firestore.mtls.googleapis.com"),
            "firestore.mtls.googleapis.com:443"
        );
        assert_eq!(
            host_with_default_port("firestore.mtls.googleapis.com:8443"),
            "firestore.mtls.googleapis.com:8443"
        );
    }

    #[test]
    fn scheme_is_assumed_https() {
        assert_eq!(
            endpoint_uri("firestore.googleapis.com"),
            "https://firestore.googleapis.com"
        );
        assert_eq!(
            endpoint_uri("http://127.0.0.1:8080"),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn mtls_endpoint_overrides_configured_url() {
        let config = AdminClientConfig::new(None, None)
            .with_mtls_endpoint(default::MTLS_SERVICE_HOST);
        let api = ApiConfig::new("https://firestore.googleapis.com", &config);
        assert_eq!(target_url(&api), "https://firestore.mtls.googleapis.com:443");
    }

    #[test]
    fn token_source_and_token_file_together_are_rejected() {
        let config = AdminClientConfig::new(None, None)
            .with_token_source(Arc::new(crate::auth::StaticTokenSource::new("t")))
            .with_token_file("/run/secrets/token");
        assert!(matches!(
            config.resolve_token_source(),
            Err(TransportError::DuplicateCredentials)
        ));
    }

    #[test]
    fn default_scopes_cover_the_admin_surface() {
        let config = AdminClientConfig::default();
        assert_eq!(config.scopes, AUTH_SCOPES);
    }

    #[tokio::test]
    async fn shared_channel_connects_once() {
        let shared = SharedChannel::new();
        let connects = AtomicUsize::new(0);

        for _ in 0..3 {
            shared
                .get_or_connect(|| async {
                    connects.fetch_add(1, Ordering::SeqCst);
                    Ok(Endpoint::from_static("http://127.0.0.1:1").connect_lazy())
                })
                .await
                .unwrap();
        }

        assert_eq!(connects.load(Ordering::SeqCst), 1);
        assert!(shared.connected_at().await.is_some());
    }

    #[tokio::test]
    async fn invalidated_channel_is_rebuilt() {
        let shared = SharedChannel::new();
        let connects = AtomicUsize::new(0);

        let connect = || async {
            connects.fetch_add(1, Ordering::SeqCst);
            Ok(Endpoint::from_static("http://127.0.0.1:1").connect_lazy())
        };

        shared.get_or_connect(connect).await.unwrap();
        shared.invalidate().await;
        shared.get_or_connect(connect).await.unwrap();

        assert_eq!(connects.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn preseeded_channel_survives_invalidation() {
        let shared =
            SharedChannel::preseeded(Endpoint::from_static("http://127.0.0.1:1").connect_lazy());
        shared.invalidate().await;

        let connects = AtomicUsize::new(0);
        shared
            .get_or_connect(|| async {
                connects.fetch_add(1, Ordering::SeqCst);
                Ok(Endpoint::from_static("http://127.0.0.1:1").connect_lazy())
            })
            .await
            .unwrap();

        assert_eq!(connects.load(Ordering::SeqCst), 0);
    }
}
