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
use std::fs;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use tonic::Status;
use tonic::transport::Channel;

use crate::admin_tls_client::{
    AdminClientConfig, AdminTlsClient, ApiConfig, FirestoreAdminClientT, OperationsClientT,
    RetryConfig, SharedChannel,
};
use crate::auth::AuthInterceptor;
use crate::connection::ConnectionProvider;
use crate::errors::TransportError;
use crate::protos::firestore_admin::firestore_admin_client::FirestoreAdminClient;
use crate::protos::firestore_admin_api_client::FirestoreAdminApiClient;
use crate::protos::longrunning::operations_client::OperationsClient;
use crate::protos::operations_api_client::OperationsApiClient;

impl FirestoreAdminApiClient {
    pub fn new(api: &ApiConfig<'_>) -> Self {
        Self::build(AdminTlsConnectionProvider::new(api))
    }
}

impl OperationsApiClient {
    pub fn new(api: &ApiConfig<'_>) -> Self {
        Self::build(AdminTlsConnectionProvider::new(api))
    }
}

/// The Admin API as a whole: the admin surface plus the poller for the
/// long-running operations several of its methods return. Both wrappers draw
/// from one [`SharedChannel`], so however many calls are issued on either,
/// at most one connection to the front end exists.
#[derive(Clone, Debug)]
pub struct FirestoreAdminApi {
    pub admin: FirestoreAdminApiClient,
    pub operations: OperationsApiClient,
}

impl FirestoreAdminApi {
    pub fn new(api: &ApiConfig<'_>) -> Self {
        let provider = AdminTlsConnectionProvider::new(api);
        Self {
            admin: FirestoreAdminApiClient::build(provider.clone()),
            operations: OperationsApiClient::build(provider),
        }
    }

    /// Wire both clients onto an externally managed channel. Credential
    /// configuration does not apply to calls over such a channel; whoever
    /// built it owns authentication.
    pub fn with_channel(url: impl Into<String>, channel: Channel) -> Self {
        let provider = AdminTlsConnectionProvider::with_channel(url, channel);
        Self {
            admin: FirestoreAdminApiClient::build(provider.clone()),
            operations: OperationsApiClient::build(provider),
        }
    }
}

/// Connection provider for the TLS transport. Clones share the channel
/// cache, which is what lets the admin and operations wrappers multiplex
/// over one connection.
#[derive(Clone, Debug)]
pub struct AdminTlsConnectionProvider {
    url: String,
    client_config: AdminClientConfig,
    retry_config: RetryConfig,
    channel: SharedChannel,
    external_channel: bool,
}

impl AdminTlsConnectionProvider {
    pub fn new(api: &ApiConfig<'_>) -> Self {
        Self {
            url: api.url.to_string(),
            client_config: api.client_config.clone(),
            retry_config: api.retry_config,
            channel: SharedChannel::new(),
            external_channel: false,
        }
    }

    /// A provider that hands out clients over the given channel instead of
    /// establishing its own. No credentials are attached.
    pub fn with_channel(url: impl Into<String>, channel: Channel) -> Self {
        Self {
            url: url.into(),
            client_config: AdminClientConfig::new(None, None),
            retry_config: RetryConfig::default(),
            channel: SharedChannel::preseeded(channel),
            external_channel: true,
        }
    }

    async fn channel(&self) -> Result<Channel, TransportError> {
        let api = ApiConfig::new(&self.url, &self.client_config)
            .with_retry_config(self.retry_config);
        let retry = self.retry_config;
        self.channel
            .get_or_connect(|| async move {
                tryhard::retry_fn(|| AdminTlsClient::connect_channel(&api))
                    .retries(retry.retries)
                    .fixed_backoff(retry.interval)
                    .await
            })
            .await
    }

    fn interceptor(&self) -> Result<AuthInterceptor, TransportError> {
        if self.external_channel {
            return Ok(AuthInterceptor::none());
        }
        Ok(AuthInterceptor::new(
            self.client_config.resolve_token_source()?,
        ))
    }

    /// True when the client certificate files have been rewritten since the
    /// connection was made. Also drops the shared channel so the reconnect
    /// actually produces a new one.
    async fn cert_material_rotated(&self, last_connected: SystemTime) -> bool {
        if self.external_channel {
            return false;
        }
        let Some(client_cert) = self
            .client_config
            .cert_source
            .as_ref()
            .and_then(|source| source.client_cert())
        else {
            return false;
        };

        if let Ok(mtime) = fs::metadata(&client_cert.cert_path).and_then(|m| m.modified()) {
            if mtime > last_connected {
                let old_cert_date = DateTime::<Utc>::from(last_connected);
                let new_cert_date = DateTime::<Utc>::from(mtime);
                tracing::info!(
                    cert_path = &client_cert.cert_path,
                    %old_cert_date,
                    %new_cert_date,
                    "FirestoreAdminApi: Reconnecting to pick up newer client certificate"
                );
                self.channel.invalidate().await;
                true
            } else {
                false
            }
        } else if let Ok(mtime) = fs::metadata(&client_cert.key_path).and_then(|m| m.modified()) {
            // Just in case the cert and key are created some amount of time
            // apart and we last connected with the new cert but the old key...
            if mtime > last_connected {
                let old_key_date = DateTime::<Utc>::from(last_connected);
                let new_key_date = DateTime::<Utc>::from(mtime);
                tracing::info!(
                    key_path = &client_cert.key_path,
                    %old_key_date,
                    %new_key_date,
                    "FirestoreAdminApi: Reconnecting to pick up newer client key"
                );
                self.channel.invalidate().await;
                true
            } else {
                false
            }
        } else {
            false
        }
    }
}

#[async_trait::async_trait]
impl ConnectionProvider<FirestoreAdminClientT> for AdminTlsConnectionProvider {
    async fn provide_connection(&self) -> Result<FirestoreAdminClientT, Status> {
        let channel = self.channel().await.map_err(Status::from)?;
        let interceptor = self.interceptor().map_err(Status::from)?;
        Ok(FirestoreAdminClient::with_interceptor(channel, interceptor))
    }

    async fn connection_is_stale(&self, last_connected: SystemTime) -> bool {
        self.cert_material_rotated(last_connected).await
    }

    fn connection_url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl ConnectionProvider<OperationsClientT> for AdminTlsConnectionProvider {
    async fn provide_connection(&self) -> Result<OperationsClientT, Status> {
        let channel = self.channel().await.map_err(Status::from)?;
        let interceptor = self.interceptor().map_err(Status::from)?;
        Ok(OperationsClient::with_interceptor(channel, interceptor))
    }

    async fn connection_is_stale(&self, last_connected: SystemTime) -> bool {
        self.cert_material_rotated(last_connected).await
    }

    fn connection_url(&self) -> &str {
        &self.url
    }
}
