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
use std::sync::Arc;
use std::time::Duration;

use admin_tls::client_config::{CertSource, ClientCert};
use rpc::admin_cli::OutputFormat;
use rpc::auth::StaticTokenSource;
use rpc::{AdminClientConfig, ApiConfig, FirestoreAdminApi, RetryConfig};

use crate::Options;

// RuntimeContext is context passed to all subcommand
// dispatch handlers. This is built at the beginning of
// runtime and then passed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub api: FirestoreAdminApi,
    pub config: RuntimeConfig,
}

// RuntimeConfig contains runtime configuration parameters extracted
// from CLI options. This should contain the entirety of any options
// that need to be leveraged by any downstream command handler.
pub struct RuntimeConfig {
    pub format: OutputFormat,
}

impl RuntimeContext {
    /// Assemble the API clients from CLI options. No connection is made
    /// here; that happens lazily on the first RPC.
    pub fn build(options: &Options) -> Result<Self, eyre::Report> {
        let cert_source = match (&options.client_cert_path, &options.client_key_path) {
            (Some(cert_path), Some(key_path)) => Some(CertSource::Files(ClientCert::new(
                cert_path.clone(),
                key_path.clone(),
            ))),
            (None, None) => None,
            _ => eyre::bail!("--client-cert-path and --client-key-path must be given together"),
        };

        let mut client_config = AdminClientConfig::new(options.root_ca_path.clone(), cert_source);
        if let Some(token) = &options.access_token {
            client_config =
                client_config.with_token_source(Arc::new(StaticTokenSource::new(token.clone())));
        }
        if let Some(token_file) = &options.token_file {
            client_config = client_config.with_token_file(token_file.clone());
        }
        if let Some(mtls_endpoint) = &options.mtls_endpoint {
            client_config = client_config.with_mtls_endpoint(mtls_endpoint.clone());
        }
        // Surface ambiguous credential configuration now instead of on the
        // first RPC.
        client_config.resolve_token_source()?;

        let api_config = ApiConfig::new(&options.endpoint, &client_config).with_retry_config(
            RetryConfig {
                retries: options.connect_retries,
                interval: Duration::from_secs(options.connect_retry_interval_secs),
            },
        );

        tracing::debug!(endpoint = %options.endpoint, "assembled Firestore Admin API clients");
        Ok(Self {
            api: FirestoreAdminApi::new(&api_config),
            config: RuntimeConfig {
                format: options.format,
            },
        })
    }
}
