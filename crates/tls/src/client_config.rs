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
use std::fs;
use std::sync::Arc;

use tonic::transport::{Certificate, ClientTlsConfig, Identity};

#[derive(thiserror::Error, Debug)]
pub enum TlsError {
    #[error("Could not read root CA {path}: {source}")]
    ReadRootCa {
        path: String,
        source: std::io::Error,
    },
    #[error("Could not read client certificate {path}: {source}")]
    ReadClientCert {
        path: String,
        source: std::io::Error,
    },
    #[error("Could not read client key {path}: {source}")]
    ReadClientKey {
        path: String,
        source: std::io::Error,
    },
    #[error("Client certificate callback failed: {0}")]
    CertCallback(String),
}

/// A client certificate and key pair on disk, used to authenticate this
/// client to the server over mutual TLS.
#[derive(Clone, Debug)]
pub struct ClientCert {
    pub cert_path: String,
    pub key_path: String,
}

impl ClientCert {
    pub fn new(cert_path: impl Into<String>, key_path: impl Into<String>) -> Self {
        Self {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
        }
    }

    pub fn identity(&self) -> Result<Identity, TlsError> {
        let cert = fs::read(&self.cert_path).map_err(|source| TlsError::ReadClientCert {
            path: self.cert_path.clone(),
            source,
        })?;
        let key = fs::read(&self.key_path).map_err(|source| TlsError::ReadClientKey {
            path: self.key_path.clone(),
            source,
        })?;
        Ok(Identity::from_pem(cert, key))
    }
}

/// PEM-encoded certificate chain and private key bytes.
pub type PemPair = (Vec<u8>, Vec<u8>);

/// Where the client certificate for mutual TLS comes from: a cert/key pair on
/// the filesystem, or a callback producing PEM bytes (for callers that hold
/// certificate material in memory or fetch it from a secret store).
#[derive(Clone)]
pub enum CertSource {
    Files(ClientCert),
    Callback(Arc<dyn Fn() -> Result<PemPair, TlsError> + Send + Sync>),
}

impl CertSource {
    pub fn identity(&self) -> Result<Identity, TlsError> {
        match self {
            CertSource::Files(cert) => cert.identity(),
            CertSource::Callback(source) => {
                let (cert, key) = source()?;
                Ok(Identity::from_pem(cert, key))
            }
        }
    }

    /// The on-disk cert pair, when this source is file-backed. Callback
    /// sources have no paths to watch for rotation.
    pub fn client_cert(&self) -> Option<&ClientCert> {
        match self {
            CertSource::Files(cert) => Some(cert),
            CertSource::Callback(_) => None,
        }
    }
}

impl fmt::Debug for CertSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertSource::Files(cert) => f.debug_tuple("Files").field(cert).finish(),
            CertSource::Callback(_) => f.debug_tuple("Callback").finish(),
        }
    }
}

/// Build the client TLS configuration: the explicitly configured root CA when
/// one is given, the platform trust store otherwise, plus the client identity
/// when mutual TLS is in play.
pub fn tls_config(
    root_ca: Option<&str>,
    identity: Option<Identity>,
) -> Result<ClientTlsConfig, TlsError> {
    let mut tls = match root_ca {
        Some(path) => {
            let pem = fs::read(path).map_err(|source| TlsError::ReadRootCa {
                path: path.to_string(),
                source,
            })?;
            ClientTlsConfig::new().ca_certificate(Certificate::from_pem(pem))
        }
        None => ClientTlsConfig::new().with_native_roots(),
    };
    if let Some(identity) = identity {
        tls = tls.identity(identity);
    }
    Ok(tls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cert_file_is_reported_with_its_path() {
        let cert = ClientCert::new("/nonexistent/client.pem", "/nonexistent/client.key");
        let err = cert.identity().unwrap_err();
        assert!(matches!(err, TlsError::ReadClientCert { .. }));
        assert!(err.to_string().contains("/nonexistent/client.pem"));
    }

    #[test]
    fn callback_source_feeds_identity() {
        let source = CertSource::Callback(Arc::new(|| {
            Ok((b"cert pem".to_vec(), b"key pem".to_vec()))
        }));
        assert!(source.identity().is_ok());
        assert!(source.client_cert().is_none());
    }

    #[test]
    fn callback_errors_propagate() {
        let source = CertSource::Callback(Arc::new(|| {
            Err(TlsError::CertCallback("store unavailable".to_string()))
        }));
        assert!(source.identity().is_err());
    }
}
