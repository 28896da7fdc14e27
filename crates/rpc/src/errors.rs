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
use tonic::Status;

use crate::auth::AuthError;

/// TransportError enumerates everything that can go wrong while assembling a
/// connection to the Admin API front end, before the first RPC is even sent.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Invalid API endpoint {url}: {source}")]
    InvalidEndpoint {
        url: String,
        source: tonic::transport::Error,
    },
    #[error("Connection to {url} failed: {source}")]
    Connect {
        url: String,
        source: tonic::transport::Error,
    },
    #[error("TLS setup for {url} failed: {source}")]
    TlsSetup {
        url: String,
        source: tonic::transport::Error,
    },
    #[error("Mutual TLS endpoint {0} is configured without a client certificate source")]
    MissingClientCert(String),
    #[error("Both a token source and a token file were configured; supply at most one")]
    DuplicateCredentials,
    #[error(transparent)]
    Tls(#[from] admin_tls::TlsError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<TransportError> for Status {
    fn from(from: TransportError) -> Self {
        tracing::error!("{from}");
        match &from {
            TransportError::Auth(_) => Status::unauthenticated(from.to_string()),
            TransportError::DuplicateCredentials | TransportError::InvalidEndpoint { .. } => {
                Status::invalid_argument(from.to_string())
            }
            _ => Status::unavailable(from.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_class() {
        let status: Status = TransportError::DuplicateCredentials.into();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let status: Status = TransportError::Auth(AuthError::EmptyTokenFile(
            "/run/token".to_string(),
        ))
        .into();
        assert_eq!(status.code(), tonic::Code::Unauthenticated);

        let status: Status =
            TransportError::MissingClientCert("firestore.mtls.googleapis.com".to_string()).into();
        assert_eq!(status.code(), tonic::Code::Unavailable);
    }
}
