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

//! gRPC plumbing for the Google Cloud Firestore Admin v1 API.
//!
//! The `protos` module carries the message types and generated service code;
//! `admin_tls_client` assembles authenticated channels (TLS, mutual TLS,
//! bearer tokens); the wrapper clients cache one connection per transport and
//! expose one ergonomic method per RPC. Methods that kick off background work
//! on the server return a `google.longrunning.Operation`, polled through the
//! [`OperationsApiClient`] sharing the same channel.

pub mod admin_tls_client;
pub mod auth;
pub mod connection;
pub mod errors;
pub mod firestore_admin_client;
pub mod protos;
pub mod resource_names;

#[cfg(feature = "cli")]
pub mod admin_cli;

#[cfg(test)]
mod tests;

pub use admin_tls_client::{
    AdminClientConfig, AdminTlsClient, ApiConfig, FirestoreAdminClientT, OperationsClientT,
    RetryConfig,
};
pub use firestore_admin_client::FirestoreAdminApi;
pub use protos::firestore_admin_api_client::FirestoreAdminApiClient;
pub use protos::operations_api_client::OperationsApiClient;
