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

/// A ConnectionProvider is what the wrapper clients in `protos/` call when
/// they need an actual connection to the service. The wrapper caches whatever
/// this returns until `connection_is_stale` says otherwise, so a provider is
/// consulted once per transport lifetime in the common case.
///
/// The connection type `T` is the service client the wrapper is fronting. It
/// needs to be `Clone` so several callers can hold it at once; tonic channels
/// are cheap to clone and multiplex over one HTTP/2 connection.
#[async_trait::async_trait]
pub trait ConnectionProvider<T: Clone>: Send + Sync + std::fmt::Debug + 'static {
    /// Establish (or hand out) a connected service client.
    async fn provide_connection(&self) -> Result<T, tonic::Status>;

    /// Return true if the connection needs to be recreated before the next
    /// RPC. This is the case when, for instance, the client certificate on the
    /// filesystem has been rewritten since the connection was made (the API
    /// front end will reject a handshake from a revoked cert eventually, so we
    /// roll over proactively).
    async fn connection_is_stale(&self, last_connected: std::time::SystemTime) -> bool;

    /// The server URL behind this provider, for debug/logging purposes.
    fn connection_url(&self) -> &str;
}
