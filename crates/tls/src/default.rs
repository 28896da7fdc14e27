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

/// The public Firestore Admin API host
pub const SERVICE_HOST: &str = "firestore.googleapis.com";

pub fn default_service_host() -> &'static str {
    SERVICE_HOST
}

/// The mutual-TLS variant of the service host
pub const MTLS_SERVICE_HOST: &str = "firestore.mtls.googleapis.com";

pub fn default_mtls_service_host() -> &'static str {
    MTLS_SERVICE_HOST
}

/// gRPC port for the Google API front ends
pub const SERVICE_PORT: u16 = 443;

pub fn default_service_port() -> u16 {
    SERVICE_PORT
}
