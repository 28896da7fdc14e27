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

//! Shared pieces for CLI frontends of this crate.

use clap::ValueEnum;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("RPC failed: {0}")]
    Rpc(#[from] tonic::Status),
    #[error(transparent)]
    Transport(#[from] crate::errors::TransportError),
    #[error(transparent)]
    ResourceName(#[from] crate::resource_names::ResourceNameError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// How list results are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Column-aligned tables
    #[default]
    Table,
    /// Raw debug formatting, useful for piping into diffs or bug reports
    Debug,
}
