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

use clap::Parser;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "List operations under a database")]
    List(ListOperations),
    #[clap(about = "Display the current state of an operation")]
    Show(ShowOperation),
    #[clap(about = "Ask the server to cancel an operation")]
    Cancel(CancelOperation),
    #[clap(about = "Forget a finished operation")]
    Delete(DeleteOperation),
    #[clap(about = "Block until an operation finishes or the wait times out")]
    Wait(WaitOperation),
}

#[derive(Parser, Debug)]
pub struct ListOperations {
    #[clap(help = "Parent database, projects/{project}/databases/{database}")]
    pub name: String,

    #[clap(short, long, help = "Filter expression applied to list results")]
    pub filter: Option<String>,

    #[clap(long, help = "Number of results per page")]
    pub page_size: Option<i32>,

    #[clap(long, help = "Page token from a previous list call")]
    pub page_token: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ShowOperation {
    #[clap(help = "Full operation resource name")]
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct CancelOperation {
    #[clap(help = "Full operation resource name")]
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct DeleteOperation {
    #[clap(help = "Full operation resource name")]
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct WaitOperation {
    #[clap(help = "Full operation resource name")]
    pub name: String,

    #[clap(long, help = "Give up after this many seconds; server default otherwise")]
    pub timeout_secs: Option<i64>,
}
