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
    #[clap(about = "Display field index configuration")]
    Show(ShowField),
    #[clap(about = "List fields with explicitly overridden index configuration")]
    List(ListFields),
    #[clap(about = "Update the single-field index configuration of a field")]
    Update(UpdateField),
}

#[derive(Parser, Debug)]
pub struct ShowField {
    #[clap(
        help = "Full field resource name, projects/{project}/databases/{database}/collectionGroups/{collection}/fields/{field}"
    )]
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct ListFields {
    #[clap(
        help = "Parent collection group, projects/{project}/databases/{database}/collectionGroups/{collection}"
    )]
    pub parent: String,

    #[clap(
        short,
        long,
        default_value = "indexConfig.usesAncestorConfig:false",
        help = "Filter expression; the service only supports listing explicitly overridden fields"
    )]
    pub filter: String,

    #[clap(long, help = "Number of results per page")]
    pub page_size: Option<i32>,

    #[clap(long, help = "Page token from a previous list call")]
    pub page_token: Option<String>,
}

#[derive(Parser, Debug)]
pub struct UpdateField {
    #[clap(help = "Full field resource name; use collection group __default__ and field * for database defaults")]
    pub name: String,

    #[clap(long, action, help = "Keep an ascending single-field index")]
    pub ascending: bool,

    #[clap(long, action, help = "Keep a descending single-field index")]
    pub descending: bool,

    #[clap(long, action, help = "Keep an array-containment single-field index")]
    pub contains: bool,

    #[clap(
        long,
        action,
        conflicts_with_all = ["ascending", "descending", "contains"],
        help = "Remove all single-field indexes for this field"
    )]
    pub clear: bool,
}
