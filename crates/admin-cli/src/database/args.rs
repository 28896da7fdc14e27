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
    #[clap(about = "Export documents to Cloud Storage")]
    Export(ExportDocuments),
    #[clap(about = "Import previously exported documents")]
    Import(ImportDocuments),
}

#[derive(Parser, Debug)]
pub struct ExportDocuments {
    #[clap(help = "Database to export, projects/{project}/databases/{database}")]
    pub database: String,

    #[clap(
        long,
        help = "Output URI prefix, gs://BUCKET_NAME[/NAMESPACE_PATH]"
    )]
    pub output_uri_prefix: String,

    #[clap(
        short,
        long = "collection",
        help = "Collection id to export; repeat for several, omit for all"
    )]
    pub collections: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct ImportDocuments {
    #[clap(help = "Database to import into, projects/{project}/databases/{database}")]
    pub database: String,

    #[clap(
        long,
        help = "Input URI prefix; must match the output_uri_prefix of a completed export"
    )]
    pub input_uri_prefix: String,

    #[clap(
        short,
        long = "collection",
        help = "Collection id to import; repeat for several, omit for all included in the export"
    )]
    pub collections: Vec<String>,
}
