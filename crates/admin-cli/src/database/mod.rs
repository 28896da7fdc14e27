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

pub(crate) mod args;

use rpc::admin_cli::CliResult;
use rpc::protos::firestore_admin::{ExportDocumentsRequest, ImportDocumentsRequest};

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for args::Cmd {
    async fn dispatch(self, ctx: RuntimeContext) -> CliResult<()> {
        match self {
            args::Cmd::Export(cmd) => export(cmd, ctx).await,
            args::Cmd::Import(cmd) => import(cmd, ctx).await,
        }
    }
}

async fn export(cmd: args::ExportDocuments, ctx: RuntimeContext) -> CliResult<()> {
    let operation = ctx
        .api
        .admin
        .export_documents(ExportDocumentsRequest {
            name: cmd.database,
            collection_ids: cmd.collections,
            output_uri_prefix: cmd.output_uri_prefix,
        })
        .await?;
    println!("Export started; operation {}", operation.name);
    println!("Poll it with: firestore-admin-cli operation show {}", operation.name);
    Ok(())
}

async fn import(cmd: args::ImportDocuments, ctx: RuntimeContext) -> CliResult<()> {
    let operation = ctx
        .api
        .admin
        .import_documents(ImportDocumentsRequest {
            name: cmd.database,
            collection_ids: cmd.collections,
            input_uri_prefix: cmd.input_uri_prefix,
        })
        .await?;
    println!("Import started; operation {}", operation.name);
    println!("Poll it with: firestore-admin-cli operation show {}", operation.name);
    Ok(())
}
