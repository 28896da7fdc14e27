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
#[cfg(test)]
mod tests;

use rpc::admin_cli::CliResult;
use rpc::protos::firestore_admin::{CreateIndexRequest, Index, ListIndexesRequest, index};

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::output;

impl Dispatch for args::Cmd {
    async fn dispatch(self, ctx: RuntimeContext) -> CliResult<()> {
        match self {
            args::Cmd::Create(cmd) => create(cmd, ctx).await,
            args::Cmd::List(cmd) => list(cmd, ctx).await,
            args::Cmd::Show(cmd) => show(cmd, ctx).await,
            args::Cmd::Delete(cmd) => delete(cmd, ctx).await,
        }
    }
}

async fn create(cmd: args::CreateIndex, ctx: RuntimeContext) -> CliResult<()> {
    let query_scope = if cmd.collection_group_scope {
        index::QueryScope::CollectionGroup
    } else {
        index::QueryScope::Collection
    };
    let operation = ctx
        .api
        .admin
        .create_index(CreateIndexRequest {
            parent: cmd.parent,
            index: Some(Index {
                query_scope: query_scope as i32,
                fields: cmd.fields.iter().map(Into::into).collect(),
                ..Default::default()
            }),
        })
        .await?;
    println!("Index creation started; operation {}", operation.name);
    Ok(())
}

async fn list(cmd: args::ListIndexes, ctx: RuntimeContext) -> CliResult<()> {
    let response = ctx
        .api
        .admin
        .list_indexes(ListIndexesRequest {
            parent: cmd.parent,
            filter: cmd.filter.unwrap_or_default(),
            page_size: cmd.page_size.unwrap_or_default(),
            page_token: cmd.page_token.unwrap_or_default(),
        })
        .await?;
    output::emit_list(
        ctx.config.format,
        output::index_table(&response.indexes),
        &response,
    );
    if !response.next_page_token.is_empty() {
        println!("Next page token: {}", response.next_page_token);
    }
    Ok(())
}

async fn show(cmd: args::ShowIndex, ctx: RuntimeContext) -> CliResult<()> {
    let index = ctx.api.admin.get_index(cmd.name).await?;
    println!("{index:#?}");
    Ok(())
}

async fn delete(cmd: args::DeleteIndex, ctx: RuntimeContext) -> CliResult<()> {
    ctx.api.admin.delete_index(cmd.name.clone()).await?;
    println!("Deleted index {}", cmd.name);
    Ok(())
}
