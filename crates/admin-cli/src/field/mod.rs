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

use rpc::admin_cli::{CliError, CliResult};
use rpc::protos::firestore_admin::{
    Field, Index, ListFieldsRequest, UpdateFieldRequest, field, index,
};
use rpc::resource_names::parse_field_path;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::output;

impl Dispatch for args::Cmd {
    async fn dispatch(self, ctx: RuntimeContext) -> CliResult<()> {
        match self {
            args::Cmd::Show(cmd) => show(cmd, ctx).await,
            args::Cmd::List(cmd) => list(cmd, ctx).await,
            args::Cmd::Update(cmd) => update(cmd, ctx).await,
        }
    }
}

async fn show(cmd: args::ShowField, ctx: RuntimeContext) -> CliResult<()> {
    let field = ctx.api.admin.get_field(cmd.name).await?;
    println!("{field:#?}");
    Ok(())
}

async fn list(cmd: args::ListFields, ctx: RuntimeContext) -> CliResult<()> {
    let response = ctx
        .api
        .admin
        .list_fields(ListFieldsRequest {
            parent: cmd.parent,
            filter: cmd.filter,
            page_size: cmd.page_size.unwrap_or_default(),
            page_token: cmd.page_token.unwrap_or_default(),
        })
        .await?;
    output::emit_list(
        ctx.config.format,
        output::field_table(&response.fields),
        &response,
    );
    if !response.next_page_token.is_empty() {
        println!("Next page token: {}", response.next_page_token);
    }
    Ok(())
}

async fn update(cmd: args::UpdateField, ctx: RuntimeContext) -> CliResult<()> {
    if !(cmd.ascending || cmd.descending || cmd.contains || cmd.clear) {
        return Err(CliError::InvalidArguments(
            "pass at least one of --ascending, --descending, --contains or --clear".to_string(),
        ));
    }
    let (_, _, _, field_path) = parse_field_path(&cmd.name)?;

    let mut indexes = Vec::new();
    if cmd.ascending {
        indexes.push(single_field_index(
            &field_path,
            index::index_field::ValueMode::Order(index::index_field::Order::Ascending as i32),
        ));
    }
    if cmd.descending {
        indexes.push(single_field_index(
            &field_path,
            index::index_field::ValueMode::Order(index::index_field::Order::Descending as i32),
        ));
    }
    if cmd.contains {
        indexes.push(single_field_index(
            &field_path,
            index::index_field::ValueMode::ArrayConfig(
                index::index_field::ArrayConfig::Contains as i32,
            ),
        ));
    }
    // --clear leaves the list empty: an explicit index config with no
    // indexes removes them all.

    let operation = ctx
        .api
        .admin
        .update_field(UpdateFieldRequest {
            field: Some(Field {
                name: cmd.name,
                index_config: Some(field::IndexConfig {
                    indexes,
                    ..Default::default()
                }),
            }),
            update_mask: Some(prost_types::FieldMask {
                paths: vec!["index_config".to_string()],
            }),
        })
        .await?;
    println!("Field update started; operation {}", operation.name);
    Ok(())
}

fn single_field_index(field_path: &str, value_mode: index::index_field::ValueMode) -> Index {
    Index {
        query_scope: index::QueryScope::Collection as i32,
        fields: vec![index::IndexField {
            field_path: field_path.to_string(),
            value_mode: Some(value_mode),
        }],
        ..Default::default()
    }
}
