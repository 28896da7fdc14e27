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
use rpc::protos::firestore_admin::index;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Create a composite index")]
    Create(CreateIndex),
    #[clap(about = "List composite indexes in a collection group")]
    List(ListIndexes),
    #[clap(about = "Display composite index information")]
    Show(ShowIndex),
    #[clap(about = "Delete a composite index")]
    Delete(DeleteIndex),
}

#[derive(Parser, Debug)]
pub struct CreateIndex {
    #[clap(
        help = "Parent collection group, projects/{project}/databases/{database}/collectionGroups/{collection}"
    )]
    pub parent: String,

    #[clap(
        short,
        long = "field",
        required = true,
        value_parser = parse_index_field,
        help = "Field to index, as <field_path>:<asc|desc|contains>; repeat for composite indexes"
    )]
    pub fields: Vec<IndexFieldArg>,

    #[clap(
        long,
        action,
        help = "Create with collection-group query scope instead of collection scope"
    )]
    pub collection_group_scope: bool,
}

#[derive(Parser, Debug)]
pub struct ListIndexes {
    #[clap(
        help = "Parent collection group, projects/{project}/databases/{database}/collectionGroups/{collection}"
    )]
    pub parent: String,

    #[clap(short, long, help = "Filter expression applied to list results")]
    pub filter: Option<String>,

    #[clap(long, help = "Number of results per page")]
    pub page_size: Option<i32>,

    #[clap(long, help = "Page token from a previous list call")]
    pub page_token: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ShowIndex {
    #[clap(help = "Full index resource name")]
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct DeleteIndex {
    #[clap(help = "Full index resource name")]
    pub name: String,
}

/// One `--field` argument: which field path to index and how.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexFieldArg {
    pub field_path: String,
    pub mode: IndexFieldMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexFieldMode {
    Ascending,
    Descending,
    Contains,
}

pub(crate) fn parse_index_field(raw: &str) -> Result<IndexFieldArg, String> {
    // Field paths may contain dots (`address.city`) but never colons, so the
    // rightmost colon splits path from mode.
    let Some((field_path, mode)) = raw.rsplit_once(':') else {
        return Err(format!(
            "expected <field_path>:<asc|desc|contains>, got {raw}"
        ));
    };
    if field_path.is_empty() {
        return Err(format!("missing field path in {raw}"));
    }
    let mode = match mode {
        "asc" => IndexFieldMode::Ascending,
        "desc" => IndexFieldMode::Descending,
        "contains" => IndexFieldMode::Contains,
        other => {
            return Err(format!(
                "unknown index mode {other}, expected asc, desc or contains"
            ));
        }
    };
    Ok(IndexFieldArg {
        field_path: field_path.to_string(),
        mode,
    })
}

impl From<&IndexFieldArg> for index::IndexField {
    fn from(arg: &IndexFieldArg) -> Self {
        let value_mode = match arg.mode {
            IndexFieldMode::Ascending => index::index_field::ValueMode::Order(
                index::index_field::Order::Ascending as i32,
            ),
            IndexFieldMode::Descending => index::index_field::ValueMode::Order(
                index::index_field::Order::Descending as i32,
            ),
            IndexFieldMode::Contains => index::index_field::ValueMode::ArrayConfig(
                index::index_field::ArrayConfig::Contains as i32,
            ),
        };
        index::IndexField {
            field_path: arg.field_path.clone(),
            value_mode: Some(value_mode),
        }
    }
}
