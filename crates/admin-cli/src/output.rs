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
use std::fmt::Debug;

use prettytable::{Table, row};
use rpc::admin_cli::OutputFormat;
use rpc::protos::firestore_admin::{Field, Index, index};
use rpc::protos::longrunning::Operation;

/// Render a list either as a table or as raw debug output, depending on the
/// configured format.
pub(crate) fn emit_list<T: Debug>(format: OutputFormat, table: Table, raw: &T) {
    match format {
        OutputFormat::Table => {
            table.printstd();
        }
        OutputFormat::Debug => println!("{raw:#?}"),
    }
}

pub(crate) fn index_table(indexes: &[Index]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["NAME", "SCOPE", "STATE", "FIELDS"]);
    for idx in indexes {
        table.add_row(row![
            idx.name,
            index::QueryScope::try_from(idx.query_scope)
                .map(|s| s.as_str_name())
                .unwrap_or("UNKNOWN"),
            index::State::try_from(idx.state)
                .map(|s| s.as_str_name())
                .unwrap_or("UNKNOWN"),
            describe_index_fields(&idx.fields),
        ]);
    }
    table
}

pub(crate) fn field_table(fields: &[Field]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["NAME", "INDEXES", "USES ANCESTOR CONFIG"]);
    for field in fields {
        let (indexes, uses_ancestor) = field
            .index_config
            .as_ref()
            .map(|c| (c.indexes.len(), c.uses_ancestor_config))
            .unwrap_or((0, true));
        table.add_row(row![field.name, indexes, uses_ancestor]);
    }
    table
}

pub(crate) fn operation_table(operations: &[Operation]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["NAME", "DONE"]);
    for operation in operations {
        table.add_row(row![operation.name, operation.done]);
    }
    table
}

fn describe_index_fields(fields: &[index::IndexField]) -> String {
    fields
        .iter()
        .map(|field| {
            let mode = match field.value_mode {
                Some(index::index_field::ValueMode::Order(order)) => {
                    index::index_field::Order::try_from(order)
                        .map(|o| o.as_str_name())
                        .unwrap_or("UNKNOWN")
                }
                Some(index::index_field::ValueMode::ArrayConfig(_)) => "CONTAINS",
                None => "UNSPECIFIED",
            };
            format!("{} {}", field.field_path, mode)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
