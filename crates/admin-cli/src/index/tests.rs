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
use clap::{CommandFactory, Parser};
use rpc::protos::firestore_admin::index;

use super::args::{IndexFieldMode, parse_index_field};
use crate::{Command, Options};

#[test]
fn cli_definition_is_consistent() {
    Options::command().debug_assert();
}

#[test]
fn index_field_arguments_parse() {
    let arg = parse_index_field("author:asc").unwrap();
    assert_eq!(arg.field_path, "author");
    assert_eq!(arg.mode, IndexFieldMode::Ascending);

    let arg = parse_index_field("address.city:desc").unwrap();
    assert_eq!(arg.field_path, "address.city");
    assert_eq!(arg.mode, IndexFieldMode::Descending);

    let arg = parse_index_field("tags:contains").unwrap();
    assert_eq!(arg.mode, IndexFieldMode::Contains);

    assert!(parse_index_field("author").is_err());
    assert!(parse_index_field(":asc").is_err());
    assert!(parse_index_field("author:sideways").is_err());
}

#[test]
fn index_field_arguments_map_to_proto_value_modes() {
    let field: index::IndexField = (&parse_index_field("tags:contains").unwrap()).into();
    assert_eq!(
        field.value_mode,
        Some(index::index_field::ValueMode::ArrayConfig(
            index::index_field::ArrayConfig::Contains as i32
        ))
    );
}

#[test]
fn create_command_parses_repeated_fields() {
    let options = Options::try_parse_from([
        "firestore-admin-cli",
        "index",
        "create",
        "projects/p/databases/d/collectionGroups/posts",
        "--field",
        "author:asc",
        "--field",
        "published:desc",
        "--collection-group-scope",
    ])
    .unwrap();

    let Command::Index(super::args::Cmd::Create(cmd)) = options.command else {
        panic!("expected index create command");
    };
    assert_eq!(cmd.parent, "projects/p/databases/d/collectionGroups/posts");
    assert_eq!(cmd.fields.len(), 2);
    assert!(cmd.collection_group_scope);
}
