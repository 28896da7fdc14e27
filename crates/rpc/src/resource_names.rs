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

//! Composing and splitting the `projects/{project}/databases/{database}/...`
//! resource names every Admin API request carries.

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResourceNameError {
    #[error("Database name {0} is not valid")]
    InvalidDatabaseName(String),
    #[error("Collection group name {0} is not valid")]
    InvalidCollectionGroupName(String),
    #[error("Index name {0} is not valid")]
    InvalidIndexName(String),
    #[error("Field name {0} is not valid")]
    InvalidFieldName(String),
}

pub fn database_path(project: &str, database: &str) -> String {
    format!("projects/{project}/databases/{database}")
}

pub fn collection_group_path(project: &str, database: &str, collection: &str) -> String {
    format!("projects/{project}/databases/{database}/collectionGroups/{collection}")
}

pub fn index_path(project: &str, database: &str, collection: &str, index: &str) -> String {
    format!(
        "projects/{project}/databases/{database}/collectionGroups/{collection}/indexes/{index}"
    )
}

pub fn field_path(project: &str, database: &str, collection: &str, field: &str) -> String {
    format!(
        "projects/{project}/databases/{database}/collectionGroups/{collection}/fields/{field}"
    )
}

/// Split a database name into `(project, database)`.
pub fn parse_database_path(name: &str) -> Result<(String, String), ResourceNameError> {
    match name.split('/').collect::<Vec<_>>().as_slice() {
        ["projects", project, "databases", database]
            if !project.is_empty() && !database.is_empty() =>
        {
            Ok((project.to_string(), database.to_string()))
        }
        _ => Err(ResourceNameError::InvalidDatabaseName(name.to_string())),
    }
}

/// Split a collection group name into `(project, database, collection)`.
pub fn parse_collection_group_path(
    name: &str,
) -> Result<(String, String, String), ResourceNameError> {
    match name.split('/').collect::<Vec<_>>().as_slice() {
        ["projects", project, "databases", database, "collectionGroups", collection]
            if !project.is_empty() && !database.is_empty() && !collection.is_empty() =>
        {
            Ok((
                project.to_string(),
                database.to_string(),
                collection.to_string(),
            ))
        }
        _ => Err(ResourceNameError::InvalidCollectionGroupName(
            name.to_string(),
        )),
    }
}

/// Split an index name into `(project, database, collection, index)`.
pub fn parse_index_path(
    name: &str,
) -> Result<(String, String, String, String), ResourceNameError> {
    match name.split('/').collect::<Vec<_>>().as_slice() {
        ["projects", project, "databases", database, "collectionGroups", collection, "indexes", index]
            if !project.is_empty()
                && !database.is_empty()
                && !collection.is_empty()
                && !index.is_empty() =>
        {
            Ok((
                project.to_string(),
                database.to_string(),
                collection.to_string(),
                index.to_string(),
            ))
        }
        _ => Err(ResourceNameError::InvalidIndexName(name.to_string())),
    }
}

/// Split a field name into `(project, database, collection, field)`.
///
/// Field paths may themselves contain `.` separators (`address.city`), but
/// never `/`, so a fixed-width split is sound.
pub fn parse_field_path(
    name: &str,
) -> Result<(String, String, String, String), ResourceNameError> {
    match name.split('/').collect::<Vec<_>>().as_slice() {
        ["projects", project, "databases", database, "collectionGroups", collection, "fields", field]
            if !project.is_empty()
                && !database.is_empty()
                && !collection.is_empty()
                && !field.is_empty() =>
        {
            Ok((
                project.to_string(),
                database.to_string(),
                collection.to_string(),
                field.to_string(),
            ))
        }
        _ => Err(ResourceNameError::InvalidFieldName(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        let name = index_path("my-proj", "(default)", "posts", "idx-1");
        assert_eq!(
            name,
            "projects/my-proj/databases/(default)/collectionGroups/posts/indexes/idx-1"
        );
        assert_eq!(
            parse_index_path(&name).unwrap(),
            (
                "my-proj".to_string(),
                "(default)".to_string(),
                "posts".to_string(),
                "idx-1".to_string()
            )
        );
    }

    #[test]
    fn field_paths_keep_dotted_segments() {
        let name = field_path("p", "d", "posts", "address.city");
        let (_, _, _, field) = parse_field_path(&name).unwrap();
        assert_eq!(field, "address.city");
    }

    #[test]
    fn default_field_wildcard_is_accepted() {
        let name = field_path("p", "d", "__default__", "*");
        assert!(parse_field_path(&name).is_ok());
    }

    #[test]
    fn malformed_names_are_rejected() {
        assert_eq!(
            parse_database_path("projects/p/database/d"),
            Err(ResourceNameError::InvalidDatabaseName(
                "projects/p/database/d".to_string()
            ))
        );
        assert!(parse_collection_group_path("projects/p/databases/d").is_err());
        assert!(parse_index_path("projects/p/databases/d/collectionGroups/c/indexes/").is_err());
        assert!(parse_field_path("").is_err());
    }
}
