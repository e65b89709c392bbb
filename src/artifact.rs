// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! JSON input and output documents
//!
//! Output is written all-or-nothing: the document is serialized in memory,
//! written to `<path>.tmp`, then renamed over the destination. A reader
//! never sees a half-written airdrop list.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, Instrument};

use crate::batch::{AmountRecord, ConvertedRecord};
use crate::errors::ArtifactError;
use crate::tracing::spans;

/// Load the input list of `(address, value)` records
///
/// # Errors
///
/// - [`ArtifactError::Io`] if the file cannot be read
/// - [`ArtifactError::Serialization`] if it is not a JSON array of records
///   with a string `address` and a string or number `value`
pub async fn load_records(path: impl AsRef<Path>) -> Result<Vec<AmountRecord>, ArtifactError> {
    let path = path.as_ref();
    read_records(path).instrument(spans::load_records(path)).await
}

async fn read_records(path: &Path) -> Result<Vec<AmountRecord>, ArtifactError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ArtifactError::io(
            path.display().to_string(),
            format!("Failed to read input records: {e}"),
            e,
        )
    })?;

    let records: Vec<AmountRecord> = serde_json::from_slice(&bytes).map_err(|e| {
        ArtifactError::serialization(
            path.display().to_string(),
            format!("Input is not a list of address/value records: {e}"),
            e,
        )
    })?;

    debug!(records = records.len(), "Loaded input records");

    Ok(records)
}

/// Serialize `value` as pretty-printed JSON and write it atomically
///
/// Parent directories are created as needed. On error the destination is
/// left as it was.
pub async fn write_json_atomic<T>(path: impl AsRef<Path>, value: &T) -> Result<(), ArtifactError>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    // Serialize first so a serialization failure never touches the disk
    let json = serde_json::to_vec_pretty(value).map_err(|e| {
        ArtifactError::serialization(
            path.display().to_string(),
            format!("Failed to serialize artifact: {e}"),
            e,
        )
    })?;

    persist(path, &json)
        .instrument(spans::write_artifact(path))
        .await
}

async fn persist(path: &Path, json: &[u8]) -> Result<(), ArtifactError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ArtifactError::io(
                    parent.display().to_string(),
                    format!("Failed to create output directory: {e}. Ensure you have write permissions."),
                    e,
                )
            })?;
        }
    }

    let temp_path = path.with_extension("tmp");

    tokio::fs::write(&temp_path, json).await.map_err(|e| {
        ArtifactError::io(
            temp_path.display().to_string(),
            format!("Failed to write artifact: {e}. Ensure the parent directory is writable."),
            e,
        )
    })?;

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(ArtifactError::io(
            path.display().to_string(),
            format!(
                "Failed to rename artifact from '{}': {e}",
                temp_path.display()
            ),
            e,
        ));
    }

    debug!(bytes = json.len(), "Wrote artifact");

    Ok(())
}

/// Write the converted airdrop list
pub async fn write_converted_records(
    path: impl AsRef<Path>,
    records: &[ConvertedRecord],
) -> Result<(), ArtifactError> {
    let path = path.as_ref();
    write_json_atomic(path, records).await?;
    info!(
        path = %path.display(),
        records = records.len(),
        "Saved converted airdrop list"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tokens::TokenAmount;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_load_shapes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");

        let records = vec![ConvertedRecord {
            address: "0xA".to_string(),
            value: TokenAmount::from(42u64),
        }];
        write_converted_records(&path, &records).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"address\": \"0xA\",\n    \"value\": \"42\"\n  }\n]"
        );
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("out.json");
        write_json_atomic(&path, &Vec::<ConvertedRecord>::new()).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_write_into_existing_dir_replaces_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();

        write_json_atomic(&path, &vec!["first"]).await.unwrap();
        write_json_atomic(&path, &vec!["second"]).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\n  \"second\"\n]");
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_records(temp_dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_malformed_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, r#"{"address": "0xA"}"#).unwrap();
        let err = load_records(&path).await.unwrap_err();
        assert!(matches!(err, ArtifactError::Serialization { .. }));
    }
}
