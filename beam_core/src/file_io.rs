//! # File I/O Module
//!
//! Reads and writes [`BeamCase`] files:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility on load
//! - **Case validation**: A loaded case is checked before it is returned
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_case, save_case};
//! use std::path::Path;
//!
//! let path = Path::new("panel.beam.json");
//! let mut case = load_case(path)?;
//! case.load = 7.5;
//! case.touch();
//! save_case(&case, path)?;
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::case::{BeamCase, SCHEMA_VERSION};
use crate::errors::{CalcError, CalcResult};

/// Temp file used while saving `path`
fn tmp_path_for(path: &Path) -> PathBuf {
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    path.with_extension(extension)
}

/// Save a case with atomic write semantics.
///
/// The JSON is written and synced to a `.tmp` sibling which is then renamed
/// over `path`. On any failure after the temp file exists it is removed, and
/// `path` is left as it was.
pub fn save_case(case: &BeamCase, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(case)?;
    let tmp_path = tmp_path_for(path);

    let staged = write_synced(&tmp_path, json.as_bytes()).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|e| ("rename to final", path, e))
    });

    if let Err((operation, failed_path, e)) = staged {
        let reason = e.to_string();
        let failed_path = failed_path.display().to_string();
        if tmp_path.exists() {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                tracing::warn!(path = %tmp_path.display(), %cleanup, "left temp file behind");
            }
        }
        return Err(CalcError::file_error(operation, failed_path, reason));
    }

    tracing::info!(path = %path.display(), id = %case.meta.id, "saved case");
    Ok(())
}

type StageError<'a> = (&'static str, &'a Path, std::io::Error);

fn write_synced<'a>(tmp_path: &'a Path, bytes: &[u8]) -> Result<(), StageError<'a>> {
    let mut file = File::create(tmp_path).map_err(|e| ("create temp file", tmp_path, e))?;
    file.write_all(bytes).map_err(|e| ("write temp file", tmp_path, e))?;
    file.sync_all().map_err(|e| ("sync temp file", tmp_path, e))
}

/// Load and validate a case.
///
/// # Errors
///
/// * `FileError` - I/O failure
/// * `SerializationError` - Invalid JSON
/// * `VersionMismatch` - File written by an incompatible schema
/// * `InvalidArgument` - Spans, load or settings unusable
pub fn load_case(path: &Path) -> CalcResult<BeamCase> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let case: BeamCase =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&case.meta.version)?;
    case.validate()?;

    tracing::debug!(path = %path.display(), label = %case.meta.label, "loaded case");
    Ok(case)
}

/// Major version must match; in 0.x a newer minor is also rejected.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .map(|p| p.parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| mismatch())?;
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([file_major, ..], [major, ..]) if file_major != major => Err(mismatch()),
        ([0, file_minor, ..], [0, minor, ..]) if file_minor > minor => Err(mismatch()),
        ([_, ..], [_, ..]) => Ok(()),
        _ => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{AnalysisCondition, Beam};
    use crate::materials::Material;
    use std::env::temp_dir;
    use std::sync::Arc;

    fn temp_case_path(name: &str) -> PathBuf {
        temp_dir().join(format!("beam_core_test_{}.beam.json", name))
    }

    fn case() -> BeamCase {
        let material = Arc::new(Material::new("CLT", [("EI", 1.0e9), ("j2", 1.0)]));
        let beam = Beam::new(4.0, 6.0, material).unwrap();
        BeamCase::new("B-1", beam, 5.0, AnalysisCondition::TwoSpanUnequal)
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(
            tmp_path_for(Path::new("/cases/panel.beam.json")),
            Path::new("/cases/panel.beam.json.tmp")
        );
        assert_eq!(tmp_path_for(Path::new("panel")), Path::new("panel.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_case_path("roundtrip");
        let original = case();
        save_case(&original, &path).unwrap();

        let loaded = load_case(&path).unwrap();
        assert_eq!(loaded.meta.id, original.meta.id);
        assert_eq!(loaded.meta.label, "B-1");
        assert_eq!(loaded.beam, original.beam);
        assert_eq!(loaded.condition, AnalysisCondition::TwoSpanUnequal);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_case_path("atomic");
        save_case(&case(), &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        // A directory in the way makes the final rename fail
        let path = temp_case_path("blocked");
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(path.join("occupied")).unwrap();

        let err = save_case(&case(), &path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!tmp_path_for(&path).exists());
        assert!(path.join("occupied").is_dir());

        let _ = fs::remove_dir_all(&path);
    }

    #[test]
    fn test_save_into_missing_directory() {
        let path = Path::new("/nonexistent/dir/case.beam.json");
        let err = save_case(&case(), path).unwrap_err();
        assert!(matches!(
            err,
            CalcError::FileError { ref operation, .. } if operation == "create temp file"
        ));
        assert!(!tmp_path_for(path).exists());
    }

    #[test]
    fn test_load_rejects_invalid_case() {
        let path = temp_case_path("invalid");
        let mut bad = case();
        bad.beam.secondary_span = 0.0;
        save_case(&bad, &path).unwrap();

        assert!(matches!(
            load_case(&path),
            Err(CalcError::InvalidArgument { .. })
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_case(Path::new("/nonexistent/dir/case.beam.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("banana").is_err());
    }
}
