pub mod init;
mod schema;

pub use init::run_init;
pub use schema::Dataset;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get the config directory path (~/.config/spk-rank/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("spk-rank"))
}

/// Get the default dataset file path (~/.config/spk-rank/dataset.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("dataset.yaml"))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a dataset from a YAML (or `.json`) file
///
/// # Arguments
///
/// * `path` - Optional path to the dataset. If None, uses the default path (~/.config/spk-rank/dataset.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The contents cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Dataset> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        anyhow::bail!(
            "Dataset file not found at {}. Run `spk-rank init` to create one",
            config_path.display()
        );
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read dataset file at {}", config_path.display()))?;

    let dataset: Dataset = if is_json(&config_path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse dataset: invalid JSON in {}", config_path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse dataset: invalid YAML in {}", config_path.display()))?
    };

    debug!(
        path = %config_path.display(),
        criteria = dataset.criteria.len(),
        candidates = dataset.candidates.len(),
        "loaded dataset"
    );

    Ok(dataset)
}

/// Save a dataset atomically, creating the parent directory if needed.
/// The format follows the file extension, like [`load_config`].
pub fn save_config(path: &Path, dataset: &Dataset) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }
    }

    let content = if is_json(path) {
        serde_json::to_string_pretty(dataset).context("Failed to serialize dataset")?
    } else {
        serde_saphyr::to_string(dataset).context("Failed to serialize dataset")?
    };

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(content.as_bytes())
        .context("Failed to write dataset")?;
    file.commit().context("Failed to save dataset")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_missing_file_errors() {
        let temp_path = env::temp_dir().join("spk_rank_test_missing.yaml");
        let _ = fs::remove_file(&temp_path);

        let err = load_config(Some(temp_path)).unwrap_err();
        assert!(err.to_string().contains("spk-rank init"));
    }

    #[test]
    fn test_save_and_load_yaml_roundtrip() {
        let temp_path = env::temp_dir().join("spk_rank_test_roundtrip.yaml");
        let _ = fs::remove_file(&temp_path);

        let dataset = Dataset::demo();
        save_config(&temp_path, &dataset).unwrap();
        let loaded = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(loaded, dataset);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_save_and_load_json_roundtrip() {
        let temp_path = env::temp_dir().join("spk_rank_test_roundtrip.json");
        let _ = fs::remove_file(&temp_path);

        let dataset = Dataset::demo();
        save_config(&temp_path, &dataset).unwrap();
        let raw = fs::read_to_string(&temp_path).unwrap();
        assert!(raw.trim_start().starts_with('{'));

        let loaded = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(loaded.method, dataset.method);
        assert_eq!(loaded.criteria.len(), 5);
        assert_eq!(loaded.candidates[4].name, "Eko Prasetyo");
        assert_eq!(loaded.candidates[4].value_for("tanggungan"), 6.0);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let temp_path = env::temp_dir().join("spk_rank_test_invalid.yaml");
        fs::write(&temp_path, "criteria: [ { id: a, weight: not-a-number } ]").unwrap();

        let err = load_config(Some(temp_path.clone())).unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));

        let _ = fs::remove_file(&temp_path);
    }
}
