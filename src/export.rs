//! Template export and import
//!
//! A template exports to a self-contained JSON snapshot suitable for
//! file download or a versioned configuration repository, and imports
//! back through the same document shape. Export never mutates the
//! source template; import re-validates the document structurally
//! before the store will accept it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

use crate::error::{FormError, FormResult};
use crate::models::FormTemplate;

/// Download filename: `<type>_template_<epoch-millis>.json`
pub fn export_filename(template: &FormTemplate, at: DateTime<Utc>) -> String {
    format!(
        "{}_template_{}.json",
        template.form_type,
        at.timestamp_millis()
    )
}

/// Pretty-printed export document
pub fn to_export_json(template: &FormTemplate) -> FormResult<String> {
    Ok(serde_json::to_string_pretty(template)?)
}

/// Parse and structurally validate an export document
pub fn from_export_json(document: &str) -> FormResult<FormTemplate> {
    let template: FormTemplate = serde_json::from_str(document)?;
    template.validate()?;
    Ok(template)
}

/// Write the export document into `dir` under the download filename
///
/// Writes to a temp file in the same directory first, then persists, so
/// a crash mid-write never leaves a truncated document behind.
pub fn write_export(
    template: &FormTemplate,
    dir: &Path,
    at: DateTime<Utc>,
) -> FormResult<PathBuf> {
    let content = to_export_json(template)?;
    let path = dir.join(export_filename(template, at));

    fs::create_dir_all(dir)?;
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    temp_file
        .persist(&path)
        .map_err(|e| FormError::Io(e.error))?;

    Ok(path)
}
