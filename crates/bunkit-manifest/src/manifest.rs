//! Manifest parsing and field projection

use bunkit_core::{Error, ManifestField, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A top-level manifest field, tagged by shape.
///
/// Callers handle "missing" and "wrong shape" distinctly instead of poking
/// at loosely-typed JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Nested key/value object, entries in document order
    Object(Vec<(String, String)>),
    /// Plain string value
    Scalar(String),
    /// Field not present
    Absent,
    /// Present but neither an object nor a string
    Other,
}

/// One selectable entry projected from a manifest field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The manifest key (script name, dependency name)
    pub key: String,
    /// Display string shown in pickers
    pub display: String,
}

/// A parsed project manifest
///
/// Holds the whole document as read from disk at `load` time. Constructing a
/// new `Manifest` is the only way to see newer content.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    doc: serde_json::Value,
}

impl Manifest {
    /// Read and parse the manifest file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let doc: serde_json::Value = serde_json::from_str(&content)?;
        debug!("Loaded manifest from {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// Path the manifest was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the manifest
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    /// Look up a top-level field and tag it by shape
    pub fn field(&self, name: &str) -> FieldValue {
        match self.doc.get(name) {
            None => FieldValue::Absent,
            Some(serde_json::Value::String(s)) => FieldValue::Scalar(s.clone()),
            Some(serde_json::Value::Object(map)) => FieldValue::Object(
                map.iter()
                    .map(|(k, v)| {
                        let raw = match v {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        };
                        (k.clone(), raw)
                    })
                    .collect(),
            ),
            Some(_) => FieldValue::Other,
        }
    }

    /// Project a manifest field into picker entries.
    ///
    /// The display value is always `"{program} {key}"`; the field's original
    /// values are not shown. An empty object yields an empty list.
    pub fn entries(&self, field: ManifestField, program: &str) -> Result<Vec<Entry>> {
        match self.field(field.as_str()) {
            FieldValue::Object(pairs) => Ok(pairs
                .into_iter()
                .map(|(key, _)| Entry {
                    display: format!("{} {}", program, key),
                    key,
                })
                .collect()),
            FieldValue::Absent => Err(Error::FieldMissing(field.as_str().to_string())),
            FieldValue::Scalar(_) | FieldValue::Other => Err(Error::FieldShape {
                field: field.as_str().to_string(),
                expected: "object",
            }),
        }
    }

    /// The project's `name` field, when present as a string
    pub fn name(&self) -> Option<String> {
        match self.field("name") {
            FieldValue::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("package.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_script_entries_display_value() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"scripts": {"build": "tsc"}}"#);

        let manifest = Manifest::load(&path).unwrap();
        let entries = manifest.entries(ManifestField::Scripts, "bun").unwrap();

        // Display is derived from the key alone, never the script body
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "build");
        assert_eq!(entries[0].display, "bun build");
    }

    #[test]
    fn test_entries_keep_document_order() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            r#"{"scripts": {"zeta": "z", "alpha": "a", "mid": "m"}}"#,
        );

        let manifest = Manifest::load(&path).unwrap();
        let entries = manifest.entries(ManifestField::Scripts, "bun").unwrap();
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_scripts_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"scripts": {}}"#);

        let manifest = Manifest::load(&path).unwrap();
        let entries = manifest.entries(ManifestField::Scripts, "bun").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_field() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"name": "demo"}"#);

        let manifest = Manifest::load(&path).unwrap();
        let err = manifest
            .entries(ManifestField::Dependencies, "bun")
            .unwrap_err();
        assert!(matches!(err, Error::FieldMissing(_)));
    }

    #[test]
    fn test_wrong_shape_field() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"scripts": "not an object"}"#);

        let manifest = Manifest::load(&path).unwrap();
        let err = manifest.entries(ManifestField::Scripts, "bun").unwrap_err();
        assert!(matches!(err, Error::FieldShape { .. }));
    }

    #[test]
    fn test_field_tagging() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            r#"{"name": "demo", "workspaces": ["a"], "scripts": {"dev": "vite"}}"#,
        );

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(
            manifest.field("name"),
            FieldValue::Scalar("demo".to_string())
        );
        assert_eq!(manifest.field("workspaces"), FieldValue::Other);
        assert_eq!(manifest.field("missing"), FieldValue::Absent);
        assert!(matches!(manifest.field("scripts"), FieldValue::Object(_)));
    }

    #[test]
    fn test_project_name() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"name": "my-app"}"#);

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.name().as_deref(), Some("my-app"));
    }

    #[test]
    fn test_name_absent() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "{}");

        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.name().is_none());
    }

    #[test]
    fn test_parse_failure() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "{ not json");

        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, Error::JsonError(_)));
    }

    #[test]
    fn test_reload_sees_on_disk_edits() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"scripts": {"old": "x"}}"#);

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(
            manifest.entries(ManifestField::Scripts, "bun").unwrap()[0].key,
            "old"
        );

        write_manifest(&dir, r#"{"scripts": {"new": "y"}}"#);
        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(
            manifest.entries(ManifestField::Scripts, "bun").unwrap()[0].key,
            "new"
        );
    }

    #[test]
    fn test_non_string_dependency_values_stringified() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"dependencies": {"left-pad": 1}}"#);

        let manifest = Manifest::load(&path).unwrap();
        match manifest.field("dependencies") {
            FieldValue::Object(pairs) => assert_eq!(pairs[0].1, "1"),
            other => panic!("expected object, got {:?}", other),
        }
    }
}
