//! Read-only reference data loaded from JSON files.
//!
//! Some API surfaces serve canned payloads (popular movies on the
//! landing page, demo users) instead of querying the graph. Those
//! payloads are loaded once at startup and injected into [`crate::App`];
//! nothing on the query path reads from disk.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;

/// Named JSON arrays keyed by file stem (`popular.json` -> `popular`).
#[derive(Debug, Default)]
pub struct FixtureData {
    sets: HashMap<String, Vec<serde_json::Value>>,
}

impl FixtureData {
    /// No fixture sets at all; every `list` call yields an empty slice.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every `*.json` file in a directory. Each file must contain a
    /// top-level JSON array.
    pub fn load_dir(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let mut sets = HashMap::new();

        let entries = fs::read_dir(dir)
            .with_context(|| format!("reading fixture directory {}", dir.display()))?;
        for entry in entries {
            let path = entry
                .with_context(|| format!("listing fixture directory {}", dir.display()))?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading fixture file {}", path.display()))?;
            let items: Vec<serde_json::Value> = serde_json::from_str(&content)
                .with_context(|| format!("parsing fixture file {}", path.display()))?;

            tracing::debug!(set = name, items = items.len(), "loaded fixture set");
            sets.insert(name.to_owned(), items);
        }

        Ok(Self { sets })
    }

    /// The named fixture set, or an empty slice when absent.
    pub fn list(&self, name: &str) -> &[serde_json::Value] {
        self.sets.get(name).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn load_dir_keys_sets_by_file_stem() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut file = fs::File::create(dir.path().join("popular.json"))?;
        write!(file, r#"[{{"title": "Toy Story"}}, {{"title": "Jumanji"}}]"#)?;
        fs::write(dir.path().join("notes.txt"), "ignored")?;

        let fixtures = FixtureData::load_dir(dir.path())?;
        assert_eq!(fixtures.list("popular").len(), 2);
        assert!(fixtures.list("notes").is_empty());
        Ok(())
    }

    #[test]
    fn load_dir_rejects_non_array_payloads() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("broken.json"), r#"{"not": "an array"}"#)?;

        assert!(FixtureData::load_dir(dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn empty_fixtures_serve_empty_slices() {
        let fixtures = FixtureData::empty();
        assert!(fixtures.list("popular").is_empty());
    }
}
