//! Country directory: name ↔ ISO2 code ↔ API slug.
//!
//! The list is small (a few hundred rows), so lookups are plain linear scans and
//! duplicates resolve to the first row in file order.

use crate::error::{CovidError, Result};
use crate::models::CountryDirectoryEntry;
use log::debug;
use std::fs;
use std::path::Path;

/// Directory compiled into the binary, used when no data file is installed.
const BUNDLED: &str = include_str!("../data/countries.json");

/// Case-insensitive string equality (Unicode aware, so "CÔTE" matches "côte").
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// First entry whose country name equals `name`, ignoring case.
pub fn find_by_name<'a>(
    name: &str,
    entries: &'a [CountryDirectoryEntry],
) -> Option<&'a CountryDirectoryEntry> {
    let name = name.trim();
    entries.iter().find(|e| eq_ignore_case(&e.country, name))
}

/// First entry whose ISO2 code equals `code`, ignoring case.
pub fn find_by_code<'a>(
    code: &str,
    entries: &'a [CountryDirectoryEntry],
) -> Option<&'a CountryDirectoryEntry> {
    let code = code.trim();
    entries.iter().find(|e| e.iso2.eq_ignore_ascii_case(code))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryDirectory {
    entries: Vec<CountryDirectoryEntry>,
}

impl CountryDirectory {
    pub fn new(entries: Vec<CountryDirectoryEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of `{"Country", "Slug", "ISO2"}` rows.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let entries: Vec<CountryDirectoryEntry> = serde_json::from_str(s)
            .map_err(|e| CovidError::Decode(format!("parse country directory: {e}")))?;
        Ok(Self { entries })
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED)
    }

    /// Read the directory from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        debug!("loaded country directory from {}", path.display());
        Self::from_json_str(&raw)
    }

    /// Prefer the installed file at `path`; fall back to the bundled list if it is absent.
    pub fn load_or_bundled<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            debug!("{} not found, using bundled directory", path.display());
            Self::bundled()
        }
    }

    pub fn entries(&self) -> &[CountryDirectoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CountryDirectoryEntry> {
        find_by_name(name, &self.entries)
    }

    pub fn find_by_code(&self, code: &str) -> Option<&CountryDirectoryEntry> {
        find_by_code(code, &self.entries)
    }

    /// Name first, then ISO2 code. Used for free-form CLI arguments.
    pub fn find(&self, query: &str) -> Option<&CountryDirectoryEntry> {
        self.find_by_name(query).or_else(|| self.find_by_code(query))
    }
}
