//! File-backed location blacklist
//!
//! Line-oriented text format: one location id per line, `#`-prefixed and
//! blank lines ignored, surrounding whitespace trimmed. Matching is
//! case-sensitive and exact.

use crate::error::EngineResult;
use crate::providers::Blacklist;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Blacklist loaded from a text file
#[derive(Debug, Clone, Default)]
pub struct FileBlacklist {
    ids: HashSet<String>,
}

impl FileBlacklist {
    /// An empty blacklist
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse blacklist contents from text
    pub fn from_text(text: &str) -> Self {
        let ids = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { ids }
    }

    /// Load a blacklist file from disk
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let blacklist = Self::from_text(&text);
        info!(
            path = %path.as_ref().display(),
            entries = blacklist.ids.len(),
            "Loaded location blacklist"
        );
        Ok(blacklist)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Blacklist for FileBlacklist {
    fn is_blacklisted(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}
