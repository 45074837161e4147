//! File-backed view of the raw counter archive.
//!
//! The event pipeline drops daily counter batches as JSON arrays under
//! `stats/<source>/`. This crate only ever reads them. Files are
//! discovered with a recursive walk and parsed in parallel; a missing
//! archive root is an error, never an empty report.

use super::{matches_query, validate_query, ReportQuery, VariantStat};
use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct StatArchive {
    root: PathBuf,
}

impl StatArchive {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load every counter row matching the query.
    ///
    /// Validates the query first (the data source enforces the date
    /// contract too, independent of the fail-fast check at the API
    /// layer) and fails outright when the archive root is unreachable
    /// or any batch file is unreadable; partial results are worse
    /// than an error here.
    pub fn load(&self, query: &ReportQuery) -> Result<Vec<VariantStat>> {
        validate_query(query)?;
        if !self.root.is_dir() {
            bail!("Stat archive {:?} is unreachable", self.root);
        }

        let files: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();

        let batches: Result<Vec<Vec<VariantStat>>> =
            files.par_iter().map(|path| read_batch(path)).collect();

        let stats = batches?
            .into_iter()
            .flatten()
            .filter(|stat| matches_query(stat, query))
            .collect();
        Ok(stats)
    }
}

fn read_batch(path: &Path) -> Result<Vec<VariantStat>> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read stat batch {:?}", path))?;
    serde_json::from_slice(&data)
        .with_context(|| format!("Failed to parse stat batch {:?}", path))
}
