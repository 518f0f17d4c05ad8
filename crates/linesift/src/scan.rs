//! Scan drivers: applying a query to readers, files, and directories.
//!
//! These are thin line-by-line loops around [`Query::matches`]. Matching
//! lines are packaged as [`SearchResult`] records with their 1-based line
//! number and, for file-backed sources, the originating path. Numbering
//! restarts at 1 for every source.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::query::Query;

/// One matching line from a scanned source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchResult {
    /// The matching line, without its trailing newline.
    pub line: String,
    /// 1-based line number within the source.
    pub line_number: usize,
    /// The originating file, when the source was file-backed.
    pub file: Option<PathBuf>,
}

/// The outcome of a directory scan.
///
/// A failure reading one file is recorded here instead of aborting the
/// scan, so results already collected for sibling files survive.
#[derive(Debug, Default)]
pub struct DirectoryScan {
    /// Matching lines across all scanned files, in scan order.
    pub results: Vec<SearchResult>,
    /// Per-file failures, each carrying the path that failed.
    pub failures: Vec<ScanError>,
}

impl Query {
    /// Scans a line reader, collecting every matching line.
    ///
    /// Lines are numbered from 1. The scan does not stop at the first
    /// match. A read error aborts the scan with the error rather than
    /// returning a silently truncated result set.
    pub fn scan_reader<R: BufRead>(
        &self,
        reader: R,
        match_case: bool,
    ) -> io::Result<Vec<SearchResult>> {
        let mut results = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if self.matches(&line, match_case) {
                results.push(SearchResult {
                    line,
                    line_number: index + 1,
                    file: None,
                });
            }
        }
        Ok(results)
    }

    /// Scans a file line by line, tagging results with the file's path.
    ///
    /// The handle closes on every exit path. Open and read failures carry
    /// the path in the returned [`ScanError`].
    pub fn scan_file(
        &self,
        path: impl AsRef<Path>,
        match_case: bool,
    ) -> Result<Vec<SearchResult>, ScanError> {
        let path = path.as_ref();
        let io_error = |source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let mut results = self
            .scan_reader(BufReader::new(file), match_case)
            .map_err(io_error)?;
        for result in &mut results {
            result.file = Some(path.to_path_buf());
        }
        Ok(results)
    }

    /// Scans the regular files directly inside `dir` (no recursion).
    ///
    /// When `extensions` is given, only files with one of those extensions
    /// are scanned; entries are accepted with or without the leading dot
    /// (`".txt"` and `"txt"` mean the same thing). Files are visited in
    /// name order and line numbering restarts at 1 for each. A failure on
    /// one file lands in [`DirectoryScan::failures`] without touching the
    /// results of its siblings; only a failure to enumerate the directory
    /// itself aborts the call.
    pub fn scan_dir(
        &self,
        dir: impl AsRef<Path>,
        match_case: bool,
        extensions: Option<&[&str]>,
    ) -> Result<DirectoryScan, ScanError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|source| ScanError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ScanError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut scan = DirectoryScan::default();
        for path in paths {
            if let Some(wanted) = extensions {
                if !extension_matches(&path, wanted) {
                    continue;
                }
            }
            match self.scan_file(&path, match_case) {
                Ok(results) => scan.results.extend(results),
                Err(error) => scan.failures.push(error),
            }
        }
        Ok(scan)
    }
}

fn extension_matches(path: &Path, wanted: &[&str]) -> bool {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    wanted
        .iter()
        .any(|w| w.trim_start_matches('.') == extension)
}
