use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};
use crate::rule;

/// Default target size of each fixture, in megabytes.
pub const DEFAULT_SIZE_MB: f64 = 1.0;
/// Default number of fixtures per run.
pub const DEFAULT_NUM_FILES: u32 = 50;
/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "generated";

/// Inputs of one generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixturePlan {
    pub size_mb: f64,
    pub num_files: u32,
    pub out_dir: PathBuf,
}

impl Default for FixturePlan {
    fn default() -> Self {
        Self {
            size_mb: DEFAULT_SIZE_MB,
            num_files: DEFAULT_NUM_FILES,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl FixturePlan {
    pub fn new(size_mb: f64, num_files: u32, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            size_mb,
            num_files,
            out_dir: out_dir.into(),
        }
    }

    /// Output path of fixture `index` (1-based).
    pub fn file_path(&self, index: u32) -> PathBuf {
        self.out_dir.join(fixture_file_name(index))
    }
}

/// File name of fixture `index`: `large<index>.css`.
pub fn fixture_file_name(index: u32) -> String {
    format!("large{index}.css")
}

/// One fixture written by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub index: u32,
    pub path: PathBuf,
    pub lines: u64,
    pub bytes: u64,
}

/// Create (or truncate) `path` and write rules `0..lines` into it.
///
/// Returns the number of bytes written.
pub fn write_fixture(path: &Path, lines: u64) -> Result<u64> {
    let file = File::create(path).map_err(|e| GenerateError::create(path, e))?;
    let mut out = BufWriter::new(file);
    let mut bytes = 0u64;
    for k in 0..lines {
        rule::write_rule(&mut out, k).map_err(|e| GenerateError::write(path, e))?;
        bytes += rule_len(k);
    }
    out.flush().map_err(|e| GenerateError::write(path, e))?;
    Ok(bytes)
}

fn rule_len(k: u64) -> u64 {
    // ".class" + digits + " {color: #000;}" + "\n"
    6 + u64::from(rule::digit_width(k)) + 15 + rule::NEWLINE_LEN
}

/// Write every fixture of `plan`, in index order.
pub fn generate(plan: &FixturePlan) -> Result<Vec<GeneratedFile>> {
    generate_with(plan, |_| {})
}

/// Like [`generate`], calling `on_file` after each fixture is closed.
///
/// Stops at the first failure; fixtures already written stay on disk and
/// the failing one may be partial.
pub fn generate_with<F>(plan: &FixturePlan, mut on_file: F) -> Result<Vec<GeneratedFile>>
where
    F: FnMut(&GeneratedFile),
{
    let mut written = Vec::new();
    for index in 1..=plan.num_files {
        let path = plan.file_path(index);
        let lines = rule::line_count(plan.size_mb, index);
        let bytes = write_fixture(&path, lines)?;
        let file = GeneratedFile {
            index,
            path,
            lines,
            bytes,
        };
        on_file(&file);
        written.push(file);
    }
    Ok(written)
}
