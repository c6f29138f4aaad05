//! Run folder discovery
//!
//! A run is a directory named `run<N>` directly under the base directory
//! that holds both the reference and the series image.

use std::fs;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use crate::aligner::errors::AlignResult;
use crate::aligner::Role;
use crate::run::config::ToolConfig;

lazy_static! {
    static ref RUN_NAME: Regex = Regex::new(r"^run(\d+)$").expect("valid run name pattern");
}

/// One run directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFolder {
    /// Directory name, also the key of the run's settings
    pub name: String,
    /// Numeric suffix of the name, used for ordering
    pub number: u64,
    /// Full path of the directory
    pub path: PathBuf,
}

impl RunFolder {
    /// Build a run from a directory path if its name matches `run<N>`
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        let number = RUN_NAME.captures(&name)?.get(1)?.as_str().parse::<u64>().ok()?;
        Some(RunFolder { name, number, path: path.to_path_buf() })
    }

    /// Path of the reference image
    pub fn reference_path(&self, config: &ToolConfig) -> PathBuf {
        self.path.join(&config.reference_name)
    }

    /// Path of the series image used for the overlap
    pub fn series_path(&self, config: &ToolConfig) -> PathBuf {
        self.path.join(&config.series_name)
    }

    /// Whether both alignment images exist
    pub fn is_complete(&self, config: &ToolConfig) -> bool {
        self.reference_path(config).is_file() && self.series_path(config).is_file()
    }

    /// Role of an image inside this run
    ///
    /// Only the reference file takes the reference offsets; every other
    /// image follows the series offsets.
    pub fn role_for(&self, file_name: &str, config: &ToolConfig) -> Role {
        if file_name == config.reference_name {
            Role::Reference
        } else {
            Role::Series
        }
    }

    /// All images in the run, sorted by file name
    pub fn image_files(&self, config: &ToolConfig) -> AlignResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let path = entry?.path();
            let is_image = path.file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |n| config.is_image_name(n));
            if is_image && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Find all complete run folders under `base`, ordered by run number
pub fn find_run_folders(base: &Path, config: &ToolConfig) -> AlignResult<Vec<RunFolder>> {
    info!("Scanning {} for run folders", base.display());

    let mut runs = Vec::new();
    for entry in fs::read_dir(base)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let Some(run) = RunFolder::from_path(&path) else {
            continue;
        };

        if run.is_complete(config) {
            runs.push(run);
        } else {
            debug!("Skipping {}: missing {} or {}", run.name, config.reference_name, config.series_name);
        }
    }

    runs.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.name.cmp(&b.name)));
    info!("Found {} run folders", runs.len());
    Ok(runs)
}
