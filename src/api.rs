use std::path::{Path, PathBuf};
use log::info;

use crate::aligner::errors::{AlignError, AlignResult};
use crate::aligner::AlignmentSettings;
use crate::geometry::OverlapRegion;
use crate::run::{find_run_folders, BatchProcessor, BatchSummary, RunFolder, RunReport, SettingsStore, ToolConfig};
use crate::utils::image_utils::save_rgba_png;
use crate::utils::logger::Logger;

/// Main interface to the runalign library
pub struct RunAligner {
    logger: Logger,
    config: ToolConfig,
}

impl RunAligner {
    /// Create a new RunAligner instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "runalign.log"
    ///
    /// # Returns
    /// A RunAligner with the default configuration, or an error if the log
    /// file cannot be created
    pub fn new(log_file: Option<&Path>) -> AlignResult<Self> {
        let log_path = log_file.unwrap_or_else(|| Path::new("runalign.log"));
        let logger = Logger::new(log_path)?;
        Ok(RunAligner { logger, config: ToolConfig::default() })
    }

    /// Replace the tool configuration
    pub fn with_config(mut self, config: ToolConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// List the complete runs under a base directory
    pub fn find_runs(&self, base: &Path) -> AlignResult<Vec<RunFolder>> {
        find_run_folders(base, &self.config)
    }

    /// Compute the overlap window of one run
    pub fn overlap(&self, base: &Path, run_name: &str, settings: &AlignmentSettings) -> AlignResult<Option<OverlapRegion>> {
        let run = self.find_run(base, run_name)?;
        self.processor().run_overlap(&run, settings)
    }

    /// Crop every image of one run
    pub fn apply(&self, base: &Path, run_name: &str, settings: &AlignmentSettings) -> AlignResult<RunReport> {
        let run = self.find_run(base, run_name)?;
        self.processor().apply_alignment(base, &run, settings)
    }

    /// Crop every run that has stored settings
    pub fn apply_all(&self, base: &Path, store: &SettingsStore) -> AlignResult<BatchSummary> {
        let runs = self.find_runs(base)?;
        info!("Applying stored settings of {} runs", store.len());
        self.processor().save_all_processed(base, &runs, store)
    }

    /// Write a blended preview of one run
    ///
    /// # Returns
    /// The path written to, with the extension forced to `.png`
    pub fn preview(&self, base: &Path, run_name: &str, settings: &AlignmentSettings, output: &Path) -> AlignResult<PathBuf> {
        let run = self.find_run(base, run_name)?;
        let preview = self.processor().preview_run(&run, settings)?;
        save_rgba_png(&preview, output)
    }

    fn processor(&self) -> BatchProcessor<'_> {
        BatchProcessor::new(&self.config, &self.logger)
    }

    fn find_run(&self, base: &Path, run_name: &str) -> AlignResult<RunFolder> {
        self.find_runs(base)?
            .into_iter()
            .find(|run| run.name == run_name)
            .ok_or_else(|| AlignError::RunNotFound(run_name.to_string()))
    }
}
