//! Batch application of a run's alignment
//!
//! Crops every image of a run to the run's overlap window and writes the
//! results under `<parent of base>/<output_dir_name>/<run name>/`.

use std::fs;
use std::path::{Path, PathBuf};
use image::RgbaImage;
use log::{debug, info, warn};

use crate::aligner::errors::{AlignError, AlignResult};
use crate::aligner::{render_preview, AlignmentSettings, OverlapAligner, Role};
use crate::geometry::OverlapRegion;
use crate::run::config::ToolConfig;
use crate::run::discovery::RunFolder;
use crate::run::settings::SettingsStore;
use crate::utils::logger::Logger;
use crate::utils::image_utils::load_image;
use crate::utils::progress::ProgressTracker;

/// What happened when a run's alignment was applied
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Images were cropped to `region` and written
    Aligned { region: OverlapRegion, written: Vec<PathBuf> },
    /// The reference and series images do not overlap; nothing was written
    NoOverlap,
    /// The run folder holds no images with a configured extension
    NoImages,
}

/// Result of applying one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub run_name: String,
    pub outcome: RunOutcome,
}

impl RunReport {
    /// Number of images written for this run
    pub fn written(&self) -> usize {
        match &self.outcome {
            RunOutcome::Aligned { written, .. } => written.len(),
            _ => 0,
        }
    }
}

/// Totals for a save-all pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    /// Directory all run outputs were written under
    pub output_root: PathBuf,
    /// Images written across all runs
    pub images_written: usize,
    /// Runs that had stored settings and were attempted
    pub runs_processed: usize,
    /// Per-run results, in run order
    pub reports: Vec<RunReport>,
    /// Runs skipped because their alignment images could not be read
    pub runs_failed: Vec<String>,
    /// Stored settings whose run folder was not among the runs given
    pub runs_unmatched: Vec<String>,
}

/// Applies stored alignments to run folders
pub struct BatchProcessor<'a> {
    config: &'a ToolConfig,
    aligner: OverlapAligner,
    output_root: Option<PathBuf>,
    logger: &'a Logger,
}

impl<'a> BatchProcessor<'a> {
    /// Create a new batch processor
    ///
    /// # Arguments
    /// * `config` - Tool configuration (output size, file layout)
    /// * `logger` - Logger for recording operations
    pub fn new(config: &'a ToolConfig, logger: &'a Logger) -> Self {
        BatchProcessor {
            config,
            aligner: OverlapAligner::new(config.output_size),
            output_root: None,
            logger,
        }
    }

    /// Write output under `root` instead of next to the base directory
    pub fn with_output_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.output_root = Some(root.into());
        self
    }

    /// Directory that receives one sub-directory per run
    pub fn output_root(&self, base: &Path) -> PathBuf {
        if let Some(root) = &self.output_root {
            return root.clone();
        }
        base.parent().unwrap_or(base).join(&self.config.output_dir_name)
    }

    /// Compute a run's overlap window from its reference and series images
    ///
    /// Only the image headers are read.
    pub fn run_overlap(&self, run: &RunFolder, settings: &AlignmentSettings) -> AlignResult<Option<OverlapRegion>> {
        let (ref_w, ref_h) = image::image_dimensions(run.reference_path(self.config))?;
        let (series_w, series_h) = image::image_dimensions(run.series_path(self.config))?;
        debug!("{}: reference {}x{}, series {}x{}", run.name, ref_w, ref_h, series_w, series_h);

        let reference = settings.place(Role::Reference, ref_w, ref_h);
        let series = settings.place(Role::Series, series_w, series_h);
        Ok(self.aligner.compute_overlap(&reference, &series))
    }

    /// Apply a run's alignment to every image in it
    ///
    /// # Arguments
    /// * `base` - Base directory the run was discovered in
    /// * `run` - The run to process
    /// * `settings` - Offsets for the reference and series roles
    ///
    /// # Returns
    /// A report of the outcome; a missing overlap is reported, not an error
    pub fn apply_alignment(&self, base: &Path, run: &RunFolder, settings: &AlignmentSettings) -> AlignResult<RunReport> {
        info!("Applying alignment to {}", run.name);
        let region = self.run_overlap(run, settings)?;
        self.crop_run(base, run, settings, region)
    }

    /// Blend a run's series image over its reference image
    pub fn preview_run(&self, run: &RunFolder, settings: &AlignmentSettings) -> AlignResult<RgbaImage> {
        let reference = load_image(&run.reference_path(self.config))?;
        let series = load_image(&run.series_path(self.config))?;
        render_preview(&reference, &series, settings)
    }

    /// Apply every run that has stored settings
    ///
    /// Runs without settings are skipped silently and runs whose alignment
    /// images cannot be read are skipped with a warning. Any other failure
    /// aborts the pass.
    pub fn save_all_processed(&self, base: &Path, runs: &[RunFolder], store: &SettingsStore) -> AlignResult<BatchSummary> {
        let output_root = self.output_root(base);
        let mut summary = BatchSummary { output_root: output_root.clone(), ..Default::default() };

        let progress = ProgressTracker::new(runs.len() as u64, "Aligning runs");
        for run in runs {
            progress.set_message(&run.name);
            progress.increment(1);

            let Some(settings) = store.get(&run.name) else {
                debug!("No stored settings for {}, skipping", run.name);
                continue;
            };

            let region = match self.run_overlap(run, settings) {
                Ok(region) => region,
                Err(e) => {
                    warn!("Skipping {}: {}", run.name, e);
                    summary.runs_failed.push(run.name.clone());
                    continue;
                }
            };

            let report = self.crop_run(base, run, settings, region)?;
            summary.images_written += report.written();
            summary.runs_processed += 1;
            summary.reports.push(report);
        }
        progress.finish();

        for (name, _) in store.iter() {
            if !runs.iter().any(|run| run.name == *name) {
                warn!("Stored settings for {} match no complete run folder", name);
                summary.runs_unmatched.push(name.clone());
            }
        }

        info!("Processed {} images from {} runs into {}",
              summary.images_written, summary.runs_processed, output_root.display());
        self.logger.log(&format!("Processed {} images from {} runs. Saved to: {}",
                                 summary.images_written, summary.runs_processed, output_root.display()))?;
        Ok(summary)
    }

    fn crop_run(&self,
                base: &Path,
                run: &RunFolder,
                settings: &AlignmentSettings,
                region: Option<OverlapRegion>) -> AlignResult<RunReport> {
        let Some(region) = region else {
            warn!("No overlap region found between the two images of {}", run.name);
            self.logger.log(&format!("{}: no overlap, nothing written", run.name))?;
            return Ok(RunReport { run_name: run.name.clone(), outcome: RunOutcome::NoOverlap });
        };
        info!("{}: overlap window {}", run.name, region);

        let images = run.image_files(self.config)?;
        if images.is_empty() {
            warn!("No images found in {}", run.path.display());
            return Ok(RunReport { run_name: run.name.clone(), outcome: RunOutcome::NoImages });
        }

        let output_dir = self.output_root(base).join(&run.name);
        fs::create_dir_all(&output_dir)?;

        let mut written = Vec::with_capacity(images.len());
        for image_path in &images {
            let file_name = image_path.file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| AlignError::GenericError(format!("Unreadable file name: {}", image_path.display())))?;

            let (offset_x, offset_y) = settings.offset_for(run.role_for(file_name, self.config));
            let image = load_image(image_path)?;
            let aligned = self.aligner.align_and_crop(&image, offset_x, offset_y, &region)?;

            let output_path = output_dir.join(file_name);
            aligned.save(&output_path)?;
            debug!("Wrote {}", output_path.display());
            written.push(output_path);
        }

        info!("Aligned {} images saved to {}", written.len(), output_dir.display());
        self.logger.log(&format!("{}: aligned {} images into {}", run.name, written.len(), output_dir.display()))?;

        Ok(RunReport {
            run_name: run.name.clone(),
            outcome: RunOutcome::Aligned { region, written },
        })
    }
}
