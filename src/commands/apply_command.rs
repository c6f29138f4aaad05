//! Alignment application command
//!
//! With `--run`, crops that run using its stored (or default) settings.
//! Without it, crops every run that has stored settings.

use clap::ArgMatches;
use log::{info, warn};

use crate::aligner::errors::AlignResult;
use crate::commands::command_traits::Command;
use crate::commands::context::RunContext;
use crate::run::{BatchProcessor, RunOutcome};
use crate::utils::logger::Logger;

/// Command for cropping runs to their overlap window
pub struct ApplyCommand<'a> {
    context: RunContext,
    logger: &'a Logger,
}

impl<'a> ApplyCommand<'a> {
    /// Create a new apply command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> AlignResult<Self> {
        Ok(ApplyCommand {
            context: RunContext::from_args(args)?,
            logger,
        })
    }

    fn processor(&self) -> BatchProcessor<'_> {
        let processor = BatchProcessor::new(&self.context.config, self.logger);
        match &self.context.output_dir {
            Some(dir) => processor.with_output_root(dir.clone()),
            None => processor,
        }
    }
}

impl<'a> Command for ApplyCommand<'a> {
    fn execute(&self) -> AlignResult<()> {
        let context = &self.context;
        let runs = context.selected_runs()?;
        if runs.is_empty() {
            warn!("No run folders with both {} and {} found",
                  context.config.reference_name, context.config.series_name);
            return Ok(());
        }

        let processor = self.processor();
        if context.run_name.is_some() {
            let run = &runs[0];
            let settings = context.store.get_or_default(&run.name);
            let report = processor.apply_alignment(&context.base_dir, run, &settings)?;

            match &report.outcome {
                RunOutcome::Aligned { written, .. } => println!(
                    "Aligned {} images saved to {}",
                    written.len(),
                    processor.output_root(&context.base_dir).join(&run.name).display()),
                RunOutcome::NoOverlap => println!("No overlap region found between the two images."),
                RunOutcome::NoImages => println!("No images found in {}", run.path.display()),
            }
            return Ok(());
        }

        if context.store.is_empty() {
            warn!("No stored alignment settings in {}; nothing to apply", context.settings_path.display());
        }

        let summary = processor.save_all_processed(&context.base_dir, &runs, &context.store)?;
        info!("Batch finished: {} images, {} runs", summary.images_written, summary.runs_processed);
        println!("Processed {} images from {} runs.\nSaved to: {}",
                 summary.images_written, summary.runs_processed, summary.output_root.display());
        for name in &summary.runs_failed {
            println!("Skipped {}: reference images could not be read", name);
        }
        for name in &summary.runs_unmatched {
            println!("Skipped {}: no run folder with both images", name);
        }
        Ok(())
    }
}
