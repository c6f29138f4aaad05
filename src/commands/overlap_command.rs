//! Overlap report command
//!
//! Prints the overlap window of each selected run with its current
//! settings, without writing any images.

use clap::ArgMatches;
use log::{info, warn};

use crate::aligner::errors::AlignResult;
use crate::commands::command_traits::Command;
use crate::commands::context::RunContext;
use crate::run::BatchProcessor;
use crate::utils::logger::Logger;

/// Command for reporting overlap windows
pub struct OverlapCommand<'a> {
    context: RunContext,
    logger: &'a Logger,
}

impl<'a> OverlapCommand<'a> {
    /// Create a new overlap command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> AlignResult<Self> {
        Ok(OverlapCommand {
            context: RunContext::from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for OverlapCommand<'a> {
    fn execute(&self) -> AlignResult<()> {
        let config = &self.context.config;
        let runs = self.context.selected_runs()?;
        if runs.is_empty() {
            warn!("No run folders with both {} and {} found", config.reference_name, config.series_name);
            return Ok(());
        }

        let processor = BatchProcessor::new(config, self.logger);
        let mut rows = Vec::with_capacity(runs.len());
        for run in &runs {
            let settings = self.context.store.get_or_default(&run.name);
            let region = processor.run_overlap(run, &settings)?;
            let stored = if self.context.store.contains(&run.name) { "" } else { " (default settings)" };

            match &region {
                Some(region) => println!("{}{}: {}", run.name, stored, region),
                None => println!("{}{}: no overlap", run.name, stored),
            }
            rows.push((run.name.clone(), region));
        }

        info!("Reported overlap for {} runs", rows.len());
        self.logger.print_overlap_table(&rows)?;
        Ok(())
    }
}
