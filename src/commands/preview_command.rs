//! Overlay preview command

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::aligner::errors::{AlignError, AlignResult};
use crate::commands::command_traits::Command;
use crate::commands::context::RunContext;
use crate::run::BatchProcessor;
use crate::utils::image_utils::save_rgba_png;
use crate::utils::logger::Logger;

/// Command for writing a blended preview of one run
pub struct PreviewCommand<'a> {
    context: RunContext,
    /// Path of the preview image
    output_file: PathBuf,
    logger: &'a Logger,
}

impl<'a> PreviewCommand<'a> {
    /// Create a new preview command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> AlignResult<Self> {
        let output_file = args.get_one::<String>("preview")
            .map(PathBuf::from)
            .ok_or_else(|| AlignError::GenericError("Missing preview output path".to_string()))?;

        Ok(PreviewCommand {
            context: RunContext::from_args(args)?,
            output_file,
            logger,
        })
    }
}

impl<'a> Command for PreviewCommand<'a> {
    fn execute(&self) -> AlignResult<()> {
        // Without --run the first run is previewed
        let run = self.context.selected_runs()?
            .into_iter()
            .next()
            .ok_or_else(|| AlignError::GenericError("No run folders found to preview".to_string()))?;

        let settings = self.context.store.get_or_default(&run.name);
        info!("Rendering preview of {} with {:?}", run.name, settings);

        let processor = BatchProcessor::new(&self.context.config, self.logger);
        let preview = processor.preview_run(&run, &settings)?;
        let written = save_rgba_png(&preview, &self.output_file)?;

        println!("Preview of {} saved to {}", run.name, written.display());
        self.logger.log(&format!("Preview of {} saved to {}", run.name, written.display()))?;
        Ok(())
    }
}
