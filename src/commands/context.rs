//! Shared argument handling for all commands
//!
//! Resolves the base directory, configuration and settings store from the
//! command line, and records offsets passed on the command line into the
//! settings store before any command runs.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::aligner::check_offset;
use crate::aligner::errors::{AlignError, AlignResult};
use crate::geometry::OutputSize;
use crate::run::{find_run_folders, RunFolder, SettingsStore, ToolConfig};

/// Offset arguments in the order they are applied
const OFFSET_ARGS: [&str; 4] = ["reference-x", "reference-y", "series-x", "series-y"];

/// Everything a command needs to locate and process runs
pub struct RunContext {
    /// Directory holding the `run<N>` folders
    pub base_dir: PathBuf,
    /// Tool configuration after command-line overrides
    pub config: ToolConfig,
    /// Where the settings store is read from and written to
    pub settings_path: PathBuf,
    /// Per-run alignment settings
    pub store: SettingsStore,
    /// Single run selected with `--run`
    pub run_name: Option<String>,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
}

impl RunContext {
    /// Build the context from CLI arguments
    pub fn from_args(args: &ArgMatches) -> AlignResult<Self> {
        let base_dir = args.get_one::<String>("input")
            .map(PathBuf::from)
            .ok_or_else(|| AlignError::GenericError("Missing base directory".to_string()))?;
        info!("Base directory: {}", base_dir.display());

        let mut config = match args.get_one::<String>("config") {
            Some(path) => ToolConfig::from_file(path)?,
            None => ToolConfig::default(),
        };
        if let Some(size_str) = args.get_one::<String>("output-size") {
            config = config.with_output_size(OutputSize::from_string(size_str)?);
        }
        info!("Output size: {}", config.output_size);

        let settings_path = args.get_one::<String>("settings")
            .map(PathBuf::from)
            .unwrap_or_else(|| base_dir.join(&config.settings_name));
        let store = SettingsStore::load(&settings_path)?;

        let mut context = RunContext {
            base_dir,
            config,
            settings_path,
            store,
            run_name: args.get_one::<String>("run").cloned(),
            output_dir: args.get_one::<String>("output-dir").map(PathBuf::from),
        };
        context.apply_overrides(args)?;
        Ok(context)
    }

    /// Runs to act on: the `--run` selection, or every complete run
    pub fn selected_runs(&self) -> AlignResult<Vec<RunFolder>> {
        let runs = find_run_folders(&self.base_dir, &self.config)?;
        match &self.run_name {
            None => Ok(runs),
            Some(name) => runs.into_iter()
                .find(|run| run.name == *name)
                .map(|run| vec![run])
                .ok_or_else(|| AlignError::RunNotFound(name.clone())),
        }
    }

    /// Store offsets given on the command line for the selected run
    fn apply_overrides(&mut self, args: &ArgMatches) -> AlignResult<()> {
        let mut offsets = [None; 4];
        for (slot, arg) in offsets.iter_mut().zip(OFFSET_ARGS.iter()) {
            *slot = parse_arg::<i64>(args, arg)?.map(check_offset).transpose()?;
        }
        let transparency = parse_arg::<f64>(args, "transparency")?;

        if offsets.iter().all(Option::is_none) && transparency.is_none() {
            return Ok(());
        }

        let Some(run_name) = self.run_name.clone() else {
            return Err(AlignError::GenericError(
                "Offsets and transparency can only be set together with --run".to_string()));
        };

        let mut settings = self.store.get_or_default(&run_name);
        let [reference_x, reference_y, series_x, series_y] = offsets;
        settings.reference_x = reference_x.unwrap_or(settings.reference_x);
        settings.reference_y = reference_y.unwrap_or(settings.reference_y);
        settings.series_x = series_x.unwrap_or(settings.series_x);
        settings.series_y = series_y.unwrap_or(settings.series_y);
        if let Some(t) = transparency {
            if !(0.0..=1.0).contains(&t) {
                return Err(AlignError::InvalidTransparency(t));
            }
            settings.transparency = t;
        }

        info!("Storing settings for {}: {:?}", run_name, settings);
        self.store.set(&run_name, settings);
        self.store.save(&self.settings_path)
    }
}

/// Parse an optional argument value
fn parse_arg<T: std::str::FromStr>(args: &ArgMatches, name: &str) -> AlignResult<Option<T>> {
    match args.get_one::<String>(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>()
            .map(Some)
            .map_err(|_| AlignError::GenericError(format!("Invalid value for --{}: {}", name, raw))),
    }
}
