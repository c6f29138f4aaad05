pub mod geometry;
pub mod aligner;
pub mod run;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::RunAligner;

pub use aligner::{align_and_crop_to_overlap, compute_overlap, AlignError, AlignResult, AlignmentSettings, OverlapAligner, Role};
pub use geometry::{BoundingBox, OutputSize, OverlapRegion, PlacedImage, Point};
pub use run::{BatchProcessor, RunFolder, SettingsStore, ToolConfig};
