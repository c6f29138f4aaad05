//! Tests for run folder discovery

use std::fs;
use tempfile::TempDir;

use crate::aligner::Role;
use crate::run::{find_run_folders, RunFolder, ToolConfig};
use super::test_utils::{create_run, write_rgb};

#[test]
fn test_runs_sorted_numerically() {
    let base = TempDir::new().unwrap();
    for name in ["run10", "run2", "run1"].iter() {
        create_run(base.path(), name, 4, 4);
    }

    let runs = find_run_folders(base.path(), &ToolConfig::default()).unwrap();
    let names: Vec<&str> = runs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["run1", "run2", "run10"]);
    assert_eq!(runs[2].number, 10);
}

#[test]
fn test_incomplete_and_foreign_folders_skipped() {
    let base = TempDir::new().unwrap();
    create_run(base.path(), "run1", 4, 4);

    let partial = base.path().join("run2");
    fs::create_dir_all(&partial).unwrap();
    write_rgb(&partial.join("single.png"), 4, 4, [0, 0, 0]);

    create_run(base.path(), "runx", 4, 4);
    create_run(base.path(), "other", 4, 4);
    fs::write(base.path().join("run3"), b"not a directory").unwrap();

    let runs = find_run_folders(base.path(), &ToolConfig::default()).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].name, "run1");
}

#[test]
fn test_image_files_and_roles() {
    let base = TempDir::new().unwrap();
    let dir = create_run(base.path(), "run1", 4, 4);
    write_rgb(&dir.join("series_1.jpeg"), 4, 4, [1, 2, 3]);
    fs::write(dir.join("notes.txt"), b"skip me").unwrap();

    let config = ToolConfig::default();
    let run = RunFolder::from_path(&dir).unwrap();
    let names: Vec<String> = run.image_files(&config).unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["series_0.jpg", "series_1.jpeg", "single.png"]);

    assert_eq!(run.role_for("single.png", &config), Role::Reference);
    assert_eq!(run.role_for("series_1.jpeg", &config), Role::Series);
}

#[test]
fn test_run_name_pattern() {
    assert!(RunFolder::from_path(std::path::Path::new("/data/run007")).is_some());
    assert!(RunFolder::from_path(std::path::Path::new("/data/run")).is_none());
    assert!(RunFolder::from_path(std::path::Path::new("/data/run1a")).is_none());
    assert!(RunFolder::from_path(std::path::Path::new("/data/myrun1")).is_none());
}
