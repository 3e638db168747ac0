use std::path::PathBuf;
use track_charts::commands::{validate_args, validate_catalog_file, ReportArgs};

fn write_catalog(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("data.json");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_default_args_paths() {
    let args = ReportArgs::default();

    assert_eq!(args.input, PathBuf::from("data.json"));
    assert_eq!(args.output_json, PathBuf::from("report.json"));
    assert!(!args.print_summary);
}

#[test]
fn test_validate_args_existing_input() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        input: write_catalog(&dir, "[]"),
        output_json: dir.path().join("report.json"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_input_is_directory() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        input: dir.path().to_path_buf(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        input: write_catalog(&dir, "[]"),
        output_json: PathBuf::new(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, r#"[{"id": "1", "name": "One", "album": {"name": "A"}}]"#);

    assert!(validate_catalog_file(path).is_ok());
}

#[test]
fn test_validate_catalog_file_rejects_scalar() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, "\"not a catalog\"");

    assert!(validate_catalog_file(path).is_err());
}
