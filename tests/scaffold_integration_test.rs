use aoc_new_year::utils::validation::{validate_target_path, validate_year};
use aoc_new_year::{LocalDirectoryStore, ScaffoldError, Scaffolder, Year};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_creates_twenty_five_days_with_data_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let year = validate_year("2020").unwrap();
    let base = validate_target_path(temp_dir.path().to_str().unwrap()).unwrap();

    let scaffolder = Scaffolder::new(LocalDirectoryStore::new());
    let outcome = scaffolder.create_project_tree(&year, &base).unwrap();

    assert!(outcome.year_dir_exists);
    assert_eq!(outcome.year_dir, temp_dir.path().join("2020"));
    assert_eq!(entry_names(temp_dir.path()), vec!["2020".to_string()]);

    let days = entry_names(&outcome.year_dir);
    let expected: Vec<String> = (1..=25).map(|day| format!("{:02}", day)).collect();
    assert_eq!(days, expected);
    assert_eq!(days[0], "01");
    assert_eq!(days[8], "09");
    assert_eq!(days[9], "10");

    for day in &days {
        let day_dir = outcome.year_dir.join(day);
        assert_eq!(entry_names(&day_dir), vec!["data".to_string()]);
        assert!(entry_names(&day_dir.join("data")).is_empty());
    }
}

#[test]
fn test_second_run_fails_on_existing_year() {
    let temp_dir = TempDir::new().unwrap();
    let year = Year::try_from(2021).unwrap();
    let scaffolder = Scaffolder::new(LocalDirectoryStore::new());

    scaffolder
        .create_project_tree(&year, temp_dir.path())
        .unwrap();
    let err = scaffolder
        .create_project_tree(&year, temp_dir.path())
        .unwrap_err();

    match err {
        ScaffoldError::DirectoryCreationError { path, source } => {
            assert_eq!(path, temp_dir.path().join("2021"));
            assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // 第一次建立的內容不受影響
    assert_eq!(entry_names(&temp_dir.path().join("2021")).len(), 25);
}

#[test]
fn test_invalid_input_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();

    assert!(matches!(
        validate_year("202"),
        Err(ScaffoldError::YearTooShort { .. })
    ));
    assert!(matches!(
        validate_year("abcd"),
        Err(ScaffoldError::InvalidYearFormat { .. })
    ));
    let missing = temp_dir.path().join("nope");
    assert!(matches!(
        validate_target_path(missing.to_str().unwrap()),
        Err(ScaffoldError::PathNotFound { .. })
    ));

    assert!(entry_names(temp_dir.path()).is_empty());
}

#[test]
fn test_year_beyond_u32_range() {
    let temp_dir = TempDir::new().unwrap();
    let year = validate_year("10000000000").unwrap();

    let outcome = Scaffolder::new(LocalDirectoryStore::new())
        .create_project_tree(&year, temp_dir.path())
        .unwrap();

    assert_eq!(outcome.year_dir, temp_dir.path().join("10000000000"));
    assert_eq!(entry_names(&outcome.year_dir).len(), 25);
}
