use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aoc-new-year"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn count_entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_end_to_end_with_positional_arguments() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("aoc");
    fs::create_dir(&target).unwrap();

    let output = run(temp_dir.path(), &["2020", target.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Program complete with no errors, Goodbye!"));
    assert!(stdout.contains("    2020/25/data/"));
    assert_eq!(count_entries(&target.join("2020")), 25);
    assert!(target.join("2020/07/data").is_dir());

    let log = fs::read_to_string(temp_dir.path().join("aoc-new-year.log")).unwrap();
    assert!(log.contains("made"));
    assert!(log.contains("****** "));
}

#[test]
fn test_keyword_arguments_and_log_append() {
    let temp_dir = TempDir::new().unwrap();
    let dir_arg = format!("d:{}", temp_dir.path().display());

    let first = run(temp_dir.path(), &["y:2019", &dir_arg]);
    assert!(first.status.success());

    // 第二次執行：年份目錄已存在，應失敗
    let second = run(temp_dir.path(), &["y:2019", &dir_arg]);
    assert_eq!(second.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&second.stderr).contains("Could not create directory"));

    let log = fs::read_to_string(temp_dir.path().join("aoc-new-year.log")).unwrap();
    assert_eq!(log.matches("****** ").count(), 2);
    assert!(log.contains("ERROR"));
}

#[test]
fn test_validation_failures_exit_with_usage_code() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_str().unwrap();

    for args in [
        vec!["202", dir],
        vec!["abcd", dir],
        vec!["2020", "/definitely/not/a/real/dir"],
        vec!["--bogus"],
    ] {
        let output = run(temp_dir.path(), &args);
        assert_eq!(output.status.code(), Some(2), "args: {args:?}");
    }

    // 只有日誌檔
    assert_eq!(count_entries(temp_dir.path()), 1);
}

#[test]
fn test_help_version_and_dry_run_exit_zero() {
    let temp_dir = TempDir::new().unwrap();

    let help = run(temp_dir.path(), &["--help"]);
    assert!(help.status.success());
    assert!(String::from_utf8_lossy(&help.stdout).contains("y:<year>"));

    let version = run(temp_dir.path(), &["-v"]);
    assert!(version.status.success());
    assert!(String::from_utf8_lossy(&version.stdout).contains(env!("CARGO_PKG_VERSION")));

    let dry = run(
        temp_dir.path(),
        &["--dry-run", "2024", temp_dir.path().to_str().unwrap()],
    );
    assert!(dry.status.success());
    assert!(String::from_utf8_lossy(&dry.stdout).contains("  2024/01/"));
    assert!(!temp_dir.path().join("2024").exists());

    // help 與 version 也寫入日誌
    let log = fs::read_to_string(temp_dir.path().join("aoc-new-year.log")).unwrap();
    assert_eq!(log.matches("****** ").count(), 3);
}

#[test]
fn test_config_file_layout() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("aoc.toml");
    fs::write(
        &config_path,
        format!(
            "[defaults]\nyear = 2025\npath = '{}'\n\n[layout]\ndays = 12\ndata_dir = \"input\"\n",
            temp_dir.path().display()
        ),
    )
    .unwrap();

    let output = run(temp_dir.path(), &["--config", config_path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(count_entries(&temp_dir.path().join("2025")), 12);
    assert!(temp_dir.path().join("2025/12/input").is_dir());
    assert!(!temp_dir.path().join("2025/13").exists());
}
