use std::fs::{read_to_string, write};
use std::process::{Command, Output};
use tempfile::tempdir;

fn collector(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_collector"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn default_run_labels_paths_from_current_dir() {
    let dir = tempdir().unwrap();
    write(dir.path().join(".copyignore"), ".log\n").unwrap();
    write(dir.path().join("a.txt"), "hi").unwrap();
    write(dir.path().join("b.log"), "bye").unwrap();

    let out = collector(dir.path(), &[]);

    assert!(out.status.success());
    let sep = std::path::MAIN_SEPARATOR;
    assert_eq!(
        read_to_string(dir.path().join("collected_files.txt")).unwrap(),
        format!("===== .{sep}a.txt =====\nhi\n")
    );
    assert!(String::from_utf8_lossy(&out.stdout).contains("collected_files.txt"));
}

#[test]
fn missing_ignore_file_is_created_with_notice() {
    let dir = tempdir().unwrap();
    write(dir.path().join("a.txt"), "hi").unwrap();

    let out = collector(dir.path(), &[]);

    assert!(out.status.success());
    assert!(read_to_string(dir.path().join(".copyignore")).unwrap().starts_with('#'));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Created"));
}

#[test]
fn glob_mode_from_command_line() {
    let dir = tempdir().unwrap();
    write(dir.path().join(".copyignore"), "*.log\n").unwrap();
    write(dir.path().join("a.txt"), "hi").unwrap();
    write(dir.path().join("b.log"), "bye").unwrap();

    assert!(collector(dir.path(), &["--match", "glob", "-o", "out.txt"]).status.success());

    let output = read_to_string(dir.path().join("out.txt")).unwrap();
    assert!(output.contains("hi"));
    assert!(!output.contains("bye"));
}

#[test]
fn absolute_output_and_ignore_paths_stay_excluded() {
    let dir = tempdir().unwrap();
    write(dir.path().join("rules"), "# none\n").unwrap();
    write(dir.path().join("a.txt"), "hi").unwrap();
    let output = dir.path().join("bundle.txt");
    let ignore = dir.path().join("rules");
    let args = ["-o", output.to_str().unwrap(), "-i", ignore.to_str().unwrap()];

    assert!(collector(dir.path(), &args).status.success());
    let first = read_to_string(&output).unwrap();
    assert!(collector(dir.path(), &args).status.success());
    let second = read_to_string(&output).unwrap();

    let sep = std::path::MAIN_SEPARATOR;
    assert_eq!(first, format!("===== .{sep}a.txt =====\nhi\n"));
    assert_eq!(first, second);
}

#[test]
fn unknown_match_mode_fails() {
    let dir = tempdir().unwrap();

    let out = collector(dir.path(), &["--match", "regex"]);

    assert!(!out.status.success());
    assert!(!dir.path().join("collected_files.txt").exists());
}

#[test]
fn missing_root_fails_without_output() {
    let dir = tempdir().unwrap();

    let out = collector(dir.path(), &["does-not-exist"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not a directory"));
}
