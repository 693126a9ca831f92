use std::process::Command;
use tempfile::TempDir;

#[test]
fn help_exits_zero() {
    let status = Command::new(env!("CARGO_BIN_EXE_aisweb"))
        .arg("--help")
        .status()
        .expect("run aisweb");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn invalid_icao_exits_two() {
    let status = Command::new(env!("CARGO_BIN_EXE_aisweb"))
        .arg("XX")
        .status()
        .expect("run aisweb");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn invalid_base_url_exits_two() {
    let status = Command::new(env!("CARGO_BIN_EXE_aisweb"))
        .args(["SBSP", "--base-url", "not a url"])
        .status()
        .expect("run aisweb");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn unreachable_site_exits_one_and_leaves_a_log_file() {
    let dir = TempDir::new().expect("tempdir");
    let status = Command::new(env!("CARGO_BIN_EXE_aisweb"))
        .args(["SBSP", "--base-url", "http://127.0.0.1:1/"])
        .args(["--log-dir", dir.path().to_str().unwrap()])
        .status()
        .expect("run aisweb");
    assert_eq!(status.code(), Some(1));

    let logs: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read log dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with("aisweb_") && name.ends_with(".log"))
        })
        .collect();
    assert_eq!(logs.len(), 1);
}
