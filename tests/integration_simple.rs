use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn reports_unexpected_and_unclosed_on_fixture() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_unclosed-divs"))
        .arg(fixture("nested.tsx"))
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Unexpected closing div at line 5: </div>\n\
         \n\
         Unclosed divs (1):\n\
         Line 6: <div>\n\
         \n\
         Total unclosed divs: 1\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn balanced_fixture_reports_zero() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_unclosed-divs"))
        .arg(fixture("balanced.tsx"))
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "\nUnclosed divs (0):\n\nTotal unclosed divs: 0\n");
}

#[test]
fn default_target_is_read_relative_to_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("byk-admin/src/app");
    std::fs::create_dir_all(&page).unwrap();
    std::fs::write(page.join("page.tsx"), "<div>\n<div>\n</div>\n").unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_unclosed-divs"))
        .current_dir(dir.path())
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unclosed divs (1):\nLine 1: <div>\n"));
    assert!(stdout.ends_with("Total unclosed divs: 1\n"));
}

#[test]
fn missing_file_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_unclosed-divs"))
        .arg(dir.path().join("missing.tsx"))
        .output()
        .expect("run binary");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: open file:"));
    assert!(stderr.contains("missing.tsx"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_unclosed-divs"))
        .arg(fixture("nested.tsx"))
        .arg("-vv")
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Scanning file:"));
    assert!(stderr.contains("openers=3, closers=3, matched=2, unmatched closers=1"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Scanning"));
}
