use std::process::Command;

#[test]
fn aag_gen_writes_requested_netlist() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let out_path = temp_dir.path().join("1.aag");

    let output = Command::new(env!("CARGO_BIN_EXE_aag-gen"))
        .arg(&out_path)
        .args(["10", "3", "0", "2", "4", "--seed", "5"])
        .output()
        .expect("run aag-gen");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let text = std::fs::read_to_string(&out_path).expect("read netlist");
    assert_eq!(text.lines().count(), 17);
    assert_eq!(text.lines().next(), Some("aag 10 3 0 2 4"));

    let output = Command::new(env!("CARGO_BIN_EXE_aag-check")).arg(&out_path).output().expect("run aag-check");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("#AIG     = 4"));
}

#[test]
fn aag_gen_seed_is_reproducible() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let paths = [temp_dir.path().join("a.aag"), temp_dir.path().join("b.aag")];

    for path in &paths {
        let status = Command::new(env!("CARGO_BIN_EXE_aag-gen"))
            .arg(path)
            .args(["100", "10", "0", "10", "50", "--seed", "2018"])
            .status()
            .expect("run aag-gen");
        assert!(status.success());
    }

    assert_eq!(std::fs::read(&paths[0]).unwrap(), std::fs::read(&paths[1]).unwrap());
}

#[test]
fn aag_gen_wrong_argument_count_prints_usage() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let out_path = temp_dir.path().join("1.aag");

    let output = Command::new(env!("CARGO_BIN_EXE_aag-gen"))
        .arg(&out_path)
        .args(["10", "3"])
        .output()
        .expect("run aag-gen");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: aag-gen"));
    assert!(!out_path.exists());
}

#[test]
fn aag_gen_precondition_failures_leave_no_file() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let out_path = temp_dir.path().join("1.aag");

    for counts in [["1", "1", "0", "1", "1"], ["10", "2", "1", "1", "2"]] {
        let output = Command::new(env!("CARGO_BIN_EXE_aag-gen"))
            .arg(&out_path)
            .args(counts)
            .output()
            .expect("run aag-gen");
        assert!(!output.status.success());
        assert!(!out_path.exists());
    }
}

#[test]
fn pattern_gen_writes_patterns_and_summary() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let out_path = temp_dir.path().join("1.pattern");

    let output = Command::new(env!("CARGO_BIN_EXE_pattern-gen"))
        .arg(&out_path)
        .args(["4", "5"])
        .output()
        .expect("run pattern-gen");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#Pattern = 5"));
    assert!(stdout.contains("#PI      = 4"));

    let text = std::fs::read_to_string(&out_path).expect("read patterns");
    assert_eq!(text.lines().count(), 5);
    assert!(text.lines().all(|line| line.len() == 4 && line.bytes().all(|b| b == b'0' || b == b'1')));
}

#[test]
fn pattern_gen_wrong_argument_count_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_pattern-gen")).arg("only-a-file").output().expect("run pattern-gen");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: pattern-gen"));
}

#[test]
fn aag_check_rejects_pattern_width_mismatch() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let aag_path = temp_dir.path().join("1.aag");
    let pattern_path = temp_dir.path().join("1.pattern");

    std::fs::write(&aag_path, "aag 3 2 0 1 1\n2\n4\n6\n6 2 5\nc\n").unwrap();
    std::fs::write(&pattern_path, "01\n10\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_aag-check"))
        .arg(&aag_path)
        .arg("--patterns")
        .arg(&pattern_path)
        .output()
        .expect("run aag-check");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("#Pattern = 2"));

    std::fs::write(&pattern_path, "011\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_aag-check"))
        .arg(&aag_path)
        .arg("--patterns")
        .arg(&pattern_path)
        .output()
        .expect("run aag-check");
    assert!(!output.status.success());
}
