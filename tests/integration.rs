// ---------------------------------------------------------------------------
// Integration tests for vfsh
//
// Each test spawns the binary, pipes a command script into stdin, closes
// it, and asserts on the captured stdout. Logs go to stderr and are
// discarded.
// ---------------------------------------------------------------------------

use std::io::Write;
use std::process::{Command, Stdio};

fn run_shell(args: &[&str], script: &str) -> String {
    let bin = env!("CARGO_BIN_EXE_vfsh");
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn vfsh");

    child
        .stdin
        .take()
        .expect("no stdin")
        .write_all(script.as_bytes())
        .expect("failed to write script");

    let output = child.wait_with_output().expect("failed to wait for vfsh");
    assert!(output.status.success(), "vfsh exited with {}", output.status);
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

// ---------------------------------------------------------------------------
// Sample hierarchy
// ---------------------------------------------------------------------------

#[test]
fn lists_seeded_files_after_navigation() {
    let out = run_shell(&[], "cd Downloads\ncd Study Materials\nls\nexit\n");
    assert!(out.contains("Root/Downloads/Study Materials > "));
    assert!(out.contains("File1 (File)\nFile2 (File)\n"));
}

#[test]
fn finds_seeded_folder_by_name() {
    let out = run_shell(&[], "find Study Materials\nexit\n");
    assert!(out.contains("Found Study Materials at Root/Downloads/Study Materials\n"));
}

#[test]
fn stat_reports_seeded_file_details() {
    let out = run_shell(&[], "stat File1\nexit\n");
    assert!(out.contains(
        "Name: File1\nType: File\nSize: 100\nExtension: .txt\nLast Modified: 2022-01-01\n"
    ));
}

// ---------------------------------------------------------------------------
// Mutation round trips
// ---------------------------------------------------------------------------

#[test]
fn mkdir_cd_and_back() {
    let out = run_shell(&[], "mkdir Photos\ncd Photos\ncd ..\nexit\n");
    assert!(out.contains("Root/Photos > "));
    assert!(out.ends_with("Root > "));
}

#[test]
fn rm_then_find_reports_missing() {
    let out = run_shell(&[], "rm File1\nfind File1\nexit\n");
    assert!(out.contains("File1 not found.\n"));
}

#[test]
fn mv_and_cp_between_folders() {
    let out = run_shell(
        &[],
        "mkdir Backup\nmv File1 Backup\ncp File2 Backup\ncd Backup\nls\nexit\n",
    );
    assert!(out.contains("File1 (File)\nFile2 (File)\n"));
}

// ---------------------------------------------------------------------------
// Loop behavior
// ---------------------------------------------------------------------------

#[test]
fn invalid_command_is_non_fatal() {
    let out = run_shell(&[], "definitely not a command\nls\nexit\n");
    assert!(out.contains("Invalid command.\n"));
    assert!(out.contains("Downloads (Folder)\n"));
}

#[test]
fn eof_terminates_with_success() {
    let out = run_shell(&[], "ls\n");
    assert!(out.ends_with("Root > "));
}

// ---------------------------------------------------------------------------
// Seed file
// ---------------------------------------------------------------------------

#[test]
fn custom_seed_file_replaces_the_sample() {
    let dir = tempfile::tempdir().expect("tempdir");
    let seed_path = dir.path().join("seed.json");
    std::fs::write(
        &seed_path,
        r#"[{"name": "Music", "kind": "Folder",
            "children": [{"name": "track.mp3", "kind": "File",
                          "size": 7, "extension": ".mp3",
                          "last_modified": "2024-05-01"}]}]"#,
    )
    .expect("write seed");

    let out = run_shell(
        &["--seed", seed_path.to_str().expect("utf-8 path")],
        "ls\nfind track.mp3\nexit\n",
    );
    assert!(out.contains("Music (Folder)\n"));
    assert!(out.contains("Found track.mp3 at Root/Music/track.mp3\n"));
    assert!(!out.contains("Downloads"));
}
