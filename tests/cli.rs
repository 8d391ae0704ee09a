//! End-to-end runs of the command-line tools on temporary input files.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const RECORDS: &str = "# header line\n\
H\tVN:Z:1.0\n\
S\tseq1\tACGT\tLN:i:4\n\
S\tseq2\tGG\tLN:i:2\tRC:i:7\n\
E\te1\tseq1\tseq2\tinclusion\n\
E\te2\tseq2\tseq1\tlink\n";

fn input_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_extract_positional_and_tagged() {
    let file = input_file(RECORDS);
    let path = file.path().to_str().unwrap();
    let output = run(
        env!("CARGO_BIN_EXE_tabrec-extract"),
        &[path, "--fields", "S.1|LN"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "seq1\t4\nseq2\t2\n");
}

#[test]
fn test_extract_subtype_with_fieldnames() {
    let file = input_file(RECORDS);
    let path = file.path().to_str().unwrap();
    let output = run(
        env!("CARGO_BIN_EXE_tabrec-extract"),
        &[
            path,
            "--fields",
            "E:link.from|to",
            "--fieldnames",
            "E:id,from,to,kind",
            "--subtype-column",
            "4",
        ],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "seq2\tseq1\n");
}

#[test]
fn test_extract_json_output_file() {
    let file = input_file(RECORDS);
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("nested").join("out.jsonl");
    let output = run(
        env!("CARGO_BIN_EXE_tabrec-extract"),
        &[
            file.path().to_str().unwrap(),
            "--fields",
            "S.RC|1;H.VN",
            "--json",
            "-o",
            out_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success());
    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        written,
        "{\"VN\":\"1.0\"}\n{\"1\":\"seq1\"}\n{\"RC\":\"7\",\"1\":\"seq2\"}"
    );
}

#[test]
fn test_extract_rejects_malformed_path() {
    let file = input_file(RECORDS);
    let output = run(
        env!("CARGO_BIN_EXE_tabrec-extract"),
        &[file.path().to_str().unwrap(), "--fields", "S.1;E"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not contain field names"), "Got: {stderr}");
}

#[test]
fn test_extract_out_of_range_fails() {
    let file = input_file(RECORDS);
    let output = run(
        env!("CARGO_BIN_EXE_tabrec-extract"),
        &[file.path().to_str().unwrap(), "--fields", "H.3"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"), "Got: {stderr}");
}

#[test]
fn test_count_all_and_filtered() {
    let file = input_file(RECORDS);
    let path = file.path().to_str().unwrap();

    let output = run(env!("CARGO_BIN_EXE_tabrec-count"), &[path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "H\t1\nS\t2\nE\t2\n");

    let output = run(
        env!("CARGO_BIN_EXE_tabrec-count"),
        &[path, "--records", "E:inclusion;H"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "H\t1\nE\t1\n");
}
