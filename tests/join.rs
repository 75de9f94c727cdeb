use std::fs;

use hvrjoin::{sequences, PipelineError};

#[test]
fn joins_two_records_under_one_header() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("S501N703_S11.fasta");
    let b = dir.path().join("S501N703_S12.fasta");
    fs::write(&a, ">S501N703_S11\n  L1  \nL2\n").unwrap();
    fs::write(&b, ">S501N703_S12\nL3\n>extra header\nL4\n").unwrap();

    let output = sequences::join(&a, &b, dir.path(), "fasta").unwrap();

    assert_eq!(output, dir.path().join("S501N703_joined.fasta"));
    assert_eq!(fs::read_to_string(output).unwrap(), ">S501N703\nL1L2L3L4");
}

#[test]
fn wrong_extension_fails_before_opening_anything() {
    let dir = tempfile::tempdir().unwrap();
    // Neither file exists, so a File-Not-Found would mean the type check ran late.
    let err = sequences::join(
        dir.path().join("S1.txt"),
        dir.path().join("S2.fasta"),
        dir.path(),
        "fasta",
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::WrongFileType(_)));

    let err = sequences::join(
        dir.path().join("S1.fasta"),
        dir.path().join("S2.fa"),
        dir.path(),
        "fasta",
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::WrongFileType(_)));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_and_malformed_inputs_have_different_status() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("S1.fasta");
    let bad = dir.path().join("S2.fasta");
    fs::write(&good, ">S1\nACGT\n").unwrap();
    fs::write(&bad, "ACGT\n").unwrap();

    let missing = sequences::join(&good, dir.path().join("S3.fasta"), dir.path(), "fasta")
        .unwrap_err();
    let malformed = sequences::join(&good, &bad, dir.path(), "fasta").unwrap_err();

    assert!(matches!(missing, PipelineError::FileNotFound(_)));
    assert!(matches!(malformed, PipelineError::Format(_)));
    assert_ne!(missing.exit_code(), malformed.exit_code());
    assert!(!dir.path().join("S1_joined.fasta").exists());
}

#[test]
fn unreadable_input_exits_like_a_missing_one() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("S1.fasta");
    let as_dir = dir.path().join("S2.fasta");
    fs::write(&good, ">S1\nACGT\n").unwrap();
    fs::create_dir(&as_dir).unwrap();

    let err = sequences::join(&good, &as_dir, dir.path(), "fasta").unwrap_err();

    assert!(matches!(err, PipelineError::Unreadable { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(!dir.path().join("S1_joined.fasta").exists());
}
