mod common;

use crate::common::BumpcheckTest;

#[test]
fn test_no_arguments() {
    let test = BumpcheckTest::new();
    let result = test.bumpcheck(&[]);
    result.assert_failure();
    assert_eq!(result.output.status.code(), Some(2));
    let stderr = result.stderr();
    assert!(
        stderr.contains("the following required arguments were not provided"),
        "unexpected stderr: {stderr}"
    );
    assert!(result.stdout().is_empty());
}

#[test]
fn test_help() {
    let test = BumpcheckTest::new();
    let result = test.bumpcheck(&["--help"]);
    result.assert_success();
    let stdout = result.stdout();
    assert!(stdout.contains("<REFERENCE_VERSION>"));
    assert!(stdout.contains("<CANDIDATE_VERSION>"));
}
