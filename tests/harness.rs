use std::fs;

use npuzzle_search::error::{HarnessError, ParseError};
use npuzzle_search::problem::{read_problem, solve_file};
use npuzzle_search::Algorithm;

#[test]
fn solves_a_problem_file_and_writes_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "3\n3\n1-2-3-4-5-6-7-0-8\n").unwrap();

    let solution = solve_file(&input, &output, None).unwrap();

    assert_eq!(solution.algorithm, Algorithm::AStar);
    assert_eq!(fs::read_to_string(&output).unwrap(), "L 2 1");
}

#[test]
fn algorithm_codes_select_ids_bfs_astar() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");

    for (code, expected, report) in [
        (1, Algorithm::Ids, "L 3 1"),
        (2, Algorithm::Bfs, "L 3 0"),
        (3, Algorithm::AStar, "L 2 1"),
    ] {
        let input = dir.path().join(format!("input{}.txt", code));
        fs::write(&input, format!("{}\n3\n1-2-3-4-5-6-7-0-8", code)).unwrap();

        let solution = solve_file(&input, &output, None).unwrap();
        assert_eq!(solution.algorithm, expected);
        assert_eq!(fs::read_to_string(&output).unwrap(), report);
    }
}

#[test]
fn solved_board_reports_empty_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "2\n2\n1-2-3-0").unwrap();

    solve_file(&input, &output, None).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), " 1 0");
}

#[test]
fn malformed_file_is_rejected_before_searching() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "3\n3\n1-2-3-4-5-6-7-8").unwrap();

    let err = solve_file(&input, &output, None).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Parse(ParseError::TileCount { found: 8, .. })
    ));
    assert!(!output.exists());
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.txt");

    let err = read_problem(&input).unwrap_err();
    assert!(matches!(err, HarnessError::Io { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn unsolvable_board_fails_under_a_depth_guard() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "1\n3\n2-1-3-4-5-6-7-8-0").unwrap();

    let err = solve_file(&input, &output, Some(5)).unwrap_err();
    assert!(matches!(err, HarnessError::Solve(_)));
}
