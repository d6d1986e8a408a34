use assert_cmd::Command;

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::cargo_bin("sokoban-search")
        .unwrap()
        .args(args)
        .output()
        .unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[test]
fn run_one_row() {
    let output = r"Solving levels/one-row.txt...
States created total: 2
States visited total: 2
Reached duplicates total: 0
Created but not reached total: 0
Pruned deadlocks total: 0

Depth          Created        Visited        Duplicates     Unknown (not reached)
0:             1              1              0              0
1:             1              1              0              0

Found solution:
#@$.#

# @*#

R
Moves: 1
Pushes: 1
";

    Command::cargo_bin("sokoban-search")
        .unwrap()
        .arg("levels/one-row.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_walk_around_steps() {
    let (success, stdout) = run(&["--strategy", "bfs", "--steps", "levels/walk-around.txt"]);
    assert!(success);
    assert!(stdout.contains("Found solution:\n#######\n#     #\n#.@$  #\n"));
    // after "urrd" the player is right of the box
    assert!(stdout.contains("#######\n#     #\n#. $@ #\n#     #\n#######\n"));
    assert!(stdout.ends_with("urrdLL\nMoves: 6\nPushes: 2\n"));
}

#[test]
fn run_unsolvable() {
    let (success, stdout) = run(&["levels/dead-corner.txt"]);
    assert!(success);
    assert!(stdout.contains("Pruned deadlocks total: 2\n"));
    assert!(stdout.ends_with("No solution\n"));

    let (success, stdout) = run(&["-s", "dfs", "--no-deadlocks", "levels/dead-corner.txt"]);
    assert!(success);
    assert!(stdout.contains("Pruned deadlocks total: 0\n"));
    assert!(stdout.ends_with("No solution\n"));
}

#[test]
fn run_limits() {
    let (success, stdout) = run(&[
        "-s",
        "brute-force",
        "--max-depth",
        "4",
        "levels/two-boxes.txt",
    ]);
    assert!(success);
    assert!(stdout.ends_with("Gave up: depth limit reached\n"));

    let (success, stdout) = run(&["--max-states", "1", "levels/two-boxes.txt"]);
    assert!(success);
    assert!(stdout.ends_with("Gave up: state limit reached\n"));
}

#[test]
fn run_compare() {
    // keep brute force fast
    let (success, stdout) = run(&["--compare", "--max-depth", "8", "levels/two-boxes.txt"]);
    assert!(success);
    assert!(stdout.starts_with("Comparing strategies on levels/two-boxes.txt...\n"));
    for strategy in &["brute-force", "bfs", "dfs", "a-star", "greedy"] {
        assert!(stdout.contains(strategy));
    }
    assert!(stdout.contains("Duplicates"));
}

#[test]
fn run_verify() {
    let (success, stdout) = run(&["--verify", "uuurDurD", "levels/two-boxes.txt"]);
    assert!(success);
    assert_eq!(stdout, "Valid solution\nMoves: 8\nPushes: 2\n");

    let (success, stdout) = run(&["--verify", "uuu", "levels/two-boxes.txt"]);
    assert!(!success);
    assert_eq!(stdout, "Moves are valid but don't solve the level\n");

    let (success, stdout) = run(&["--verify", "l", "levels/two-boxes.txt"]);
    assert!(!success);
    assert_eq!(stdout, "Move 1 (l) is not possible\n");

    let (success, stdout) = run(&["--verify", "x", "levels/two-boxes.txt"]);
    assert!(!success);
    assert!(stdout.starts_with("Failed to parse moves"));
}

#[test]
fn run_bad_args() {
    // clap complains on stderr, nothing goes to stdout
    Command::cargo_bin("sokoban-search")
        .unwrap()
        .args(&["--strategy", "ida", "levels/one-row.txt"])
        .assert()
        .failure()
        .stdout("");

    let (success, stdout) = run(&["levels/does-not-exist.txt"]);
    assert!(!success);
    assert!(stdout.starts_with("Can't load level levels/does-not-exist.txt"));
}
