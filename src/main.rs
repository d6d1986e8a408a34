use std::env;
use std::process;

use clap::{App, Arg, ArgMatches};
use log::debug;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use sokoban_search::config::{SolverConfig, Strategy};
use sokoban_search::level::Level;
use sokoban_search::moves::Moves;
use sokoban_search::solver::{Outcome, SolverOk};
use sokoban_search::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves sokoban levels in the XSB format")
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .takes_value(true)
                .possible_values(&["brute-force", "bfs", "dfs", "a-star", "greedy"])
                .default_value("a-star")
                .help("search strategy"),
        )
        .arg(
            Arg::with_name("no-deadlocks")
                .long("no-deadlocks")
                .help("don't prune pushes into deadlocks"),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .help("maximum number of moves explored by brute force"),
        )
        .arg(
            Arg::with_name("max-states")
                .long("max-states")
                .takes_value(true)
                .help("give up after visiting this many states"),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .help("print the level after every move instead of only after pushes"),
        )
        .arg(
            Arg::with_name("status")
                .long("status")
                .help("print progress while solving"),
        )
        .arg(
            Arg::with_name("compare")
                .long("compare")
                .conflicts_with("verify")
                .help("solve using all strategies and print a table"),
        )
        .arg(
            Arg::with_name("verify")
                .long("verify")
                .takes_value(true)
                .value_name("MOVES")
                .help("check that the moves (LURD) solve the level instead of solving it"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let path = matches.value_of("file").unwrap();
    let level = path.load_level().unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap();
        println!(
            "Can't load level {} in {}: {}",
            path,
            current_dir.display(),
            err
        );
        process::exit(1);
    });
    debug!("Loaded level:\n{}", level);

    if let Some(moves) = matches.value_of("verify") {
        verify(&level, moves);
        return;
    }

    let config = build_config(&matches);
    if matches.is_present("compare") {
        println!("Comparing strategies on {}...", path);
        compare(&level, &config);
        return;
    }

    println!("Solving {}...", path);
    let solver_ok = level.solve(&config);
    println!("{}", solver_ok.stats);
    match solver_ok.outcome {
        Outcome::Solved(ref moves) => {
            println!("Found solution:");
            print!("{}", level.format_solution(moves, matches.is_present("steps")));
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        Outcome::NoSolution => println!("No solution"),
        Outcome::GaveUp(limit) => println!("Gave up: {}", limit),
    }
}

fn build_config(matches: &ArgMatches<'_>) -> SolverConfig {
    let strategy = parse_arg(matches, "strategy").unwrap_or(Strategy::AStar);
    let mut config = SolverConfig::new(strategy)
        .prune_deadlocks(!matches.is_present("no-deadlocks"))
        .print_status(matches.is_present("status"));
    if let Some(max_depth) = parse_arg(matches, "max-depth") {
        config = config.max_depth(max_depth);
    }
    if let Some(max_states) = parse_arg(matches, "max-states") {
        config = config.max_states(max_states);
    }
    config
}

fn parse_arg<T>(matches: &ArgMatches<'_>, name: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    matches.value_of(name).map(|value| {
        value.parse().unwrap_or_else(|err| {
            println!("Invalid value for --{}: {}", name, err);
            process::exit(1);
        })
    })
}

fn verify(level: &Level, moves: &str) {
    let moves: Moves = moves.parse().unwrap_or_else(|err| {
        println!("Failed to parse moves: {}", err);
        process::exit(1);
    });
    match level.replay(moves.dirs()) {
        Ok(ref state) if level.is_solved(state) => {
            println!("Valid solution");
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        Ok(_) => {
            println!("Moves are valid but don't solve the level");
            process::exit(1);
        }
        Err(err) => {
            println!("{}", err);
            process::exit(1);
        }
    }
}

fn compare(level: &Level, config: &SolverConfig) {
    let results: Vec<SolverOk> = Strategy::ALL
        .iter()
        .map(|&strategy| {
            let mut config = config.clone();
            config.strategy = strategy;
            level.solve(&config)
        })
        .collect();

    let mut table = Table::new();
    table.add_row(Row::new(
        ["Strategy", "Result", "Moves", "Pushes", "Created", "Visited", "Duplicates", "Pruned"]
            .iter()
            .map(|title| Cell::new(title))
            .collect(),
    ));
    for solver_ok in &results {
        let (result, move_cnt, push_cnt) = match solver_ok.outcome {
            Outcome::Solved(ref moves) => (
                "solved".to_string(),
                moves.move_cnt().to_string(),
                moves.push_cnt().to_string(),
            ),
            Outcome::NoSolution => ("no solution".to_string(), "-".to_string(), "-".to_string()),
            Outcome::GaveUp(limit) => (format!("gave up ({})", limit), "-".to_string(), "-".to_string()),
        };
        let stats = &solver_ok.stats;
        table.add_row(Row::new(vec![
            Cell::new(&solver_ok.strategy.to_string()),
            Cell::new(&result),
            Cell::new(&move_cnt),
            Cell::new(&push_cnt),
            Cell::new(&stats.total_created().separated_string()),
            Cell::new(&stats.total_visited().separated_string()),
            Cell::new(&stats.total_reached_duplicates().separated_string()),
            Cell::new(&stats.total_pruned_deadlocks().separated_string()),
        ]));
    }
    table.printstd();
}
