// tests/cli_run.rs

mod common;
use crate::common::{init_tracing, with_timeout};

use clap::Parser;

use dag_traveler::cli::{CliArgs, LogLevel};
use dag_traveler::errors::TravelerError;
use dag_traveler::logging::{level_from_log_level, parse_level_str};
use dag_traveler::run;

const CHAIN: &str = r#"{"A": {"start": true, "edges": {"B": 1}}, "B": {"edges": {"C": 2}}, "C": {}}"#;

fn args_for(dag: &str) -> CliArgs {
    CliArgs::try_parse_from(["dag-traveler", dag]).unwrap()
}

#[test]
fn parses_positional_json_and_flags() {
    let args = CliArgs::try_parse_from([
        "dag-traveler",
        CHAIN,
        "--log-level",
        "debug",
        "--timeout",
        "2.5",
    ])
    .unwrap();

    assert_eq!(args.dag.as_deref(), Some(CHAIN));
    assert!(args.file.is_none());
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    assert_eq!(args.timeout, Some(2.5));
    assert!(!args.dry_run);
}

#[test]
fn requires_exactly_one_graph_source() {
    assert!(CliArgs::try_parse_from(["dag-traveler"]).is_err());
    assert!(CliArgs::try_parse_from(["dag-traveler", CHAIN, "--file", "g.json"]).is_err());
    assert!(CliArgs::try_parse_from(["dag-traveler", "--file", "g.json"]).is_ok());
}

#[test]
fn log_level_flag_is_case_insensitive_with_aliases() {
    let level = |value: &str| {
        CliArgs::try_parse_from(["dag-traveler", CHAIN, "--log-level", value])
            .unwrap()
            .log_level
    };

    assert!(matches!(level("DEBUG"), Some(LogLevel::Debug)));
    assert!(matches!(level("Info"), Some(LogLevel::Info)));
    assert!(matches!(level("WARNING"), Some(LogLevel::Warn)));
    assert!(matches!(level("warning"), Some(LogLevel::Warn)));
    assert!(matches!(level("CRITICAL"), Some(LogLevel::Error)));
    assert!(
        CliArgs::try_parse_from(["dag-traveler", CHAIN, "--log-level", "loud"]).is_err()
    );
}

#[test]
fn log_levels_map_to_tracing_levels() {
    assert_eq!(level_from_log_level(LogLevel::Warn), tracing::Level::WARN);
    assert_eq!(parse_level_str(" DEBUG "), Some(tracing::Level::DEBUG));
    assert_eq!(parse_level_str("warning"), Some(tracing::Level::WARN));
    assert_eq!(parse_level_str("critical"), Some(tracing::Level::ERROR));
    assert_eq!(parse_level_str("loud"), None);
}

#[tokio::test(start_paused = true)]
async fn run_traverses_inline_graph() {
    with_timeout(async {
        init_tracing();

        let summary = run(args_for(CHAIN)).await.unwrap().expect("not a dry run");
        assert_eq!(summary.visits, 3);
        assert_eq!(summary.elapsed.as_secs(), 3);
    })
    .await
}

#[tokio::test(start_paused = true)]
async fn run_leaves_no_background_tasks_behind() {
    with_timeout(async {
        for _ in 0..3 {
            let mut args = args_for(CHAIN);
            args.timeout = Some(60.0);
            run(args).await.unwrap();
        }

        let metrics = tokio::runtime::Handle::current().metrics();
        assert_eq!(metrics.num_alive_tasks(), 0);
    })
    .await
}

#[tokio::test]
async fn dry_run_does_not_traverse() {
    let mut args = args_for(CHAIN);
    args.dry_run = true;

    assert!(run(args).await.unwrap().is_none());
}

#[tokio::test]
async fn run_surfaces_validation_errors() {
    let err = run(args_for(r#"{"A": {"start": true, "edges": {"B": 5}}, "B": {"edges": {"A": 3}}}"#))
        .await
        .unwrap_err();

    match err.downcast_ref::<TravelerError>() {
        Some(TravelerError::CycleDetected(node)) => assert_eq!(node, "A"),
        other => panic!("Expected CycleDetected, got: {:?}", other),
    }
}

#[tokio::test]
async fn run_reports_missing_start() {
    let err = run(args_for(r#"{"A": {"edges": {}}}"#)).await.unwrap_err();
    assert_eq!(err.to_string(), "No start node in this DAG");
}

#[tokio::test(start_paused = true)]
async fn timeout_cancels_the_traversal() {
    with_timeout(async {
        let mut args = args_for(r#"{"A": {"start": true, "edges": {"B": 30}}, "B": {}}"#);
        args.timeout = Some(1.0);

        let err = run(args).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TravelerError>(),
            Some(TravelerError::Cancelled)
        ));
    })
    .await
}

#[tokio::test]
async fn negative_timeout_is_rejected() {
    let mut args = args_for(CHAIN);
    args.timeout = Some(-1.0);

    let err = run(args).await.unwrap_err();
    assert!(format!("{err:#}").contains("invalid --timeout"));
}
