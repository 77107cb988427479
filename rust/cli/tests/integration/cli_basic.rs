use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;

#[test]
fn a1_help_lists_every_command() {
    let res = CliRunner::new().run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["play", "deal", "counts", "cfg"] {
        assert!(res.stdout.contains(cmd), "help missing {cmd}: {}", res.stdout);
    }
}

#[test]
fn a2_unknown_command_exits_with_error() {
    let res = CliRunner::new().run(&["shuffle"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Usage: baccarat <command> [options]"));
}

#[test]
fn a3_seeded_deal_is_reproducible_across_processes() {
    let cli = CliRunner::new();
    let first = cli.run(&["deal", "--seed", "2024", "--rounds", "5"]);
    let second = cli.run(&["deal", "--seed", "2024", "--rounds", "5"]);
    assert_eq!(first.exit_code, 0);
    assert_eq!(first.stdout, second.stdout);
    assert!(first.stdout.starts_with("deal: seed=2024 rounds=5"));
}

#[test]
fn a4_deal_json_lines_parse() {
    let res = CliRunner::new().run(&["deal", "--seed", "8", "--rounds", "3", "--json"]);
    assert_eq!(res.exit_code, 0);
    let rounds: Vec<Value> = res
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();
    assert_eq!(rounds.len(), 3);
    for r in rounds {
        let outcome = r["outcome"].as_str().unwrap();
        assert!(["PLAYER", "BANKER", "TIE"].contains(&outcome));
        let n = r["player"]["cards"].as_array().unwrap().len();
        assert!((2..=3).contains(&n));
    }
}

#[test]
fn a5_counts_reports_every_rank() {
    let res = CliRunner::new().run(&["counts", "--seed", "5", "--rounds", "20"]);
    assert_eq!(res.exit_code, 0);
    for rank in ["A", "2", "10", "J", "Q", "K"] {
        assert!(
            res.stdout.lines().any(|l| l.starts_with(&format!("{rank}: "))),
            "missing rank {rank}"
        );
    }
    assert!(res.stdout.contains("/416"));
}

#[test]
fn a6_play_reads_piped_stdin() {
    let res = CliRunner::new().run_with_input(
        &["play", "--seed", "12", "--balance", "1000"],
        "start\nTIE-10\n\nbalance\nexit\n",
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Bet placed: TIE 10.00"));
    assert!(res.stdout.contains("No bet placed."));
    assert!(res.stdout.contains("Rounds played: 2"));
}

#[test]
fn a7_debug_logging_goes_to_stderr_only() {
    let res = CliRunner::new().run_with_env(
        &["deal", "--seed", "1", "--json"],
        &[("RUST_LOG", "baccarat_engine=debug")],
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("round resolved"));
    for line in res.stdout.lines() {
        serde_json::from_str::<Value>(line).expect("stdout stays pure JSON");
    }
}
