use crate::helpers::cli_runner::CliRunner;

#[test]
fn s1_eof_before_start_is_clean() {
    let res = CliRunner::new().run_with_input(&["play", "--seed", "1"], "");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Enter 'start' to play or 'exit' to quit:"));
    assert!(res.stdout.contains("Final balance: 5000.00"));
}

#[test]
fn s2_rejected_bets_do_not_end_session() {
    let res = CliRunner::new().run_with_input(
        &["play", "--seed", "1", "--balance", "20"],
        "start\nPLAYER-50\nfoo\nBANKER-20\n",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("Insufficient balance"));
    assert!(res.stderr.contains("Invalid command"));
    assert!(res.stdout.contains("Bet placed: BANKER 20.00"));
    assert!(res.stdout.contains("Rounds played: 1"));
}

#[test]
fn s3_deal_only_flag() {
    let res = CliRunner::new().run_with_input(
        &["play", "--seed", "1", "--deal-only"],
        "start\n\nPLAYER-10\n",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Deal-only mode"));
    assert!(res.stderr.contains("Betting is disabled in deal-only mode."));
    assert!(res.stdout.contains("Rounds played: 1"));
}
