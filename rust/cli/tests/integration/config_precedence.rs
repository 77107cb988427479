use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use serde_json::Value;

fn cfg_json(res: &crate::helpers::cli_runner::CliResult) -> Value {
    assert_eq!(res.exit_code, 0, "cfg failed: {}", res.stderr);
    serde_json::from_str(&res.stdout).expect("cfg prints JSON")
}

#[test]
fn i1_cfg_shows_defaults() {
    let json = cfg_json(&CliRunner::new().run(&["cfg"]));
    assert_eq!(json["starting_balance"]["value"].as_f64(), Some(5000.0));
    assert_eq!(json["starting_balance"]["source"], "default");
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["deal_only"]["value"], false);
}

#[test]
fn i2_env_overrides_file() {
    let tfm = TempFileManager::new().expect("temp dir");
    let path = tfm
        .create_file("baccarat.toml", "seed = 1\nstarting_balance = 750.0\n")
        .expect("write config");
    let path = path.to_string_lossy().into_owned();

    let json = cfg_json(&CliRunner::new().run_with_env(
        &["cfg"],
        &[("BACCARAT_CONFIG", path.as_str()), ("BACCARAT_SEED", "99")],
    ));
    assert_eq!(json["seed"]["value"], 99);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["starting_balance"]["value"].as_f64(), Some(750.0));
    assert_eq!(json["starting_balance"]["source"], "file");
}

#[test]
fn i3_cli_seed_overrides_env() {
    let cli = CliRunner::new();
    let from_flag = cli.run_with_env(
        &["deal", "--seed", "5", "--rounds", "2"],
        &[("BACCARAT_SEED", "6")],
    );
    assert!(from_flag.stdout.starts_with("deal: seed=5 "));

    let from_env = cli.run_with_env(&["deal", "--rounds", "2"], &[("BACCARAT_SEED", "6")]);
    assert!(from_env.stdout.starts_with("deal: seed=6 "));
}

#[test]
fn i4_invalid_env_balance_is_an_error() {
    let res = CliRunner::new().run_with_env(&["cfg"], &[("BACCARAT_STARTING_BALANCE", "-1")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("starting_balance"));
}

#[test]
fn i5_deal_only_from_env_refuses_bets() {
    let res = CliRunner::new().run_with_env(&["cfg"], &[("BACCARAT_DEAL_ONLY", "yes")]);
    let json = cfg_json(&res);
    assert_eq!(json["deal_only"]["value"], true);
    assert_eq!(json["deal_only"]["source"], "env");
}
