use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use baccarat_cli::config::{CONFIG_ENV, DEAL_ONLY_ENV, SEED_ENV, STARTING_BALANCE_ENV};

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_baccarat")),
        }
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        // Each run starts from a clean configuration unless the test sets one.
        for key in [CONFIG_ENV, SEED_ENV, STARTING_BALANCE_ENV, DEAL_ONLY_ENV, "RUST_LOG"] {
            cmd.env_remove(key);
        }
        cmd.envs(env.iter().copied());

        let mut child = cmd.spawn().expect("spawn baccarat binary");
        if let Some(text) = input {
            let mut stdin = child.stdin.take().expect("piped stdin");
            stdin.write_all(text.as_bytes()).expect("write stdin");
        }
        let output = child.wait_with_output().expect("wait for baccarat binary");

        CliResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
