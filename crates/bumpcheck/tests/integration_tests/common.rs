use std::{collections::HashMap, process::Command};

pub struct BumpcheckTest {
    pub env: HashMap<String, String>,
}

impl BumpcheckTest {
    pub fn new() -> Self {
        Self {
            env: HashMap::new(),
        }
    }

    pub fn bumpcheck(&self, args: &[&str]) -> BumpcheckOutput {
        let mut cmd = self.bumpcheck_command();
        cmd.args(args);

        let output = cmd.output().expect("Failed to execute bumpcheck command");
        BumpcheckOutput::new(output)
    }

    pub fn bumpcheck_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bumpcheck"));
        cmd.env_clear().envs(&self.env);
        cmd
    }
}

pub struct BumpcheckOutput {
    pub output: std::process::Output,
}

impl BumpcheckOutput {
    pub fn new(output: std::process::Output) -> Self {
        Self { output }
    }

    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    #[track_caller]
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success(),
            "Expected command to succeed, got {:#?}",
            self.output
        );
        self
    }

    #[track_caller]
    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.success(),
            "Expected command to fail, got {:#?}",
            self.output
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }
}
