#![allow(dead_code)]

use std::process::{Command, Output};

pub const BIN: &str = env!("CARGO_BIN_EXE_enumgen");

pub trait CommandExt {
    fn run_and_check(&mut self) -> Output;
    fn run_and_fail(&mut self, code: i32) -> Output;
}

impl CommandExt for Command {
    fn run_and_check(&mut self) -> Output {
        let output = self.output().unwrap();

        assert!(
            output.status.success(),
            "Error running {}:\n{}",
            self.get_program().to_string_lossy(),
            String::from_utf8_lossy(&output.stderr)
        );

        output
    }

    fn run_and_fail(&mut self, code: i32) -> Output {
        let output = self.output().unwrap();

        assert_eq!(
            output.status.code(),
            Some(code),
            "Unexpected exit status running {}:\n{}",
            self.get_program().to_string_lossy(),
            String::from_utf8_lossy(&output.stderr)
        );

        output
    }
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
