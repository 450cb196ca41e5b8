extern crate serde;
extern crate serde_yaml;
extern crate termcolor;

use serde::Serialize;
use std::{fmt::Display, io::Write};
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
pub fn write_result<T, E: Display>(
    stdout: &mut StandardStream,
    result: Result<T, E>,
    success: &str,
) -> Option<T> {
    match result {
        Ok(v) => {
            write_ok!(stdout, "Success", "{}", success);
            Some(v)
        }
        Err(e) => {
            write_error!(stdout, "Error", "{}", e);
            None
        }
    }
}

/// Dumps a payload as YAML, which reads better than JSON at a prompt.
#[allow(unused_must_use)]
pub fn write_payload<T: Serialize>(stdout: &mut StandardStream, value: &T) {
    match serde_yaml::to_string(value) {
        Ok(s) => {
            writeln!(stdout, "{}", s.trim_start_matches("---\n").trim_end());
        }
        Err(e) => write_error!(stdout, "Error", "format: {}", e),
    }
}
