extern crate termcolor;

use lc_helper::types::{ContestType, Lang};
use std::{
    fmt::Display,
    fs,
    io::{self, stdin, BufRead, Write},
    str::FromStr,
};
use termcolor::{Color, StandardStream, WriteColor};

/// Reads one trimmed line into `dest`. `None` means the input is closed.
#[allow(unused_must_use)]
fn line_from<R: BufRead, W: WriteColor>(
    input: &mut R,
    stdout: &mut W,
    prompt: &[u8],
    dest: &mut String,
) -> Option<()> {
    loop {
        dest.clear();
        stdout.write(prompt);
        stdout.flush();
        match input.read_line(dest) {
            Ok(0) => {
                writeln!(stdout);
                return None;
            }
            Ok(_) => {
                dest.truncate(dest.trim_end().len());
                return Some(());
            }
            Err(e) => write_error!(stdout, "Error", "Read: {}", e.to_string()),
        }
        stdout.reset();
    }
}

/// Prompts until the answer parses. An empty answer picks `default` when
/// there is one.
#[allow(unused_must_use)]
fn parsed_from<R, W, T>(input: &mut R, stdout: &mut W, prompt: &[u8], default: Option<T>) -> Option<T>
where
    R: BufRead,
    W: WriteColor,
    T: FromStr + Clone,
    T::Err: Display,
{
    let mut buf = String::new();
    loop {
        line_from(input, stdout, prompt, &mut buf)?;
        if buf.trim().is_empty() {
            if let Some(v) = &default {
                return Some(v.clone());
            }
        }
        match buf.trim().parse::<T>() {
            Ok(v) => return Some(v),
            Err(e) => write_error!(stdout, "Error", "parse: {}", e),
        }
        stdout.reset();
    }
}

pub fn read_line_to(stdout: &mut StandardStream, prompt: &[u8], dest: &mut String) -> Option<()> {
    line_from(&mut stdin().lock(), stdout, prompt, dest)
}
pub fn read_line(stdout: &mut StandardStream, prompt: &[u8]) -> Option<String> {
    let mut ret = String::new();
    read_line_to(stdout, prompt, &mut ret)?;
    Some(ret)
}

pub fn read_parsed<T>(stdout: &mut StandardStream, prompt: &[u8], default: Option<T>) -> Option<T>
where
    T: FromStr + Clone,
    T::Err: Display,
{
    parsed_from(&mut stdin().lock(), stdout, prompt, default)
}

#[allow(unused_must_use)]
pub fn read_number<T>(
    stdout: &mut StandardStream,
    prompt: &[u8],
    min: T,
    default: Option<T>,
) -> Option<T>
where
    T: FromStr + Copy + PartialOrd + Display,
    T::Err: Display,
{
    loop {
        let v = read_parsed(stdout, prompt, default)?;
        if v < min {
            write_error!(
                stdout,
                "Error",
                "parse: Value {} out of range. Expected value >= {}",
                v,
                min
            );
            stdout.reset();
        } else {
            return Some(v);
        }
    }
}

pub fn read_lang(stdout: &mut StandardStream) -> Option<Lang> {
    read_parsed(stdout, b"Language [cpp]: ", Some(Lang::default()))
}
pub fn read_contest_type(stdout: &mut StandardStream) -> Option<ContestType> {
    read_parsed(stdout, b"Contest type [weekly]: ", Some(ContestType::Weekly))
}

#[allow(unused_must_use)]
fn read_file_path<F: Fn(&String) -> Result<Ret, io::Error>, Ret>(
    stdout: &mut StandardStream,
    fun: F,
) -> Option<Ret> {
    let mut path = String::new();
    loop {
        read_line_to(stdout, b"File path: ", &mut path)?;
        match fun(&path) {
            Ok(v) => break Some(v),
            Err(e) => write_error!(stdout, "Error", "Error open {}: {}", path, e),
        }
        stdout.reset();
    }
}

pub fn read_source(stdout: &mut StandardStream) -> Option<String> {
    read_file_path(stdout, |p| fs::read_to_string(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use termcolor::NoColor;

    fn console(text: &str) -> (Cursor<Vec<u8>>, NoColor<Vec<u8>>) {
        (Cursor::new(text.as_bytes().to_vec()), NoColor::new(Vec::new()))
    }

    #[test]
    fn test_line_until_closed() {
        let (mut input, mut out) = console("status  \nexit");
        let mut buf = String::new();
        assert_eq!(line_from(&mut input, &mut out, b"> ", &mut buf), Some(()));
        assert_eq!(buf, "status");
        assert_eq!(line_from(&mut input, &mut out, b"> ", &mut buf), Some(()));
        assert_eq!(buf, "exit");
        assert_eq!(line_from(&mut input, &mut out, b"> ", &mut buf), None);
        assert!(buf.is_empty());
        assert_eq!(line_from(&mut input, &mut out, b"> ", &mut buf), None);
    }

    #[test]
    fn test_parsed_gives_up_when_closed() {
        let (mut input, mut out) = console("abc\n");
        assert_eq!(parsed_from::<_, _, u32>(&mut input, &mut out, b"n: ", None), None);
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("parse: invalid digit"));
    }

    #[test]
    fn test_parsed_default_and_retry() {
        let (mut input, mut out) = console("\nx\n42\n");
        assert_eq!(parsed_from(&mut input, &mut out, b"n: ", Some(7u32)), Some(7));
        assert_eq!(parsed_from(&mut input, &mut out, b"n: ", None::<u32>), Some(42));
        let (mut input, mut out) = console("Python3\n");
        assert_eq!(
            parsed_from(&mut input, &mut out, b"lang: ", Some(Lang::Cpp)),
            Some(Lang::Python3)
        );
    }
}
