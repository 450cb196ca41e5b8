extern crate clap;
extern crate pretty_env_logger;
extern crate serde_yaml;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, Arg, Command};
use lc_helper::{Session, SessionConfig};
use pretty_env_logger::init_timed;
use std::{fs::File, io::Write};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod contest;
    pub mod question;
    pub mod session;
}
mod read;
mod write;

use command::{contest, question, session};
use read::read_line;

#[allow(unused_must_use)]
fn load_config(stdout: &mut StandardStream, path: Option<&str>) -> SessionConfig {
    let path = match path {
        Some(p) => p,
        None => {
            write_info!(stdout, "Info", "No config given, using an anonymous session");
            return SessionConfig::default();
        }
    };
    match File::open(path) {
        Ok(f) => match serde_yaml::from_reader(f) {
            Ok(v) => return v,
            Err(e) => write_error!(stdout, "Error", "Error parse {}: {}", path, e),
        },
        Err(e) => write_error!(stdout, "Error", "Error open {}: {}", path, e),
    }
    SessionConfig::default()
}

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(Arg::new("config").help("Path to session config (yaml)"))
        .get_matches();
    let config = load_config(&mut stdout, app.value_of("config"));
    stdout.reset();
    let session = match Session::new(config) {
        Ok(s) => s,
        Err(e) => {
            write_error!(&mut stdout, "Error", "Error create session: {}", e);
            stdout.reset();
            return;
        }
    };
    // Closed input ends the loop the same way as "exit"
    while let Some(line) = read_line(&mut stdout, b"lc-helper> ") {
        match line.trim() {
            "status" => session::status(&mut stdout, &session).await,
            "checkin" => session::check_in(&mut stdout, &session).await,
            "egg" => session::easter_egg(&mut stdout, &session).await,
            "daily" => question::daily(&mut stdout, &session).await,
            "solve" => {
                question::solve(&mut stdout, &session).await;
            }
            "code" => {
                question::code(&mut stdout, &session).await;
            }
            "submit" => {
                question::submit(&mut stdout, &session).await;
            }
            "detail" => {
                question::detail(&mut stdout, &session).await;
            }
            "contest" => {
                contest::contest(&mut stdout, &session).await;
            }
            "ranking" => {
                contest::ranking(&mut stdout, &session).await;
            }
            "scan" => {
                contest::scan(&mut stdout, &session).await;
            }
            "cookies" => session::cookies(&mut stdout, &session),
            "save" => session::save(&mut stdout, &session),
            "exit" => break,
            "" => (),
            unknown => write_error!(
                &mut stdout,
                "Error",
                r#"lc-helper: unknown command "{}""#,
                unknown
            ),
        }
        stdout.reset();
    }
    session::close(&mut stdout, &session).await;
    stdout.reset();
}
