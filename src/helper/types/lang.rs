extern crate serde;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Cpp,
    Java,
    Python,
    Python3,
    Mysql,
    Mssql,
    Oraclesql,
    C,
    Csharp,
    Javascript,
    Typescript,
    Bash,
    Php,
    Swift,
    Kotlin,
    Dart,
    Golang,
    Ruby,
    Scala,
    Rust,
    Racket,
    Erlang,
    Elixir,
    Pythondata,
    Postgresql,
}

const ALL: [(Lang, &str); 25] = [
    (Lang::Cpp, "cpp"),
    (Lang::Java, "java"),
    (Lang::Python, "python"),
    (Lang::Python3, "python3"),
    (Lang::Mysql, "mysql"),
    (Lang::Mssql, "mssql"),
    (Lang::Oraclesql, "oraclesql"),
    (Lang::C, "c"),
    (Lang::Csharp, "csharp"),
    (Lang::Javascript, "javascript"),
    (Lang::Typescript, "typescript"),
    (Lang::Bash, "bash"),
    (Lang::Php, "php"),
    (Lang::Swift, "swift"),
    (Lang::Kotlin, "kotlin"),
    (Lang::Dart, "dart"),
    (Lang::Golang, "golang"),
    (Lang::Ruby, "ruby"),
    (Lang::Scala, "scala"),
    (Lang::Rust, "rust"),
    (Lang::Racket, "racket"),
    (Lang::Erlang, "erlang"),
    (Lang::Elixir, "elixir"),
    (Lang::Pythondata, "pythondata"),
    (Lang::Postgresql, "postgresql"),
];

impl Lang {
    pub fn as_str(self) -> &'static str {
        ALL.iter()
            .find(|(l, _)| *l == self)
            .map(|(_, s)| *s)
            .unwrap_or("cpp")
    }
}
impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for Lang {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(l, _)| *l)
            .ok_or_else(|| format!("unknown language {}", s))
    }
}
impl Default for Lang {
    fn default() -> Self {
        Self::Cpp
    }
}
