//! Command-line configuration for the `npuzzle` binary.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::search::Algorithm;

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_OUTPUT: &str = "output.txt";

pub const USAGE: &str = "\
usage: npuzzle [--input PATH] [--output PATH] [--max-depth N] [--show]
       npuzzle --random SIZE [--walk N] [--seed N] [--algorithm NAME] [--max-depth N] [--show]

File mode reads a three-line problem (algorithm code, size, dash-separated
tiles) and writes `<moves> <developed> <cost>`. Random mode builds a solvable
board instead; --walk scrambles the goal with N random moves.
Algorithms: 1|ids, 2|bfs, 3|astar.";

/// Where the board comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    File {
        input: PathBuf,
        output: PathBuf,
    },
    Random {
        size: usize,
        walk: Option<usize>,
        seed: Option<u64>,
        algorithm: Algorithm,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub max_depth: Option<usize>,
    pub show: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::File {
                input: PathBuf::from(DEFAULT_INPUT),
                output: PathBuf::from(DEFAULT_OUTPUT),
            },
            max_depth: None,
            show: false,
            help: false,
        }
    }
}

impl Config {
    /// Parses arguments, not including the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut input = PathBuf::from(DEFAULT_INPUT);
        let mut output = PathBuf::from(DEFAULT_OUTPUT);
        let mut random: Option<usize> = None;
        let mut walk = None;
        let mut seed = None;
        let mut algorithm = Algorithm::AStar;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--input" => input = PathBuf::from(value(&arg, args.next())?),
                "--output" => output = PathBuf::from(value(&arg, args.next())?),
                "--max-depth" => config.max_depth = Some(number(&arg, args.next())?),
                "--random" => random = Some(number(&arg, args.next())?),
                "--walk" => walk = Some(number(&arg, args.next())?),
                "--seed" => seed = Some(number(&arg, args.next())?),
                "--algorithm" => algorithm = value(&arg, args.next())?.parse()?,
                "--show" => config.show = true,
                "-h" | "--help" => config.help = true,
                _ => return Err(ConfigError::UnknownArgument(arg.clone())),
            }
        }

        config.mode = match random {
            Some(size) if size >= 2 => Mode::Random {
                size,
                walk,
                seed,
                algorithm,
            },
            Some(size) => {
                return Err(ConfigError::InvalidValue {
                    flag: "--random".to_string(),
                    value: size.to_string(),
                })
            }
            None => Mode::File { input, output },
        };

        Ok(config)
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String, ConfigError> {
    next.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn number<T: std::str::FromStr>(flag: &str, next: Option<String>) -> Result<T, ConfigError> {
    let raw = value(flag, next)?;
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: raw,
    })
}
