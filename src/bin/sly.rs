// Copyright 2018-2019 Matthieu Felix
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;

use clap::{App, Arg, ErrorKind};
use log::debug;
use sly::repl::{FileRepl, GetLineError, ReadlineRepl, Repl, StdIoRepl};
use sly::{pretty_print, SchemeInteger};

fn main() {
    pretty_env_logger::init();
    let args: Vec<String> = env::args().collect();
    match do_main(args) {
        Err(e) => {
            println!("error: {}", e);
            std::process::exit(1)
        }
        Ok(()) => std::process::exit(0),
    }
}

fn do_main(args: Vec<String>) -> Result<(), String> {
    let options = match parse_args(&args.iter().map(|x| &**x).collect::<Vec<_>>())
        .map_err(|e| format!("could not parse arguments: {}", e))?
    {
        Some(options) => options,
        None => return Ok(()),
    };
    debug!("starting with {:?}", options);

    let mut repl: Box<dyn Repl> = match &options.input_file {
        Some(f) => Box::new(FileRepl::new(f)?),
        None => {
            if options.enable_readline {
                Box::new(ReadlineRepl::new(Some(options.history_file.clone())))
            } else {
                Box::new(StdIoRepl {})
            }
        }
    };

    loop {
        let line = match repl.get_line(">>> ") {
            Ok(line) => line,
            Err(GetLineError::Eof) | Err(GetLineError::Interrupted) => break,
            Err(GetLineError::Err(s)) => {
                println!("Readline error: {}", s);
                continue;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        repl.add_to_history(line);
        for output in echo_line(line, options.radix) {
            println!("{}", output);
        }
    }

    repl.save_history();
    Ok(())
}

/// Reads every whitespace-separated integer literal on a line, and returns the canonical
/// representation of each one, or the error it caused.
fn echo_line(line: &str, radix: u32) -> Vec<String> {
    line.split_whitespace()
        .map(|token| match SchemeInteger::from_text_radix(token, radix) {
            Ok(i) => pretty_print(&i),
            Err(e) => format!("error: {}", e),
        })
        .collect()
}

#[derive(Debug)]
struct Options {
    pub enable_readline: bool,
    pub input_file: Option<String>,
    pub history_file: String,
    pub radix: u32,
}

/// Returns `None` when clap already answered the invocation, i.e. for `--help` and `--version`.
fn parse_args(args: &[&str]) -> Result<Option<Options>, String> {
    let matches = App::new("Sly")
        .version("0.1")
        .author("Matthieu Felix <matthieufelix@gmail.com>")
        .about("Prints the canonical representation of exact integer literals")
        .arg(
            Arg::with_name("no-readline")
                .long("no-readline")
                .help("Disable readline library"),
        )
        .arg(
            Arg::with_name("history-file")
                .long("history-file")
                .takes_value(true)
                .default_value("history.txt")
                .help("File to load and save readline history"),
        )
        .arg(
            Arg::with_name("radix")
                .long("radix")
                .takes_value(true)
                .default_value("10")
                .help("Radix of the input literals, between 2 and 36"),
        )
        .arg(Arg::with_name("input-file").help("Sets the input file to use"))
        .get_matches_from_safe(args);
    let matches = match matches {
        Ok(matches) => matches,
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => {
                if !e.message.is_empty() {
                    println!("{}", e.message);
                }
                return Ok(None);
            }
            _ => return Err(e.message),
        },
    };

    let radix = matches
        .value_of("radix")
        .unwrap_or("10")
        .parse::<u32>()
        .map_err(|e| format!("invalid radix: {}", e))?;
    if radix < 2 || radix > 36 {
        return Err(format!("invalid radix {}, expecting 2 to 36", radix));
    }

    Ok(Some(Options {
        enable_readline: !matches.is_present("no-readline"),
        input_file: matches.value_of("input-file").map(|v| v.to_string()),
        history_file: matches
            .value_of("history-file")
            .unwrap_or("history.txt")
            .to_string(),
        radix,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_normalizes_each_token() {
        assert_eq!(
            vec!["7", "-12", "0", "error: malformed integer literal: `1x`"],
            echo_line("007  -12 -0 1x", 10)
        );
        assert_eq!(vec!["255"], echo_line("ff", 16));
    }

    #[test]
    fn default_options() {
        let options = parse_args(&["sly"]).unwrap().unwrap();
        assert!(options.enable_readline);
        assert_eq!(None, options.input_file);
        assert_eq!("history.txt", options.history_file);
        assert_eq!(10, options.radix);
    }

    #[test]
    fn explicit_options() {
        let options =
            parse_args(&["sly", "--no-readline", "--radix", "16", "input.scm"])
                .unwrap()
                .unwrap();
        assert!(!options.enable_readline);
        assert_eq!(Some("input.scm".to_string()), options.input_file);
        assert_eq!(16, options.radix);
    }

    #[test]
    fn bad_radix() {
        assert!(parse_args(&["sly", "--radix", "40"]).is_err());
        assert!(parse_args(&["sly", "--radix", "ten"]).is_err());
        assert!(parse_args(&["sly", "--no-such-flag"]).is_err());
    }

    #[test]
    fn help_and_version_are_not_errors() {
        assert!(parse_args(&["sly", "--help"]).unwrap().is_none());
        assert!(parse_args(&["sly", "-h"]).unwrap().is_none());
        assert!(parse_args(&["sly", "--version"]).unwrap().is_none());
    }
}
