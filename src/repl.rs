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

use std::fs;
use std::io::{self, Write};

use rustyline::error::ReadlineError;
use rustyline::Editor;

#[derive(Debug)]
pub enum GetLineError {
    Eof,
    Interrupted,
    Err(String),
}

/// A source of input lines.
pub trait Repl {
    fn get_line(&mut self, prompt: &str) -> Result<String, GetLineError>;
    fn add_to_history(&mut self, data: &str);
    fn save_history(&mut self);
}

pub struct ReadlineRepl {
    editor: Editor<()>,
    history_location: Option<String>,
}

impl ReadlineRepl {
    pub fn new(history_location: Option<String>) -> ReadlineRepl {
        let mut ed = ReadlineRepl {
            editor: Editor::<()>::new(),
            history_location,
        };

        if let Some(hl) = &ed.history_location {
            if ed.editor.load_history(hl).is_err() {
                println!("No previous history.");
            }
        }

        ed
    }
}

impl Repl for ReadlineRepl {
    fn get_line(&mut self, prompt: &str) -> Result<String, GetLineError> {
        self.editor
            .readline(prompt)
            .map_err(|e| match e {
                ReadlineError::Eof => GetLineError::Eof,
                ReadlineError::Interrupted => GetLineError::Interrupted,
                _ => GetLineError::Err(e.to_string()),
            })
    }

    fn add_to_history(&mut self, data: &str) {
        self.editor.add_history_entry(data);
    }

    fn save_history(&mut self) {
        if let Some(hl) = &self.history_location {
            if let Err(e) = self.editor.save_history(hl) {
                log::warn!("could not save history to {}: {}", hl, e);
            }
        }
    }
}

pub struct StdIoRepl {}

impl Repl for StdIoRepl {
    fn get_line(&mut self, prompt: &str) -> Result<String, GetLineError> {
        print!("{}", prompt);
        io::stdout()
            .flush()
            .map_err(|e| GetLineError::Err(e.to_string()))?;

        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => Err(GetLineError::Eof),
            Ok(_) => Ok(buf),
            Err(e) => Err(GetLineError::Err(e.to_string())),
        }
    }

    fn add_to_history(&mut self, _data: &str) {}

    fn save_history(&mut self) {}
}

/// Replays the lines of a file, without prompting.
pub struct FileRepl {
    lines: std::vec::IntoIter<String>,
}

impl FileRepl {
    pub fn new(path: &str) -> Result<FileRepl, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("could not read {}: {}", path, e))?;
        Ok(Self::from_contents(&contents))
    }

    pub fn from_contents(contents: &str) -> FileRepl {
        FileRepl {
            lines: contents
                .lines()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl Repl for FileRepl {
    fn get_line(&mut self, _prompt: &str) -> Result<String, GetLineError> {
        self.lines.next().ok_or(GetLineError::Eof)
    }

    fn add_to_history(&mut self, _data: &str) {}

    fn save_history(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_repl_replays_lines() {
        let mut repl = FileRepl::from_contents("12\n\n-7\n");
        assert_eq!("12", repl.get_line(">>> ").unwrap());
        assert_eq!("", repl.get_line(">>> ").unwrap());
        assert_eq!("-7", repl.get_line(">>> ").unwrap());
        match repl.get_line(">>> ") {
            Err(GetLineError::Eof) => (),
            other => panic!("expected end of file, got {:?}", other),
        }
    }

    #[test]
    fn missing_file() {
        assert!(FileRepl::new("/nonexistent/sly-input.txt").is_err());
    }
}
