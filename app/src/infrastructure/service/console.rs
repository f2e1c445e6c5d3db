use std::io::{self, BufRead, Write};

use colored::Colorize;
use domain::service::Console;

/// Console on the process's stdin and stdout.
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn print(&self, text: &str) {
        println!("{text}");
    }

    fn read_line(&self, prompt: &str) -> anyhow::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt.bold())?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}
