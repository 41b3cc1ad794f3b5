//! The interactive command loop.
//!
//! Strictly sequential: read one line, produce one reply, repeat. Command
//! failures are printed and the loop continues; only `exit`/`close` or the
//! end of the input stream stops it.

use crate::book::AddressBook;
use crate::commands::{handlers, parse_input};
use crate::config::Config;
use crate::error::CommandResult;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::debug;

const GREETING: &str = "Welcome! I am your assistant bot.";
const COMMAND_LIST: &str =
    "Commands: add, change, phone, all, add-birthday, show-birthday, birthdays, hello, exit, close";
const FAREWELL: &str = "Good bye!";

/// Run the command loop over stdin/stdout until exit or end of input.
pub fn run(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(config, &mut stdin.lock(), &mut stdout.lock())
}

fn run_loop(
    config: &Config,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let mut book = AddressBook::new();

    writeln!(output, "{}", GREETING)?;
    writeln!(output, "{}", COMMAND_LIST)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // end of input stream: orderly shutdown
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        }

        let Some(parsed) = parse_input(&line) else {
            writeln!(output, "Please enter a command.")?;
            continue;
        };
        debug!(verb = parsed.verb.as_str(), "dispatching command");

        let reply = match parsed.verb.as_str() {
            "exit" | "close" => {
                writeln!(output, "{}", FAREWELL)?;
                return Ok(());
            }
            "hello" => "How can I help you?".to_string(),
            "add" => render(handlers::add_contact(&mut book, &parsed.args)),
            "change" => render(handlers::change_contact(&mut book, &parsed.args)),
            "phone" => render(handlers::show_phone(&book, &parsed.args)),
            "all" => handlers::show_all(&book),
            "add-birthday" => render(handlers::add_birthday(&mut book, &parsed.args)),
            "show-birthday" => render(handlers::show_birthday(&book, &parsed.args)),
            "birthdays" => handlers::birthdays(&book, Local::now().date_naive()),
            _ => "Invalid command.".to_string(),
        };

        writeln!(output, "{}", reply)?;
    }
}

// Errors become replies; the loop never dies on a bad command.
fn render(result: CommandResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(err) => err.to_string(),
    }
}
