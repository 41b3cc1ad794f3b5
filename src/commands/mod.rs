//! Command layer: line parsing and per-command handler workflows.

pub mod handlers;

/// A parsed input line: lowercased verb plus its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub verb: String,
    pub args: Vec<String>,
}

/// Split an input line into a command verb and arguments.
///
/// The verb is matched case-insensitively; arguments keep their original
/// spelling. Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some(ParsedInput { verb, args })
}
