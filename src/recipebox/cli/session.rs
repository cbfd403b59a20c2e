//! Interactive session.
//!
//! The store lives only as long as the process, so a session is the way to
//! make several edits and see them. Each line is a regular subcommand
//! (`create Soup -c Soup`, `list --search soup`, `edit 2 --clear tags`).
//! Errors are printed and the loop carries on; `exit`, `quit` or end of
//! input end the session.
//!
//! On a terminal the prompt uses rustyline (history, line editing). Piped
//! input is read line by line without a prompt.

use super::commands::{execute, AppContext};
use super::setup::Cli;
use clap::Parser;
use colored::Colorize;
use recipebox::error::{RecipeBoxError, Result};
use recipebox::seed::DEFAULT_USER;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, IsTerminal};

const PROMPT: &str = "recipebox> ";

enum Flow {
    Continue,
    Exit,
}

pub(super) fn run(ctx: &mut AppContext) -> Result<()> {
    if std::io::stdin().is_terminal() {
        run_interactive(ctx)
    } else {
        run_piped(ctx)
    }
}

fn run_interactive(ctx: &mut AppContext) -> Result<()> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| RecipeBoxError::Api(format!("Could not start line editor: {}", e)))?;

    println!("{}", format!("Welcome back, {}.", DEFAULT_USER).bold());
    println!(
        "{}",
        "Changes last until you leave. Type 'help' for commands, 'exit' to quit.".dimmed()
    );

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                if let Flow::Exit = handle_line(ctx, line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                return Err(RecipeBoxError::Api(format!("Could not read input: {}", e)));
            }
        }
    }

    println!("{}", "Goodbye.".dimmed());
    Ok(())
}

fn run_piped(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Flow::Exit = handle_line(ctx, line) {
            break;
        }
    }
    Ok(())
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Flow {
    let words = match split_line(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}", e.red());
            return Flow::Continue;
        }
    };

    match words.first().map(String::as_str) {
        Some("exit") | Some("quit") => return Flow::Exit,
        Some("help") => {
            let args = std::iter::once("recipebox".to_string())
                .chain(words.into_iter().skip(1))
                .chain(std::iter::once("--help".to_string()));
            if let Err(e) = Cli::try_parse_from(args) {
                let _ = e.print();
            }
            return Flow::Continue;
        }
        _ => {}
    }

    let args = std::iter::once("recipebox".to_string()).chain(words);
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Flow::Continue;
        }
    };

    let session_json = ctx.json;
    ctx.json = session_json || cli.json;
    if let Err(e) = execute(ctx, cli.command) {
        eprintln!("{}", format!("Error: {}", e).red());
    }
    ctx.json = session_json;

    Flow::Continue
}

/// Splits a line into words. Single and double quotes group words, and a
/// backslash escapes the next character outside single quotes.
fn split_line(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unclosed {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> Vec<String> {
        split_line(line).unwrap()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split("  list   --search soup "), vec!["list", "--search", "soup"]);
        assert!(split("   ").is_empty());
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split(r#"create "Apple Pie" -d 'Grandma''s best'"#),
            vec!["create", "Apple Pie", "-d", "Grandmas best"]
        );
        assert_eq!(split(r#"edit 1 -d """#), vec!["edit", "1", "-d", ""]);
    }

    #[test]
    fn escapes_and_pipes() {
        assert_eq!(
            split(r#"ingredient add 1 "2|cup|flour" it\'s"#),
            vec!["ingredient", "add", "1", "2|cup|flour", "it's"]
        );
    }

    #[test]
    fn reports_unbalanced_input() {
        assert!(split_line(r#"create "Soup"#).is_err());
        assert!(split_line("create soup\\").is_err());
    }
}
