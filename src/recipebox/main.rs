//! # Recipebox CLI
//!
//! The binary is thin: the CLI lives in `cli/`, and this file only invokes
//! `cli::run()` and turns an error into exit status 1.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/recipebox/cli/)                             │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, form normalization (commands.rs)         │
//! │  - Terminal output via colored (print.rs)                   │
//! │  - Interactive session loop (session.rs)                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!               recipebox::api::RecipeBoxApi
//! ```
//!
//! Recipes live in memory for one process. A single command sees the sample
//! collection; `recipebox session` keeps changes across many commands until it
//! ends.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
