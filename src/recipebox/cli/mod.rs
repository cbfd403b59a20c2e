//! # CLI Behavior
//!
//! This is **one possible UI client** for recipebox, not the application
//! itself. For the layering, see the crate-level documentation in [`crate`].
//!
//! ## Naked Execution (`recipebox`)
//!
//! Running `recipebox` with no arguments defaults to `recipebox list`.
//!
//! ## Selectors
//!
//! Recipes are addressed by their position in the unfiltered list (`1`, `2`,
//! ...) or by UUID. Positions stay the same whatever `--search` shows, so
//! `list --search soup` followed by `view 3` means the third recipe overall.
//! Ingredients are addressed the same way within their recipe.
//!
//! ## Output
//!
//! Messages are colored by level. With `--json`, stdout carries only data and
//! messages go to stderr. Logs go to stderr, filtered by `RECIPEBOX_LOG`
//! (`warn` by default, `debug` with `--verbose`).

mod commands;
mod print;
mod session;
mod setup;

pub use commands::run;
