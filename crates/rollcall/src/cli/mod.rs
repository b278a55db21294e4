//! # CLI Behavior
//!
//! This is **one possible UI client** for rollcall, not the application itself.
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ### Naked Execution (`rollcall`)
//!
//! Running `rollcall` with no arguments shows today's dashboard over the sample records.
//!
//! ### One-shot vs. Session
//!
//! Nothing is stored between runs. One-shot commands (`list`, `summary`, `export`, `print`,
//! `departments`) therefore only see the sample records. Adding records happens inside
//! `rollcall session`, where the store lives until the session ends.
//!
//! ## Module Structure
//!
//! - `commands`: context setup, per-command handlers and the session loop
//! - `render`: layout and template rendering
//! - `setup`: argument parsing via clap, including the session line grammar
//! - `styles`: light and dark themes
//! - `templates`: embedded template files

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
