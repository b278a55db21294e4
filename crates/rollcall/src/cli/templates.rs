//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone files under
//! `templates/` and embedded here at compile time, so layout can be edited and diffed apart
//! from the code.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so a line holding only a
//! block tag leaves nothing behind. Every visible line break comes from a line that prints
//! something.
//!
//! Column widths, truncation and padding are computed in Rust before the data reaches a
//! template; templates only choose styles and arrange lines. A screen made of several
//! sections (dashboard = window + counts + table) renders each section on its own and joins
//! them in [`super::render`].

pub const WINDOW_TEMPLATE: &str = include_str!("templates/window.tmp");
pub const COUNTS_TEMPLATE: &str = include_str!("templates/counts.tmp");
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const REPORT_TEMPLATE: &str = include_str!("templates/report.tmp");
pub const DEPARTMENTS_TEMPLATE: &str = include_str!("templates/departments.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");

/// Every template, by the name it is registered under.
pub const ALL: [(&str, &str); 6] = [
    ("window", WINDOW_TEMPLATE),
    ("counts", COUNTS_TEMPLATE),
    ("table", TABLE_TEMPLATE),
    ("report", REPORT_TEMPLATE),
    ("departments", DEPARTMENTS_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
];
