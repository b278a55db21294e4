//! # Rollcall Architecture
//!
//! Rollcall tracks where lecturing staff are on a given span of days: in the office, on
//! medical or annual leave, off for a public holiday, or out on an external assignment.
//!
//! This crate is a **UI-agnostic library**. The `rollcall` binary is one client of it; the
//! same core could back a web dashboard or a chat bot without change.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Owns the API and the active FilterWindow                 │
//! │  - Recomputes the filtered view after every action          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Carries the department reference list                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, filter, summary, export, report, departments        │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait, append-only                           │
//! │  - InMemoryStore: records live for the session only         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process. The only file the
//! library ever touches is the CSV report written by [`commands::export::run`], and the
//! directory for it is always supplied by the caller.
//!
//! ## Data Flow
//!
//! A change to the store or to the window never updates anything incrementally. The view is
//! a pure function of both:
//!
//! ```text
//! records ──► filter(window) ──► rows ──► aggregate ──► counts
//!                                  │
//!                                  └──► to_csv / report
//! ```
//!
//! ## Module Overview
//!
//! - [`model`]: `Status`, `Department`, `AttendanceRecord`, `FilterWindow`, `StatusCount`
//! - [`range`]: the closed-interval overlap predicate
//! - [`store`]: storage abstraction and the in-memory backend
//! - [`commands`]: business logic for each operation
//! - [`api`]: the facade every client goes through
//! - [`session`]: explicit application state for interactive clients
//! - [`config`]: layered configuration (department list, defaults)
//! - [`sample`]: the fixture records a fresh session starts with
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod range;
pub mod sample;
pub mod session;
pub mod store;
