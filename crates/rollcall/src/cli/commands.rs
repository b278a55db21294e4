//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, whether stdin is a terminal)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Context Setup**: load configuration, seed the store, build the session
//! 2. **Window Setup**: turn `--from/--to/--dept` into the session's filter window
//! 3. **Dispatch**: call the matching `Session` method
//! 4. **Output**: render through templates, or print JSON with `--output json`
//!
//! ## Sessions
//!
//! `rollcall session` reads one command per line. On a terminal it shows a prompt; with
//! piped stdin it runs the lines as a script. A failing line prints `Error: ...` to stderr
//! and the session carries on, since every failure (a missing field, a bad date, an
//! inverted range) is fixed by typing the line again. End of input ends the session like
//! `quit`.
//!
//! ## Structure
//!
//! - `run()`: one-shot dispatch (called by `main.rs`)
//! - `init_context()`: builds `AppContext` from config and flags
//! - `handle_*()`: per-command handlers shared by one-shot commands and sessions
//! - `run_session()` / `run_session_line()`: the line loop

use super::render::Renderer;
use super::setup::{split_line, Cli, Commands, OutputMode, SessionCommand, SessionLine, WindowArgs};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use rollcallapp::api::{CmdResult, RollcallApi};
use rollcallapp::commands::export::MIME_TYPE;
use rollcallapp::commands::summary;
use rollcallapp::config::RollcallConfig;
use rollcallapp::model::NewAttendanceRecord;
use rollcallapp::sample::sample_store;
use rollcallapp::session::Session;
use rollcallapp::store::memory::InMemoryStore;
use rollcallapp::store::RecordStore;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

pub const PROMPT: &str = "rollcall> ";

struct AppContext {
    session: Session<InMemoryStore>,
    config: RollcallConfig,
    output: OutputMode,
    renderer: Renderer,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        None => handle_list(&ctx),
        Some(Commands::List(window)) => {
            apply_window(&mut ctx, &window)?;
            handle_list(&ctx)
        }
        Some(Commands::Summary(window)) => {
            apply_window(&mut ctx, &window)?;
            handle_summary(&ctx)
        }
        Some(Commands::Export { window, dir }) => {
            apply_window(&mut ctx, &window)?;
            handle_export(&ctx, dir)
        }
        Some(Commands::Print { window, file }) => {
            apply_window(&mut ctx, &window)?;
            handle_print(&ctx, file)
        }
        Some(Commands::Departments) => handle_departments(&ctx),
        Some(Commands::Session(window)) => {
            apply_window(&mut ctx, &window)?;
            run_session(&mut ctx)
        }
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = RollcallConfig::load(cli.config.as_deref())?;

    let store = if config.seed_sample_records && !cli.no_sample {
        sample_store()?
    } else {
        InMemoryStore::new()
    };
    tracing::debug!(records = store.len(), "Record store ready");

    let api = RollcallApi::new(store, config.departments());
    Ok(AppContext {
        session: Session::new(api),
        renderer: Renderer::new(cli.output)?,
        output: cli.output,
        config,
    })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn apply_window(ctx: &mut AppContext, args: &WindowArgs) -> Result<()> {
    let (start, end) = args.range(today());
    ctx.session.set_range(start, end)?;
    if let Some(code) = &args.dept {
        ctx.session.set_department(code.clone());
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_messages(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    let output = ctx.renderer.messages(&result.messages)?;
    if !output.is_empty() {
        print!("{}", output);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let view = ctx.session.dashboard();
    if ctx.output == OutputMode::Json {
        return print_json(&json!({
            "window": ctx.session.window(),
            "records": view.records,
            "counts": view.counts,
            "total": summary::total(&view.counts),
        }));
    }
    let departments = ctx.session.api().departments();
    println!(
        "{}",
        ctx.renderer.dashboard(
            ctx.session.window(),
            &departments,
            &view.records,
            &view.counts
        )?
    );
    Ok(())
}

fn handle_summary(ctx: &AppContext) -> Result<()> {
    let counts = ctx.session.summary();
    if ctx.output == OutputMode::Json {
        return print_json(&json!({
            "window": ctx.session.window(),
            "counts": counts,
            "total": summary::total(&counts),
        }));
    }
    let departments = ctx.session.api().departments();
    println!(
        "{}",
        ctx.renderer
            .summary(ctx.session.window(), &departments, &counts)?
    );
    Ok(())
}

fn handle_export(ctx: &AppContext, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| ctx.config.export_dir());
    let result = ctx.session.export(&dir)?;
    if ctx.output == OutputMode::Json {
        return print_json(&json!({
            "path": result.export_path,
            "mime_type": MIME_TYPE,
            "rows": result.records.len(),
            "messages": result.messages,
        }));
    }
    print_messages(ctx, &result)
}

fn handle_print(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let report = ctx.session.report(today());
    let text = if ctx.output == OutputMode::Json {
        serde_json::to_string_pretty(&report)?
    } else {
        Renderer::plain()?.report(&report)?
    };

    match file {
        Some(path) => {
            fs::write(&path, format!("{}\n", text.trim_end()))?;
            tracing::info!(path = %path.display(), rows = report.rows.len(), "Wrote printable report");
            if ctx.output == OutputMode::Json {
                return print_json(&json!({ "path": path }));
            }
            println!("Report written to {}", path.display());
        }
        None => println!("{}", text.trim_end()),
    }
    Ok(())
}

fn handle_departments(ctx: &AppContext) -> Result<()> {
    let departments = ctx.session.api().departments();
    if ctx.output == OutputMode::Json {
        return print_json(&departments);
    }
    print!("{}", ctx.renderer.departments(&departments)?);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, new: NewAttendanceRecord) -> Result<()> {
    let result = ctx.session.add(new)?;
    if ctx.output == OutputMode::Json {
        return print_json(&result);
    }
    print_messages(ctx, &result)
}

fn run_session(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!("Records added in this session are kept until you quit. Type `help` for commands.\n");
        handle_list(ctx)?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        match run_session_line(ctx, &line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    tracing::debug!(records = ctx.session.api().records().len(), "Session ended");
    Ok(())
}

fn run_session_line(ctx: &mut AppContext, line: &str) -> Result<Flow> {
    let words = split_line(line).map_err(anyhow::Error::msg)?;
    if words.is_empty() || words[0].starts_with('#') {
        return Ok(Flow::Continue);
    }

    let parsed = match SessionLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(e) => {
            e.print()?;
            return Ok(Flow::Continue);
        }
    };

    match parsed.command {
        SessionCommand::Add {
            name,
            dept,
            status,
            from,
            to,
            location,
            program,
            notes,
        } => {
            let dept = dept.unwrap_or_else(|| ctx.config.default_department.clone());
            let new = NewAttendanceRecord::new(name.join(" "), dept, status, from, to)
                .with_location(location)
                .with_program(program)
                .with_notes(notes);
            handle_add(ctx, new)?;
        }
        SessionCommand::Filter { from, to } => {
            ctx.session.set_range(from, to.unwrap_or(from))?;
            handle_list(ctx)?;
        }
        SessionCommand::Dept { code } => {
            match code {
                Some(code) => ctx.session.set_department(code),
                None => ctx.session.clear_department(),
            }
            handle_list(ctx)?;
        }
        SessionCommand::List => handle_list(ctx)?,
        SessionCommand::Summary => handle_summary(ctx)?,
        SessionCommand::Export { dir } => handle_export(ctx, dir)?,
        SessionCommand::Print { file } => handle_print(ctx, file)?,
        SessionCommand::Departments => handle_departments(ctx)?,
        SessionCommand::Reset => {
            ctx.session.reset();
            handle_list(ctx)?;
        }
        SessionCommand::Help => println!("{}", SessionLine::command().render_help()),
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
