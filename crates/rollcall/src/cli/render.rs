//! # Rendering Module
//!
//! Turns library results into terminal text through the templates in [`super::templates`].
//!
//! ## Design Philosophy
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they need
//! Unicode-aware processing: names like "Puan Noraini Bt Ismail" and department names are
//! measured with `unicode-width`, cut with an ellipsis and padded before any style is
//! applied, so ANSI codes never disturb the columns. Templates handle presentation:
//! which style a cell gets, and the order of lines.
//!
//! ## Colour
//!
//! The `style` filter looks names up in the theme from [`super::styles`]. Colour is on only
//! for `--output term` when `console` reports a colour-capable stdout. The printed report
//! has no style filters at all, so it is plain whichever renderer draws it.

use super::setup::OutputMode;
use super::styles::{names, resolved_theme, status_style, Theme, LIGHT_THEME};
use super::templates;
use minijinja::{Environment, Error, Value};
use rollcallapp::api::{CmdMessage, MessageLevel, Report};
use rollcallapp::commands::report::ALL_DEPARTMENTS;
use rollcallapp::commands::summary;
use rollcallapp::model::{department_name, AttendanceRecord, Department, FilterWindow, StatusCount};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const COL_NUMBER: usize = 3;
pub const COL_NAME: usize = 26;
pub const COL_DEPT: usize = 6;
pub const COL_STATUS: usize = 19;
pub const COL_DATES: usize = 24;
pub const COL_LOCATION: usize = 20;
pub const COL_COUNT_LABEL: usize = 21;
pub const COL_REPORT_DEPT: usize = 30;
pub const COL_DATE: usize = 10;

pub const EMPTY_MESSAGE: &str = "No records in this window.";

#[derive(Serialize)]
struct WindowData {
    title: &'static str,
    period: String,
    department: String,
}

#[derive(Serialize)]
struct CountLine {
    label: String,
    count: usize,
    style: String,
}

#[derive(Serialize)]
struct CountsData {
    counts: Vec<CountLine>,
    total_label: String,
    total: usize,
}

#[derive(Serialize)]
struct TableRow {
    number: String,
    name: String,
    department: String,
    status: String,
    status_style: String,
    dates: String,
    location: String,
    detail: String,
}

#[derive(Serialize)]
struct TableData {
    header: String,
    rows: Vec<TableRow>,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct ReportLine {
    line: String,
    extras: Vec<String>,
}

#[derive(Serialize)]
struct ReportData {
    period: String,
    department: String,
    generated_on: String,
    counts: Vec<CountLine>,
    total_label: String,
    total: usize,
    header: String,
    rule: String,
    rows: Vec<ReportLine>,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct DepartmentLine {
    code: String,
    name: String,
}

#[derive(Serialize)]
struct DepartmentsData {
    departments: Vec<DepartmentLine>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Colour follows the output mode and the terminal's capabilities.
    pub fn new(mode: OutputMode) -> Result<Self, Error> {
        if mode == OutputMode::Term && console::colors_enabled() {
            Self::with_theme(resolved_theme(), true)
        } else {
            Self::plain()
        }
    }

    pub fn plain() -> Result<Self, Error> {
        Self::with_theme(&LIGHT_THEME, false)
    }

    pub fn with_theme(theme: &'static Theme, use_color: bool) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        for (name, source) in templates::ALL {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }

    /// Window header, status counts, then the record table.
    pub fn dashboard(
        &self,
        window: &FilterWindow,
        departments: &[Department],
        records: &[AttendanceRecord],
        counts: &[StatusCount],
    ) -> Result<String, Error> {
        Ok(join_sections(&[
            self.window(window, departments)?,
            self.counts(counts)?,
            self.table(records)?,
        ]))
    }

    pub fn summary(
        &self,
        window: &FilterWindow,
        departments: &[Department],
        counts: &[StatusCount],
    ) -> Result<String, Error> {
        Ok(join_sections(&[
            self.window(window, departments)?,
            self.counts(counts)?,
        ]))
    }

    fn window(&self, window: &FilterWindow, departments: &[Department]) -> Result<String, Error> {
        let department = match window.department() {
            Some(code) => format!("{} · {}", code, department_name(departments, code)),
            None => ALL_DEPARTMENTS.to_string(),
        };
        self.render(
            "window",
            &WindowData {
                title: "Attendance",
                period: period(window),
                department,
            },
        )
    }

    fn counts(&self, counts: &[StatusCount]) -> Result<String, Error> {
        self.render(
            "counts",
            &CountsData {
                counts: count_lines(counts),
                total_label: fit("Total", COL_COUNT_LABEL),
                total: summary::total(counts),
            },
        )
    }

    fn table(&self, records: &[AttendanceRecord]) -> Result<String, Error> {
        let header = [
            fit_right("#", COL_NUMBER),
            fit("Name", COL_NAME),
            fit("Dept", COL_DEPT),
            fit("Status", COL_STATUS),
            fit("Dates", COL_DATES),
            fit("Location", COL_LOCATION),
            "Program / Notes".to_string(),
        ]
        .join("  ");

        let rows = records
            .iter()
            .enumerate()
            .map(|(i, r)| TableRow {
                number: fit_right(&(i + 1).to_string(), COL_NUMBER),
                name: fit(&r.person_name, COL_NAME),
                department: fit(&r.department_code, COL_DEPT),
                status: fit(r.status.label(), COL_STATUS),
                status_style: status_style(r.status),
                dates: fit(&dates(r), COL_DATES),
                location: fit(&r.location, COL_LOCATION),
                detail: [r.program_name.as_str(), r.notes.as_str()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(" · "),
            })
            .collect();

        self.render(
            "table",
            &TableData {
                header,
                rows,
                empty_message: EMPTY_MESSAGE,
            },
        )
    }

    /// The print-friendly report. Its template carries no styles.
    pub fn report(&self, report: &Report) -> Result<String, Error> {
        let header = [
            fit_right("No", COL_NUMBER),
            fit("Name", COL_NAME),
            fit("Department", COL_REPORT_DEPT),
            fit("Status", COL_STATUS),
            fit("Start", COL_DATE),
            "End".to_string(),
        ]
        .join("  ");
        let rule = "-".repeat(header.width());

        let rows = report
            .rows
            .iter()
            .map(|row| {
                let r = &row.record;
                let line = [
                    fit_right(&row.number.to_string(), COL_NUMBER),
                    fit(&r.person_name, COL_NAME),
                    fit(&row.department_name, COL_REPORT_DEPT),
                    fit(r.status.label(), COL_STATUS),
                    fit(&r.start_date.to_string(), COL_DATE),
                    r.end_date.to_string(),
                ]
                .join("  ");
                let extras = [
                    ("Location", &r.location),
                    ("Program", &r.program_name),
                    ("Notes", &r.notes),
                ]
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(label, value)| format!("{}: {}", label, value))
                .collect();
                ReportLine { line, extras }
            })
            .collect();

        let period = if report.range_start == report.range_end {
            report.range_start.to_string()
        } else {
            format!("{} to {}", report.range_start, report.range_end)
        };

        self.render(
            "report",
            &ReportData {
                period,
                department: report.department.clone(),
                generated_on: report.generated_on.to_string(),
                counts: count_lines(&report.counts),
                total_label: fit("Total", COL_COUNT_LABEL),
                total: report.total,
                header,
                rule,
                rows,
                empty_message: EMPTY_MESSAGE,
            },
        )
    }

    pub fn departments(&self, departments: &[Department]) -> Result<String, Error> {
        let width = departments
            .iter()
            .map(|d| d.code.width())
            .max()
            .unwrap_or(0)
            + 2;
        let departments = departments
            .iter()
            .map(|d| DepartmentLine {
                code: fit(&d.code, width),
                name: d.name.clone(),
            })
            .collect();
        self.render("departments", &DepartmentsData { departments })
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String, Error> {
        let messages = messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect();
        self.render("messages", &MessagesData { messages })
    }
}

fn count_lines(counts: &[StatusCount]) -> Vec<CountLine> {
    counts
        .iter()
        .map(|c| CountLine {
            label: fit(c.status.label(), COL_COUNT_LABEL),
            count: c.count,
            style: status_style(c.status),
        })
        .collect()
}

fn period(window: &FilterWindow) -> String {
    if window.range_start == window.range_end {
        window.range_start.to_string()
    } else {
        format!("{} to {}", window.range_start, window.range_end)
    }
}

fn dates(r: &AttendanceRecord) -> String {
    if r.start_date == r.end_date {
        r.start_date.to_string()
    } else {
        format!("{} to {}", r.start_date, r.end_date)
    }
}

fn join_sections(sections: &[String]) -> String {
    sections
        .iter()
        .map(|s| s.trim_end())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Truncates then left-aligns `s` in a column of `width` cells.
pub fn fit(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width);
    let pad = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(pad))
}

pub fn fit_right(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width);
    let pad = width.saturating_sub(cell.width());
    format!("{}{}", " ".repeat(pad), cell)
}
