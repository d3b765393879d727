//! Terminal output for each screen

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use problemdesk_core::domain::{CreatedProblem, Problem, ProblemDetail, WorkNote};
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct ProblemRow {
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Short description")]
    short_description: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "ID")]
    sys_id: String,
}

impl From<&Problem> for ProblemRow {
    fn from(p: &Problem) -> Self {
        Self {
            number: p.number.clone(),
            short_description: p.short_description.clone(),
            created: if p.is_new { "New".to_string() } else { String::new() },
            sys_id: p.sys_id.clone(),
        }
    }
}

/// JSON view of a problem including the derived flag
#[derive(Serialize)]
struct ProblemJson<'a> {
    #[serde(flatten)]
    problem: &'a Problem,
    is_new: bool,
}

impl<'a> From<&'a Problem> for ProblemJson<'a> {
    fn from(problem: &'a Problem) -> Self {
        Self {
            problem,
            is_new: problem.is_new,
        }
    }
}

#[derive(Serialize)]
struct DetailJson<'a> {
    problem: ProblemJson<'a>,
    #[serde(rename = "workNotes")]
    work_notes: &'a [WorkNote],
}

pub fn problem_table(problems: &[Problem]) -> String {
    let rows: Vec<ProblemRow> = problems.iter().map(ProblemRow::from).collect();
    Table::new(rows).to_string()
}

pub fn problems_json(problems: &[Problem]) -> serde_json::Result<String> {
    let rows: Vec<ProblemJson<'_>> = problems.iter().map(ProblemJson::from).collect();
    serde_json::to_string_pretty(&rows)
}

pub fn detail_json(detail: &ProblemDetail) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&DetailJson {
        problem: ProblemJson::from(&detail.problem),
        work_notes: &detail.work_notes,
    })
}

pub fn local_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn print_problem_list(problems: &[Problem], format: OutputFormat) -> serde_json::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", problems_json(problems)?);
        return Ok(());
    }

    println!("{}", "All problems".cyan().bold());
    println!();

    if problems.is_empty() {
        println!("{}", "No problems available.".yellow());
        return Ok(());
    }

    println!("{}", problem_table(problems));
    Ok(())
}

pub fn print_problem_detail(
    detail: &ProblemDetail,
    format: OutputFormat,
) -> serde_json::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", detail_json(detail)?);
        return Ok(());
    }

    let p = &detail.problem;

    println!("{}", "Problem details".cyan().bold());
    println!();
    println!("  {} {}", "Number:".bold(), p.number);
    println!("  {} {}", "ID:".bold(), p.sys_id);
    println!("  {} {}", "Impact:".bold(), p.impact);
    println!("  {} {}", "Urgency:".bold(), p.urgency);
    println!("  {} {}", "Priority:".bold(), p.priority);
    println!("  {} {}", "Short Description:".bold(), p.short_description);
    if !p.description.is_empty() {
        println!("  {} {}", "Description:".bold(), p.description);
    }
    if p.is_new {
        println!("  {} {}", "Created:".bold(), "New".green());
    }
    println!();

    print_work_notes(&detail.work_notes);
    Ok(())
}

pub fn print_work_notes(notes: &[WorkNote]) {
    println!("{}", "Work Notes:".cyan().bold());

    if notes.is_empty() {
        println!("  {}", "No work notes available.".dimmed());
        return;
    }

    for note in notes {
        println!();
        println!("  {}", note.value);
        println!("    Created on: {}", local_time(&note.sys_created_on).dimmed());
        println!("    By: {}", note.sys_created_by.dimmed());
    }
}

pub fn print_created(created: &CreatedProblem, format: OutputFormat) -> serde_json::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(created)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("✓ Problem {} created successfully.", created.number)
            .green()
            .bold()
    );
    println!("  {} {}", "ID:".bold(), created.sys_id);
    Ok(())
}
