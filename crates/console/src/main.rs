// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

mod render;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use emp_console::{FormController, ListPage, ListView};
use emp_console_api::{
    ApiError, ClientConfig, ConsoleError, ConsoleSession, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
    EmployeeApi, HttpEmployeeApi, Mutation, write_employees_csv,
};
use emp_console_domain::{DraftField, EmployeeId, EmployeeRecord, SortDirection, SortField};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use time::{Date, OffsetDateTime};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::render::{ChartKind, render_chart, render_table};

/// Employee Console - manage employee records held by the employee service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the employee service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Table options shared by `list` and `export`.
#[derive(clap::Args, Debug, Clone, Default)]
struct ViewArgs {
    /// Show only employees whose name contains this text
    #[arg(long)]
    search: Option<String>,

    /// Sort by this column (name, dob, doj, designation, salary, gender, state)
    #[arg(long)]
    sort: Option<SortField>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    desc: bool,
}

/// Employee fields for `add` and `edit`. Values are validated by the form.
#[derive(clap::Args, Debug, Clone, Default)]
struct FieldArgs {
    /// Employee name
    #[arg(long)]
    name: Option<String>,

    /// Designation
    #[arg(long)]
    designation: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    dob: Option<String>,

    /// Date of joining (YYYY-MM-DD)
    #[arg(long)]
    doj: Option<String>,

    /// Salary
    #[arg(long)]
    salary: Option<String>,

    /// Gender (Male or Female)
    #[arg(long)]
    gender: Option<String>,

    /// State
    #[arg(long)]
    state: Option<String>,
}

impl FieldArgs {
    /// Returns the fields that were given, in form order.
    fn changes(&self) -> Vec<(DraftField, &str)> {
        [
            (DraftField::Name, &self.name),
            (DraftField::Designation, &self.designation),
            (DraftField::DateOfBirth, &self.dob),
            (DraftField::DateOfJoining, &self.doj),
            (DraftField::Salary, &self.salary),
            (DraftField::Gender, &self.gender),
            (DraftField::State, &self.state),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
        .collect()
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one page of the employee table
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Page to show, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show total salary by designation
    Chart {
        /// How to draw the series
        #[arg(long, value_enum, default_value_t = ChartKind::Bar)]
        kind: ChartKind,
    },

    /// Add an employee
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit an employee; fields not given keep their values
    Edit {
        /// Identifier of the employee to edit
        id: i64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete an employee
    #[command(visible_alias = "rm")]
    Delete {
        /// Identifier of the employee to delete
        id: i64,

        /// Delete without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List the selectable states
    States,

    /// Show the report address, or download the report
    Report {
        /// Save the report to this file instead of printing its address
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Write the filtered and sorted employee list as CSV
    Export {
        /// Destination file
        #[arg(long)]
        output: PathBuf,

        #[command(flatten)]
        view: ViewArgs,
    },
}

impl Command {
    async fn run<A: EmployeeApi>(
        self,
        session: &mut ConsoleSession<A>,
        today: Date,
    ) -> Result<()> {
        match self {
            Self::List { view, page } => {
                session.refresh().await?;
                apply_view(session, &view);
                session.list_view_mut().go_to_page(page);
                let rendered: ListPage = session.render_list(today);
                print!("{}", render_table(&rendered)?);
            }
            Self::Chart { kind } => {
                session.refresh().await?;
                print!("{}", render_chart(session.chart(), kind)?);
            }
            Self::Add { fields } => {
                session.open_create_form().await?;
                apply_fields(session, &fields, today)?;
                save(session).await?;
            }
            Self::Edit { id, fields } => {
                let form: &FormController = session
                    .open_edit_form(EmployeeId::new(id), today)
                    .await?;
                info!(id, title = form.title(), "Editing employee");
                apply_fields(session, &fields, today)?;
                save(session).await?;
            }
            Self::Delete { id, yes } => {
                let id: EmployeeId = EmployeeId::new(id);
                if !yes {
                    session.refresh().await?;
                    let subject: String = session
                        .store()
                        .find(id)
                        .map_or_else(|| format!("employee {id}"), |record| record.name.clone());
                    let prompt: String = format!("Are you sure you want to delete {subject}?");
                    if !confirm(&mut std::io::stdin().lock(), &mut std::io::stdout(), &prompt)? {
                        println!("Delete cancelled");
                        return Ok(());
                    }
                }
                match session.delete_employee(id).await {
                    Ok(()) => println!("{}", Mutation::Deleted(id)),
                    Err(ConsoleError::ReloadFailed { mutation, source }) => {
                        report_stale_list(mutation, &source);
                    }
                    Err(err) => {
                        return Err(err).wrap_err_with(|| format!("Could not delete employee {id}"));
                    }
                }
            }
            Self::States => {
                for state in session.list_states().await? {
                    println!("{state}");
                }
            }
            Self::Report { output } => match output {
                Some(path) => {
                    let report: Vec<u8> = session.fetch_report().await?;
                    tokio::fs::write(&path, &report)
                        .await
                        .wrap_err_with(|| format!("Could not write {}", path.display()))?;
                    println!("Saved report to {}", path.display());
                }
                None => println!("{}", session.report_url()),
            },
            Self::Export { output, view } => {
                session.refresh().await?;
                apply_view(session, &view);
                let records: Vec<&EmployeeRecord> = session.visible_records();
                let file: std::fs::File = std::fs::File::create(&output)
                    .wrap_err_with(|| format!("Could not create {}", output.display()))?;
                write_employees_csv(file, &records, today)?;
                println!("Exported {} employees to {}", records.len(), output.display());
            }
        }
        Ok(())
    }
}

fn apply_view<A: EmployeeApi>(session: &mut ConsoleSession<A>, view: &ViewArgs) {
    let list_view: &mut ListView = session.list_view_mut();
    list_view.set_search_term(view.search.as_deref().unwrap_or_default());
    match view.sort {
        Some(field) => {
            let direction: SortDirection = if view.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            list_view.set_sort(field, direction);
        }
        None => list_view.clear_sort(),
    }
}

fn apply_fields<A: EmployeeApi>(
    session: &mut ConsoleSession<A>,
    fields: &FieldArgs,
    today: Date,
) -> Result<()> {
    for (field, value) in fields.changes() {
        session.change_field(field, value, today)?;
    }
    Ok(())
}

/// Asks a yes/no question; anything but `y` or `yes` is a no.
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool> {
    write!(output, "{prompt} [y/N] ")?;
    output.flush()?;
    let mut answer: String = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Reports a mutation that the service applied although the reload after it failed.
fn report_stale_list(mutation: Mutation, source: &ApiError) {
    println!("{mutation}");
    eprintln!("Warning: the employee list could not be reloaded: {source}");
}

async fn save<A: EmployeeApi>(session: &mut ConsoleSession<A>) -> Result<()> {
    match session.save_form().await {
        Ok(kind) => println!("{}", Mutation::Saved(kind)),
        Err(ConsoleError::ReloadFailed { mutation, source }) => {
            report_stale_list(mutation, &source);
        }
        Err(ConsoleError::Validation(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {message}", field.label());
            }
            return Err(eyre!("Employee not saved: {} invalid field(s)", errors.len()));
        }
        Err(err) => return Err(err).wrap_err("Employee not saved"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over the verbosity flags
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(args.log_level().into())),
        )
        .with_writer(std::io::stderr)
        .init();

    let config: ClientConfig =
        ClientConfig::new(args.base_url.as_str()).with_timeout(args.timeout_secs);
    info!(base_url = config.base_url(), "Connecting to employee service");
    let api: HttpEmployeeApi = HttpEmployeeApi::new(&config)?;
    let mut session: ConsoleSession<HttpEmployeeApi> = ConsoleSession::new(api);

    let today: Date = OffsetDateTime::now_utc().date();
    args.command.run(&mut session, today).await
}
