//! `tasks`: command-line front end for the task API.

#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use task_core::{config, filter_tasks, StatusFilter, Task, TaskApi, TaskId, TaskInput, TaskStatus, Transport};

#[derive(Debug, Parser)]
#[command(name = "tasks", version, about = "Manage tasks on the remote task API")]
struct Cli {
    /// Collection endpoint, e.g. https://host/api/todos (default: $TASKS_API_URL or built-in)
    #[arg(long = "api-url", global = true, value_parser = parse_api_url)]
    api_url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List tasks
    #[command(alias = "ls")]
    List {
        /// all, not_started, in_progress or completed
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,
        /// Follow pagination instead of showing the first page only
        #[arg(long)]
        all_pages: bool,
    },
    /// Show one task
    Get { id: TaskId },
    /// Create a task
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        details: String,
        #[arg(short, long, default_value = "not_started")]
        status: TaskStatus,
    },
    /// Change fields of a task; omitted fields are not sent
    Update {
        id: TaskId,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        details: Option<String>,
        #[arg(short, long)]
        status: Option<TaskStatus>,
    },
    /// Delete a task
    #[command(alias = "rm")]
    Delete { id: TaskId },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(url) = &cli.api_url {
        if !config::init_api_url(url) {
            eprintln!("error: --api-url {url:?} was not applied");
            return ExitCode::from(2);
        }
    }
    let api = TaskApi::from_config();

    let stdout = io::stdout();
    match run(cli, &api, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn parse_api_url(raw: &str) -> Result<String, String> {
    let url = raw.trim();
    if url.is_empty() {
        return Err("must not be blank".to_string());
    }
    Ok(url.to_string())
}

fn run<T: Transport>(cli: Cli, api: &TaskApi<T>, out: &mut impl Write) -> anyhow::Result<()> {
    match cli.cmd {
        Commands::List { status, all_pages } => {
            let tasks = if all_pages {
                api.list_all_tasks()?
            } else {
                api.list_tasks()?
            };
            let shown = filter_tasks(&tasks, status);
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&shown)?)?;
            } else if shown.is_empty() {
                writeln!(out, "no tasks")?;
            } else {
                for task in shown {
                    writeln!(out, "{}", summary_line(task))?;
                }
            }
        }
        Commands::Get { id } => {
            let task = api.get_task(id)?;
            print_task(out, &task, cli.json)?;
        }
        Commands::Create {
            title,
            details,
            status,
        } => {
            let input = TaskInput::from_form(&title, &details, status)?;
            let task = api.create_task(&input)?;
            print_task(out, &task, cli.json)?;
        }
        Commands::Update {
            id,
            title,
            details,
            status,
        } => {
            if title.is_none() && details.is_none() && status.is_none() {
                anyhow::bail!("nothing to update: pass --title, --details or --status");
            }
            let input = TaskInput {
                title,
                details,
                status,
            };
            let task = api
                .update_task(id, &input)
                .with_context(|| format!("task {id}"))?;
            print_task(out, &task, cli.json)?;
        }
        Commands::Delete { id } => {
            api.delete_task(id)?;
            if !cli.json {
                writeln!(out, "deleted task {id}")?;
            }
        }
    }
    Ok(())
}

fn summary_line(task: &Task) -> String {
    let title = if task.title.is_empty() {
        "Untitled Task"
    } else {
        task.title.as_str()
    };
    format!("{:>5}  {:<11}  {title}", task.id, task.status.as_str())
}

fn print_task(out: &mut impl Write, task: &Task, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(task)?)?;
        return Ok(());
    }
    writeln!(out, "{}", summary_line(task))?;
    if !task.details.is_empty() {
        writeln!(out, "       {}", task.details)?;
    }
    writeln!(out, "       created {}  updated {}", task.created_at, task.updated_at)?;
    Ok(())
}
