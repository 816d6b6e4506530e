use std::fmt;

use campus_core::Clock;
use campus_core::model::{CourseId, EnrollmentStatus, ModuleId, TopicId};
use serde::Serialize;
use services::{AppServices, CatalogError};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidFilter { raw: String },
    InvalidFormat { raw: String },
    InvalidNow { raw: String },
    InvalidId { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidFilter { raw } => {
                write!(f, "invalid --filter value (expected enrolled|completed): {raw}")
            }
            ArgsError::InvalidFormat { raw } => {
                write!(f, "invalid --format value (expected text|json): {raw}")
            }
            ArgsError::InvalidNow { raw } => {
                write!(f, "invalid --now value (expected RFC3339): {raw}")
            }
            ArgsError::InvalidId { flag, raw } => write!(f, "invalid {flag} value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

impl Format {
    fn parse(raw: &str) -> Result<Self, ArgsError> {
        match raw.trim() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ArgsError::InvalidFormat { raw: raw.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Dashboard {
        filter: EnrollmentStatus,
    },
    Course {
        course_id: CourseId,
    },
    Curriculum {
        course_id: CourseId,
        module_id: Option<ModuleId>,
        topic_id: Option<TopicId>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Dashboard,
    Course,
    Curriculum,
}

impl CommandKind {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "dashboard" => Some(Self::Dashboard),
            "course" => Some(Self::Course),
            "curriculum" => Some(Self::Curriculum),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    command: Command,
    format: Format,
    clock: Clock,
}

fn parse_filter(raw: &str) -> Result<EnrollmentStatus, ArgsError> {
    match raw.trim() {
        "enrolled" => Ok(EnrollmentStatus::Enrolled),
        "completed" => Ok(EnrollmentStatus::Completed),
        _ => Err(ArgsError::InvalidFilter { raw: raw.to_owned() }),
    }
}

fn parse_clock(raw: &str) -> Result<Clock, ArgsError> {
    Clock::fixed_from_rfc3339(raw.trim()).map_err(|_| ArgsError::InvalidNow {
        raw: raw.to_owned(),
    })
}

fn parse_id<T: std::str::FromStr>(flag: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidId { flag, raw })
}

impl Args {
    fn parse(argv: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut args = argv.into_iter().peekable();

        // Without a subcommand the dashboard is shown.
        let kind = match args.peek().map(String::as_str) {
            None => CommandKind::Dashboard,
            Some(first) if first.starts_with('-') => CommandKind::Dashboard,
            Some(first) => {
                let kind = CommandKind::from_arg(first)
                    .ok_or_else(|| ArgsError::UnknownCommand(first.to_owned()))?;
                args.next();
                kind
            }
        };

        let mut format = match std::env::var("CAMPUS_FORMAT") {
            Ok(raw) => Format::parse(&raw)?,
            Err(_) => Format::Text,
        };
        let mut clock = match std::env::var("CAMPUS_NOW") {
            Ok(raw) => parse_clock(&raw)?,
            Err(_) => Clock::default(),
        };
        let mut filter = EnrollmentStatus::Enrolled;
        let mut course_id: Option<CourseId> = std::env::var("CAMPUS_COURSE_ID")
            .ok()
            .and_then(|raw| raw.parse().ok());
        let mut module_id: Option<ModuleId> = None;
        let mut topic_id: Option<TopicId> = None;

        while let Some(arg) = args.next() {
            match (kind, arg.as_str()) {
                (_, "--format") => {
                    let value = require_value(&mut args, "--format")?;
                    format = Format::parse(&value)?;
                }
                (_, "--now") => {
                    let value = require_value(&mut args, "--now")?;
                    clock = parse_clock(&value)?;
                }
                (CommandKind::Dashboard, "--filter") => {
                    let value = require_value(&mut args, "--filter")?;
                    filter = parse_filter(&value)?;
                }
                (CommandKind::Course | CommandKind::Curriculum, "--course-id") => {
                    let value = require_value(&mut args, "--course-id")?;
                    course_id = Some(parse_id("--course-id", value)?);
                }
                (CommandKind::Curriculum, "--module") => {
                    let value = require_value(&mut args, "--module")?;
                    module_id = Some(parse_id("--module", value)?);
                }
                (CommandKind::Curriculum, "--topic") => {
                    let value = require_value(&mut args, "--topic")?;
                    topic_id = Some(parse_id("--topic", value)?);
                }
                (_, "--help" | "-h") => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let command = match kind {
            CommandKind::Dashboard => Command::Dashboard { filter },
            CommandKind::Course => Command::Course {
                course_id: course_id.ok_or(ArgsError::MissingValue {
                    flag: "--course-id",
                })?,
            },
            CommandKind::Curriculum => Command::Curriculum {
                course_id: course_id.ok_or(ArgsError::MissingValue {
                    flag: "--course-id",
                })?,
                module_id,
                topic_id,
            },
        };

        Ok(Self {
            command,
            format,
            clock,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- dashboard  [--filter enrolled|completed]");
    eprintln!("  cargo run -p app -- course     --course-id <id>");
    eprintln!("  cargo run -p app -- curriculum --course-id <id> [--module <id>] [--topic <id>]");
    eprintln!();
    eprintln!("Options (all commands):");
    eprintln!("  --format <text|json>      Output format (default: text)");
    eprintln!("  --now <rfc3339>           Fixed current time for deterministic output");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CAMPUS_FORMAT, CAMPUS_NOW, CAMPUS_COURSE_ID, RUST_LOG");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit<T: Serialize>(
    format: Format,
    view: &T,
    text: impl FnOnce(&mut String, &T) -> fmt::Result,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Text => print!("{}", render::to_text(view, text)?),
        Format::Json => println!("{}", serde_json::to_string_pretty(view)?),
    }
    Ok(())
}

async fn execute(services: &AppServices, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = services.catalog();
    match &args.command {
        Command::Dashboard { filter } => {
            let view = catalog.dashboard(*filter).await?;
            emit(args.format, &view, render::dashboard)?;
        }
        Command::Course { course_id } => {
            let view = catalog.course_overview(course_id).await?;
            emit(args.format, &view, render::course)?;
        }
        Command::Curriculum {
            course_id,
            module_id,
            topic_id,
        } => {
            let outline = catalog.outline(course_id).await?;
            emit(args.format, &outline, render::outline)?;
            if outline.modules.is_empty() {
                return Ok(());
            }
            let view = catalog
                .topic_view(course_id, module_id.as_ref(), topic_id.as_ref())
                .await?;
            if args.format == Format::Text {
                println!();
            }
            emit(args.format, &view, render::topic)?;
        }
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    tracing::debug!(command = ?args.command, fixed_clock = args.clock.is_fixed(), "starting");

    let services = AppServices::in_memory(args.clock)?;
    match execute(&services, &args).await {
        Err(err) if is_not_found(err.as_ref()) => {
            println!("Not found: {err}");
            println!("Return to the dashboard with `dashboard`.");
            std::process::exit(1);
        }
        other => other,
    }
}

fn is_not_found(err: &(dyn std::error::Error + 'static)) -> bool {
    err.downcast_ref::<CatalogError>()
        .is_some_and(CatalogError::is_not_found)
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
