mod generate;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use indexmap::IndexMap;

use solidgen::prompt::Terminal;
use solidgen::request::split_custom_flags;
use solidgen::{Config, Error};

use crate::generate::Generate;

#[derive(Parser)]
#[command(version)]
#[command(verbatim_doc_comment)]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(arg_required_else_help = true)]
#[command(about = "Generate SolidJS components from your project's templates")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(
        short = 'h',
        long = "help",
        help = "Print this help message.",
        action = ArgAction::Help,
        global = true,
    )]
    help: Option<bool>,

    #[arg(
        short = 'V',
        long = "version",
        help = "Print version information.",
        action = ArgAction::Version,
    )]
    version: Option<bool>,
}

#[derive(Subcommand)]
enum Command {
    #[command(visible_alias = "c")]
    #[command(about = "Create one or more components.")]
    #[command(after_help = "Any other --with-<name>[=true|false] flag requests the custom file type <name>.")]
    Component(Generate),
}

pub(crate) struct App {
    cli: Cli,
    custom_flags: IndexMap<String, bool>,
    root: PathBuf,
    config: Config,
}

impl App {
    fn init() -> Result<Self> {
        let (args, custom_flags) = split_custom_flags(std::env::args());
        let cli = Cli::parse_from(args);
        let root = std::env::current_dir().context("failed to locate current directory")?;
        let config = Config::resolve(&root, &mut Terminal)?;
        Ok(Self {
            cli,
            custom_flags,
            root,
            config,
        })
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(Error::UntemplatableDirectory { .. }) => 2,
        _ => 1,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solidgen=warn".into()),
        )
        .init();

    match App::init().and_then(|app| app.generate()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!();
            eprintln!("{}", format!("ERROR: {err:#}").red().bold());
            ExitCode::from(exit_code(&err))
        }
    }
}
