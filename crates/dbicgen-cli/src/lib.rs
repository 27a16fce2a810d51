mod config;
pub use config::Config;

pub mod gen;
pub mod init;

mod writer;
pub use writer::Writer;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

/// Parse command-line arguments, set up logging and execute the command
pub fn parse_and_run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    cli.command.run()
}

/// Parse and execute CLI commands from an iterator of arguments.
///
/// Logging is left to the caller.
pub fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    cli.command.run()
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[derive(Parser, Debug)]
#[command(name = "dbicgen")]
#[command(about = "Generate DBIx::Class classes from a DBDesigner 4 model")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the schema and table classes
    Gen(gen::GenCommand),

    /// Write a template configuration file
    Init(init::InitCommand),
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Command::Gen(cmd) => cmd.run(),
            Command::Init(cmd) => cmd.run(),
        }
    }
}
