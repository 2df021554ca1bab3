use clap::Parser;
use miette::Result;

use bible::cli::{Cli, Commands};
use bible::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let printer = Printer::new();

    match cli.command {
        Commands::Parse(args) => bible::cli::parse::run(args, &printer)?,
        Commands::List(args) => bible::cli::list::run(args, &printer)?,
        Commands::Validate(args) => bible::cli::validate::run(args, &printer)?,
        Commands::Init(args) => bible::cli::init::run(args, &printer)?,
        Commands::Completions(args) => bible::cli::completions::run(args)?,
    }

    Ok(())
}
