//! Command-line interface entry point for `elective-advisor`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use elective_advisor::config::Config;
use elective_advisor::info;
use elective_advisor::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Environment and CLI overrides apply to a copy; the config command edits
    // the stored configuration
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_env_overrides();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty()).then(|| PathBuf::from(&config.logging.file));
    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Parse {
            input,
            format,
            output,
            expect,
            require,
        } => {
            commands::parse::run(&commands::parse::ParseOptions {
                input: &input,
                format: &format,
                output: output.as_deref(),
                expect,
                require: &require,
            });
        }
        Command::Recommend {
            job,
            degree,
            job_id,
            electives,
            format,
            output,
        } => {
            commands::recommend::run(
                &commands::recommend::RecommendOptions {
                    job: &job,
                    degree: &degree,
                    job_id,
                    electives: electives.as_deref(),
                    format: &format,
                    output: output.as_deref(),
                },
                &config,
            );
        }
        Command::Electives { input } => commands::electives::run(&input),
        Command::Prompt {
            job,
            degree,
            electives,
            count,
        } => commands::prompt::run(&job, &degree, &electives, count, &config),
    }
}
