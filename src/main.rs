//! Task list - Main Entry Point
//!
//! Parses the command line, sets up logging and runs the interactive menu
//! on standard input and output. The implementation is in the `tasklist`
//! library.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tasklist::{Config, DateRule, TaskList};
use tracing_subscriber::EnvFilter;

/// Interactive to-do list manager backed by a plain text file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file [default: tasks.txt]
    #[arg(env = "TASKLIST_FILE")]
    file: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long, env = "TASKLIST_CONFIG", default_value = "tasklist.toml")]
    config: PathBuf,

    /// Due date rule: literal or calendar
    #[arg(long, value_name = "RULE")]
    date_rule: Option<DateRule>,

    /// Validate due dates as real DD-MM-YYYY calendar dates (same as --date-rule calendar)
    #[arg(long, conflicts_with = "date_rule")]
    strict_dates: bool,

    /// Keep a task unchanged when an edit supplies an invalid due date
    #[arg(long)]
    atomic_edit: bool,
}

impl Args {
    /// Merge command-line flags over the config file
    fn into_config(self) -> Result<Config> {
        let mut config = Config::load(&self.config)?;
        if let Some(file) = self.file {
            config.file = file;
        }
        if let Some(rule) = self.date_rule {
            config.date_rule = rule;
        }
        if self.strict_dates {
            config.date_rule = DateRule::Calendar;
        }
        if self.atomic_edit {
            config.atomic_edit = true;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TASKLIST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Args::parse().into_config()?;
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let mut session = TaskList::from_config(&config, stdin.lock(), io::stdout())?;
    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    fn parse(args: &[&str]) -> Result<Config> {
        Args::try_parse_from(std::iter::once("tasklist").chain(args.iter().copied()))?.into_config()
    }

    #[test]
    fn test_file_values_used_without_flags() {
        let file = config_file("file = \"from-config.txt\"\ndate_rule = \"calendar\"\natomic_edit = true\n");
        let config = parse(&["--config", file.path().to_str().unwrap()]).unwrap();

        assert_eq!(config.file, PathBuf::from("from-config.txt"));
        assert_eq!(config.date_rule, DateRule::Calendar);
        assert!(config.atomic_edit);
    }

    #[test]
    fn test_flags_override_file_values() {
        let file = config_file("file = \"from-config.txt\"\ndate_rule = \"literal\"\natomic_edit = false\n");
        let config = parse(&[
            "cli.txt",
            "--config",
            file.path().to_str().unwrap(),
            "--strict-dates",
            "--atomic-edit",
        ])
        .unwrap();

        assert_eq!(config.file, PathBuf::from("cli.txt"));
        assert_eq!(config.date_rule, DateRule::Calendar);
        assert!(config.atomic_edit);
    }

    #[test]
    fn test_date_rule_flag() {
        let file = config_file("date_rule = \"calendar\"\n");
        let path = file.path().to_str().unwrap();

        let config = parse(&["--config", path, "--date-rule", "literal"]).unwrap();
        assert_eq!(config.date_rule, DateRule::Literal);

        assert!(parse(&["--config", path, "--date-rule", "lenient"]).is_err());
        assert!(parse(&["--config", path, "--date-rule", "literal", "--strict-dates"]).is_err());
    }

    #[test]
    fn test_missing_config_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let config = parse(&["--config", absent.to_str().unwrap()]).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_fallbacks_are_declared() {
        let command = Args::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_os_string())
        };

        assert_eq!(env_of("file"), Some("TASKLIST_FILE".into()));
        assert_eq!(env_of("config"), Some("TASKLIST_CONFIG".into()));
    }

    #[test]
    fn test_malformed_config_file_is_error() {
        let file = config_file("atomic_edit = \"sometimes\"\n");
        assert!(parse(&["--config", file.path().to_str().unwrap()]).is_err());
    }
}
