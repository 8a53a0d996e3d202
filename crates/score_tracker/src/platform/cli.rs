use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use super::logging::LogDestination;

/// Fetches a ranking page and appends score changes to a JSON history.
#[derive(Debug, Parser)]
#[command(name = "score_tracker", version, about, long_about = None)]
pub struct Cli {
    /// Listing page to scrape. Always pass one: the built-in default,
    /// https://example.com/ranking, is a placeholder with no ranking on it.
    #[arg(env = "SCORE_TRACKER_URL")]
    pub page_url: Option<String>,

    /// History file to update. Defaults to ./out/<year>.json.
    #[arg(env = "SCORE_TRACKER_OUTPUT")]
    pub output: Option<PathBuf>,

    /// RON file overriding selectors and fetch settings.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also append log lines to this file.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) => LogDestination::Both(path.clone()),
            None => LogDestination::Terminal,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_positionals_are_optional() {
        let cli = Cli::try_parse_from(["score_tracker"]).unwrap();
        // Env vars may fill these in on a developer machine; only check parsing.
        assert!(!cli.verbose);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn positionals_and_flags_parse() {
        let cli = Cli::try_parse_from([
            "score_tracker",
            "https://site.example/list",
            "data/h.json",
            "--log-file",
            "run.log",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.page_url.as_deref(), Some("https://site.example/list"));
        assert_eq!(cli.output, Some(PathBuf::from("data/h.json")));
        assert_eq!(
            cli.log_destination(),
            LogDestination::Both(PathBuf::from("run.log"))
        );
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn help_flags_the_default_url_as_a_placeholder() {
        use clap::CommandFactory;
        let help = Cli::command().render_help().to_string();
        assert!(help.contains(tracker_engine::DEFAULT_PAGE_URL), "{help}");
        assert!(help.contains("placeholder"), "{help}");
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
