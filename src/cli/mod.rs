use crate::config::AppConfig;
use crate::console::VerbosityLevel;
use crate::suggestion::SuggestionId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod admin;
pub mod config;
pub mod lookup;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Increase verbosity (-v verbose, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode - only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Backend to use (http or mock)
    #[arg(short, long)]
    pub backend: Option<String>,

    /// Base URL of the suggestion service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Only suggest from this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Maximum number of suggestions per lookup
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Quiet period before a lookup is sent
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up suggestions once and print them
    Suggest { query: String },
    /// Report a suggestion as accepted
    Select { id: SuggestionId },
    /// Check that the service is reachable
    Ping,
    /// Manage the suggestion corpus
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    List {
        #[arg(short, long)]
        category: Option<String>,
    },
    Recent {
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    Frequency {
        #[arg(long)]
        min: u64,
        #[arg(long)]
        max: u64,
    },
    Add {
        text: String,
        #[arg(short, long)]
        category: Option<String>,
    },
    Update {
        id: SuggestionId,
        text: String,
        #[arg(short, long)]
        category: Option<String>,
    },
    Delete { id: SuggestionId },
    /// Add many entries, one per line of the file and/or one per argument
    Bulk {
        #[arg(short, long)]
        category: Option<String>,
        /// File with one entry per line, `-` for stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
        texts: Vec<String>,
    },
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    Show,
    Set { key: String, value: String },
}

impl Cli {
    pub fn get_verbosity(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else {
            match self.verbose {
                0 => VerbosityLevel::Normal,
                1 => VerbosityLevel::Verbose,
                _ => VerbosityLevel::Debug,
            }
        }
    }

    pub fn get_effective_verbosity(&self, config_verbosity: VerbosityLevel) -> VerbosityLevel {
        if self.quiet || self.verbose > 0 {
            self.get_verbosity()
        } else {
            config_verbosity
        }
    }

    /// Flags win over the config file for this run only; nothing is saved.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(backend) = &self.backend {
            config.backend = backend.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(category) = &self.category {
            config.category = Some(category.clone());
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.debounce_ms = debounce_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["typeahead"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_verbosity_beats_config() {
        let cli = Cli::try_parse_from(["typeahead", "-vv"]).unwrap();
        assert_eq!(
            cli.get_effective_verbosity(VerbosityLevel::Quiet),
            VerbosityLevel::Debug
        );

        let cli = Cli::try_parse_from(["typeahead"]).unwrap();
        assert_eq!(
            cli.get_effective_verbosity(VerbosityLevel::Verbose),
            VerbosityLevel::Verbose
        );
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["typeahead", "-q", "-v"]).is_err());
    }

    #[test]
    fn overrides_replace_only_given_flags() {
        let cli = Cli::try_parse_from([
            "typeahead",
            "--backend",
            "mock",
            "--category",
            "english",
            "--limit",
            "3",
        ])
        .unwrap();
        let mut config = AppConfig::default();

        cli.apply_overrides(&mut config);

        assert_eq!(config.backend, "mock");
        assert_eq!(config.category.as_deref(), Some("english"));
        assert_eq!(config.limit, 3);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn parses_admin_bulk() {
        let cli = Cli::try_parse_from([
            "typeahead", "admin", "bulk", "--category", "english", "one", "two",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Admin {
                action: AdminAction::Bulk {
                    category,
                    file,
                    texts,
                },
            }) => {
                assert_eq!(category.as_deref(), Some("english"));
                assert!(file.is_none());
                assert_eq!(texts, vec!["one", "two"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn recent_defaults_to_twenty() {
        let cli = Cli::try_parse_from(["typeahead", "admin", "recent"]).unwrap();

        assert!(matches!(
            cli.command,
            Some(Commands::Admin {
                action: AdminAction::Recent { limit: 20 }
            })
        ));
    }
}
