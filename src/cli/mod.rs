mod entry;
mod output;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use spendtrack::config::Config;
use spendtrack::logging;
use spendtrack::services::{compute_stats, date_codec, filter_entries, FilterCriteria};
use spendtrack::store::{export_to, import_from, EntryStore, JsonLedgerStore};

use entry::{AddArgs, EditArgs};

/// Local expense ledger with daily, weekly and monthly rollups
#[derive(Parser)]
#[command(name = "spendtrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Ledger file (overrides the config file)
    #[arg(long, global = true, env = "SPENDTRACK_STORE", value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today/week/month totals, category breakdown and the last 7 days
    Stats {
        /// Anchor date instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show spending grouped by ISO week or calendar month, newest first
    History {
        #[arg(value_enum)]
        period: HistoryPeriod,

        /// Anchor date instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List entries, newest first
    List {
        /// Match description or category (case-insensitive)
        #[arg(long)]
        text: Option<String>,

        /// Exact category
        #[arg(long)]
        category: Option<String>,

        /// Exact date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an entry
    Add(AddArgs),

    /// Edit an entry
    Edit(EditArgs),

    /// Delete an entry
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Delete every entry
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Write a JSON backup
    Export {
        /// Defaults to spendtrack_backup_<today>.json
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Add entries from a JSON backup
    Import {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HistoryPeriod {
    Weekly,
    Monthly,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        logging::init_tracing(config.log_filter.as_deref());

        let path = match self.store {
            Some(path) => path,
            None => config.resolve_store_path()?,
        };
        tracing::debug!(path = %path.display(), "using ledger");
        let store = JsonLedgerStore::new(path, config.owner.clone());

        match self.command {
            Commands::Stats { today, json } => {
                let entries = store.load()?;
                let stats = compute_stats(&entries, today.unwrap_or_else(date_codec::today));
                if json {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                } else {
                    print!("{}", output::render_stats(&stats));
                }
            }
            Commands::History {
                period,
                today,
                json,
            } => {
                let entries = store.load()?;
                let stats = compute_stats(&entries, today.unwrap_or_else(date_codec::today));
                let history = match period {
                    HistoryPeriod::Weekly => &stats.weekly_history,
                    HistoryPeriod::Monthly => &stats.monthly_history,
                };
                if json {
                    println!("{}", serde_json::to_string_pretty(history)?);
                } else {
                    print!("{}", output::render_history(history));
                }
            }
            Commands::List {
                text,
                category,
                date,
                json,
            } => {
                let entries = store.load()?;
                let criteria = FilterCriteria {
                    text,
                    category,
                    date,
                };
                let matched = filter_entries(&entries, &criteria);
                if json {
                    println!("{}", serde_json::to_string_pretty(&matched)?);
                } else {
                    print!("{}", output::render_entries(&matched));
                }
            }
            Commands::Add(args) => {
                let entry = args.run(&store)?;
                println!("Added {}", entry.id);
            }
            Commands::Edit(args) => {
                let entry = args.run(&store)?;
                println!("Updated {}", entry.id);
            }
            Commands::Delete { id } => {
                let removed = store.remove(&id)?;
                println!(
                    "Deleted {} ({} {})",
                    removed.id, removed.date_key, removed.category
                );
            }
            Commands::Clear { yes } => {
                if !yes {
                    bail!("refusing to delete every entry without --yes");
                }
                let removed = store.clear()?;
                println!("Deleted {} entries", removed);
            }
            Commands::Export { path } => {
                let path = path.unwrap_or_else(|| {
                    PathBuf::from(format!("spendtrack_backup_{}.json", date_codec::today_key()))
                });
                let count = export_to(&store, &path)
                    .with_context(|| format!("exporting to {}", path.display()))?;
                println!("Exported {} entries to {}", count, path.display());
            }
            Commands::Import { path } => {
                let report = import_from(&store, &path, date_codec::today())
                    .with_context(|| format!("importing {}", path.display()))?;
                print!("{}", output::render_import_report(&report));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["spendtrack"]).is_err());
    }

    #[test]
    fn test_cli_parse_stats() {
        let cli = Cli::try_parse_from(["spendtrack", "stats"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Stats {
                today: None,
                json: false
            }
        ));
    }

    #[test]
    fn test_cli_parse_stats_with_anchor() {
        let cli =
            Cli::try_parse_from(["spendtrack", "stats", "--today", "2024-03-08", "--json"]).unwrap();
        match cli.command {
            Commands::Stats { today, json } => {
                assert_eq!(today, NaiveDate::from_ymd_opt(2024, 3, 8));
                assert!(json);
            }
            _ => panic!("expected stats"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_anchor() {
        assert!(Cli::try_parse_from(["spendtrack", "stats", "--today", "March 8"]).is_err());
    }

    #[test]
    fn test_cli_parse_history() {
        let cli = Cli::try_parse_from(["spendtrack", "history", "weekly"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::History {
                period: HistoryPeriod::Weekly,
                today: None,
                json: false
            }
        ));
    }

    #[test]
    fn test_cli_parse_history_with_anchor() {
        let cli = Cli::try_parse_from([
            "spendtrack",
            "history",
            "monthly",
            "--today",
            "2024-03-08",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::History {
                period,
                today,
                json,
            } => {
                assert_eq!(period, HistoryPeriod::Monthly);
                assert_eq!(today, NaiveDate::from_ymd_opt(2024, 3, 8));
                assert!(json);
            }
            _ => panic!("expected history"),
        }
    }

    #[test]
    fn test_cli_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "spendtrack",
            "list",
            "--text",
            "train",
            "--category",
            "Transport",
        ])
        .unwrap();
        match cli.command {
            Commands::List {
                text,
                category,
                date,
                ..
            } => {
                assert_eq!(text.as_deref(), Some("train"));
                assert_eq!(category.as_deref(), Some("Transport"));
                assert!(date.is_none());
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_cli_global_store_flag() {
        let cli =
            Cli::try_parse_from(["spendtrack", "list", "--store", "/tmp/ledger.json"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/ledger.json")));
    }
}
