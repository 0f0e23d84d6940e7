use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "adpilot",
    version,
    about = "Campaign and AI advice console for the adpilot backend"
)]
pub struct Cli {
    /// Config file (defaults to the per-user adpilot/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Override the backend base URL from config.
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Override the campaign page size from config.
    #[arg(long, global = true)]
    pub page_size: Option<u32>,
    /// Debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List, inspect and edit campaigns.
    Campaigns {
        #[command(subcommand)]
        command: CampaignCommand,
    },
    /// Review AI advice.
    Advices {
        #[command(subcommand)]
        command: AdviceCommand,
    },
    /// Show the latest daily briefs.
    Brief {
        /// Number of briefs (overrides config).
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show the agent decision flow of a campaign.
    Decisions { campaign: i64 },
    /// Run the optimization agent on a campaign, then show its decision flow.
    Optimize { campaign: i64 },
    /// Show the agent log of a campaign.
    Logs { campaign: i64 },
    /// Ask the agent for an industry analysis of a campaign.
    Analyze { campaign: i64 },
    /// Dashboard stat cards and recent campaigns.
    Overview,
}

#[derive(Subcommand)]
pub enum CampaignCommand {
    /// One page of campaigns.
    List {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Case-insensitive name filter applied to the loaded page.
        #[arg(long)]
        search: Option<String>,
    },
    /// A single campaign.
    Show { id: i64 },
    /// Create a campaign.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        product: String,
        #[arg(long)]
        objective: String,
        /// Positive amount.
        #[arg(long)]
        budget: String,
    },
    /// Change some fields of a campaign; the rest are left untouched.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        product: Option<String>,
        #[arg(long)]
        objective: Option<String>,
        #[arg(long)]
        budget: Option<String>,
        /// draft, running, optimizing, paused, created or completed.
        #[arg(long)]
        status: Option<String>,
    },
    /// Switch a campaign's status.
    Status { id: i64, status: String },
}

#[derive(Subcommand)]
pub enum AdviceCommand {
    /// List advice, optionally filtered.
    List {
        #[arg(long)]
        campaign: Option<i64>,
        /// pending, approved, rejected or executed.
        #[arg(long)]
        status: Option<String>,
    },
    /// Write an advice by hand.
    Create {
        #[arg(long)]
        content: String,
        #[arg(long)]
        campaign: Option<String>,
        /// Advice type (defaults to the configured advice_type).
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Approve a pending advice.
    Approve {
        id: i64,
        /// Reviewer name.
        #[arg(long)]
        by: Option<String>,
    },
    /// Reject a pending advice.
    Reject {
        id: i64,
        /// Reviewer name.
        #[arg(long)]
        by: Option<String>,
    },
    /// Execute an approved advice.
    Execute {
        id: i64,
        /// Outcome text to record.
        #[arg(long)]
        result: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "adpilot",
            "campaigns",
            "list",
            "--page",
            "2",
            "--base-url",
            "http://backend:8000",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://backend:8000"));
        assert!(matches!(
            cli.command,
            Commands::Campaigns {
                command: CampaignCommand::List { page: 2, .. }
            }
        ));
    }

    #[test]
    fn advice_type_flag_is_named_type() {
        let cli = Cli::try_parse_from([
            "adpilot", "advices", "create", "--content", "x", "--type", "budget",
        ])
        .unwrap();
        match cli.command {
            Commands::Advices {
                command: AdviceCommand::Create { kind, .. },
            } => assert_eq!(kind.as_deref(), Some("budget")),
            _ => panic!("wrong command"),
        }
    }
}
