mod cli;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use adpilot::api::{AdviceStatus, CampaignStatus};
use adpilot::config::Config;
use adpilot::logging;
use adpilot::notify::{Notifier, SharedNotifier, TerminalNotifier, Toast};
use adpilot::ui::advices::AdviceAction;
use adpilot::ui::dialog::{CampaignEditForm, FormField, SubmitOutcome};
use adpilot::ui::Console;
use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::{AdviceCommand, CampaignCommand, Cli, Commands};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    debug!(base_url = %config.api.base_url, "configuration loaded");

    let notifier = TerminalNotifier::new();
    let shared: SharedNotifier = Arc::new(notifier.clone());
    let console = Console::new(&config, shared.clone())?;

    run(&console, shared.as_ref(), cli.command).await;
    console.shutdown();

    Ok(if notifier.raised_error() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(page_size) = cli.page_size {
        config.views.page_size = page_size;
    }
    config.validate()?;
    Ok(config)
}

async fn run(console: &Console, notifier: &dyn Notifier, command: Commands) {
    match command {
        Commands::Campaigns { command } => campaigns(console, notifier, command).await,
        Commands::Advices { command } => advices(console, notifier, command).await,
        Commands::Brief { limit } => {
            let briefs = console.briefs();
            if let Some(limit) = limit {
                briefs.set_limit(limit).await;
            }
            briefs.mount().await;
            println!("{}", render::briefs(&briefs.state()));
        }
        Commands::Decisions { campaign } => {
            let decisions = console.decisions();
            decisions.mount();
            decisions.select(campaign).await;
            println!("{}", render::decisions(&decisions.state()));
        }
        Commands::Optimize { campaign } => {
            let decisions = console.decisions();
            decisions.mount();
            decisions.select(campaign).await;
            decisions.optimize().await;
            println!("{}", render::decisions(&decisions.state()));
        }
        Commands::Logs { campaign } => match console.client().fetch_agent_logs(campaign).await {
            Ok(entries) => println!("{}", render::logs(&entries)),
            Err(err) => notifier.notify(Toast::error(err.to_string())),
        },
        Commands::Analyze { campaign } => match console.client().analyze_campaign(campaign).await {
            Ok(analysis) => println!("{}", render::analysis(&analysis)),
            Err(err) => notifier.notify(Toast::error(err.to_string())),
        },
        Commands::Overview => match console.client().fetch_overview().await {
            Ok(overview) => println!("{}", render::overview(&overview)),
            Err(err) => notifier.notify(Toast::error(err.to_string())),
        },
    }
}

fn show_campaign_page(console: &Console) {
    let view = console.campaigns();
    println!(
        "{}",
        render::campaign_page(&view.state(), &view.filtered())
    );
}

async fn campaigns(console: &Console, notifier: &dyn Notifier, command: CampaignCommand) {
    let view = console.campaigns();
    match command {
        CampaignCommand::List { page, search } => {
            // Not mounted yet, so paging only moves the cursor.
            view.go_to_page(page).await;
            view.mount().await;
            if let Some(term) = search {
                view.search(term);
            }
            show_campaign_page(console);
        }
        CampaignCommand::Show { id } => match console.client().get_campaign(id).await {
            Ok(campaign) => println!("{}", render::campaign(&campaign)),
            Err(err) => notifier.notify(Toast::error(err.to_string())),
        },
        CampaignCommand::Create {
            name,
            product,
            objective,
            budget,
        } => {
            let dialog = view.create_dialog();
            dialog.open();
            dialog.edit(FormField::Name, name);
            dialog.edit(FormField::Product, product);
            dialog.edit(FormField::Objective, objective);
            dialog.edit(FormField::Budget, budget);
            if view.submit_create().await == SubmitOutcome::Submitted {
                view.mount().await;
                show_campaign_page(console);
            }
        }
        CampaignCommand::Update {
            id,
            name,
            product,
            objective,
            budget,
            status,
        } => {
            let dialog = view.edit_dialog();
            dialog.open_with(CampaignEditForm::for_id(id));
            let fields = [
                (FormField::Name, name),
                (FormField::Product, product),
                (FormField::Objective, objective),
                (FormField::Budget, budget),
                (FormField::Status, status),
            ];
            for (field, value) in fields {
                if let Some(value) = value {
                    dialog.edit(field, value);
                }
            }
            if view.submit_edit().await == SubmitOutcome::Submitted {
                match console.client().get_campaign(id).await {
                    Ok(campaign) => println!("{}", render::campaign(&campaign)),
                    Err(err) => notifier.notify(Toast::error(err.to_string())),
                }
            }
        }
        CampaignCommand::Status { id, status } => match status.parse::<CampaignStatus>() {
            Ok(status) => {
                view.set_status(id, status).await;
                view.mount().await;
                show_campaign_page(console);
            }
            Err(err) => notifier.notify(Toast::error(err.to_string())),
        },
    }
}

async fn advices(console: &Console, notifier: &dyn Notifier, command: AdviceCommand) {
    match command {
        AdviceCommand::List { campaign, status } => {
            let status = match status.as_deref().map(str::parse::<AdviceStatus>).transpose() {
                Ok(status) => status,
                Err(err) => {
                    notifier.notify(Toast::error(err.to_string()));
                    return;
                }
            };
            let panel = console.advices();
            // Filters are set before mounting so only one list request is made.
            panel.set_filter(campaign, status).await;
            panel.mount().await;
            println!("{}", render::advices(&panel.state()));
        }
        AdviceCommand::Create {
            content,
            campaign,
            kind,
        } => {
            let panel = console.advices();
            let dialog = panel.compose_dialog();
            panel.begin_compose();
            if let Some(campaign) = campaign {
                dialog.edit(FormField::Campaign, campaign);
            }
            if let Some(kind) = kind {
                dialog.edit(FormField::Kind, kind);
            }
            dialog.edit(FormField::Content, content);
            if panel.submit_compose().await == SubmitOutcome::Submitted {
                panel.mount().await;
                println!("{}", render::advices(&panel.state()));
            }
        }
        AdviceCommand::Approve { id, by } => {
            review(console, by, id, AdviceAction::Approve).await;
        }
        AdviceCommand::Reject { id, by } => {
            review(console, by, id, AdviceAction::Reject).await;
        }
        AdviceCommand::Execute { id, result } => {
            let panel = console.advices();
            panel.mount().await;
            match result {
                Some(result) => panel.execute_with_result(id, &result).await,
                None => panel.perform(id, AdviceAction::Execute).await,
            };
            println!("{}", render::advices(&panel.state()));
        }
    }
}

/// Approve/reject need the loaded status, so the panel is loaded first.
async fn review(console: &Console, reviewer: Option<String>, id: i64, action: AdviceAction) {
    let console = console.clone().with_reviewer(reviewer);
    let panel = console.advices();
    panel.mount().await;
    panel.perform(id, action).await;
    println!("{}", render::advices(&panel.state()));
}
