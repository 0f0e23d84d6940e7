//! Plain-text rendering of view state for the terminal.

use adpilot::api::{
    Advice, AgentLogEntry, Brief, Campaign, CampaignAnalysis, DecisionStep, Overview, StepStatus,
};
use adpilot::ui::advices::{actions_for, AdvicePanelState, EMPTY_MESSAGE};
use adpilot::ui::briefs::BriefPanelState;
use adpilot::ui::campaigns::CampaignListState;
use adpilot::ui::collection::{Collection, Display};
use adpilot::ui::decisions::DecisionFlowState;

fn collection<T>(
    items: &Collection<T>,
    empty: &str,
    row: impl Fn(&T) -> String,
) -> Vec<String> {
    match items.display() {
        Display::Loading => vec!["Loading...".to_string()],
        Display::Failed(message) => vec![format!("Error: {}", message)],
        Display::Empty => vec![empty.to_string()],
        Display::Items(items) => items.iter().map(row).collect(),
    }
}

fn campaign_row(c: &Campaign) -> String {
    format!(
        "#{:<5} {:<24} {:<10} {:>12.2}  {} / {}",
        c.id, c.name, c.status, c.budget, c.product, c.objective
    )
}

pub fn campaign_page(state: &CampaignListState, rows: &[Campaign]) -> String {
    let mut lines = match state.campaigns.display() {
        Display::Items(_) if rows.is_empty() => vec![format!("No campaign matches '{}'", state.search)],
        Display::Items(_) => rows.iter().map(campaign_row).collect(),
        _ => collection(&state.campaigns, "No campaigns", campaign_row),
    };
    let mut nav = format!("page {}", state.page);
    if state.has_prev() {
        nav.push_str(" | prev");
    }
    if state.has_next {
        nav.push_str(" | next");
    }
    lines.push(nav);
    lines.join("\n")
}

pub fn campaign(c: &Campaign) -> String {
    [
        format!("#{} {}", c.id, c.name),
        format!("  product:   {}", c.product),
        format!("  objective: {}", c.objective),
        format!("  budget:    {:.2}", c.budget),
        format!("  status:    {}", c.status),
        format!("  created:   {}", c.created_at),
    ]
    .join("\n")
}

fn advice_row(a: &Advice) -> String {
    let campaign = a
        .campaign_id
        .map(|id| format!("campaign #{}", id))
        .unwrap_or_else(|| "global".to_string());
    let actions: Vec<&str> = actions_for(a.status).iter().map(|a| a.label()).collect();
    let mut row = format!("#{:<5} [{}] {} ({}, {})", a.id, a.status, a.content, a.kind, campaign);
    if !actions.is_empty() {
        row.push_str(&format!("  -> {}", actions.join(", ")));
    }
    row
}

pub fn advices(state: &AdvicePanelState) -> String {
    collection(&state.advices, EMPTY_MESSAGE, advice_row).join("\n")
}

fn brief_row(b: &Brief) -> String {
    format!("{}  {}", b.date, b.content)
}

pub fn briefs(state: &BriefPanelState) -> String {
    collection(&state.briefs, "No briefs yet", brief_row).join("\n")
}

fn step_marker(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => "[x]",
        StepStatus::Error => "[!]",
        StepStatus::InProgress => "[~]",
        StepStatus::Pending => "[ ]",
        StepStatus::Unknown => "[?]",
    }
}

fn step_row(s: &DecisionStep) -> String {
    let mut row = format!("{} {} ({})", step_marker(s.status), s.title, s.kind);
    if !s.description.is_empty() {
        row.push_str(&format!(": {}", s.description));
    }
    row
}

pub fn decisions(state: &DecisionFlowState) -> String {
    let mut lines = Vec::new();
    if let Some(id) = state.campaign_id {
        lines.push(format!("Decision flow for campaign #{}", id));
    }
    lines.extend(collection(&state.steps, "No decisions recorded", step_row));
    lines.join("\n")
}

pub fn logs(entries: &[AgentLogEntry]) -> String {
    if entries.is_empty() {
        return "No agent activity".to_string();
    }
    entries
        .iter()
        .map(|e| format!("{} {:<5} {:<12} {}", e.timestamp, e.level, e.component, e.message))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn analysis(analysis: &CampaignAnalysis) -> String {
    let mut lines: Vec<String> = analysis
        .info
        .iter()
        .map(|item| format!("* {}: {}", item.title, item.summary))
        .collect();
    if !analysis.suggestion.is_empty() {
        lines.push(format!("Suggestion: {}", analysis.suggestion));
    }
    lines.join("\n")
}

pub fn overview(overview: &Overview) -> String {
    let mut lines: Vec<String> = overview
        .stats
        .iter()
        .map(|s| format!("{:<20} {:>12} {} ({})", s.title, s.value, s.change, s.trend))
        .collect();
    if !overview.recent_campaigns.is_empty() {
        lines.push(String::new());
        lines.push("Recent campaigns".to_string());
        lines.extend(overview.recent_campaigns.iter().map(|c| {
            format!(
                "  {:<24} {:<10} {:>10} {:>5.1}%{}",
                c.name,
                c.status,
                c.budget,
                c.performance,
                if c.ai_optimized { "  AI" } else { "" }
            )
        }));
    }
    lines.join("\n")
}
