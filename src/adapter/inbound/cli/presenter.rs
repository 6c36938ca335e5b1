//! Terminal rendering of reports.
//!
//! Human mode prints the listing as an indented tree with tier-colored
//! item names and a summary table. Both are the command's result and are
//! printed even with `--quiet`, which only drops the status lines around
//! them. JSON mode emits one `report` line per render.

use std::time::Duration;

use owo_colors::Style;
use parking_lot::Mutex;
use serde_json::json;
use tabled::settings::Style as TableStyle;
use tabled::{Table, Tabled};
use tracing::warn;

use super::output;
use crate::application::countdown::format_remaining;
use crate::domain::item::Number;
use crate::port::outbound::presenter::Presenter;
use crate::port::outbound::report::{
    CategoryNode, DataOrigin, ItemCard, ListingView, Report, SectionBody, Sign, SummaryView,
};

/// Which parts of a report to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Listing followed by the summary.
    Full,
    SummaryOnly,
}

pub struct TerminalPresenter {
    layout: Layout,
    /// Keep a single countdown line updating in place.
    live: bool,
    countdown_line: Mutex<Option<indicatif::ProgressBar>>,
}

impl TerminalPresenter {
    #[must_use]
    pub fn new(layout: Layout, live: bool) -> Self {
        Self {
            layout,
            live,
            countdown_line: Mutex::new(None),
        }
    }

    fn clear_countdown(&self) {
        if let Some(line) = self.countdown_line.lock().take() {
            line.finish_and_clear();
        }
    }

    fn present_json(&self, report: &Report) {
        let value = match self.layout {
            Layout::Full => serde_json::to_value(report),
            Layout::SummaryOnly => serde_json::to_value(&report.summary).map(|summary| {
                json!({
                    "origin": origin_label(&report.origin),
                    "summary": summary,
                })
            }),
        };
        match value {
            Ok(value) => output::json_line("report", value),
            Err(e) => warn!(error = %e, "Failed to serialize report"),
        }
    }
}

impl Presenter for TerminalPresenter {
    fn present(&self, report: &Report) {
        if output::is_json() {
            self.present_json(report);
            return;
        }

        self.clear_countdown();
        let total = report.summary.total_items;
        match &report.origin {
            DataOrigin::Fetched => output::success(&format!("Fetched {total} items")),
            DataOrigin::Cache => output::note(&format!("Loaded {total} items from cache")),
            DataOrigin::Stale { reason } => {
                output::warning(&format!("Failed to fetch items: {reason}"));
                output::note(&format!("Showing {total} cached items"));
            }
        }

        let mut lines = match self.layout {
            Layout::Full => render_listing(&report.listing),
            Layout::SummaryOnly => Vec::new(),
        };
        lines.extend(render_summary(&report.summary));
        for line in lines {
            println!("{line}");
        }
    }

    fn present_error(&self, message: &str) {
        self.clear_countdown();
        output::error(&format!("Error: {message}"));
        output::error("No cached data available.");
    }

    fn countdown(&self, remaining: Duration) {
        let text = format!("Next refresh in: {}", format_remaining(remaining));

        if output::is_json() {
            if !self.live {
                output::json_line(
                    "countdown",
                    json!({ "remaining_ms": u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX) }),
                );
            }
            return;
        }

        if self.live {
            let mut line = self.countdown_line.lock();
            match line.as_ref() {
                Some(bar) => bar.set_message(text),
                None => *line = Some(output::spinner(&text)),
            }
        } else {
            output::note(&text);
        }
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        self.clear_countdown();
    }
}

fn origin_label(origin: &DataOrigin) -> &'static str {
    match origin {
        DataOrigin::Fetched => "fetched",
        DataOrigin::Cache => "cache",
        DataOrigin::Stale { .. } => "stale",
    }
}

/// Listing as printable lines.
pub fn render_listing(listing: &ListingView) -> Vec<String> {
    let mut lines = Vec::new();
    for category in &listing.categories {
        render_category(category, &mut lines);
    }
    lines
}

fn render_category(category: &CategoryNode, lines: &mut Vec<String>) {
    let marker = if category.collapsed { "▸" } else { "▾" };
    lines.push(String::new());
    lines.push(format!("{marker} {}", output::bold(category.title())));
    if category.collapsed {
        return;
    }
    for card in &category.items {
        render_card(card, lines);
    }
}

fn render_card(card: &ItemCard, lines: &mut Vec<String>) {
    let name_style = Style::new()
        .truecolor(card.color.r, card.color.g, card.color.b)
        .bold();
    let trade = if card.tradable {
        output::positive(card.trade_badge())
    } else {
        output::negative(card.trade_badge())
    };

    lines.push(format!(
        "  {} {} {}",
        output::paint(&card.name, name_style),
        output::muted(format!("[{}] Lv. {}", card.tier, card.level)),
        output::muted(format!("XP {}", card.xp_bonus)),
    ));
    let mut badges = format!("    {trade}");
    if let Some(warning) = card.warning {
        badges.push_str(&format!(
            "  {}",
            output::paint(format!("⚠ {warning}"), Style::new().yellow())
        ));
    }
    lines.push(badges);

    if card.collapsed {
        return;
    }
    for section in &card.sections {
        lines.push(format!("    {}", output::highlight(section.title)));
        match &section.body {
            SectionBody::Stats(stats) => {
                for stat in stats {
                    let value = match stat.sign {
                        Some(Sign::Positive) => output::positive(&stat.value),
                        Some(Sign::Negative) => output::negative(&stat.value),
                        None => stat.value.clone(),
                    };
                    lines.push(format!("      {}: {value}", stat.name));
                }
            }
            SectionBody::Text(text) => {
                for text_line in text.lines() {
                    lines.push(format!("      {}", output::muted(text_line)));
                }
            }
        }
    }
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Items")]
    items: usize,
    #[tabled(rename = "Tradable")]
    tradable: usize,
    #[tabled(rename = "Max XP")]
    max_xp: String,
}

/// Summary block as printable lines: title, total and table.
pub fn render_summary(summary: &SummaryView) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        output::bold("Summary"),
        format!(
            "  {} {}",
            output::muted(format!("{:<14}", "Total Items")),
            summary.total_items
        ),
    ];
    if !summary.categories.is_empty() {
        lines.extend(
            render_summary_table(summary)
                .lines()
                .map(|line| format!("  {line}")),
        );
    }
    lines
}

/// Summary table as text.
pub fn render_summary_table(summary: &SummaryView) -> String {
    let rows: Vec<SummaryRow> = summary
        .categories
        .iter()
        .map(|c| SummaryRow {
            category: c.display_name.clone(),
            items: c.items,
            tradable: c.tradable,
            max_xp: format!("{}%", Number(c.max_xp)),
        })
        .collect();

    Table::new(rows).with(TableStyle::rounded()).to_string()
}
