//! Summary view: totals per category.

use crate::domain::category::display_name;
use crate::domain::classify::Classification;
use crate::port::outbound::report::{CategorySummary, SummaryView};

/// Build the summary for a classification, in display order.
#[must_use]
pub fn build_summary(classification: &Classification) -> SummaryView {
    let categories = classification
        .ordered()
        .into_iter()
        .map(|(key, items)| CategorySummary {
            key: key.to_string(),
            display_name: display_name(key),
            items: items.len(),
            tradable: items.iter().filter(|i| i.record.is_tradable()).count(),
            max_xp: items
                .iter()
                .map(|i| i.xp_bonus.max_possible())
                .fold(0.0, f64::max),
        })
        .collect();

    SummaryView {
        total_items: classification.total_items(),
        categories,
    }
}
