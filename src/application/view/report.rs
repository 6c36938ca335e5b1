//! A complete render: listing, summary and where the items came from.

use super::listing::{build_listing, Disclosure};
use super::summary::build_summary;
use crate::domain::classify::Classification;
use crate::port::outbound::report::{DataOrigin, Report};

/// Build one render's worth of data for a presenter.
#[must_use]
pub fn build_report(
    classification: &Classification,
    disclosure: &Disclosure,
    origin: DataOrigin,
) -> Report {
    Report {
        origin,
        listing: build_listing(classification, disclosure),
        summary: build_summary(classification),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classify::categorize;
    use crate::testkit::item::sample_items;

    #[test]
    fn listing_follows_disclosure_and_summary_covers_everything() {
        let disclosure = Disclosure {
            only: vec!["ring".into()],
            ..Disclosure::default()
        };
        let report = build_report(
            &categorize(&sample_items()),
            &disclosure,
            DataOrigin::Cache,
        );

        assert_eq!(report.origin, DataOrigin::Cache);
        assert_eq!(report.listing.categories.len(), 1);
        assert_eq!(report.summary.total_items, 5);
    }
}
