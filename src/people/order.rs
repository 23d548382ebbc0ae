//! Locale-aware ordering by last name token.

use std::cmp::Ordering;

use icu::collator::options::CollatorOptions;
use icu::collator::{Collator, CollatorBorrowed};
use icu::locale::{Locale, locale};
use tracing::warn;

use super::Person;

pub const DEFAULT_LOCALE: &str = "en-US";

/// Sorts people by [`Person::last_name_key`] with an ICU collator.
pub struct LastNameOrder {
    collator: Option<CollatorBorrowed<'static>>,
}

impl LastNameOrder {
    /// Build for a BCP-47 tag. Unparsable tags fall back to [`DEFAULT_LOCALE`];
    /// if no collation data loads, comparison degrades to case-folded code points.
    pub fn for_locale(tag: &str) -> Self {
        let locale: Locale = tag.parse().unwrap_or_else(|_| {
            warn!(tag, "unrecognised locale, using {DEFAULT_LOCALE}");
            locale!("en-US")
        });
        let collator = match Collator::try_new(locale.into(), CollatorOptions::default()) {
            Ok(c) => Some(c),
            Err(e) => {
                warn!(error = %e, "collator unavailable, using plain comparison");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(c) => c.compare(a, b),
            None => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
        }
    }

    /// Stable sort; people sharing a last name keep their fetch order.
    pub fn sort(&self, people: &mut [Person]) {
        people.sort_by(|a, b| self.compare(a.last_name_key(), b.last_name_key()));
    }
}

impl Default for LastNameOrder {
    fn default() -> Self {
        Self::for_locale(DEFAULT_LOCALE)
    }
}
