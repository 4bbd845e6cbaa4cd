//! Filter/sort derivation
//!
//! Maps a raw worker list plus the user's criteria to the visible, ordered
//! subset. The derivation is pure: the input slice is never touched and every
//! call builds a fresh result.

use crate::directory::error::CriteriaError;
use crate::directory::model::WorkerRecord;
use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Selector value meaning "no service filter"
pub const ALL_SERVICES: &str = "all";

/// Sort order for the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by name, Unicode collation (root locale)
    #[default]
    Name,
    /// Ascending by daily price
    Price,
}

impl FromStr for SortKey {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            other => Err(CriteriaError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Service selector state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceFilter {
    /// Every service
    #[default]
    All,
    /// Exact, case-sensitive match on the service label
    Only(String),
}

impl ServiceFilter {
    /// Map a selector value to a filter; `"all"` disables filtering
    pub fn from_selection(selection: &str) -> Self {
        if selection == ALL_SERVICES {
            ServiceFilter::All
        } else {
            ServiceFilter::Only(selection.to_string())
        }
    }

    /// Whether a record with this service passes the filter
    pub fn matches(&self, service: &str) -> bool {
        match self {
            ServiceFilter::All => true,
            ServiceFilter::Only(selected) => selected == service,
        }
    }
}

/// Everything the user can choose on the page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Free-text search, matched case-insensitively against name and service
    pub search_term: String,
    /// Service selector
    pub service: ServiceFilter,
    /// Sort order
    pub sort_by: SortKey,
}

/// Result of one derivation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedView {
    /// Valid records that survive the criteria, in sort order
    pub visible: Vec<WorkerRecord>,
    /// Distinct services across the whole raw list, ascending
    pub services: Vec<String>,
    /// Length of the raw list, invalid records included
    pub total_count: usize,
}

impl DerivedView {
    /// "Showing N of M workers"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} workers",
            self.visible.len(),
            self.total_count
        )
    }

    /// Whether nothing is visible
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Derive the visible list, service facet and total count
///
/// Stages run in a fixed order: validity, search, service, then a stable sort.
/// The service facet is drawn from the entire raw list, invalid records included.
pub fn derive(raw: &[WorkerRecord], criteria: &FilterCriteria) -> DerivedView {
    let needle = criteria.search_term.to_lowercase();

    let mut visible: Vec<WorkerRecord> = raw
        .iter()
        .filter(|worker| worker.is_valid())
        .filter(|worker| matches_search(worker, &needle))
        .filter(|worker| criteria.service.matches(&worker.service))
        .cloned()
        .collect();

    // slice::sort_by is stable; equal keys keep their input order
    match criteria.sort_by {
        SortKey::Name => {
            let mut collator = name_collator();
            visible.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
        }
        SortKey::Price => visible.sort_by(compare_prices),
    }

    DerivedView {
        visible,
        services: distinct_services(raw),
        total_count: raw.len(),
    }
}

/// Sorted, de-duplicated service labels of every record
pub fn distinct_services(raw: &[WorkerRecord]) -> Vec<String> {
    raw.iter()
        .map(|worker| worker.service.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `needle` must already be lowercased
fn matches_search(worker: &WorkerRecord, needle: &str) -> bool {
    needle.is_empty()
        || worker.name.to_lowercase().contains(needle)
        || worker.service.to_lowercase().contains(needle)
}

fn compare_prices(a: &WorkerRecord, b: &WorkerRecord) -> Ordering {
    let a = a.price_per_day.unwrap_or_default();
    let b = b.price_per_day.unwrap_or_default();
    a.total_cmp(&b)
}

/// Collator for name ordering
///
/// CLDR root tailoring with non-ignorable punctuation and spaces, so
/// "Bob Lee" sorts before "Bobby". Accents and case are secondary and tertiary
/// differences; lowercase sorts ahead of uppercase. Identical strings compare
/// equal.
fn name_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<WorkerRecord> {
        vec![
            WorkerRecord::new(1, "Alice Smith", "Plumber", 500.0),
            WorkerRecord::new(2, "Bob Johnson", "Electrician", 600.0),
            WorkerRecord::new(3, "Charlie Brown", "Plumber", 400.0),
            WorkerRecord::new(4, "Diana Prince", "Painter", 0.0),
            WorkerRecord {
                id: None,
                ..WorkerRecord::new(0, "Invalid Worker", "Welder", 300.0)
            },
        ]
    }

    fn names(view: &DerivedView) -> Vec<&str> {
        view.visible.iter().map(|w| w.name.as_str()).collect()
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Price);

        let err = "rating".parse::<SortKey>().unwrap_err();
        assert_eq!(err, CriteriaError::UnknownSortKey("rating".to_string()));
        assert!(err.to_string().contains("Unknown sort key 'rating'"));
    }

    #[test]
    fn test_service_filter_selection() {
        assert_eq!(ServiceFilter::from_selection("all"), ServiceFilter::All);
        assert_eq!(
            ServiceFilter::from_selection("Plumber"),
            ServiceFilter::Only("Plumber".to_string())
        );
        // Only the exact sentinel disables filtering
        assert!(!ServiceFilter::from_selection("All").matches("Plumber"));
    }

    #[test]
    fn test_default_criteria_shows_all_valid() {
        let view = derive(&sample(), &FilterCriteria::default());

        assert_eq!(names(&view), vec!["Alice Smith", "Bob Johnson", "Charlie Brown"]);
        assert_eq!(view.total_count, 5);
        assert_eq!(view.services, vec!["Electrician", "Painter", "Plumber", "Welder"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_service() {
        let raw = sample();
        let by_name = FilterCriteria {
            search_term: "ALICE".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&derive(&raw, &by_name)), vec!["Alice Smith"]);

        let by_service = FilterCriteria {
            search_term: "plumb".to_string(),
            ..Default::default()
        };
        let view = derive(&raw, &by_service);
        assert_eq!(view.visible.len(), 2);
        assert!(view.visible.iter().all(|w| w.service == "Plumber"));
    }

    #[test]
    fn test_service_filter_is_exact() {
        let raw = sample();
        let criteria = FilterCriteria {
            service: ServiceFilter::Only("Electrician".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&derive(&raw, &criteria)), vec!["Bob Johnson"]);

        let lowercase = FilterCriteria {
            service: ServiceFilter::Only("electrician".to_string()),
            ..Default::default()
        };
        assert!(derive(&raw, &lowercase).is_empty());
    }

    #[test]
    fn test_sort_by_price_is_stable() {
        let raw = vec![
            WorkerRecord::new(1, "First", "A", 500.0),
            WorkerRecord::new(2, "Second", "B", 400.0),
            WorkerRecord::new(3, "Third", "C", 500.0),
            WorkerRecord::new(4, "Fourth", "D", 400.0),
        ];
        let criteria = FilterCriteria {
            sort_by: SortKey::Price,
            ..Default::default()
        };

        assert_eq!(
            names(&derive(&raw, &criteria)),
            vec!["Second", "Fourth", "First", "Third"]
        );
    }

    #[test]
    fn test_sort_by_name_ties_keep_input_order() {
        let raw = vec![
            WorkerRecord::new(1, "Sam", "Plumber", 300.0),
            WorkerRecord::new(2, "Ann", "Painter", 200.0),
            WorkerRecord::new(3, "Sam", "Carpenter", 100.0),
        ];
        let view = derive(&raw, &FilterCriteria::default());
        let ids: Vec<_> = view.visible.iter().map(|w| w.id).collect();

        assert_eq!(ids, vec![Some(2), Some(1), Some(3)]);
    }

    fn sorted_by_name(input: &[&str]) -> Vec<String> {
        let raw: Vec<_> = input
            .iter()
            .enumerate()
            .map(|(i, name)| WorkerRecord::new(i as i64 + 1, *name, "Plumber", 100.0))
            .collect();
        derive(&raw, &FilterCriteria::default())
            .visible
            .into_iter()
            .map(|w| w.name)
            .collect()
    }

    #[test]
    fn test_name_sort_places_accented_letters_with_base_letter() {
        assert_eq!(
            sorted_by_name(&["Zoe Adams", "Émile Roux", "Bob Lee"]),
            vec!["Bob Lee", "Émile Roux", "Zoe Adams"]
        );
        assert_eq!(
            sorted_by_name(&["Zoe Baker", "Zoë Adams", "Eve", "Édouard"]),
            vec!["Édouard", "Eve", "Zoë Adams", "Zoe Baker"]
        );
    }

    #[test]
    fn test_name_sort_is_case_insensitive_with_lowercase_first() {
        assert_eq!(
            sorted_by_name(&["Bob", "alice", "Anna", "anna"]),
            vec!["alice", "anna", "Anna", "Bob"]
        );
        assert_eq!(sorted_by_name(&["Bobby", "Bob Lee"]), vec!["Bob Lee", "Bobby"]);
    }

    #[test]
    fn test_raw_list_is_untouched() {
        let raw = sample();
        let before = raw.clone();
        let criteria = FilterCriteria {
            sort_by: SortKey::Price,
            ..Default::default()
        };
        let _ = derive(&raw, &criteria);

        assert_eq!(raw, before);
    }

    #[test]
    fn test_empty_input() {
        let view = derive(&[], &FilterCriteria::default());

        assert!(view.visible.is_empty());
        assert!(view.services.is_empty());
        assert_eq!(view.total_count, 0);
        assert_eq!(view.summary(), "Showing 0 of 0 workers");
    }

    #[test]
    fn test_summary() {
        let view = derive(&sample(), &FilterCriteria::default());
        assert_eq!(view.summary(), "Showing 3 of 5 workers");
    }
}
