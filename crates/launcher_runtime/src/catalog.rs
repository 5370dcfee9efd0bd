//! Pure derivations over the application catalog.
//!
//! Filtered lists and the category set are recomputed from the catalog on demand rather than
//! stored alongside it, so there is a single source of truth.

use std::collections::{BTreeSet, HashSet};

use launcher_host::ApplicationRecord;

use crate::model::ALL_CATEGORIES;

/// Returns the records whose display name contains `term` (case-insensitive) and whose category
/// matches `category`, preserving catalog order.
///
/// An empty term matches everything; the [`ALL_CATEGORIES`] sentinel disables the category check.
/// Whitespace in `term` is matched literally.
pub fn filter_apps(
    apps: &[ApplicationRecord],
    term: &str,
    category: &str,
) -> Vec<ApplicationRecord> {
    let needle = term.to_lowercase();
    apps.iter()
        .filter(|app| category == ALL_CATEGORIES || app.category == category)
        .filter(|app| needle.is_empty() || app.display_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Returns `"All"` followed by the distinct categories in the catalog, sorted ascending.
pub fn categories(apps: &[ApplicationRecord]) -> Vec<String> {
    let distinct: BTreeSet<&str> = apps
        .iter()
        .map(|app| app.category.as_str())
        .filter(|category| *category != ALL_CATEGORIES)
        .collect();
    std::iter::once(ALL_CATEGORIES)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

/// Drops records whose launch path was already seen. Returns the kept records and the launch
/// paths that were dropped.
pub fn dedupe_by_launch_path(
    apps: Vec<ApplicationRecord>,
) -> (Vec<ApplicationRecord>, Vec<String>) {
    let mut seen = HashSet::new();
    let mut dropped = Vec::new();
    let mut kept = Vec::with_capacity(apps.len());
    for app in apps {
        if seen.insert(app.launch_path.clone()) {
            kept.push(app);
        } else {
            dropped.push(app.launch_path);
        }
    }
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> Vec<ApplicationRecord> {
        vec![
            ApplicationRecord::new("0", "Safari", "/Apps/Safari", "Web"),
            ApplicationRecord::new("1", "Steam", "/Apps/Steam", "Games"),
            ApplicationRecord::new("2", "Terminal", "/Apps/Terminal", "Tools"),
            ApplicationRecord::new("3", "Slack", "/Apps/Slack", "Chat"),
            ApplicationRecord::new("4", "Stellaris", "/Apps/Stellaris", "Games"),
        ]
    }

    fn names(apps: &[ApplicationRecord]) -> Vec<&str> {
        apps.iter().map(|app| app.display_name.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring_in_catalog_order() {
        let apps = catalog();
        assert_eq!(
            names(&filter_apps(&apps, "ST", ALL_CATEGORIES)),
            vec!["Steam", "Stellaris"]
        );
        assert_eq!(
            names(&filter_apps(&apps, "a", ALL_CATEGORIES)),
            vec!["Safari", "Steam", "Terminal", "Slack", "Stellaris"]
        );
        assert!(filter_apps(&apps, "zzz", ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn empty_term_matches_everything() {
        let apps = catalog();
        assert_eq!(filter_apps(&apps, "", ALL_CATEGORIES), apps);
    }

    #[test]
    fn padded_term_matches_whitespace_literally() {
        let apps = vec![
            ApplicationRecord::new("0", "AB", "/Apps/AB", "Tools"),
            ApplicationRecord::new("1", "Visual Studio", "/Apps/VS", "Tools"),
        ];
        assert!(filter_apps(&apps, "A ", ALL_CATEGORIES).is_empty());
        assert!(filter_apps(&apps, "   ", ALL_CATEGORIES).is_empty());
        assert_eq!(
            names(&filter_apps(&apps, "l s", ALL_CATEGORIES)),
            vec!["Visual Studio"]
        );
    }

    #[test]
    fn category_filter_is_exact_and_combines_with_search() {
        let apps = catalog();
        assert_eq!(
            names(&filter_apps(&apps, "", "Games")),
            vec!["Steam", "Stellaris"]
        );
        assert!(filter_apps(&apps, "", "games").is_empty());
        assert_eq!(names(&filter_apps(&apps, "lar", "Games")), vec!["Stellaris"]);
    }

    #[test]
    fn categories_start_with_all_and_have_no_duplicates() {
        assert_eq!(
            categories(&catalog()),
            vec!["All", "Chat", "Games", "Tools", "Web"]
        );
        assert_eq!(categories(&[]), vec!["All"]);

        let odd = vec![ApplicationRecord::new("0", "X", "/Apps/X", "All")];
        assert_eq!(categories(&odd), vec!["All"]);
    }

    #[test]
    fn dedupe_keeps_first_record_per_launch_path() {
        let mut apps = catalog();
        apps.push(ApplicationRecord::new("9", "Steam (copy)", "/Apps/Steam", "Other"));

        let (kept, dropped) = dedupe_by_launch_path(apps);
        assert_eq!(kept, catalog());
        assert_eq!(dropped, vec!["/Apps/Steam".to_string()]);
    }
}
