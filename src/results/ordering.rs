//! Locale-aware ordering of display text

use super::types::ResultItem;
use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;
use tracing::warn;

/// Root-locale collator at tertiary strength.
///
/// Case is a tertiary difference (lowercase first), accents secondary,
/// and punctuation and digits sort ahead of letters.
fn collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);

    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("root collation unavailable, using code point order: {:?}", e);
            None
        }
    }
}

/// Compare two strings the way a human-facing list expects
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    match collator() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// Stable ascending sort by `display_text`; equal keys keep their order
pub fn sort_by_display_text(items: &mut [ResultItem]) {
    match collator() {
        Some(collator) => {
            items.sort_by(|a, b| collator.compare(&a.display_text, &b.display_text))
        }
        None => items.sort_by(|a, b| a.display_text.cmp(&b.display_text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&str]) -> Vec<String> {
        let mut items: Vec<ResultItem> = words.iter().map(|w| ResultItem::new(*w)).collect();
        sort_by_display_text(&mut items);
        items.into_iter().map(|i| i.display_text).collect()
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(sorted(&["bca", "Abd", "abc"]), vec!["abc", "Abd", "bca"]);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_cmp("abc", "Abc"), Ordering::Less);
        assert_eq!(locale_cmp("Abc", "abc"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_cmp("repo", "repository1"), Ordering::Less);
        assert_eq!(locale_cmp("zoë", "zoey"), Ordering::Less);
    }

    #[test]
    fn test_punctuation_before_digits_before_letters() {
        assert_eq!(locale_cmp("my_repo", "my1repo"), Ordering::Less);
        assert_eq!(locale_cmp("my1repo", "myrepo"), Ordering::Less);
        assert_eq!(locale_cmp("a-b", "a_b"), Ordering::Greater);
        assert_eq!(
            sorted(&["owner/myrepo", "owner/my1repo", "owner/my_repo"]),
            vec!["owner/my_repo", "owner/my1repo", "owner/myrepo"]
        );
    }

    #[test]
    fn test_accents_are_secondary() {
        assert_eq!(locale_cmp("émile", "fred"), Ordering::Less);
        assert_eq!(locale_cmp("emile", "émile"), Ordering::Less);
        assert_eq!(
            sorted(&["zebra", "Émile", "eve"]),
            vec!["Émile", "eve", "zebra"]
        );
    }

    #[test]
    fn test_identical_strings_are_equal() {
        assert_eq!(locale_cmp("İstanbul", "İstanbul"), Ordering::Equal);
        assert_eq!(locale_cmp("octocat", "octocat"), Ordering::Equal);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut items = vec![
            ResultItem::new("same").with_url("https://github.com/first"),
            ResultItem::new("abc"),
            ResultItem::new("same").with_url("https://github.com/second"),
        ];
        sort_by_display_text(&mut items);
        assert_eq!(items[0].display_text, "abc");
        assert_eq!(items[1].link(), Some("https://github.com/first"));
        assert_eq!(items[2].link(), Some("https://github.com/second"));
    }

    #[test]
    fn test_users_and_repositories_interleave() {
        assert_eq!(
            sorted(&["abc", "bca", "dfg", "repository1", "Dfa"]),
            vec!["abc", "bca", "Dfa", "dfg", "repository1"]
        );
    }
}
