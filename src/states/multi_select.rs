//! Multi-select State
//!
//! Ordered selection of option records. Order follows selection order, not
//! source order, and keys are unique.

use std::time::Duration;

use crate::constants::MAX_ANIMATION_SECS;
use crate::domain::{OptionAccessors, SelectValue, fuzzy_contains};

/// Ordered set of selected options
#[derive(Debug, Clone)]
pub struct MultiSelection<T> {
    items: Vec<T>,
}

impl<T> Default for MultiSelection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Clone + 'static> MultiSelection<T> {
    /// Create a selection from caller defaults, dropping duplicate keys
    pub fn new<K: SelectValue>(defaults: Vec<T>, acc: &OptionAccessors<T, K>) -> Self {
        let mut selection = Self::default();
        for item in defaults {
            if !selection.contains(&acc.value(&item), acc) {
                selection.items.push(item);
            }
        }
        selection
    }

    // ==================== Getters ====================

    /// Selected options in selection order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of selected options
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if an option key is selected
    pub fn contains<K: SelectValue>(&self, value: &K, acc: &OptionAccessors<T, K>) -> bool {
        self.items.iter().any(|item| acc.has_value(item, value))
    }

    /// Selected keys in selection order
    pub fn values<K: SelectValue>(&self, acc: &OptionAccessors<T, K>) -> Vec<K> {
        self.items.iter().map(|item| acc.value(item)).collect()
    }

    /// Check if every option in `options` is selected
    pub fn is_all_selected<K: SelectValue>(&self, options: &[T], acc: &OptionAccessors<T, K>) -> bool {
        !options.is_empty()
            && options
                .iter()
                .all(|option| self.contains(&acc.value(option), acc))
    }

    /// Badges to show and the number collapsed into the overflow badge
    pub fn visible(&self, max_count: usize) -> (&[T], usize) {
        let shown = self.items.len().min(max_count);
        (&self.items[..shown], self.items.len() - shown)
    }

    // ==================== Mutations ====================

    /// Add the option if absent, remove it if present
    ///
    /// Returns `true` if the option is selected afterwards.
    pub fn toggle<K: SelectValue>(&mut self, option: &T, acc: &OptionAccessors<T, K>) -> bool {
        let value = acc.value(option);
        if self.remove(&value, acc) {
            false
        } else {
            self.items.push(option.clone());
            true
        }
    }

    /// Remove an option by key, returns whether it was selected
    pub fn remove<K: SelectValue>(&mut self, value: &K, acc: &OptionAccessors<T, K>) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !acc.has_value(item, value));
        self.items.len() != before
    }

    /// Select every option, or clear if all are already selected
    pub fn toggle_all<K: SelectValue>(&mut self, options: &[T], acc: &OptionAccessors<T, K>) {
        if self.is_all_selected(options, acc) {
            self.clear();
        } else {
            self.items = options.to_vec();
        }
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Truncate the selection to its first `max_count` items
    ///
    /// Returns `true` if anything was dropped.
    pub fn trim_to(&mut self, max_count: usize) -> bool {
        if self.items.len() > max_count {
            self.items.truncate(max_count);
            true
        } else {
            false
        }
    }

    /// Remove the most recently selected option
    pub fn pop_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Replace the selection (caller-controlled reset)
    pub fn replace<K: SelectValue>(&mut self, items: Vec<T>, acc: &OptionAccessors<T, K>) {
        *self = Self::new(items, acc);
    }
}

/// Indices of the options the list should show
///
/// Delegated search shows everything; otherwise the live text filters labels
/// as an in-order subsequence.
pub fn filter_fuzzy<T: 'static, K: SelectValue>(
    options: &[T],
    acc: &OptionAccessors<T, K>,
    text: &str,
    delegated: bool,
) -> Vec<usize> {
    if delegated || text.is_empty() {
        return (0..options.len()).collect();
    }
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| fuzzy_contains(&acc.label(option), text))
        .map(|(ix, _)| ix)
        .collect()
}

/// Badge pulse period in seconds, limited to `0..=MAX_ANIMATION_SECS`
///
/// Non-finite input disables the animation.
pub fn clamp_animation(seconds: f32) -> f32 {
    if seconds.is_finite() {
        seconds.clamp(0.0, MAX_ANIMATION_SECS)
    } else {
        0.0
    }
}

/// Pulse period for badges, `None` when the animation is off
pub fn pulse_period(seconds: f32) -> Option<Duration> {
    Duration::try_from_secs_f32(clamp_animation(seconds))
        .ok()
        .filter(|period| !period.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Framework {
        value: &'static str,
        label: &'static str,
    }

    fn fw(value: &'static str) -> Framework {
        Framework { value, label: value }
    }

    fn acc() -> OptionAccessors<Framework, &'static str> {
        OptionAccessors::new(|f: &Framework| f.value, |f: &Framework| f.label.into())
    }

    fn options() -> Vec<Framework> {
        vec![fw("react"), fw("vue"), fw("svelte"), fw("angular"), fw("solid")]
    }

    #[test]
    fn test_toggle_sequence_preserves_selection_order() {
        let acc = acc();
        let opts = options();
        let mut selection = MultiSelection::default();

        assert!(selection.toggle(&opts[2], &acc));
        assert!(selection.toggle(&opts[0], &acc));
        assert!(selection.toggle(&opts[4], &acc));
        assert!(!selection.toggle(&opts[0], &acc));
        assert!(selection.toggle(&opts[1], &acc));
        assert!(selection.toggle(&opts[0], &acc));

        assert_eq!(
            selection.values(&acc),
            vec!["svelte", "solid", "vue", "react"]
        );
    }

    #[test]
    fn test_defaults_drop_duplicate_keys() {
        let acc = acc();
        let selection = MultiSelection::new(vec![fw("vue"), fw("react"), fw("vue")], &acc);
        assert_eq!(selection.values(&acc), vec!["vue", "react"]);
    }

    #[test]
    fn test_toggle_all_selects_then_clears() {
        let acc = acc();
        let opts = options();
        let mut selection = MultiSelection::new(vec![opts[3].clone()], &acc);

        selection.toggle_all(&opts, &acc);
        assert_eq!(selection.items(), opts.as_slice());
        assert!(selection.is_all_selected(&opts, &acc));

        selection.toggle_all(&opts, &acc);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_on_empty_options_is_noop_selection() {
        let acc = acc();
        let mut selection: MultiSelection<Framework> = MultiSelection::default();
        selection.toggle_all(&[], &acc);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_trim_keeps_first_k_in_selection_order() {
        let acc = acc();
        let opts = options();
        let mut selection = MultiSelection::default();
        for ix in [4, 1, 3, 0, 2] {
            selection.toggle(&opts[ix], &acc);
        }

        assert!(selection.trim_to(3));
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.values(&acc), vec!["solid", "vue", "angular"]);

        assert!(!selection.trim_to(3));
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_visible_splits_overflow() {
        let acc = acc();
        let selection = MultiSelection::new(options(), &acc);
        let (shown, hidden) = selection.visible(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 2);

        let (shown, hidden) = selection.visible(10);
        assert_eq!(shown.len(), 5);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_remove_and_pop_last() {
        let acc = acc();
        let mut selection = MultiSelection::new(vec![fw("vue"), fw("react"), fw("solid")], &acc);

        assert!(selection.remove(&"react", &acc));
        assert!(!selection.remove(&"react", &acc));
        assert_eq!(selection.pop_last(), Some(fw("solid")));
        assert_eq!(selection.values(&acc), vec!["vue"]);
    }

    #[test]
    fn test_filter_fuzzy_on_live_text() {
        let acc = acc();
        let opts = options();
        assert_eq!(filter_fuzzy(&opts, &acc, "", false), vec![0, 1, 2, 3, 4]);
        assert_eq!(filter_fuzzy(&opts, &acc, "ve", false), vec![1, 2]);
        assert_eq!(filter_fuzzy(&opts, &acc, "SLT", false), vec![2]);
        assert_eq!(filter_fuzzy(&opts, &acc, "xyz", false), Vec::<usize>::new());
        assert_eq!(filter_fuzzy(&opts, &acc, "xyz", true), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_animation_period_is_bounded() {
        assert_eq!(clamp_animation(2.5), 2.5);
        assert_eq!(clamp_animation(-1.0), 0.0);
        assert_eq!(clamp_animation(f32::INFINITY), 0.0);
        assert_eq!(clamp_animation(f32::NAN), 0.0);
        assert_eq!(clamp_animation(1.0e30), MAX_ANIMATION_SECS);

        assert_eq!(pulse_period(0.0), None);
        assert_eq!(pulse_period(f32::INFINITY), None);
        assert_eq!(pulse_period(0.5), Some(Duration::from_millis(500)));
        assert_eq!(pulse_period(1.0e30), Some(Duration::from_secs_f32(MAX_ANIMATION_SECS)));
    }
}
