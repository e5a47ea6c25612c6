//! Single-select State
//!
//! Holds at most one selected key and decides what the list shows.

use crate::domain::{OptionAccessors, SelectValue, contains_ignore_case};
use gpui::SharedString;

/// Result of choosing an option
#[derive(Debug, Clone, PartialEq)]
pub enum Choice<K> {
    /// The chosen option was already selected and is now cleared
    Cleared,
    /// A different option is now selected
    Selected(K),
}

impl<K: Clone> Choice<K> {
    /// Value to report upward
    pub fn value(&self) -> Option<K> {
        match self {
            Choice::Cleared => None,
            Choice::Selected(value) => Some(value.clone()),
        }
    }

    /// Whether the popover should close
    pub fn closes_popover(&self) -> bool {
        matches!(self, Choice::Selected(_))
    }
}

/// Current single selection mirrored from the caller's value
#[derive(Debug, Clone, PartialEq)]
pub struct SingleSelection<K> {
    value: Option<K>,
}

impl<K> Default for SingleSelection<K> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<K: SelectValue> SingleSelection<K> {
    /// Create a selection holding `value`
    pub fn new(value: Option<K>) -> Self {
        Self { value }
    }

    /// Get the selected key
    pub fn value(&self) -> Option<&K> {
        self.value.as_ref()
    }

    /// Check if `value` is the selected key
    pub fn is_selected(&self, value: &K) -> bool {
        self.value.as_ref() == Some(value)
    }

    /// Set the selection from the caller
    pub fn set(&mut self, value: Option<K>) {
        self.value = value;
    }

    /// Choose an option: the current one toggles off, any other is selected
    pub fn choose(&mut self, value: K) -> Choice<K> {
        if self.is_selected(&value) {
            self.value = None;
            Choice::Cleared
        } else {
            self.value = Some(value.clone());
            Choice::Selected(value)
        }
    }

    /// Text for the trigger
    ///
    /// While the selected option is not among the loaded options the default
    /// display value stands in for it; with nothing to show, the placeholder.
    pub fn display_label<T: 'static>(
        &self,
        options: &[T],
        acc: &OptionAccessors<T, K>,
        default_display: Option<&SharedString>,
        placeholder: &SharedString,
    ) -> (SharedString, bool) {
        if let Some(option) = self.value.as_ref().and_then(|v| acc.find(options, v)) {
            return (acc.label(option), true);
        }
        match default_display {
            Some(display) if self.value.is_some() && !display.is_empty() => (display.clone(), true),
            _ => (placeholder.clone(), false),
        }
    }
}

/// Indices of the options the list should show
///
/// Delegated filtering shows everything (the caller already filtered). Local
/// filtering matches label or key-as-string, case-insensitively, only once
/// the debounced term is non-empty.
pub fn filter_options<T: 'static, K: SelectValue>(
    options: &[T],
    acc: &OptionAccessors<T, K>,
    term: &str,
    delegated: bool,
) -> Vec<usize> {
    if delegated || term.is_empty() {
        return (0..options.len()).collect();
    }

    options
        .iter()
        .enumerate()
        .filter(|(_, option)| {
            contains_ignore_case(&acc.label(option), term)
                || contains_ignore_case(&acc.value(option).to_string(), term)
        })
        .map(|(ix, _)| ix)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Device {
        id: u32,
        name: &'static str,
    }

    fn acc() -> OptionAccessors<Device, u32> {
        OptionAccessors::new(|d: &Device| d.id, |d: &Device| d.name.into())
    }

    fn devices() -> Vec<Device> {
        vec![
            Device { id: 101, name: "Cabin sensor" },
            Device { id: 202, name: "Nacelle" },
            Device { id: 303, name: "Hub" },
            Device { id: 4_000, name: "Tower base" },
            Device { id: 5_100, name: "Yaw drive" },
        ]
    }

    #[test]
    fn test_choose_current_clears() {
        let mut selection = SingleSelection::new(Some(202));
        let choice = selection.choose(202);
        assert_eq!(choice, Choice::Cleared);
        assert_eq!(choice.value(), None);
        assert!(!choice.closes_popover());
        assert_eq!(selection.value(), None);
    }

    #[test]
    fn test_choose_other_selects_and_closes() {
        let mut selection = SingleSelection::new(Some(202));
        let choice = selection.choose(303);
        assert_eq!(choice.value(), Some(303));
        assert!(choice.closes_popover());
        assert!(selection.is_selected(&303));
    }

    #[test]
    fn test_local_filter_matches_label_or_key() {
        let acc = acc();
        let opts = devices();

        // "ab" only hits "Cabin sensor" through the label
        assert_eq!(filter_options(&opts, &acc, "ab", false), vec![0]);
        assert_eq!(filter_options(&opts, &acc, "AS", false), vec![3]);
        // "10" hits key 101 and key 5100
        assert_eq!(filter_options(&opts, &acc, "10", false), vec![0, 4]);
        assert!(filter_options(&opts, &acc, "zzz", false).is_empty());
    }

    #[test]
    fn test_empty_term_or_delegated_shows_all() {
        let acc = acc();
        let opts = devices();
        assert_eq!(filter_options(&opts, &acc, "", false).len(), 5);
        assert_eq!(filter_options(&opts, &acc, "zzz", true).len(), 5);
    }

    #[test]
    fn test_display_label_fallbacks() {
        let acc = acc();
        let opts = devices();
        let placeholder = SharedString::from("Select...");
        let fallback = SharedString::from("Loading device 9");

        let selected = SingleSelection::new(Some(303));
        assert_eq!(
            selected.display_label(&opts, &acc, None, &placeholder),
            (SharedString::from("Hub"), true)
        );

        let not_loaded = SingleSelection::new(Some(9));
        assert_eq!(
            not_loaded.display_label(&opts, &acc, Some(&fallback), &placeholder),
            (fallback.clone(), true)
        );
        assert_eq!(
            not_loaded.display_label(&opts, &acc, None, &placeholder),
            (placeholder.clone(), false)
        );

        let empty: SingleSelection<u32> = SingleSelection::default();
        assert_eq!(
            empty.display_label(&opts, &acc, Some(&fallback), &placeholder),
            (placeholder, false)
        );
    }
}
