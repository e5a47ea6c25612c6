//! Select options
//!
//! Options are arbitrary caller records. The accessors decide which field is
//! the identity key and how an option is labelled.

use gpui::SharedString;
use gpui_component::Icon;
use std::fmt::Display;
use std::rc::Rc;

/// Requirements for an option's identity key
///
/// `Display` provides the "key-as-string" used by local filtering.
pub trait SelectValue: Clone + PartialEq + Display + 'static {}

impl<K: Clone + PartialEq + Display + 'static> SelectValue for K {}

type ValueFn<T, K> = Rc<dyn Fn(&T) -> K>;
type LabelFn<T> = Rc<dyn Fn(&T) -> SharedString>;
type IconFn<T> = Rc<dyn Fn(&T) -> Option<Icon>>;

/// Key, label and icon accessors for an option type
pub struct OptionAccessors<T, K> {
    value: ValueFn<T, K>,
    label: LabelFn<T>,
    icon: Option<IconFn<T>>,
}

impl<T: 'static, K: SelectValue> OptionAccessors<T, K> {
    /// Create accessors from a key function and a label function
    pub fn new(
        value: impl Fn(&T) -> K + 'static,
        label: impl Fn(&T) -> SharedString + 'static,
    ) -> Self {
        Self {
            value: Rc::new(value),
            label: Rc::new(label),
            icon: None,
        }
    }

    /// Set an icon accessor
    pub fn with_icon(mut self, icon: impl Fn(&T) -> Option<Icon> + 'static) -> Self {
        self.icon = Some(Rc::new(icon));
        self
    }

    /// Get an option's key
    pub fn value(&self, option: &T) -> K {
        (self.value)(option)
    }

    /// Get an option's label
    pub fn label(&self, option: &T) -> SharedString {
        (self.label)(option)
    }

    /// Get an option's icon, if any
    pub fn icon(&self, option: &T) -> Option<Icon> {
        self.icon.as_ref().and_then(|icon| icon(option))
    }

    /// Check whether an option has the given key
    pub fn has_value(&self, option: &T, value: &K) -> bool {
        &self.value(option) == value
    }

    /// Find an option by key
    pub fn find<'a>(&self, options: &'a [T], value: &K) -> Option<&'a T> {
        options.iter().find(|option| self.has_value(option, value))
    }
}

impl<T, K> Clone for OptionAccessors<T, K> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            label: Rc::clone(&self.label),
            icon: self.icon.clone(),
        }
    }
}

/// Case-insensitive substring match
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive in-order subsequence match
///
/// `"rct"` matches `"React"`. This is the loose matching command palettes use
/// when filtering their own items.
pub fn fuzzy_contains(haystack: &str, needle: &str) -> bool {
    let mut chars = haystack.chars().flat_map(char::to_lowercase);
    needle
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .all(|n| chars.any(|h| h == n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Fruit {
        id: u32,
        name: &'static str,
    }

    fn accessors() -> OptionAccessors<Fruit, u32> {
        OptionAccessors::new(|f: &Fruit| f.id, |f: &Fruit| f.name.into())
    }

    #[test]
    fn test_find_by_value() {
        let fruits = vec![Fruit { id: 1, name: "Apple" }, Fruit { id: 2, name: "Pear" }];
        let acc = accessors();
        assert_eq!(acc.find(&fruits, &2).map(|f| f.name), Some("Pear"));
        assert!(acc.find(&fruits, &3).is_none());
        assert_eq!(acc.label(&fruits[0]), SharedString::from("Apple"));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Kebab", "AB"));
        assert!(!contains_ignore_case("Kebab", "ba b"));
    }

    #[test]
    fn test_fuzzy_contains() {
        assert!(fuzzy_contains("React", "rct"));
        assert!(fuzzy_contains("Svelte Kit", "sk"));
        assert!(!fuzzy_contains("Vue", "ev"));
        assert!(fuzzy_contains("anything", ""));
    }
}
