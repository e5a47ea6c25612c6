//! Composite Components
//!
//! The select views and the list machinery they share.

pub mod command_list;
pub mod infinite_scroll;
pub mod multi_select;
pub mod single_select;

use crate::domain::{OptionAccessors, SelectValue};
use crate::states::{Choice, MultiSelection};

pub use command_list::{CommandItem, CommandList};
pub use infinite_scroll::InfiniteScroll;
pub use multi_select::MultiSelect;
pub use single_select::SingleSelect;

/// Events emitted by [`MultiSelect`]
///
/// Delivered after the select's update returns, so subscribers may update
/// the select in response.
#[derive(Debug, Clone, PartialEq)]
pub enum MultiSelectEvent<T, K> {
    /// The selection changed interactively
    Change {
        /// Selected keys in selection order
        values: Vec<K>,
        /// Selected option records in selection order
        options: Vec<T>,
    },
    /// Debounced search term (delegated search only)
    SearchChange(String),
    /// The list neared its bottom and another page may be fetched
    LoadMore,
}

impl<T: Clone + 'static, K: SelectValue> MultiSelectEvent<T, K> {
    /// Change event for the current selection
    pub fn change(selection: &MultiSelection<T>, acc: &OptionAccessors<T, K>) -> Self {
        Self::Change {
            values: selection.values(acc),
            options: selection.items().to_vec(),
        }
    }
}

/// Events emitted by [`SingleSelect`]
#[derive(Debug, Clone, PartialEq)]
pub enum SingleSelectEvent<K> {
    /// The chosen key, `None` when the selection was cleared
    Change(Option<K>),
    /// Debounced search term (delegated search only)
    SearchChange(String),
    /// The list neared its bottom and another page may be fetched
    LoadMore,
}

impl<K: Clone> From<&Choice<K>> for SingleSelectEvent<K> {
    fn from(choice: &Choice<K>) -> Self {
        Self::Change(choice.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::SingleSelection;

    fn accessors() -> OptionAccessors<(u32, &'static str), u32> {
        OptionAccessors::new(|o: &(u32, &'static str)| o.0, |o: &(u32, &'static str)| o.1.into())
    }

    #[test]
    fn test_change_event_carries_keys_and_records() {
        let acc = accessors();
        let mut selection = MultiSelection::default();
        selection.toggle(&(2, "b"), &acc);
        selection.toggle(&(1, "a"), &acc);

        assert_eq!(
            MultiSelectEvent::change(&selection, &acc),
            MultiSelectEvent::Change {
                values: vec![2, 1],
                options: vec![(2, "b"), (1, "a")],
            }
        );
    }

    #[test]
    fn test_choice_maps_to_change_event() {
        let mut selection = SingleSelection::new(Some(7u32));
        let cleared = selection.choose(7);
        assert_eq!(SingleSelectEvent::from(&cleared), SingleSelectEvent::Change(None));

        let chosen = selection.choose(9);
        assert_eq!(SingleSelectEvent::from(&chosen), SingleSelectEvent::Change(Some(9)));
    }
}
