//! Selection values and the pure rules that move between them
//!
//! Everything here is a function of `(mode, current value, event)`. Nothing is
//! retained between calls: the host owns the value and passes it back in.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::option::OptionCatalog;

/// Whether a filter accepts one value or a set of values
///
/// Chosen once at construction; a controller never switches modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectMode {
    #[default]
    Single,
    Multi,
}

impl SelectMode {
    pub fn from_is_multi(is_multi: bool) -> Self {
        if is_multi {
            Self::Multi
        } else {
            Self::Single
        }
    }

    pub fn is_multi(self) -> bool {
        matches!(self, Self::Multi)
    }
}

/// The controlled value of a filter
///
/// Serializes as JSON `null`, a scalar, or an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue<V> {
    /// Nothing selected
    None,
    /// Ordered set, most recently added first
    Multi(Vec<V>),
    /// A single chosen value
    Single(V),
}

impl<V> Default for SelectionValue<V> {
    fn default() -> Self {
        Self::None
    }
}

impl<V: PartialEq> SelectionValue<V> {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// `true` when nothing is selected, including an empty set
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Multi(items) => items.len(),
        }
    }

    pub fn contains(&self, value: &V) -> bool {
        match self {
            Self::None => false,
            Self::Single(v) => v == value,
            Self::Multi(items) => items.contains(value),
        }
    }

    /// Selected entries in order
    pub fn as_slice(&self) -> &[V] {
        match self {
            Self::None => &[],
            Self::Single(v) => std::slice::from_ref(v),
            Self::Multi(items) => items,
        }
    }

    /// Whether this value has the right shape for `mode`
    pub fn is_well_formed(&self, mode: SelectMode) -> bool {
        match (mode, self) {
            (_, Self::None) => true,
            (SelectMode::Single, Self::Single(_)) => true,
            (SelectMode::Multi, Self::Multi(items)) => !has_duplicates(items),
            _ => false,
        }
    }

    /// Labels of the selected entries that the catalog knows, in selection order
    pub fn labels<'a>(&self, catalog: &OptionCatalog<'a, V>) -> Vec<&'a str> {
        self.as_slice()
            .iter()
            .filter_map(|v| catalog.label_of(v))
            .collect()
    }
}

/// A raw interaction, already resolved to an option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent<V> {
    /// Turn membership of `value` on or off (multi-select)
    Toggle { value: V, on: bool },
    /// Pick `value` as the only selection (single-select)
    Choose(V),
    /// Drop the whole selection
    Clear,
}

impl<V> SelectionEvent<V> {
    /// The option value this event targets, if any
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Toggle { value, .. } | Self::Choose(value) => Some(value),
            Self::Clear => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Toggle { on: true, .. } => "ToggleOn",
            Self::Toggle { on: false, .. } => "ToggleOff",
            Self::Choose(_) => "Choose",
            Self::Clear => "Clear",
        }
    }
}

fn has_duplicates<V: PartialEq>(items: &[V]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, item)| items[..i].contains(item))
}

/// Coerce `value` into the shape `mode` expects
///
/// - Multi: anything that is not a sequence becomes an empty sequence;
///   duplicates are dropped, keeping the first occurrence.
/// - Single: a sequence collapses to its first entry, or `None` if empty.
pub fn normalize<V: Clone + PartialEq>(
    mode: SelectMode,
    value: &SelectionValue<V>,
) -> SelectionValue<V> {
    if !value.is_well_formed(mode) {
        trace!(?mode, "Normalizing malformed selection value");
    }

    match (mode, value) {
        (SelectMode::Multi, SelectionValue::Multi(items)) => {
            let mut deduped: Vec<V> = Vec::with_capacity(items.len());
            for item in items {
                if !deduped.contains(item) {
                    deduped.push(item.clone());
                }
            }
            SelectionValue::Multi(deduped)
        }
        (SelectMode::Multi, _) => SelectionValue::Multi(Vec::new()),
        (SelectMode::Single, SelectionValue::Multi(items)) => items
            .first()
            .cloned()
            .map_or(SelectionValue::None, SelectionValue::Single),
        (SelectMode::Single, other) => other.clone(),
    }
}

/// Compute the value that results from applying `event` to `current`
///
/// `current` is normalized first. Disabled-option gating is not done here;
/// see [`SelectionController`](crate::controller::SelectionController).
pub fn transition<V: Clone + PartialEq>(
    mode: SelectMode,
    current: &SelectionValue<V>,
    event: &SelectionEvent<V>,
) -> SelectionValue<V> {
    let current = normalize(mode, current);

    match (mode, event) {
        (_, SelectionEvent::Clear) => SelectionValue::None,

        (SelectMode::Multi, SelectionEvent::Toggle { value, on }) => {
            toggle_multi(current, value, *on)
        }
        (SelectMode::Multi, SelectionEvent::Choose(value)) => {
            let on = !current.contains(value);
            toggle_multi(current, value, on)
        }

        (SelectMode::Single, SelectionEvent::Choose(value))
        | (SelectMode::Single, SelectionEvent::Toggle { value, on: true }) => {
            SelectionValue::Single(value.clone())
        }
        (SelectMode::Single, SelectionEvent::Toggle { value, on: false }) => {
            if current.contains(value) {
                SelectionValue::None
            } else {
                current
            }
        }
    }
}

fn toggle_multi<V: Clone + PartialEq>(
    current: SelectionValue<V>,
    value: &V,
    on: bool,
) -> SelectionValue<V> {
    let mut items = match current {
        SelectionValue::Multi(items) => items,
        _ => Vec::new(),
    };
    items.retain(|item| item != value);
    if on {
        items.insert(0, value.clone());
    }
    SelectionValue::Multi(items)
}
