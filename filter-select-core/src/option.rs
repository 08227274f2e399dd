//! Option catalog: the read-only list of choices a filter offers

use serde::{Deserialize, Serialize};

/// One selectable entry
///
/// `value` is the identity key: selection entries are matched against options
/// by `value` equality, never by label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption<V> {
    pub label: String,
    pub value: V,
    #[serde(default)]
    pub is_disabled: bool,
}

impl<V> FilterOption<V> {
    /// Create an enabled option
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
            is_disabled: false,
        }
    }

    /// Builder-style disabled flag
    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }
}

/// Borrowed, ordered view over the options supplied by the host
///
/// The catalog never owns or mutates the options.
#[derive(Debug, Clone, Copy)]
pub struct OptionCatalog<'a, V> {
    options: &'a [FilterOption<V>],
}

impl<'a, V: PartialEq> OptionCatalog<'a, V> {
    pub fn new(options: &'a [FilterOption<V>]) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &'a [FilterOption<V>] {
        self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a FilterOption<V>> {
        self.options.get(index)
    }

    /// Find the first option whose value equals `value`
    pub fn find(&self, value: &V) -> Option<&'a FilterOption<V>> {
        self.options.iter().find(|opt| &opt.value == value)
    }

    /// Position of the option carrying `value`
    pub fn position(&self, value: &V) -> Option<usize> {
        self.options.iter().position(|opt| &opt.value == value)
    }

    /// `true` when `value` names a disabled option
    ///
    /// Values that are not in the catalog are not considered disabled; use
    /// [`is_selectable`](Self::is_selectable) to gate interactions.
    pub fn is_disabled(&self, value: &V) -> bool {
        self.find(value).is_some_and(|opt| opt.is_disabled)
    }

    /// `true` when `value` is present and enabled
    pub fn is_selectable(&self, value: &V) -> bool {
        self.find(value).is_some_and(|opt| !opt.is_disabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.options.iter().filter(|opt| !opt.is_disabled).count()
    }

    /// Label for `value`, if the catalog knows it
    pub fn label_of(&self, value: &V) -> Option<&'a str> {
        self.find(value).map(|opt| opt.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_options() -> Vec<FilterOption<&'static str>> {
        vec![
            FilterOption::new("Apple", "a"),
            FilterOption::new("Banana", "b"),
            FilterOption::new("Durian", "d").disabled(true),
        ]
    }

    #[test]
    fn test_find_by_value() {
        let options = make_options();
        let catalog = OptionCatalog::new(&options);

        assert_eq!(catalog.find(&"b").map(|o| o.label.as_str()), Some("Banana"));
        assert_eq!(catalog.position(&"d"), Some(2));
        assert!(catalog.find(&"z").is_none());
    }

    #[test]
    fn test_disabled_and_selectable() {
        let options = make_options();
        let catalog = OptionCatalog::new(&options);

        assert!(catalog.is_disabled(&"d"));
        assert!(!catalog.is_selectable(&"d"));
        assert!(catalog.is_selectable(&"a"));

        // Unknown values are neither disabled nor selectable
        assert!(!catalog.is_disabled(&"z"));
        assert!(!catalog.is_selectable(&"z"));
    }

    #[test]
    fn test_enabled_count() {
        let options = make_options();
        let catalog = OptionCatalog::new(&options);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.enabled_count(), 2);
    }

    #[test]
    fn test_deserialize_defaults_disabled_to_false() {
        let opt: FilterOption<String> =
            serde_json::from_str(r#"{ "label": "Open", "value": "open" }"#).unwrap();
        assert!(!opt.is_disabled);

        let opt: FilterOption<String> = serde_json::from_str(
            r#"{ "label": "Closed", "value": "closed", "isDisabled": true }"#,
        )
        .unwrap();
        assert!(opt.is_disabled);
    }
}
