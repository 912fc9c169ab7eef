//! Stylesheet construction.

use std::collections::HashMap;

use crate::selector::Selector;
use crate::types::property::{StyleProperty, StyleSet};

/// An immutable mapping from selector to style rule.
///
/// Built with the chaining [`rule`](Stylesheet::rule) method and then
/// handed to a resolver. The resolver's caches rely on the stylesheet
/// never changing afterwards, which is why no mutating access is exposed
/// once resolution starts; to use a different stylesheet, construct a new
/// resolver.
///
/// # Examples
///
/// ```
/// use qss::{StyleProperty, Stylesheet};
///
/// let sheet = Stylesheet::new()
///     .rule("*", [StyleProperty::FontSize(12.0)])
///     .rule("p", [StyleProperty::FontSize(14.0)]);
/// assert_eq!(sheet.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    rules: HashMap<Selector, StyleSet>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, consuming and returning the sheet for chaining.
    ///
    /// Properties are collected into a category-unique set; a later
    /// property of the same category within one rule replaces the
    /// earlier. Selector strings that do not parse into a supported shape
    /// are discarded: they could never match, so an unsupported selector
    /// is inert rather than an error.
    pub fn rule<I>(mut self, selector: &str, properties: I) -> Self
    where
        I: IntoIterator<Item = StyleProperty>,
    {
        match Selector::parse(selector) {
            Ok(parsed) => {
                let set = self.rules.entry(parsed).or_default();
                for property in properties {
                    set.insert(property);
                }
            }
            Err(err) => {
                log::debug!("discarding inert selector {selector:?}: {err}");
            }
        }
        self
    }

    /// The style set for a selector, if one was registered.
    pub fn get(&self, selector: &Selector) -> Option<&StyleSet> {
        self.rules.get(selector)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
