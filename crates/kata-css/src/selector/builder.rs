use std::fmt;

use kata_common::warning::warn_once;
use strum::IntoEnumIterator;

use super::{CATEGORY_COUNT, Category, Combinator, Selector, ToCss};
use crate::error::SelectorError;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// Accumulates the fragments of one compound selector and renders them in
/// canonical order.
///
/// Every `add_*` method consumes the builder and hands it back on success, so
/// calls chain with `?`:
///
/// ```
/// use kata_css::SelectorBuilder;
///
/// let selector = SelectorBuilder::new()
///     .add_element("div")?
///     .add_id("main")?
///     .add_class("container")?
///     .add_class("draggable")?;
/// assert_eq!(selector.render(), "div#main.container.draggable");
/// # Ok::<(), kata_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// One slot per category, indexed by `Category::index`.
    fragments: [Vec<String>; CATEGORY_COUNT],
    /// Latest category added so far; nothing earlier may follow it.
    highest: Option<Category>,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a builder whose first fragment is already in place. The first
    /// fragment of an empty builder can never violate order or multiplicity.
    pub(crate) fn starting_with(category: Category, fragment: String) -> Self {
        let mut builder = Self::default();
        builder.record(category, fragment);
        builder
    }

    /// Add a type selector (`div`).
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicatePart`] if an element is already
    /// present, or [`SelectorError::OutOfOrder`] if any other fragment was
    /// added before it.
    pub fn add_element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(Category::Element, name)
    }

    /// Add an ID selector (`#main`).
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicatePart`] if an ID is already present, or
    /// [`SelectorError::OutOfOrder`] if a class, attribute, pseudo-class or
    /// pseudo-element was added before it.
    pub fn add_id(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(Category::Id, name)
    }

    /// Add a class selector (`.container`). Any number may be added.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfOrder`] if an attribute, pseudo-class or
    /// pseudo-element was added before it.
    pub fn add_class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(Category::Class, name)
    }

    /// Add an attribute selector. `expr` is the text between the brackets,
    /// e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfOrder`] if a pseudo-class or
    /// pseudo-element was added before it.
    pub fn add_attribute(self, expr: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(Category::Attribute, expr)
    }

    /// Add a pseudo-class (`focus`, `nth-of-type(even)`), without the colon.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfOrder`] if a pseudo-element was added
    /// before it.
    pub fn add_pseudo_class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(Category::PseudoClass, name)
    }

    /// Add a pseudo-element (`before`), without the colons.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicatePart`] if a pseudo-element is already
    /// present.
    pub fn add_pseudo_element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(Category::PseudoElement, name)
    }

    /// Add a fragment of any category.
    ///
    /// The multiplicity check runs before the order check, so repeating a
    /// singular category always reports [`SelectorError::DuplicatePart`].
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicatePart`] when `category` is singular and
    /// already present, or [`SelectorError::OutOfOrder`] when a later category
    /// has already been added.
    pub fn add(
        mut self,
        category: Category,
        fragment: impl Into<String>,
    ) -> Result<Self, SelectorError> {
        if category.is_singular() && !self.fragments[category.index()].is_empty() {
            return Err(SelectorError::DuplicatePart { category });
        }
        if let Some(after) = self.highest.filter(|&highest| category < highest) {
            return Err(SelectorError::OutOfOrder { category, after });
        }

        self.record(category, fragment.into());
        Ok(self)
    }

    fn record(&mut self, category: Category, fragment: String) {
        if fragment.trim().is_empty() {
            warn_once("CSS", &format!("empty {category} fragment"));
        }

        #[cfg(feature = "selector-trace")]
        eprintln!("[SELECTOR] add {category} {fragment:?}");

        self.fragments[category.index()].push(fragment);
        self.highest = Some(category);
    }

    /// The fragments of one category, in insertion order.
    #[must_use]
    pub fn fragments(&self, category: Category) -> &[String] {
        &self.fragments[category.index()]
    }

    /// Whether no fragment has been added yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.highest.is_none()
    }

    /// Render the compound selector: each non-empty category in canonical
    /// order, fragments joined and wrapped by [`Category::affixes`].
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for category in Category::iter() {
            let slot = &self.fragments[category.index()];
            if slot.is_empty() {
                continue;
            }
            let (prefix, separator, suffix) = category.affixes();
            out.push_str(prefix);
            out.push_str(&slot.join(separator));
            out.push_str(suffix);
        }
        out
    }

    /// Join this selector and `other` with `combinator`. The fragments are
    /// discarded; only the rendered text survives.
    #[must_use]
    pub fn combine_with(self, other: &impl ToCss, combinator: Combinator) -> Selector {
        Selector::from(self).combine_with(other, combinator)
    }
}

impl ToCss for SelectorBuilder {
    fn render(&self) -> String {
        Self::render(self)
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
