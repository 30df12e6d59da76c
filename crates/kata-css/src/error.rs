//! Error types for selector composition.

use thiserror::Error;

use crate::selector::Category;

/// Errors that can occur while building a selector.
///
/// # Examples
///
/// ```rust
/// use kata_css::{Category, SelectorError, Selectors};
///
/// let result = Selectors::id("main").add_element("div");
/// assert_eq!(
///     result.unwrap_err(),
///     SelectorError::OutOfOrder { category: Category::Element, after: Category::Id },
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A type, ID or pseudo-element fragment was added a second time.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector (second {category})"
    )]
    DuplicatePart {
        /// The singular category that was repeated.
        category: Category,
    },

    /// A fragment was added after a fragment that must follow it.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({category} after {after})"
    )]
    OutOfOrder {
        /// The category being added.
        category: Category,
        /// The latest category already present in the selector.
        after: Category,
    },

    /// A combinator token other than `" "`, `">"`, `"+"` or `"~"`.
    #[error("Unknown combinator {0:?}: expected one of \" \", \">\", \"+\", \"~\"")]
    UnknownCombinator(String),
}
