//! CSS selector composition
//!
//! This module builds selector strings per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/). Nothing here parses
//! or matches selectors; fragments are taken verbatim and only their order and
//! multiplicity are checked.

mod builder;
mod facade;

use std::fmt;

use kata_common::warning::warn_once;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::error::SelectorError;

pub use builder::SelectorBuilder;
pub use facade::Selectors;

/// Number of fragment categories, used to size the builder's slot array.
pub(crate) const CATEGORY_COUNT: usize = 6;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kinds of simple selector a compound selector is made of, declared in
/// canonical order. The derived `Ord` follows declaration order, which is the
/// order fragments must be added in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumCount,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.draggable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-letter`
    PseudoElement,
}

impl Category {
    /// Whether a compound selector may contain at most one fragment of this kind.
    #[must_use]
    pub const fn is_singular(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// The `(prefix, separator, suffix)` used when rendering this category's
    /// fragments.
    #[must_use]
    pub const fn affixes(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Element => ("", "", ""),
            Self::Id => ("#", "#", ""),
            Self::Class => (".", ".", ""),
            Self::Attribute => ("[", "][", "]"),
            Self::PseudoClass => (":", ":", ""),
            Self::PseudoElement => ("::", "::", ""),
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Parses from and displays as its literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A, where A and B share the same parent."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that
    /// follows element A (not necessarily immediately), where A and B share the
    /// same parent."
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// Parse a combinator from its literal token.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownCombinator`] for any token other than
    /// `" "`, `">"`, `"+"` or `"~"`.
    pub fn from_token(token: &str) -> Result<Self, SelectorError> {
        token
            .parse()
            .map_err(|_| SelectorError::UnknownCombinator(token.to_string()))
    }
}

/// Anything that can be rendered as selector text.
pub trait ToCss {
    /// Render the selector as CSS text.
    fn render(&self) -> String;
}

/// A finished selector.
///
/// Combining two selectors discards their fragments and keeps only the joined
/// text, so a combined selector can be rendered or combined again but never
/// extended with more fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A single compound selector, still holding its fragments.
    Compound(SelectorBuilder),
    /// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
    /// Two selectors joined by a combinator.
    Combined(String),
}

impl Selector {
    /// Render the selector as CSS text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Compound(builder) => builder.render(),
            Self::Combined(text) => text.clone(),
        }
    }

    /// Join this selector and `other` with `combinator`.
    #[must_use]
    pub fn combine_with(self, other: &impl ToCss, combinator: Combinator) -> Self {
        combine(&self.render(), combinator, &other.render())
    }
}

impl ToCss for Selector {
    fn render(&self) -> String {
        Self::render(self)
    }
}

impl From<SelectorBuilder> for Selector {
    fn from(builder: SelectorBuilder) -> Self {
        Self::Compound(builder)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(builder) => write!(f, "{builder}"),
            Self::Combined(text) => f.write_str(text),
        }
    }
}

/// Join two rendered selectors. The combinator is always surrounded by single
/// spaces, so the descendant combinator yields three spaces.
fn combine(left: &str, combinator: Combinator, right: &str) -> Selector {
    if left.is_empty() || right.is_empty() {
        warn_once("CSS", &format!("combining an empty selector with {combinator:?}"));
    }

    #[cfg(feature = "selector-trace")]
    eprintln!("[SELECTOR] combine {left:?} {combinator:?} {right:?}");

    Selector::Combined(format!("{left} {combinator} {right}"))
}

#[cfg(test)]
mod tests {
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[test]
    fn test_category_count_matches_slots() {
        assert_eq!(Category::COUNT, CATEGORY_COUNT);
        for (i, category) in Category::iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_category_display_is_kebab_case() {
        assert_eq!(Category::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(Category::PseudoElement.to_string(), "pseudo-element");
        assert_eq!(Category::Element.to_string(), "element");
    }

    #[test]
    fn test_combine_surrounds_token_with_spaces() {
        assert_eq!(
            combine("a", Combinator::Child, "b"),
            Selector::Combined("a > b".to_string())
        );
        assert_eq!(
            combine("a", Combinator::Descendant, "b"),
            Selector::Combined("a   b".to_string())
        );
    }
}
