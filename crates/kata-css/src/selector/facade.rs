use super::{Category, Combinator, Selector, SelectorBuilder, ToCss};
use crate::error::SelectorError;

/// Stateless entry points for building selectors.
///
/// Each function starts a fresh [`SelectorBuilder`] with one fragment; further
/// fragments are chained on the returned builder.
///
/// ```
/// use kata_css::{Combinator, Selectors};
///
/// let list = Selectors::combine(
///     &Selectors::element("ul").add_class("nav")?,
///     Combinator::Child,
///     &Selectors::element("li"),
/// );
/// assert_eq!(list.render(), "ul.nav > li");
/// # Ok::<(), kata_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Selectors;

impl Selectors {
    /// Start a selector with a type selector.
    #[must_use]
    pub fn element(name: impl Into<String>) -> SelectorBuilder {
        SelectorBuilder::starting_with(Category::Element, name.into())
    }

    /// Start a selector with an ID selector.
    #[must_use]
    pub fn id(name: impl Into<String>) -> SelectorBuilder {
        SelectorBuilder::starting_with(Category::Id, name.into())
    }

    /// Start a selector with a class selector.
    #[must_use]
    pub fn class(name: impl Into<String>) -> SelectorBuilder {
        SelectorBuilder::starting_with(Category::Class, name.into())
    }

    /// Start a selector with an attribute selector.
    #[must_use]
    pub fn attr(expr: impl Into<String>) -> SelectorBuilder {
        SelectorBuilder::starting_with(Category::Attribute, expr.into())
    }

    /// Start a selector with a pseudo-class.
    #[must_use]
    pub fn pseudo_class(name: impl Into<String>) -> SelectorBuilder {
        SelectorBuilder::starting_with(Category::PseudoClass, name.into())
    }

    /// Start a selector with a pseudo-element.
    #[must_use]
    pub fn pseudo_element(name: impl Into<String>) -> SelectorBuilder {
        SelectorBuilder::starting_with(Category::PseudoElement, name.into())
    }

    /// Join two selectors with a combinator: `left <combinator> right`.
    #[must_use]
    pub fn combine(left: &impl ToCss, combinator: Combinator, right: &impl ToCss) -> Selector {
        Selector::Combined(left.render()).combine_with(right, combinator)
    }

    /// Like [`Selectors::combine`], with the combinator given as its token.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownCombinator`] if `token` is not one of
    /// `" "`, `">"`, `"+"` or `"~"`.
    pub fn combine_str(
        left: &impl ToCss,
        token: &str,
        right: &impl ToCss,
    ) -> Result<Selector, SelectorError> {
        Ok(Self::combine(left, Combinator::from_token(token)?, right))
    }

    /// The facade itself holds no selector and renders as the empty string.
    #[must_use]
    pub const fn render() -> &'static str {
        ""
    }
}
