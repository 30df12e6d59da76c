//! Validating CSS selector builder for the kata crates.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector composition** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Compound selectors rendered in canonical order
//!   - Complex selectors joined with combinators (descendant, child, sibling)
//!
//! - **Grammar validation**
//!   - Type, ID and pseudo-element occur at most once per compound selector
//!   - Fragments must be added in canonical order
//!
//! # Not Implemented
//!
//! - Selector parsing
//! - Matching against a document tree
//! - Specificity calculation
//! - Selector lists (`a, b`)
//!
//! # Features
//!
//! - `selector-trace` - print every fragment push and combination to stderr
//!   (`cargo test -p kata-css --features selector-trace`)
//!
//! # Example
//!
//! ```
//! use kata_css::Selectors;
//!
//! let link = Selectors::element("a")
//!     .add_attribute(r#"href$=".png""#)?
//!     .add_pseudo_class("focus")?;
//! assert_eq!(link.render(), r#"a[href$=".png"]:focus"#);
//! # Ok::<(), kata_css::SelectorError>(())
//! ```

/// Errors raised while composing selectors.
pub mod error;
/// CSS selector composition per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use error::SelectorError;
pub use selector::{Category, Combinator, Selector, SelectorBuilder, Selectors, ToCss};
