//! Entry points that start a selector chain.
//!
//! Starting a chain can never fail; only extending one can.

use log::trace;

use super::{Combinator, CompoundSelector, Selector};
use crate::diagnostics::Result;

/// Starts a selector with a type selector, e.g. `div`.
pub fn element(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector {
        tag: Some(value.into()),
        ..CompoundSelector::default()
    }
}

/// Starts a selector with an id, e.g. `#main`.
pub fn id(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector {
        id: Some(value.into()),
        ..CompoundSelector::default()
    }
}

/// Starts a selector with a class, e.g. `.container`.
pub fn class(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::default().class(value)
}

/// Starts a selector with an attribute expression, e.g. `[href$=".png"]`.
pub fn attr(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector {
        attribute: Some(value.into()),
        ..CompoundSelector::default()
    }
}

/// Starts a selector with a pseudo-class, e.g. `:focus`.
pub fn pseudo_class(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::default().pseudo_class(value)
}

/// Starts a selector with a pseudo-element, e.g. `::before`.
pub fn pseudo_element(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector {
        pseudo_element: Some(value.into()),
        ..CompoundSelector::default()
    }
}

/// Joins two selectors with a combinator token: one of `" "`, `"+"`, `"~"`,
/// `">"`. Any other token is an `InvalidCombinator` error.
///
/// # Examples
///
/// ```rust
/// use selkit::selector::{combine, element};
/// let list = combine(element("ul"), ">", element("li")).unwrap();
/// assert_eq!(list.stringify(), "ul > li");
/// assert!(combine(element("ul"), ">>", element("li")).is_err());
/// ```
pub fn combine(
    left: impl Into<Selector>,
    token: &str,
    right: impl Into<Selector>,
) -> Result<Selector> {
    let combinator = Combinator::from_token(token)?;
    let selector = Selector::combined(left, combinator, right);
    trace!("combined selector with {combinator:?}");
    Ok(selector)
}

/// Renders any selector to its canonical string.
pub fn stringify(selector: &Selector) -> String {
    selector.stringify()
}
