//! CSS selector builder.
//!
//! A [`Selector`] is either a [`CompoundSelector`] (fragments on one
//! element) or two selectors joined by a [`Combinator`]. Selectors are
//! immutable values: building never mutates a selector that already exists,
//! and rendering never changes state, so any intermediate value can be reused
//! and rendered as often as needed.
//!
//! ```rust
//! use selkit::selector::{combine, element};
//!
//! let row = combine(
//!     element("tr").pseudo_class("nth-of-type(even)"),
//!     " ",
//!     element("td").pseudo_class("nth-of-type(even)"),
//! )?;
//! let table = combine(element("table").id("data")?, "~", row)?;
//! let page = combine(
//!     element("div").id("main")?.class("container").class("draggable"),
//!     "+",
//!     table,
//! )?;
//! assert_eq!(
//!     page.stringify(),
//!     "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
//! );
//! # Ok::<(), selkit::SelkitError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

mod builder;
mod combinator;
mod compound;

pub use builder::{attr, class, combine, element, id, pseudo_class, pseudo_element, stringify};
pub use combinator::Combinator;
pub use compound::CompoundSelector;

/// A composable CSS selector expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selector {
    Simple(CompoundSelector),
    Combined {
        left: Arc<Selector>,
        combinator: Combinator,
        right: Arc<Selector>,
    },
}

impl Selector {
    /// Joins two selectors with an already-validated combinator.
    pub fn combined(
        left: impl Into<Selector>,
        combinator: Combinator,
        right: impl Into<Selector>,
    ) -> Self {
        Selector::Combined {
            left: Arc::new(left.into()),
            combinator,
            right: Arc::new(right.into()),
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundSelector> {
        match self {
            Selector::Simple(compound) => Some(compound),
            Selector::Combined { .. } => None,
        }
    }

    /// Number of compound selectors in this expression.
    pub fn compound_count(&self) -> usize {
        match self {
            Selector::Simple(_) => 1,
            Selector::Combined { left, right, .. } => {
                left.compound_count() + right.compound_count()
            }
        }
    }

    /// Renders the selector. Pure; repeated calls return the same string.
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Selector::Simple(compound)
    }
}

impl From<Arc<Selector>> for Selector {
    fn from(shared: Arc<Selector>) -> Self {
        Arc::unwrap_or_clone(shared)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Simple(compound) => fmt::Display::fmt(compound, f),
            // The combinator is padded on both sides, the descendant space included.
            Selector::Combined {
                left,
                combinator,
                right,
            } => write!(f, "{left} {combinator} {right}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_render_pads_every_combinator() {
        let left = element("ul");
        let right = element("li");
        for combinator in Combinator::ALL {
            let selector = Selector::combined(left.clone(), combinator, right.clone());
            assert_eq!(
                selector.stringify(),
                format!("ul {} li", combinator.token())
            );
        }
    }

    #[test]
    fn test_compound_count() {
        let inner = combine(element("a"), ">", element("b")).unwrap();
        let outer = combine(element("c"), "~", inner).unwrap();
        assert_eq!(outer.compound_count(), 3);
        assert!(outer.as_compound().is_none());
    }

    #[test]
    fn test_arc_children_unwrap() {
        let selector = Selector::from(Arc::new(Selector::from(class("x"))));
        assert_eq!(selector.stringify(), ".x");
    }
}
