//! Compound (simple) selectors: tag, id, classes, attribute, pseudo-classes
//! and pseudo-element on a single element.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{Field, Result, SelkitError};

/// A selector made only of fragments that apply to one element.
///
/// Values are persistent: every builder method borrows `self` and returns a
/// new selector, so a partially built selector can be extended along several
/// independent chains. The list fields are `im::Vector`s, making each step a
/// structural copy rather than a deep one.
///
/// # Examples
///
/// ```rust
/// use selkit::selector::{element, id};
/// let link = element("a").attr(r#"href$=".png""#).unwrap().pseudo_class("focus");
/// assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
///
/// let main = id("main").class("container").class("editable");
/// assert_eq!(main.stringify(), "#main.container.editable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) id: Option<String>,
    #[serde(skip_serializing_if = "Vector::is_empty")]
    pub(super) classes: Vector<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) attribute: Option<String>,
    #[serde(skip_serializing_if = "Vector::is_empty")]
    pub(super) pseudo_classes: Vector<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) pseudo_element: Option<String>,
}

impl CompoundSelector {
    /// An empty selector. Renders as the empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the type selector. Fails if a tag is already present.
    pub fn element(&self, value: impl Into<String>) -> Result<Self> {
        self.with_singular(Field::Tag, value.into())
    }

    /// Sets the id (without `#`). Fails if an id is already present.
    pub fn id(&self, value: impl Into<String>) -> Result<Self> {
        self.with_singular(Field::Id, value.into())
    }

    /// Appends a class name (without `.`).
    pub fn class(&self, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.classes.push_back(value.into());
        next
    }

    /// Sets the attribute expression, written without the brackets.
    /// Fails if an attribute is already present.
    pub fn attr(&self, value: impl Into<String>) -> Result<Self> {
        self.with_singular(Field::Attribute, value.into())
    }

    /// Appends a pseudo-class name (without `:`).
    pub fn pseudo_class(&self, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.pseudo_classes.push_back(value.into());
        next
    }

    /// Sets the pseudo-element (without `::`). Fails if one is already
    /// present.
    pub fn pseudo_element(&self, value: impl Into<String>) -> Result<Self> {
        self.with_singular(Field::PseudoElement, value.into())
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn id_value(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    pub fn pseudo_element_value(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// Class names in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.iter().map(String::as_str)
    }

    /// Pseudo-class names in insertion order.
    pub fn pseudo_classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.pseudo_classes.iter().map(String::as_str)
    }

    /// True if no fragment has been set.
    pub fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attribute.is_none()
            && self.pseudo_classes.is_empty()
            && self.pseudo_element.is_none()
    }

    /// Renders the selector in canonical fragment order.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Tag => &self.tag,
            Field::Id => &self.id,
            Field::Attribute => &self.attribute,
            Field::PseudoElement => &self.pseudo_element,
        }
    }

    fn with_singular(&self, field: Field, value: String) -> Result<Self> {
        if self.slot(field).is_some() {
            return Err(SelkitError::DuplicateField { field });
        }
        let mut next = self.clone();
        let slot = match field {
            Field::Tag => &mut next.tag,
            Field::Id => &mut next.id,
            Field::Attribute => &mut next.attribute,
            Field::PseudoElement => &mut next.pseudo_element,
        };
        *slot = Some(value);
        Ok(next)
    }
}

// Order is fixed: tag, [attribute], #id, .classes, :pseudo-classes, ::pseudo-element.
impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        if let Some(attribute) = &self.attribute {
            write!(f, "[{attribute}]")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for pseudo in &self.pseudo_classes {
            write!(f, ":{pseudo}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        Ok(())
    }
}
