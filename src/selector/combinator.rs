//! Combinators joining two selectors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diagnostics::SelkitError;

/// The structural relationship between the two halves of a combined
/// selector. Serialized as its one-character token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Combinator {
    /// ` `
    Descendant,
    /// `>`
    Child,
    /// `+`
    NextSibling,
    /// `~`
    SubsequentSibling,
}

impl Combinator {
    pub const ALL: [Combinator; 4] = [
        Combinator::Descendant,
        Combinator::NextSibling,
        Combinator::SubsequentSibling,
        Combinator::Child,
    ];

    /// Parses a combinator token. Only the four exact tokens are accepted;
    /// surrounding whitespace is not trimmed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use selkit::selector::Combinator;
    /// assert_eq!(Combinator::from_token("~").unwrap(), Combinator::SubsequentSibling);
    /// assert!(Combinator::from_token(" > ").is_err());
    /// ```
    pub fn from_token(token: &str) -> Result<Self, SelkitError> {
        match token {
            " " => Ok(Combinator::Descendant),
            ">" => Ok(Combinator::Child),
            "+" => Ok(Combinator::NextSibling),
            "~" => Ok(Combinator::SubsequentSibling),
            other => Err(SelkitError::InvalidCombinator {
                token: other.to_string(),
            }),
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::NextSibling => "+",
            Combinator::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl TryFrom<String> for Combinator {
    type Error = SelkitError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Combinator::from_token(&token)
    }
}

impl From<Combinator> for String {
    fn from(combinator: Combinator) -> Self {
        combinator.token().to_string()
    }
}
