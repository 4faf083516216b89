//! JSON encoding and typed decoding.
//!
//! `from_json` is generic over the target type: the caller names the shape
//! the text must decode into, and anything that does not fit is an error.

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::diagnostics::Result;

/// Encodes a value as compact JSON, fields in declaration order.
///
/// # Examples
///
/// ```rust
/// use selkit::json::to_json;
/// use selkit::shapes::Rectangle;
/// assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
/// assert_eq!(to_json(&Rectangle::new(10, 20)).unwrap(), r#"{"width":10,"height":20}"#);
/// ```
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encodes a value as indented JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decodes JSON text into `T`.
///
/// # Examples
///
/// ```rust
/// use selkit::json::from_json;
/// use selkit::shapes::Circle;
/// let c: Circle = from_json(r#"{"radius":10}"#).unwrap();
/// assert_eq!(c.radius, 10.0);
/// ```
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    let value = serde_json::from_str(json)?;
    debug!(
        "decoded {} bytes of JSON into {}",
        json.len(),
        std::any::type_name::<T>()
    );
    Ok(value)
}
