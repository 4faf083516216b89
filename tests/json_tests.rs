//! JSON encoding of selectors and shapes.

use selkit::json::{from_json, to_json};
use selkit::selector::{combine, element, id, Selector};
use selkit::shapes::{Area, Circle, Rectangle};
use selkit::ErrorKind;

#[cfg(test)]
mod selector_json_tests {
    use super::*;

    #[test]
    fn test_selector_tree_survives_json() {
        let selector = combine(
            element("table").id("data").unwrap().class("wide"),
            "~",
            combine(element("tr"), " ", element("td").pseudo_class("first-child")).unwrap(),
        )
        .unwrap();
        let text = to_json(&selector).unwrap();
        let decoded: Selector = from_json(&text).unwrap();
        assert_eq!(decoded, selector);
        assert_eq!(decoded.stringify(), selector.stringify());
    }

    #[test]
    fn test_simple_selector_encoding_omits_absent_fields() {
        let selector: Selector = id("main").class("a").into();
        assert_eq!(
            to_json(&selector).unwrap(),
            r#"{"kind":"simple","id":"main","classes":["a"]}"#
        );
    }

    #[test]
    fn test_decodes_hand_written_tree() {
        let text = r#"{
            "kind": "combined",
            "left": {"kind": "simple", "tag": "ul", "classes": ["nav"]},
            "combinator": ">",
            "right": {"kind": "simple", "tag": "li", "pseudo_classes": ["hover"]}
        }"#;
        let selector: Selector = from_json(text).unwrap();
        assert_eq!(selector.stringify(), "ul.nav > li:hover");
    }

    #[test]
    fn test_unknown_combinator_fails_to_decode() {
        let text = r#"{
            "kind": "combined",
            "left": {"kind": "simple", "tag": "a"},
            "combinator": ">>",
            "right": {"kind": "simple", "tag": "b"}
        }"#;
        let err = from_json::<Selector>(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Json);
        assert!(err.to_string().contains("invalid combinator"));
    }
}

#[cfg(test)]
mod shape_json_tests {
    use super::*;

    #[test]
    fn test_rectangle_encoding() {
        let rectangle = Rectangle::new(10, 20);
        assert_eq!(rectangle.get_area(), 200);
        assert_eq!(to_json(&rectangle).unwrap(), r#"{"width":10,"height":20}"#);
    }

    #[test]
    fn test_circle_from_json() {
        let circle: Circle = from_json(r#"{"radius":10}"#).unwrap();
        assert_eq!(circle, Circle::new(10.0));
        assert!((circle.area() - 100.0 * std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
        let values: Vec<u32> = from_json("[1,2,3]").unwrap();
        assert_eq!(values, [1, 2, 3]);
    }
}
