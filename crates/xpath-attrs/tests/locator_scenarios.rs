//! Locator scenarios for a container of three children, each with one grandchild.
//!
//! ```html
//! <div id="container" class="this">
//!   <div id="child-1"><div id="grandchild-1" class="bar">Bar</div></div>
//!   <div id="child-2"><div id="grandchild-2" class="buzz">Buzz</div></div>
//!   <div id="child-3"><div id="grandchild-3" class="foo">Foo</div></div>
//! </div>
//! ```

#![allow(clippy::unwrap_used)]

use xpath_attrs::prelude::*;

fn spec_json(json: &str) -> AttributeSpec {
    AttributeSpec::from_json_str(json).unwrap()
}

#[test]
fn test_container_by_string_regex_and_both() {
    assert_eq!(
        child(&spec_json(r#"{"id": "container"}"#), None),
        "xpath=//*[@id='container']"
    );
    assert_eq!(
        child(&spec_json(r#"{"id": {"pattern": "contain"}}"#), None),
        "xpath=//*[contains(@id, 'contain')]"
    );
    assert_eq!(
        child(&spec_json(r#"{"id": "container", "class": {"pattern": "is"}}"#), None),
        "xpath=//*[@id='container' and contains(@class, 'is')]"
    );
}

#[test]
fn test_grandchildren_by_start_anchor() {
    let sensitive = spec_json(r#"{"id": {"pattern": "^grandchild"}}"#);
    assert_eq!(
        child(&sensitive, None),
        "xpath=//*[@id[starts-with(normalize-space(.),'grandchild')]]"
    );

    let insensitive = spec_json(r#"{"id": {"pattern": "^GrAndChIlD", "flags": "i"}}"#);
    assert_eq!(
        child(&insensitive, None),
        "xpath=//*[@id[starts-with(normalize-space(translate(.,'ABCDEFGHIJKLMNOPQRSTUVWXYZ','abcdefghijklmnopqrstuvwxyz')), 'grandchild')]]"
    );
}

#[test]
fn test_second_child_by_end_anchor() {
    let spec = spec_json(r#"{"id": {"pattern": "ChIlD-2$", "flags": "i"}}"#);
    assert_eq!(
        child(&spec, None),
        "xpath=//*[substring(normalize-space(translate(@id,'ABCDEFGHIJKLMNOPQRSTUVWXYZ','abcdefghijklmnopqrstuvwxyz')), string-length(normalize-space(translate(@id,'ABCDEFGHIJKLMNOPQRSTUVWXYZ','abcdefghijklmnopqrstuvwxyz'))) - string-length('child-2') + 1) = 'child-2']"
    );
}

#[test]
fn test_tree_traversal_steps() {
    let steps = [
        child(&AttributeSpec::new().with("id", "grandchild-2"), None),
        parent(&AttributeSpec::new(), Some("div")),
        next_sibling(&AttributeSpec::new(), Some("div")),
        child(&AttributeSpec::new(), Some("div")),
    ];
    assert_eq!(
        steps,
        [
            "xpath=//*[@id='grandchild-2']",
            "xpath=ancestor::div",
            "xpath=following-sibling::div",
            "xpath=//div",
        ]
    );
}

#[test]
fn test_local_regex_agrees_with_descriptor_on_fixture_ids() {
    let ids = [
        "container",
        "child-1",
        "grandchild-1",
        "child-2",
        "grandchild-2",
        "child-3",
        "grandchild-3",
    ];
    let pattern = Pattern::case_insensitive("ChIlD-2$");
    let re = pattern.to_regex().unwrap();
    let matched: Vec<_> = ids.iter().filter(|id| re.is_match(id)).collect();
    assert_eq!(matched, [&"child-2", &"grandchild-2"]);
}

#[test]
fn test_invalid_attribute_type_is_reported() {
    let err = AttributeSpec::from_json_str(r#"{"id": "x", "tabindex": 3}"#).unwrap_err();
    assert_eq!(err.to_string(), "tabindex value must be a pattern or string, not number");
}
