use pretty_assertions::assert_eq;
use serde_json::json;

use super::run_ok;

#[test]
fn node_json_omits_empty_fields() {
    let out = run_ok("text(\"Hi\").padding(2)");
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!({ "tag": "span", "attributes": { "class": "p-2" }, "text": "Hi" })
    );
}

#[test]
fn fragment_json_is_array() {
    let out = run_ok("box do \"x\" end\n:sym");
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!([
            { "tag": "div", "children": [{ "tag": "#text", "text": "x" }] },
            { "tag": "#text", "text": ":sym" }
        ])
    );
}

#[test]
fn scalars_are_plain_json() {
    assert_eq!(serde_json::to_value(run_ok("3")).unwrap(), json!(3));
    assert_eq!(serde_json::to_value(run_ok("nil")).unwrap(), json!(null));
    assert_eq!(serde_json::to_value(run_ok(":a")).unwrap(), json!(":a"));
}
