/// Roundtrip tests: JSON → YAML → (serde_yaml) → JSON on realistic documents.
///
/// Each test checks both structural equality and key order, since
/// `serde_json::Map` equality ignores order.
use json2yaml::encode;
use serde_json::Value;

fn fixture(name: &str) -> String {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/");
    std::fs::read_to_string(format!("{}{}", path, name)).expect("fixture must exist")
}

/// Encode, parse back with serde_yaml, and compare against the parsed input.
fn assert_roundtrip(json: &str) -> String {
    let yaml = encode(json).unwrap();
    let original: Value = serde_json::from_str(json).unwrap();
    let back: Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(original, back, "YAML:\n{}", yaml);
    assert_eq!(
        serde_json::to_string(&original).unwrap(),
        serde_json::to_string(&back).unwrap(),
        "key order changed, YAML:\n{}",
        yaml
    );
    yaml
}

#[test]
fn roundtrip_openapi_fixture() {
    let yaml = assert_roundtrip(&fixture("openapi.json"));
    assert_eq!(yaml, fixture("openapi.yaml"));
}

#[test]
fn roundtrip_minimal_openapi() {
    let yaml =
        assert_roundtrip(r#"{"paths": {}, "info": {"title": "API", "version": "1.0"}}"#);
    assert_eq!(yaml, "paths: {}\ninfo:\n  title: API\n  version: '1.0'\n");

    let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    let keys: Vec<&str> = doc
        .as_mapping()
        .unwrap()
        .keys()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(keys, ["paths", "info"]);
    assert!(doc["paths"].as_mapping().unwrap().is_empty());
    assert_eq!(doc["info"]["title"].as_str(), Some("API"));
    assert_eq!(doc["info"]["version"].as_str(), Some("1.0"));
}

#[test]
fn roundtrip_key_order() {
    let yaml = assert_roundtrip(r#"{"b":1,"a":2}"#);
    assert!(yaml.find("b:").unwrap() < yaml.find("a:").unwrap());
}

#[test]
fn roundtrip_numeric_fidelity() {
    let yaml = assert_roundtrip(r#"{"float":3.0,"int":42,"neg":-0.5,"big":1e300}"#);
    let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert!(doc["float"].is_f64());
    assert_eq!(doc["float"].as_f64(), Some(3.0));
    assert!(doc["int"].is_u64());
    assert_eq!(doc["int"].as_u64(), Some(42));
    assert!(doc["big"].is_f64());
}

#[test]
fn roundtrip_ambiguous_strings_stay_strings() {
    let yaml = assert_roundtrip(
        r#"["true","false","null","123","1.0","yes","~","0x10","2024-01-01",".inf",""]"#,
    );
    let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    for item in doc.as_sequence().unwrap() {
        assert!(item.is_string(), "{:?} should be a string", item);
    }
}

#[test]
fn roundtrip_unicode() {
    let yaml = assert_roundtrip(r#"{"greeting":"héllo","zh":"你好","emoji":"⛷️"}"#);
    assert!(yaml.contains("héllo"));
    assert!(yaml.contains("你好"));
    assert!(!yaml.contains("\\u00e9"));
}

#[test]
fn roundtrip_escapes() {
    assert_roundtrip(r#"{"multi":"a\nb\tc","quote":"say \"hi\"\n","nul":"\u0000","bs":"C:\\x\n"}"#);
}

#[test]
fn roundtrip_mixed_nesting() {
    assert_roundtrip(
        r#"{
            "servers": [{"url": "/", "variables": {"port": {"enum": ["80", "443"], "default": "80"}}}],
            "matrix": [[1, [2, []]], [{}], [{"a": [{"b": null}]}]],
            "security": [{"bearerAuth": []}],
            "tags": []
        }"#,
    );
}

#[test]
fn roundtrip_long_key() {
    let key = "x".repeat(200);
    assert_roundtrip(&format!(r#"{{"{}":{{"nested":[1]}},"after":true}}"#, key));
}
