use serde_json::Value;

use super::*;
use crate::document::ConfigDocument;
use crate::modules::{ShapePolicy, extract};

fn render_yaml(yaml: &str, options: &RenderOptions) -> Result<String, ModulesError> {
	let doc = ConfigDocument::parse(yaml, "test").expect("valid yaml");
	let modules = extract(&doc, "modules", ShapePolicy::Permissive).expect("modules key");
	render(&modules, options)
}

#[test]
fn empty_list_renders_exactly() {
	let out = render_yaml("modules: []\n", &RenderOptions::default()).unwrap();
	assert_eq!(out, r#"{"modules_json": "[]"}"#);
}

#[test]
fn descriptors_keep_source_key_order() {
	let yaml = "\
modules:
  - name: auth
    version: 1
  - name: billing
    version: 2
";
	let out = render_yaml(yaml, &RenderOptions::default()).unwrap();
	assert_eq!(
		out,
		r#"{"modules_json": "[{\"name\": \"auth\", \"version\": 1}, {\"name\": \"billing\", \"version\": 2}]"}"#
	);
}

#[test]
fn payload_parses_back_to_the_module_list() {
	let yaml = "\
modules:
  - name: search
    deps: [auth, \"billing\"]
    options: {retries: 3, ratio: 0.25, enabled: false, note: null}
  - plain string entry
  - 7
";
	let out = render_yaml(yaml, &RenderOptions::default()).unwrap();
	let envelope: Value = serde_json::from_str(&out).unwrap();
	let object = envelope.as_object().unwrap();
	assert_eq!(object.len(), 1);
	let payload = object["modules_json"].as_str().expect("string payload");
	let modules: Value = serde_json::from_str(payload).unwrap();
	assert_eq!(
		modules,
		serde_json::json!([
			{
				"name": "search",
				"deps": ["auth", "billing"],
				"options": {"retries": 3, "ratio": 0.25, "enabled": false, "note": null}
			},
			"plain string entry",
			7
		])
	);
}

#[test]
fn merge_keys_render_as_plain_entries() {
	let yaml = "base: &b {tier: gold}\nmodules:\n  - <<: *b\n    name: auth\n";
	let out = render_yaml(yaml, &RenderOptions::default()).unwrap();
	assert_eq!(
		out,
		r#"{"modules_json": "[{\"tier\": \"gold\", \"name\": \"auth\"}]"}"#
	);
}

#[test]
fn scalar_module_value_is_still_a_string_payload() {
	let out = render_yaml("modules: {auth: 1}\n", &RenderOptions::default()).unwrap();
	assert_eq!(out, r#"{"modules_json": "{\"auth\": 1}"}"#);
}

#[test]
fn non_ascii_is_double_escaped_by_default() {
	let out = render_yaml("modules: [café]\n", &RenderOptions::default()).unwrap();
	assert_eq!(out, r#"{"modules_json": "[\"caf\\u00e9\"]"}"#);
}

#[test]
fn utf8_is_kept_when_ascii_is_not_enforced() {
	let options = RenderOptions {
		ensure_ascii: false,
		..RenderOptions::default()
	};
	let out = render_yaml("modules: [café]\n", &options).unwrap();
	assert_eq!(out, "{\"modules_json\": \"[\\\"café\\\"]\"}");
}

#[test]
fn custom_field_names_the_envelope_key() {
	let options = RenderOptions {
		field: "payload".into(),
		..RenderOptions::default()
	};
	let out = render_yaml("modules: []\n", &options).unwrap();
	assert_eq!(out, r#"{"payload": "[]"}"#);
}

#[test]
fn non_finite_numbers_fail_to_encode() {
	let err = render_yaml("modules: [.inf]\n", &RenderOptions::default()).unwrap_err();
	assert!(matches!(err, ModulesError::Encode { .. }), "{err:?}");
}
