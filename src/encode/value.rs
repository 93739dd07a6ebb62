use serde_json::{Map, Number, Value as Json};
use serde_yaml::Value as Yaml;

use crate::document::kind_of;
use crate::error::ModulesError;

/// Convert a YAML value into the equivalent JSON value.
///
/// `path` names `value` in diagnostics and is extended as the walk descends.
pub(crate) fn to_json(value: &Yaml, path: &str) -> Result<Json, ModulesError> {
	match value {
		Yaml::Null => Ok(Json::Null),
		Yaml::Bool(flag) => Ok(Json::Bool(*flag)),
		Yaml::Number(number) => number_to_json(number, path).map(Json::Number),
		Yaml::String(text) => Ok(Json::String(text.clone())),
		Yaml::Sequence(items) => items
			.iter()
			.enumerate()
			.map(|(idx, item)| to_json(item, &format!("{path}[{idx}]")))
			.collect::<Result<Vec<_>, _>>()
			.map(Json::Array),
		Yaml::Mapping(mapping) => {
			let mut object = Map::with_capacity(mapping.len());
			for (key, item) in mapping {
				let key = key_to_string(key, path)?;
				let item = to_json(item, &format!("{path}.{key}"))?;
				object.insert(key, item);
			}
			Ok(Json::Object(object))
		}
		Yaml::Tagged(tagged) => Err(ModulesError::encode(
			path,
			format!("tagged value {} has no JSON equivalent", tagged.tag),
		)),
	}
}

fn number_to_json(number: &serde_yaml::Number, path: &str) -> Result<Number, ModulesError> {
	if let Some(int) = number.as_i64() {
		return Ok(Number::from(int));
	}
	if let Some(int) = number.as_u64() {
		return Ok(Number::from(int));
	}
	number
		.as_f64()
		.and_then(Number::from_f64)
		.ok_or_else(|| ModulesError::encode(path, format!("non-finite number {number}")))
}

/// Mapping keys must be strings in JSON; scalars are coerced to their JSON text.
fn key_to_string(key: &Yaml, path: &str) -> Result<String, ModulesError> {
	match key {
		Yaml::String(text) => Ok(text.clone()),
		Yaml::Number(number) => number_to_json(number, path).map(|n| n.to_string()),
		Yaml::Bool(flag) => Ok(flag.to_string()),
		Yaml::Null => Ok("null".to_string()),
		other => Err(ModulesError::encode(
			path,
			format!("{} cannot be used as an object key", kind_of(other)),
		)),
	}
}
