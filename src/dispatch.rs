// Argument validation for tool invocations

use rmcp::model::{CallToolRequestParam, JsonObject};
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use crate::error::ToolError;
use crate::registry::{ParamType, ToolDefinition};

/// One request to run a tool
#[derive(Debug, Clone)]
pub struct Invocation {
    pub tool_name: String,
    pub arguments: JsonObject,
}

impl From<CallToolRequestParam> for Invocation {
    fn from(request: CallToolRequestParam) -> Self {
        Self {
            tool_name: request.name.into_owned(),
            arguments: request.arguments.unwrap_or_default(),
        }
    }
}

/// Arguments that passed validation, coerced to their declared types.
/// Undeclared arguments are dropped.
#[derive(Debug, Clone, Default)]
pub struct Arguments(JsonObject);

impl Arguments {
    /// Deserializes into the tool's typed request struct
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ToolError> {
        Ok(serde_json::from_value(Value::Object(self.0.clone()))?)
    }
}

/// Checks every required parameter is present and coercible.
pub fn validate(definition: &ToolDefinition, arguments: &JsonObject) -> Result<Arguments, ToolError> {
    let mut coerced = JsonObject::new();

    for param in &definition.params {
        match arguments
            .get(&param.name)
            .and_then(|value| coerce(value, param.param_type))
        {
            Some(value) => {
                coerced.insert(param.name.clone(), value);
            }
            None if param.required => {
                return Err(ToolError::MissingParameter(missing_parameter_message(
                    definition,
                )));
            }
            None => {}
        }
    }

    Ok(Arguments(coerced))
}

/// Strings accept any scalar rendered as text; numbers accept numeric strings.
fn coerce(value: &Value, param_type: ParamType) -> Option<Value> {
    match (param_type, value) {
        (ParamType::String, Value::String(_)) => Some(value.clone()),
        (ParamType::String, Value::Number(n)) => Some(Value::String(n.to_string())),
        (ParamType::String, Value::Bool(b)) => Some(Value::String(b.to_string())),
        (ParamType::Number, Value::Number(_)) => Some(value.clone()),
        (ParamType::Number, Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        _ => None,
    }
}

/// Names every required parameter, e.g.
/// "The 'latitude' and 'longitude' parameters are required."
pub fn missing_parameter_message(definition: &ToolDefinition) -> String {
    let names: Vec<String> = definition
        .required_params()
        .map(|p| format!("'{}'", p.name))
        .collect();

    match names.as_slice() {
        [] => "Required parameters are missing.".to_string(),
        [only] => format!("The {} parameter is required.", only),
        [init @ .., last] => format!(
            "The {} and {} parameters are required.",
            init.join(", "),
            last
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn forecast_definition() -> ToolDefinition {
        ToolDefinition::new("get_forecast", "Forecast")
            .param("latitude", ParamType::Number, None, true)
            .param("longitude", ParamType::Number, None, true)
    }

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_missing_one_of_two_required() {
        let err = validate(&forecast_definition(), &object(json!({ "latitude": 37.7 }))).unwrap_err();
        match err {
            ToolError::MissingParameter(message) => assert_eq!(
                message,
                "The 'latitude' and 'longitude' parameters are required."
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type_counts_as_missing() {
        let args = object(json!({ "latitude": "north", "longitude": -122.4 }));
        assert!(matches!(
            validate(&forecast_definition(), &args),
            Err(ToolError::MissingParameter(_))
        ));

        let args = object(json!({ "latitude": null, "longitude": -122.4 }));
        assert!(matches!(
            validate(&forecast_definition(), &args),
            Err(ToolError::MissingParameter(_))
        ));
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let args = object(json!({ "latitude": "37.7", "longitude": -122.4 }));
        let validated: JsonObject = validate(&forecast_definition(), &args)
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(validated.get("latitude").and_then(Value::as_f64), Some(37.7));
    }

    #[test]
    fn test_string_param_accepts_scalars() {
        let definition =
            ToolDefinition::new("get_alerts", "Alerts").param("state", ParamType::String, None, true);

        let validated: JsonObject = validate(&definition, &object(json!({ "state": 42 })))
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(validated.get("state"), Some(&json!("42")));

        let err = validate(&definition, &object(json!({ "state": ["CA"] }))).unwrap_err();
        assert_eq!(err.to_string(), "The 'state' parameter is required.");
    }

    #[test]
    fn test_optional_and_undeclared_params() {
        let definition = ToolDefinition::new("echo", "Echo")
            .param("state", ParamType::String, None, true)
            .param("limit", ParamType::Number, None, false);

        let validated: JsonObject =
            validate(&definition, &object(json!({ "state": "CA", "extra": true })))
                .unwrap()
                .parse()
                .unwrap();
        assert!(validated.get("limit").is_none());
        assert!(validated.get("extra").is_none());
    }

    #[test]
    fn test_message_lists_three_names() {
        let definition = ToolDefinition::new("t", "t")
            .param("a", ParamType::String, None, true)
            .param("b", ParamType::String, None, true)
            .param("c", ParamType::String, None, true);
        assert_eq!(
            missing_parameter_message(&definition),
            "The 'a', 'b' and 'c' parameters are required."
        );
    }

    #[test]
    fn test_invocation_from_call_request() {
        let request = CallToolRequestParam {
            name: "get_alerts".into(),
            arguments: None,
        };
        let invocation = Invocation::from(request);
        assert_eq!(invocation.tool_name, "get_alerts");
        assert!(invocation.arguments.is_empty());
    }
}
