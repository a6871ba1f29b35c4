// ABOUTME: Parser turning free-form LLM output into validated recipe records
// ABOUTME: Strips code fences and prose, extracts JSON, and keeps records with required fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use serde_json::{Map, Value};
use tracing::debug;

use pantry_core::constants::generation::{DEFAULT_REASON, REQUIRED_FIELDS};
use pantry_core::errors::GenerationError;
use pantry_core::models::RecipeRecord;

use super::GenerationRequest;

/// Content of the first fenced code block, without its language tag
fn strip_code_fence(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    let after_open = &text[open + 3..];
    let body = after_open
        .find("```")
        .map_or(after_open, |close| &after_open[..close]);
    body.strip_prefix("json")
        .or_else(|| body.strip_prefix("JSON"))
        .unwrap_or(body)
        .trim()
}

/// Slice from the first `open` to the last `close`, inclusive
fn delimited(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

/// Locate and parse the JSON payload in an LLM response.
///
/// Tries, in order: the whole text after fence stripping, the outermost
/// `[...]` span, then the outermost `{...}` span.
#[must_use]
pub fn extract_json(response: &str) -> Option<Value> {
    let text = strip_code_fence(response.trim()).trim();

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Some(value);
    }

    [delimited(text, '[', ']'), delimited(text, '{', '}')]
        .into_iter()
        .flatten()
        .find_map(|candidate| serde_json::from_str::<Value>(candidate).ok())
}

/// Text of a field that may be a string or a list of strings
fn text_field(object: &Map<String, Value>, key: &str, separator: &str) -> Option<String> {
    let text = match object.get(key)? {
        Value::String(text) => text.trim().to_owned(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(separator),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Cooking time given as a number or a numeric string such as `"25"` or `"25 minutes"`
fn cooking_time_field(object: &Map<String, Value>) -> Option<u32> {
    let minutes = match object.get("cooking_time")? {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|m| *m >= 0.0).map(|m| m.round() as u64))?,
        Value::String(text) => {
            let digits: String = text
                .trim()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().ok()?
        }
        _ => return None,
    };
    u32::try_from(minutes).ok().filter(|minutes| *minutes > 0)
}

/// Build a record from one JSON object, or `None` when a required field is unusable
fn record_from_object(
    object: &Map<String, Value>,
    request: &GenerationRequest,
) -> Option<RecipeRecord> {
    if let Some(missing) = REQUIRED_FIELDS.iter().find(|key| !object.contains_key(**key)) {
        debug!(field = *missing, "Generated recipe missing required field");
        return None;
    }

    let name = text_field(object, "recipe_name", " ")?;
    let ingredients = text_field(object, "ingredients", ", ")?;
    let cooking_time = cooking_time_field(object)?;
    let instructions = text_field(object, "instructions", " ")?;
    let meal_type =
        text_field(object, "meal_type", " ").unwrap_or_else(|| request.meal_type.clone());
    let cuisine = text_field(object, "cuisine", " ").unwrap_or_else(|| request.cuisine.clone());
    let reason = text_field(object, "reason", " ").unwrap_or_else(|| DEFAULT_REASON.to_owned());

    Some(
        RecipeRecord::new(name, ingredients, cooking_time, meal_type, cuisine, instructions)
            .with_reason(reason),
    )
}

/// Parse an LLM response into recipe records.
///
/// Accepts a single object, an array of objects, or an object wrapping a
/// `recipes` array. Records lacking a required field are dropped.
///
/// # Errors
///
/// Returns `GenerationError::Malformed` when no JSON can be extracted or it
/// has an unexpected shape, and `GenerationError::Empty` when no record
/// survives validation.
pub fn parse_recipes(
    response: &str,
    request: &GenerationRequest,
) -> Result<Vec<RecipeRecord>, GenerationError> {
    let value = extract_json(response).ok_or_else(|| {
        GenerationError::Malformed("response contains no parseable JSON".to_owned())
    })?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("recipes") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(GenerationError::Malformed(
                    "`recipes` is not an array".to_owned(),
                ))
            }
            None => vec![Value::Object(object)],
        },
        other => {
            return Err(GenerationError::Malformed(format!(
                "expected a JSON object or array, got {}",
                json_kind(&other)
            )))
        }
    };

    let total = items.len();
    let recipes: Vec<RecipeRecord> = items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|object| record_from_object(object, request))
        .collect();

    debug!(total, usable = recipes.len(), "Parsed generated recipes");

    if recipes.is_empty() {
        return Err(GenerationError::Empty);
    }
    Ok(recipes)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
