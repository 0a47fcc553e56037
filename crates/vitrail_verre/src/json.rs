//! JSON adapter for definition objects.
//!
//! Stands in for a script parser front end: a definition is a JSON object
//! whose keys mirror the component options. `props` may be an array of names
//! or an object; `model` is an object with literal `prop`/`event` strings;
//! `mixins` is an array of project-level names and `extends` a single one.
//! Anything malformed is skipped and reported as a [`ShapeIssue`].

use serde_json::Value;
use thiserror::Error;

use crate::def::{ObjectDefinition, ObjectDefinitionBuilder, OptionKey, ShapeIssue};
use crate::source::FileId;

/// A definition document that cannot be read at all.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("definition must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build an [`ObjectDefinition`] from a serialized options object.
///
/// Unknown keys (`name`, `template`, render functions serialized away, …)
/// are ignored; they are not what this engine resolves.
pub fn definition_from_json(
    file: FileId,
    value: &Value,
) -> Result<(ObjectDefinition, Vec<ShapeIssue>), AdapterError> {
    let object = value
        .as_object()
        .ok_or_else(|| AdapterError::NotAnObject(json_type(value)))?;

    let mut builder = ObjectDefinition::builder(file);
    let mut issues = Vec::new();

    for (key, entry) in object {
        let Some(option) = OptionKey::from_key(key) else {
            continue;
        };
        builder = match option {
            OptionKey::Props => read_props(builder, entry, &mut issues),
            OptionKey::Model => read_model(builder, entry, &mut issues),
            OptionKey::Mixins => read_mixins(builder, entry, &mut issues),
            OptionKey::Extends => read_extends(builder, entry, &mut issues),
            _ => read_member_object(builder, option, entry, &mut issues),
        };
    }

    Ok((builder.build(), issues))
}

fn read_props(
    mut builder: ObjectDefinitionBuilder,
    entry: &Value,
    issues: &mut Vec<ShapeIssue>,
) -> ObjectDefinitionBuilder {
    match entry {
        Value::Array(names) => {
            builder = builder.declare_option(OptionKey::Props);
            for (index, name) in names.iter().enumerate() {
                match name.as_str() {
                    Some(name) => builder = builder.member(OptionKey::Props, name),
                    None => issues.push(ShapeIssue::new(
                        format!("props[{index}]"),
                        format!("expected a prop name, got {}", json_type(name)),
                    )),
                }
            }
            builder
        }
        Value::Object(_) => read_member_object(builder, OptionKey::Props, entry, issues),
        other => {
            issues.push(ShapeIssue::new(
                "props",
                format!("expected an array or object, got {}", json_type(other)),
            ));
            builder
        }
    }
}

fn read_model(
    mut builder: ObjectDefinitionBuilder,
    entry: &Value,
    issues: &mut Vec<ShapeIssue>,
) -> ObjectDefinitionBuilder {
    let Some(object) = entry.as_object() else {
        issues.push(ShapeIssue::new(
            "model",
            format!("expected an object, got {}", json_type(entry)),
        ));
        return builder;
    };
    builder = builder.declare_option(OptionKey::Model);
    for (key, value) in object {
        match value.as_str() {
            Some(value) => {
                builder = builder.member_with_value(OptionKey::Model, key.as_str(), value)
            }
            None => issues.push(ShapeIssue::new(
                format!("model.{key}"),
                format!("expected a string, got {}", json_type(value)),
            )),
        }
    }
    builder
}

fn read_mixins(
    mut builder: ObjectDefinitionBuilder,
    entry: &Value,
    issues: &mut Vec<ShapeIssue>,
) -> ObjectDefinitionBuilder {
    let Some(names) = entry.as_array() else {
        issues.push(ShapeIssue::new(
            "mixins",
            format!("expected an array, got {}", json_type(entry)),
        ));
        return builder;
    };
    builder = builder.declare_option(OptionKey::Mixins);
    for (index, name) in names.iter().enumerate() {
        match name.as_str() {
            Some(name) => builder = builder.composition_ref(OptionKey::Mixins, name),
            None => issues.push(ShapeIssue::new(
                format!("mixins[{index}]"),
                format!("expected a mixin name, got {}", json_type(name)),
            )),
        }
    }
    builder
}

fn read_extends(
    builder: ObjectDefinitionBuilder,
    entry: &Value,
    issues: &mut Vec<ShapeIssue>,
) -> ObjectDefinitionBuilder {
    match entry.as_str() {
        Some(name) => builder.composition_ref(OptionKey::Extends, name),
        None => {
            issues.push(ShapeIssue::new(
                "extends",
                format!("expected a component name, got {}", json_type(entry)),
            ));
            builder
        }
    }
}

fn read_member_object(
    mut builder: ObjectDefinitionBuilder,
    option: OptionKey,
    entry: &Value,
    issues: &mut Vec<ShapeIssue>,
) -> ObjectDefinitionBuilder {
    let Some(object) = entry.as_object() else {
        issues.push(ShapeIssue::new(
            option.as_str(),
            format!("expected an object, got {}", json_type(entry)),
        ));
        return builder;
    };
    builder = builder.declare_option(option);
    for (name, value) in object {
        builder = match value.as_str() {
            Some(value) => builder.member_with_value(option, name.as_str(), value),
            None => builder.member(option, name.as_str()),
        };
    }
    builder
}
