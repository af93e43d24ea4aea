use crate::{Error, Result};
use serde_json::Value;

/// Renders `{{field}}` placeholders from a serialised input record.
///
/// String values are inserted verbatim and `null` renders as an empty
/// string. A placeholder naming a field the record does not have is an
/// error. Inserted values are never rescanned for placeholders.
pub fn render(template: &str, values: &Value) -> Result<String> {
    let fields = values
        .as_object()
        .ok_or_else(|| Error::internal("Template input must serialize to an object"))?;

    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);

        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| Error::internal("Unclosed placeholder in prompt template"))?;
        let key = after[..end].trim();

        match fields.get(key) {
            Some(Value::String(s)) => rendered.push_str(s),
            Some(Value::Null) => {}
            Some(other) => rendered.push_str(&other.to_string()),
            None => {
                return Err(Error::internal(format!(
                    "Prompt template references unknown field '{}'",
                    key
                )));
            }
        }

        rest = &after[end + 2..];
    }

    rendered.push_str(rest);
    Ok(rendered)
}
