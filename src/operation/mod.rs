//! Structured prompt operations.
//!
//! An operation couples an input record, an output record with its JSON
//! schema, and a prompt template. [`invoke`] validates the input, renders the
//! template, submits it to the provider exactly once and accepts the reply
//! only if it matches the declared output shape.

mod decode;
mod template;

pub use decode::extract_json;
pub use template::render;

use crate::{
    Error, Result,
    llm::{GenerationRequest, LlmClient, OutputSchema},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub trait StructuredOperation {
    type Input: Serialize + Send + Sync;
    type Output: DeserializeOwned + Send;

    /// Stable name used for logging and the schema descriptor.
    const NAME: &'static str;

    /// Message surfaced to callers when the operation fails.
    const FAILURE_MESSAGE: &'static str;

    fn system_prompt() -> Option<&'static str> {
        None
    }

    fn template() -> &'static str;

    fn output_schema() -> OutputSchema;

    /// Rejects inputs that must never reach the provider.
    fn validate_input(input: &Self::Input) -> Result<()>;

    /// Constraints serde cannot express, such as numeric ranges.
    fn check_output(_output: &Self::Output) -> std::result::Result<(), String> {
        Ok(())
    }
}

/// Renders the user prompt for `input` without contacting the provider.
pub fn render_prompt<O: StructuredOperation>(input: &O::Input) -> Result<String> {
    let values = serde_json::to_value(input)?;
    render(O::template(), &values)
}

/// Decodes a raw provider reply into the operation's output record.
pub fn decode_reply<O: StructuredOperation>(reply: &str) -> Result<O::Output> {
    let value = extract_json(reply)
        .ok_or_else(|| Error::shape(O::NAME, "reply does not contain a JSON document"))?;

    let output: O::Output =
        serde_json::from_value(value).map_err(|e| Error::shape(O::NAME, e.to_string()))?;

    O::check_output(&output).map_err(|reason| Error::shape(O::NAME, reason))?;

    Ok(output)
}

pub async fn invoke<O: StructuredOperation>(
    client: &dyn LlmClient,
    input: &O::Input,
) -> Result<O::Output> {
    let invocation_id = Uuid::new_v4();

    O::validate_input(input)?;

    let prompt = render_prompt::<O>(input)?;
    info!("Invoking {} ({})", O::NAME, invocation_id);
    debug!("Prompt for {} ({}):\n{}", O::NAME, invocation_id, prompt);

    let request = GenerationRequest {
        operation: O::NAME.to_string(),
        system: O::system_prompt().map(str::to_string),
        prompt,
        output_schema: O::output_schema(),
        temperature: None,
    };

    let response = client.generate(request).await.inspect_err(|e| {
        warn!("{} ({}) provider call failed: {}", O::NAME, invocation_id, e);
    })?;

    debug!(
        "Reply for {} ({}) from {}: {}",
        O::NAME,
        invocation_id,
        response.model,
        response.content
    );

    let output = decode_reply::<O>(&response.content).inspect_err(|e| {
        warn!("{} ({}) rejected reply: {}", O::NAME, invocation_id, e);
    })?;

    info!("{} ({}) completed", O::NAME, invocation_id);
    Ok(output)
}

/// Shared check for required free-text fields.
pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "is required"));
    }
    Ok(())
}
