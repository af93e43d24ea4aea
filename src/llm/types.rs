use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContent, ResponseFormat, ResponseFormatJsonSchema,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-schema descriptor the provider is asked to honour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSchema {
    pub name: String,
    pub description: String,
    pub schema: Value,
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub operation: String,
    pub system: Option<String>,
    pub prompt: String,
    pub output_schema: OutputSchema,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub model: String,
    pub content: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl GenerationRequest {
    pub fn to_openai_messages(&self) -> Result<Vec<ChatCompletionRequestMessage>, crate::Error> {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::with_capacity(2);

        if let Some(ref system) = self.system {
            let msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(ChatCompletionRequestSystemMessageContent::Text(
                    system.clone(),
                ))
                .build()
                .map_err(|e| {
                    crate::Error::provider(format!("Failed to build system message: {}", e))
                })?;
            messages.push(msg.into());
        }

        let msg = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Text(
                self.prompt.clone(),
            ))
            .build()
            .map_err(|e| crate::Error::provider(format!("Failed to build user message: {}", e)))?;
        messages.push(msg.into());

        Ok(messages)
    }
}

impl OutputSchema {
    pub fn to_response_format(&self) -> ResponseFormat {
        ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                name: self.name.clone(),
                description: Some(self.description.clone()),
                schema: Some(self.schema.clone()),
                strict: Some(true),
            },
        }
    }
}
