//! Text-completion oracle client
//!
//! Every component that talks to the language model goes through the
//! [`TextOracle`] trait: the matcher is handed one shared client at
//! construction time, and tests swap in scripted doubles.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use leadflow_core::{LeadflowError, LeadflowResult};
use tracing::instrument;

/// Single-shot text completion
#[async_trait]
pub trait TextOracle: Send + Sync {
    /// Generate a free-text completion for the given prompt
    async fn complete(&self, prompt: &str) -> LeadflowResult<String>;
}

/// OpenAI-backed oracle client
#[derive(Debug, Clone)]
pub struct OracleClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OracleClient {
    /// Create a new oracle client
    ///
    /// async-openai reads OPENAI_API_KEY from env automatically.
    pub fn new() -> LeadflowResult<Self> {
        let config = OpenAIConfig::default();
        let client = Client::with_config(config);

        Ok(Self {
            client,
            model: "gpt-4o".to_string(),
        })
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextOracle for OracleClient {
    #[instrument(skip(self, prompt))]
    async fn complete(&self, prompt: &str) -> LeadflowResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| LeadflowError::internal(e.to_string()))?
                .into()])
            .temperature(0.3)
            .build()
            .map_err(|e| LeadflowError::internal(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| LeadflowError::api(format!("OpenAI API error: {}", e)))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| LeadflowError::parse("No response from model"))?;

        Ok(content.clone())
    }
}
