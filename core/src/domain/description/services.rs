use crate::domain::{
    common::entities::app_errors::CoreError,
    description::{
        ports::{DescriptionProvider, LLMClient},
        prompt::build_description_prompt,
        value_objects::DescribeFoodInput,
    },
};

/// Describes foods by prompting a language model.
#[derive(Debug, Clone)]
pub struct LLMDescriptionProvider<L: LLMClient> {
    llm_client: L,
    max_tokens: u32,
}

impl<L: LLMClient> LLMDescriptionProvider<L> {
    pub fn new(llm_client: L, max_tokens: u32) -> Self {
        Self {
            llm_client,
            max_tokens,
        }
    }
}

impl<L: LLMClient> DescriptionProvider for LLMDescriptionProvider<L> {
    async fn describe(&self, input: DescribeFoodInput) -> Result<String, CoreError> {
        let prompt = build_description_prompt(&input);

        let text = self
            .llm_client
            .generate_text(prompt, self.max_tokens)
            .await?;

        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::ExternalServiceError(
                "LLM returned an empty description".to_string(),
            ));
        }

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::{description::ports::MockLLMClient, food::entities::OxalateLevel};

    #[derive(Clone, Default)]
    struct ScriptedLLMClient {
        reply: Option<String>,
        prompts: Arc<Mutex<Vec<(String, u32)>>>,
    }

    impl LLMClient for ScriptedLLMClient {
        async fn generate_text(
            &self,
            prompt: String,
            max_tokens: u32,
        ) -> Result<String, CoreError> {
            self.prompts.lock().unwrap().push((prompt, max_tokens));
            self.reply
                .clone()
                .ok_or_else(|| CoreError::ExternalServiceError("quota exceeded".to_string()))
        }
    }

    fn spinach() -> DescribeFoodInput {
        DescribeFoodInput {
            name: "Spinach".to_string(),
            category: Some("Vegetables".to_string()),
            oxalate_level: OxalateLevel::High,
            oxalate_content: 970,
        }
    }

    #[tokio::test]
    async fn test_describe_trims_reply_and_forwards_token_limit() {
        let client = ScriptedLLMClient {
            reply: Some("  Leafy green.\n".to_string()),
            ..Default::default()
        };
        let provider = LLMDescriptionProvider::new(client.clone(), 150);

        let description = provider.describe(spinach()).await.unwrap();

        assert_eq!(description, "Leafy green.");
        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].1, 150);
        assert!(prompts[0].0.contains("Spinach (Vegetables)"));
    }

    #[tokio::test]
    async fn test_describe_rejects_blank_reply() {
        let provider = LLMDescriptionProvider::new(
            ScriptedLLMClient {
                reply: Some("   ".to_string()),
                ..Default::default()
            },
            150,
        );

        let result = provider.describe(spinach()).await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_describe_propagates_client_error() {
        let mut client = MockLLMClient::new();
        client
            .expect_generate_text()
            .withf(|prompt, max_tokens| prompt.contains("Spinach") && *max_tokens == 80)
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Err(CoreError::ExternalServiceError("quota exceeded".to_string()))
                })
            });
        let provider = LLMDescriptionProvider::new(client, 80);

        let result = provider.describe(spinach()).await;
        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError("quota exceeded".to_string()))
        );
    }
}
