//! Study Agent
//!
//! Turns extracted notes, a question and a marks weight into a single chat
//! completion request and returns the model's answer.

use crate::config::LLMConfig;
use crate::llm::provider::{LLMAdapter, LLM};
use crate::models::Marks;
use crate::types::{AppResult, LLMMessage, LLMRequest};
use std::sync::Arc;
use tracing::info;

/// Low temperature keeps answers factual rather than creative.
pub const ANSWER_TEMPERATURE: f32 = 0.3;

pub struct StudyAgent {
    llm: Arc<dyn LLMAdapter>,
    model: String,
    provider: String,
}

impl StudyAgent {
    pub fn new(llm: Arc<dyn LLMAdapter>, model: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
            provider: provider.into(),
        }
    }

    /// Build the agent from configuration. Fails without an API key, so no
    /// remote call can be attempted unauthenticated.
    pub fn from_config(config: &LLMConfig) -> AppResult<Self> {
        let llm = LLM::from_config(config)?;
        Ok(Self::new(Arc::new(llm), config.model.clone(), config.provider.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn build_prompt(context: &str, question: &str, marks: Marks) -> String {
        format!(
            "You are a study helper AI. Use the notes below to generate a clear, structured answer.\n\
             \n\
             Notes:\n\
             {context}\n\
             \n\
             Question: {question}\n\
             Marks: {marks}\n\
             \n\
             Provide the answer as a concise, point-wise format suitable for a {marks}-mark question.\n"
        )
    }

    pub fn build_request(&self, prompt: String) -> LLMRequest {
        LLMRequest {
            model: self.model.clone(),
            messages: vec![LLMMessage::user(prompt)],
            max_tokens: None,
            temperature: Some(ANSWER_TEMPERATURE),
        }
    }

    /// Ask the model one question about the notes. No retry.
    pub async fn ask(&self, context: &str, question: &str, marks: Marks) -> AppResult<String> {
        info!(
            context_len = context.len(),
            question_len = question.len(),
            marks = %marks,
            model = %self.model,
            "Requesting answer"
        );

        let request = self.build_request(Self::build_prompt(context, question, marks));
        let response = self.llm.create_chat_completion(&request).await?;

        let usage = response.usage.as_ref();
        info!(
            response_len = response.content.len(),
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            prompt_tokens = usage.map(|u| u.prompt_tokens),
            completion_tokens = usage.map(|u| u.completion_tokens),
            total_tokens = usage.map(|u| u.total_tokens),
            "Answer generated"
        );
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::RecordingAdapter;
    use crate::types::AppError;

    #[test]
    fn test_prompt_is_deterministic() {
        let a = StudyAgent::build_prompt("notes", "Define osmosis", Marks::Five);
        let b = StudyAgent::build_prompt("notes", "Define osmosis", Marks::Five);
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_contains_question_and_marks_verbatim() {
        let question = "Explain the Krebs cycle, step by step (with enzymes)?";
        for marks in Marks::ALL {
            let prompt = StudyAgent::build_prompt("ctx", question, marks);
            assert!(prompt.contains(&format!("Question: {}", question)));
            assert!(prompt.contains(&format!("Marks: {}", marks.value())));
            assert!(prompt.contains(&format!("suitable for a {}-mark question", marks.value())));
        }
    }

    #[test]
    fn test_prompt_field_order() {
        let prompt = StudyAgent::build_prompt("THE NOTES", "THE QUESTION", Marks::Ten);
        let role = prompt.find("study helper").unwrap();
        let notes = prompt.find("THE NOTES").unwrap();
        let question = prompt.find("THE QUESTION").unwrap();
        let marks = prompt.find("Marks: 10").unwrap();
        assert!(role < notes && notes < question && question < marks);
    }

    #[test]
    fn test_context_is_not_truncated() {
        let context = "word ".repeat(50_000);
        let prompt = StudyAgent::build_prompt(&context, "q", Marks::Two);
        assert!(prompt.contains(&context));
    }

    #[tokio::test]
    async fn test_ask_sends_single_user_message() {
        let adapter = Arc::new(RecordingAdapter::replying("• Point one"));
        let agent = StudyAgent::new(adapter.clone(), "llama-3.1-8b-instant", "groq");

        let answer = agent.ask("notes", "What?", Marks::Two).await.unwrap();
        assert_eq!(answer, "• Point one");

        let requests = adapter.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model, "llama-3.1-8b-instant");
        assert_eq!(request.temperature, Some(ANSWER_TEMPERATURE));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(
            request.messages[0].content,
            StudyAgent::build_prompt("notes", "What?", Marks::Two)
        );
    }

    #[tokio::test]
    async fn test_ask_propagates_remote_failure_without_retry() {
        let adapter = Arc::new(RecordingAdapter::failing("connection refused"));
        let agent = StudyAgent::new(adapter.clone(), "m", "groq");

        let err = agent.ask("notes", "What?", Marks::Two).await.unwrap_err();
        assert!(matches!(err, AppError::LLMApi(_)));
        assert_eq!(adapter.calls(), 1);
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let config = LLMConfig {
            provider: "groq".to_string(),
            api_key: " ".to_string(),
            model: "m".to_string(),
            api_base: None,
        };
        assert!(matches!(StudyAgent::from_config(&config), Err(AppError::Config(_))));
    }
}
