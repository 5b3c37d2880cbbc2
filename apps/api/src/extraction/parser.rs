//! Resume structuring — pluggable, trait-based extractor that turns raw
//! resume text into `ResumeData`.
//!
//! Default: `LlmResumeExtractor` (one Chat Completions call). The trait seam
//! exists so tests and future backends can swap in without touching handlers;
//! `AppState` holds an `Arc<dyn ResumeExtractor>`.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::prompts::EXTRACTION_PROMPT_TEMPLATE;
use crate::llm_client::LlmClient;
use crate::models::resume::ResumeData;

/// Minimum amount of text worth sending to the LLM at all.
const MIN_RESUME_TEXT_CHARS: usize = 20;

/// The resume structuring seam. Implementations must return normalized data.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> Result<ResumeData, AppError>;
}

/// LLM-backed extractor — the production default.
pub struct LlmResumeExtractor {
    llm: LlmClient,
}

impl LlmResumeExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeExtractor for LlmResumeExtractor {
    async fn extract(&self, resume_text: &str) -> Result<ResumeData, AppError> {
        let resume_text = resume_text.trim();
        if resume_text.len() < MIN_RESUME_TEXT_CHARS {
            return Err(AppError::Validation(
                "Resume text is too short to analyze".to_string(),
            ));
        }

        info!("Structuring resume text ({} chars)", resume_text.len());

        let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
        let mut data: ResumeData = self
            .llm
            .call_json(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Resume structuring failed: {e}")))?;

        data.normalize();
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-output extractor used by handler tests; no network involved.
    pub struct StaticExtractor(pub ResumeData);

    #[async_trait]
    impl ResumeExtractor for StaticExtractor {
        async fn extract(&self, _resume_text: &str) -> Result<ResumeData, AppError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let expected = ResumeData {
            summary: "fixture".to_string(),
            ..Default::default()
        };
        let extractor: std::sync::Arc<dyn ResumeExtractor> =
            std::sync::Arc::new(StaticExtractor(expected.clone()));
        let got = extractor.extract("some resume text").await.unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_prompt_interpolation_replaces_placeholder() {
        let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{resume_text}", "JANE DOE RESUME");
        assert!(prompt.contains("JANE DOE RESUME"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
