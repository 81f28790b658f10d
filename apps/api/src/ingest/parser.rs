//! Resume text -> `ResumeData` through the LLM.

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::ingest::prompts::RESUME_PARSE_SYSTEM;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_INVENTION_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::models::ResumeData;

pub fn resume_parse_system() -> String {
    format!("{JSON_ONLY_SYSTEM}\n\n{RESUME_PARSE_SYSTEM}\n\n{NO_INVENTION_INSTRUCTION}")
}

/// Sends the raw resume text as the user message and coerces the reply.
/// Missing keys and nulls in the reply become defaults.
pub async fn parse_resume(resume_text: &str, llm: &LlmClient) -> Result<ResumeData, AppError> {
    let raw: Value = llm
        .call_json(resume_text, &resume_parse_system())
        .await
        .map_err(|e| AppError::Llm(format!("Resume parsing failed: {e}")))?;

    let data = coerce_reply(raw)?;
    info!(
        experience = data.experience.len(),
        education = data.education.len(),
        skills = data.skills.len(),
        projects = data.projects.len(),
        "Resume parsed"
    );
    Ok(data)
}

fn coerce_reply(raw: Value) -> Result<ResumeData, AppError> {
    ResumeData::from_json(raw)
        .map_err(|e| AppError::Llm(format!("AI reply did not match the resume shape: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_system_prompt_demands_json_and_camel_case_dates() {
        let system = resume_parse_system();
        assert!(system.contains("valid JSON only"));
        assert!(system.contains("\"startDate\""));
        assert!(system.contains("empty arrays"));
    }

    #[test]
    fn test_sparse_reply_is_defaulted() {
        let data = coerce_reply(json!({
            "name": "Jane Doe",
            "experience": [{ "company": "Acme", "endDate": null }],
            "skills": null
        }))
        .unwrap();
        assert_eq!(data.name, "Jane Doe");
        assert_eq!(data.experience[0].company, "Acme");
        assert_eq!(data.experience[0].end_date, "");
        assert!(data.skills.is_empty());
        assert!(data.projects.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_an_llm_error() {
        let err = coerce_reply(json!({ "experience": "ten years" })).unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
