//! Prompt construction for the two upstream tasks.

use crate::backend::{LlmRequest, Message};

/// Characters of (already collapsed) text sent for identification.
pub const IDENTIFY_PROMPT_CHARS: usize = 2_000;

const IDENTIFY_TEMPERATURE: f32 = 0.1;

const UNKNOWN: &str = "Unknown";

pub fn analysis_prompt(title: Option<&str>, company: Option<&str>, text: &str) -> String {
    format!(
        r#"You are a privacy policy expert analyst. Carefully read and analyze the SPECIFIC privacy policy provided below. Your analysis must be UNIQUE and SPECIFIC to this exact policy text. Do NOT give generic or template answers.

Policy Title: {title}
Company: {company}

--- BEGIN POLICY TEXT ---
{text}
--- END POLICY TEXT ---

Analyze the ACTUAL content of this specific policy. Identify the SPECIFIC data types mentioned, the SPECIFIC third parties named, and the SPECIFIC risks present in THIS policy.

You MUST return ONLY valid JSON (no markdown, no code fences, no extra text). Use this exact structure:

{{
  "summary": "A clear 2-3 sentence plain-language summary of what THIS SPECIFIC policy actually says. Reference specific details from the policy.",
  "data_collected": ["Each item should be a SPECIFIC type of data mentioned in THIS policy"],
  "data_shared_with": ["Each item should be a SPECIFIC third party or category mentioned in THIS policy"],
  "retention_policy": "Describe the SPECIFIC retention periods and conditions stated in THIS policy",
  "hidden_risks": ["Each risk should reference SPECIFIC clauses or language from THIS policy that are concerning"],
  "risk_score": 0,
  "risk_level": "Low"
}}

Scoring rules:
- 0-30 = "Low" risk (minimal data collection, clear policies, strong user rights)
- 31-60 = "Medium" risk (moderate data collection, some sharing, average transparency)
- 61-100 = "High" risk (extensive data collection, broad sharing, poor transparency, hidden practices)

Set risk_score as an integer and risk_level as the matching label. Be accurate and thorough."#,
        title = title.unwrap_or(UNKNOWN),
        company = company.unwrap_or(UNKNOWN),
    )
}

pub fn identify_prompt(text: &str) -> String {
    let head: String = text.chars().take(IDENTIFY_PROMPT_CHARS).collect();
    format!(
        r#"Identify the "Company Name" and the "Type of Policy" (e.g., Privacy Policy, Terms of Service) from the text below.

Text: "{head}..."

Return ONLY valid JSON:
{{
  "company": "Exact Company Name",
  "title": "Exact Policy Title"
}}"#
    )
}

/// Sampling parameters for the analysis task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self { temperature: 0.4, top_p: 0.9, max_output_tokens: 3_000 }
    }
}

pub fn analysis_request(
    title: Option<&str>,
    company: Option<&str>,
    text: &str,
    settings: &GenerationSettings,
) -> LlmRequest {
    LlmRequest {
        messages: vec![Message::user(analysis_prompt(title, company, text))],
        temperature: Some(settings.temperature),
        top_p: Some(settings.top_p),
        max_tokens: Some(settings.max_output_tokens),
        json_response: true,
        ..Default::default()
    }
}

pub fn identify_request(text: &str) -> LlmRequest {
    LlmRequest {
        messages: vec![Message::user(identify_prompt(text))],
        temperature: Some(IDENTIFY_TEMPERATURE),
        json_response: true,
        ..Default::default()
    }
}
