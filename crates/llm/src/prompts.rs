//! Prompt templates for summarization

use textsum_common::{SummaryFormat, SummaryTone};

/// Fixed role of the assistant, followed by one format and one tone directive
pub const BASE_PROMPT: &str = r#"You are a text summarization assistant. Your task is to create clear, concise summaries while maintaining the key points and meaning of the original text. Follow these guidelines:

- Maintain the main ideas and crucial details
- Use clear, straightforward language
- Keep the summary length as requested by the user
- Ensure the summary is coherent and flows well
- Preserve the tone of the original text where appropriate"#;

/// Directive clause for the requested layout
pub fn format_directive(format: SummaryFormat) -> &'static str {
    match format {
        SummaryFormat::Paragraph => {
            "Format your response as a simple paragraph without any markdown or special formatting."
        }
        SummaryFormat::Bullets => {
            "Format your response as bullet points, one key point per line, each line starting with \"• \"."
        }
        SummaryFormat::Numbered => {
            "Format your response as a numbered list, one key point per item in order of importance."
        }
        SummaryFormat::Outline => {
            "Format your response as a hierarchical outline with main topics and indented subpoints."
        }
    }
}

/// Directive clause for the requested register
pub fn tone_directive(tone: SummaryTone) -> &'static str {
    match tone {
        SummaryTone::Casual => "Write in a casual, conversational voice using everyday words.",
        SummaryTone::Professional => "Write in a professional, neutral voice suitable for business readers.",
        SummaryTone::Academic => "Write in formal scholarly language with precise terminology.",
    }
}

/// System instruction for one summary request
pub fn system_prompt(format: SummaryFormat, tone: SummaryTone) -> String {
    format!(
        "{}\n\n{}\n{}",
        BASE_PROMPT,
        format_directive(format),
        tone_directive(tone)
    )
}
