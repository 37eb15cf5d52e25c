//! Wire types shared by the proxy endpoint and the form controller

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Route of the summarization proxy
pub const GENERATE_SUMMARY_PATH: &str = "/api/generate-summary";

/// Generic error title returned with every failed summary request
pub const GENERATE_ERROR_MESSAGE: &str = "Failed to generate response";

/// Output layout requested for the summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Paragraph,
    Bullets,
    Numbered,
    Outline,
}

impl SummaryFormat {
    pub const ALL: [SummaryFormat; 4] = [
        SummaryFormat::Paragraph,
        SummaryFormat::Bullets,
        SummaryFormat::Numbered,
        SummaryFormat::Outline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Bullets => "bullets",
            Self::Numbered => "numbered",
            Self::Outline => "outline",
        }
    }
}

/// Writing register requested for the summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTone {
    Casual,
    #[default]
    Professional,
    Academic,
}

impl SummaryTone {
    pub const ALL: [SummaryTone; 3] = [
        SummaryTone::Casual,
        SummaryTone::Professional,
        SummaryTone::Academic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Professional => "professional",
            Self::Academic => "academic",
        }
    }
}

/// Target summary size in words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    #[default]
    Concise,
    Balanced,
    Detailed,
}

impl SummaryLength {
    pub const ALL: [SummaryLength; 3] = [
        SummaryLength::Concise,
        SummaryLength::Balanced,
        SummaryLength::Detailed,
    ];

    /// Approximate word count asked of the model
    pub fn words(&self) -> u32 {
        match self {
            Self::Concise => 25,
            Self::Balanced => 50,
            Self::Detailed => 100,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concise => "concise",
            Self::Balanced => "balanced",
            Self::Detailed => "detailed",
        }
    }
}

macro_rules! impl_option_text {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| format!("unknown {} '{}'", $what, s))
            }
        }
    };
}

impl_option_text!(SummaryFormat, "format");
impl_option_text!(SummaryTone, "tone");
impl_option_text!(SummaryLength, "length");

/// `POST /api/generate-summary` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummaryRequest {
    /// Text forwarded to the model as the user message
    pub user_input: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<SummaryFormat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<SummaryTone>,
}

impl GenerateSummaryRequest {
    /// Request carrying the target length folded into the user message
    pub fn new(
        text: &str,
        length: SummaryLength,
        format: SummaryFormat,
        tone: SummaryTone,
    ) -> Self {
        Self {
            user_input: length_instruction(text, length),
            format: Some(format),
            tone: Some(tone),
        }
    }

    pub fn format(&self) -> SummaryFormat {
        self.format.unwrap_or_default()
    }

    pub fn tone(&self) -> SummaryTone {
        self.tone.unwrap_or_default()
    }
}

/// Success body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummaryResponse {
    pub ai_response: String,
}

/// Failure body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

/// User message asking for roughly `length` words
pub fn length_instruction(text: &str, length: SummaryLength) -> String {
    format!(
        "Please summarize the following text in approximately {} words:\n\n{}",
        length.words(),
        text
    )
}

/// Number of whitespace separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_names() {
        let req: GenerateSummaryRequest = serde_json::from_str(
            r#"{"userInput":"hello","format":"bullets","tone":"casual"}"#,
        )
        .unwrap();
        assert_eq!(req.user_input, "hello");
        assert_eq!(req.format(), SummaryFormat::Bullets);
        assert_eq!(req.tone(), SummaryTone::Casual);
    }

    #[test]
    fn test_request_defaults() {
        let req: GenerateSummaryRequest = serde_json::from_str(r#"{"userInput":"hello"}"#).unwrap();
        assert_eq!(req.format(), SummaryFormat::Paragraph);
        assert_eq!(req.tone(), SummaryTone::Professional);

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "userInput": "hello" }));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let res = serde_json::from_str::<GenerateSummaryRequest>(
            r#"{"userInput":"hello","format":"haiku"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_response_wire_names() {
        let json = serde_json::to_value(GenerateSummaryResponse {
            ai_response: "short".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "aiResponse": "short" }));
    }

    #[test]
    fn test_length_instruction() {
        let req = GenerateSummaryRequest::new(
            "Some text",
            SummaryLength::Balanced,
            SummaryFormat::Outline,
            SummaryTone::Academic,
        );
        assert_eq!(
            req.user_input,
            "Please summarize the following text in approximately 50 words:\n\nSome text"
        );
        assert_eq!(SummaryLength::Concise.words(), 25);
        assert_eq!(SummaryLength::Detailed.words(), 100);
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("Bullets".parse::<SummaryFormat>(), Ok(SummaryFormat::Bullets));
        assert_eq!("academic".parse::<SummaryTone>(), Ok(SummaryTone::Academic));
        assert_eq!("detailed".parse::<SummaryLength>(), Ok(SummaryLength::Detailed));
        assert!("loud".parse::<SummaryTone>().is_err());
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  one two\n\tthree  "), 3);
    }
}
