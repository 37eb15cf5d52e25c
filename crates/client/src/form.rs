//! Summary form controller
//!
//! Holds the form inputs and drives one submission at a time through
//! `Idle -> Submitting -> (Success | Failure) -> Idle`.

use std::time::{Duration, Instant};
use textsum_common::api::word_count;
use textsum_common::{GenerateSummaryRequest, SummaryFormat, SummaryLength, SummaryTone};
use tracing::{error, info};

use crate::transport::SummaryTransport;

/// Text shown in place of a summary when a submission fails
pub const FALLBACK_SUMMARY: &str = "Failed to generate summary. Please try again.";

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Destructive,
}

/// Short message surfaced to the user after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn info(title: &str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            description: description.into(),
        }
    }

    fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Destructive,
            title: title.to_string(),
            description: description.into(),
        }
    }
}

/// Whether a request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Result of the last completed submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success { elapsed: Duration },
    Failure,
}

pub struct FormController<T> {
    transport: T,
    text: String,
    length: SummaryLength,
    format: SummaryFormat,
    tone: SummaryTone,
    summary: String,
    phase: Phase,
    last_outcome: Option<Outcome>,
}

impl<T: SummaryTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            text: String::new(),
            length: SummaryLength::default(),
            format: SummaryFormat::default(),
            tone: SummaryTone::default(),
            summary: String::new(),
            phase: Phase::Idle,
            last_outcome: None,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_length(&mut self, length: SummaryLength) {
        self.length = length;
    }

    pub fn set_format(&mut self, format: SummaryFormat) {
        self.format = format;
    }

    pub fn set_tone(&mut self, tone: SummaryTone) {
        self.tone = tone;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn input_word_count(&self) -> usize {
        word_count(&self.text)
    }

    pub fn summary_word_count(&self) -> usize {
        word_count(&self.summary)
    }

    /// Request body for the current inputs
    pub fn build_request(&self) -> GenerateSummaryRequest {
        GenerateSummaryRequest::new(&self.text, self.length, self.format, self.tone)
    }

    /// Submit the current text
    ///
    /// Blank text yields a warning without touching the network. Failures
    /// replace the summary with [`FALLBACK_SUMMARY`]; the error detail is
    /// only logged.
    pub async fn submit(&mut self) -> Notice {
        if self.text.trim().is_empty() {
            return Notice::destructive("No text provided", "Please enter some text to summarize.");
        }

        let request = self.build_request();
        let _submitting = SubmittingGuard::enter(&mut self.phase);
        self.summary.clear();
        let start = Instant::now();

        match self.transport.generate(&request).await {
            Ok(response) => {
                let elapsed = start.elapsed();
                self.summary = response.ai_response;
                self.last_outcome = Some(Outcome::Success { elapsed });
                info!("Summary generated in {:.2}s", elapsed.as_secs_f64());
                Notice::info(
                    "Summary Generated",
                    format!("Completed in {:.2} seconds", elapsed.as_secs_f64()),
                )
            }
            Err(e) => {
                error!("Error generating summary: {}", e);
                self.summary = FALLBACK_SUMMARY.to_string();
                self.last_outcome = Some(Outcome::Failure);
                Notice::destructive("Error", FALLBACK_SUMMARY)
            }
        }
    }
}

/// Holds the form in `Submitting` and puts it back to `Idle` when dropped,
/// including when the submit future is cancelled mid-request
struct SubmittingGuard<'a>(&'a mut Phase);

impl<'a> SubmittingGuard<'a> {
    fn enter(phase: &'a mut Phase) -> Self {
        *phase = Phase::Submitting;
        Self(phase)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = Phase::Idle;
    }
}
