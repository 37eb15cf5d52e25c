//! textsum client
//!
//! Form controller and HTTP transport for the summary proxy

mod form;
mod transport;

pub use form::{FormController, Notice, NoticeKind, Outcome, Phase, FALLBACK_SUMMARY};
pub use transport::{HttpTransport, SummaryTransport};
