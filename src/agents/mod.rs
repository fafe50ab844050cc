//! Agent System
//!
//! The answer pipeline behind the "Generate Answer" button:
//!
//! ```text
//! extracted text + question + marks
//!      │
//!      ▼
//! ┌─────────────┐
//! │ Blank guard │  → Warning, no remote call
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │    Study    │  → prompt + one chat completion
//! │    Agent    │
//! └─────────────┘
//!      │
//!      ▼
//!  Answer | Error
//! ```

pub mod study;

pub use study::{StudyAgent, ANSWER_TEMPERATURE};

use crate::models::{AskOutcome, Marks};
use tracing::{error, warn};

pub const BLANK_INPUT_WARNING: &str = "Please upload a valid file and enter a question.";

/// Answer a question about the extracted notes.
///
/// Never fails: blank input becomes a warning and remote failures become a
/// one-line error message.
pub async fn answer_question(
    agent: &StudyAgent,
    text: &str,
    question: &str,
    marks: Marks,
) -> AskOutcome {
    if question.trim().is_empty() || text.trim().is_empty() {
        warn!(
            question_blank = question.trim().is_empty(),
            text_blank = text.trim().is_empty(),
            "Skipping answer request"
        );
        return AskOutcome::Warning(BLANK_INPUT_WARNING.to_string());
    }

    match agent.ask(text, question, marks).await {
        Ok(answer) => AskOutcome::Answer(answer),
        Err(e) => {
            error!(error = %e, "Answer generation failed");
            let message = e.to_string().split_whitespace().collect::<Vec<_>>().join(" ");
            AskOutcome::Error(format!("Failed to generate answer: {}", message))
        }
    }
}
