use crate::agents::StudyAgent;
use crate::config::Config;
use crate::documents::DocumentFormat;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub agent: Arc<StudyAgent>,
}

/// Marks weight of a question; hints the expected answer length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Marks {
    Two,
    Five,
    Ten,
    Fifteen,
}

impl Marks {
    pub const ALL: [Marks; 4] = [Marks::Two, Marks::Five, Marks::Ten, Marks::Fifteen];

    pub fn value(self) -> u8 {
        match self {
            Marks::Two => 2,
            Marks::Five => 5,
            Marks::Ten => 10,
            Marks::Fifteen => 15,
        }
    }
}

impl TryFrom<u8> for Marks {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Marks::Two),
            5 => Ok(Marks::Five),
            10 => Ok(Marks::Ten),
            15 => Ok(Marks::Fifteen),
            other => Err(format!("marks must be one of 2, 5, 10, 15 (got {})", other)),
        }
    }
}

impl From<Marks> for u8 {
    fn from(marks: Marks) -> Self {
        marks.value()
    }
}

impl fmt::Display for Marks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Result of one "generate answer" interaction, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum AskOutcome {
    Answer(String),
    Warning(String),
    Error(String),
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AskRequest {
    pub text: String,
    pub question: String,
    pub marks: Marks,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub format: DocumentFormat,
    pub text: String,
    pub preview: String,
    pub characters: usize,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ExportRequest {
    pub text: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub provider: String,
    pub model: String,
}
