use serde::{Deserialize, Serialize};

/// Canonical English name of a biblical book (e.g. "Genesis", "1 Samuel")
///
/// Produced by the registry when normalizing free-form input; holding one of
/// the 66 canonical spellings is what makes the external-code lookup total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookName(pub String);

impl BookName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which testament a canonical book belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Testament {
    Old,
    New,
}

impl std::fmt::Display for Testament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Old => write!(f, "Old Testament"),
            Self::New => write!(f, "New Testament"),
        }
    }
}

/// Language used to pick fallback translations and to filter the
/// available-bibles listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    German,
}

impl Language {
    /// ISO 639-3 language id as used by API.Bible
    #[must_use]
    pub fn iso_id(&self) -> &'static str {
        match self {
            Self::English => "eng",
            Self::German => "deu",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::German => write!(f, "German"),
        }
    }
}
