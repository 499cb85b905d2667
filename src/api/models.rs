use serde::{Deserialize, Serialize};

/// One Bible edition as listed by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BibleSummary {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub language: LanguageInfo,
}

/// Language block attached to each edition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// ISO 639-3 id (e.g. "eng", "deu")
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,
}

/// A fetched passage ready to show to a user
#[derive(Debug, Clone, Serialize)]
pub struct Passage {
    /// Plain passage text, markup stripped
    pub text: String,

    /// The reference as the API spells it (e.g. "Genesis 1:1")
    pub reference: String,

    /// Short label of the translation the text came from
    pub translation: String,
}

/// Envelope of the `/bibles` listing
#[derive(Debug, Deserialize)]
pub(crate) struct BiblesResponse {
    #[serde(default)]
    pub data: Vec<BibleSummary>,
}

/// Envelope of a single `/bibles/{id}` lookup
#[derive(Debug, Deserialize)]
pub(crate) struct BibleResponse {
    pub data: BibleSummary,
}

/// Envelope of a `/bibles/{id}/passages/{token}` response
#[derive(Debug, Deserialize)]
pub(crate) struct PassageResponse {
    #[serde(default)]
    pub data: PassageData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PassageData {
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub reference: String,
}
