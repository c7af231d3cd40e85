use serde::{Deserialize, Serialize};

use crate::domain::entities::ChunkMatch;

/// `question` is optional here so that a missing field reaches the handler
/// and is answered with 400 instead of a deserialization rejection.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AskRequestDto {
    #[serde(default)]
    pub question: Option<String>,
}

impl AskRequestDto {
    pub fn question(&self) -> Option<&str> {
        self.question
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponseDto {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkMatchDto {
    pub id: i32,
    pub content: String,
    pub source: Option<String>,
    pub similarity: f64,
}

impl From<ChunkMatch> for ChunkMatchDto {
    fn from(found: ChunkMatch) -> Self {
        Self {
            id: found.id,
            content: found.content,
            source: found.source,
            similarity: found.similarity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskDocsResponseDto {
    pub question: String,
    pub matches: Vec<ChunkMatchDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_question_is_none() {
        let missing: AskRequestDto = serde_json::from_str("{}").unwrap();
        let null: AskRequestDto = serde_json::from_str(r#"{"question": null}"#).unwrap();
        let blank: AskRequestDto = serde_json::from_str(r#"{"question": "   "}"#).unwrap();
        let given: AskRequestDto = serde_json::from_str(r#"{"question": " why? "}"#).unwrap();

        assert_eq!(missing.question(), None);
        assert_eq!(null.question(), None);
        assert_eq!(blank.question(), None);
        assert_eq!(given.question(), Some("why?"));
    }
}
