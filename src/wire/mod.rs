use serde::{Deserialize, Serialize};

use crate::form::UploadedImage;
use crate::prompt::PromptParts;

/// ========================================
/// Gemini generateContent wire protocol
/// ========================================

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One content part: either an inline image blob or a text fragment.
/// Serialized untagged so the JSON matches the REST shape
/// `{"inlineData": {...}}` / `{"text": "..."}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

impl From<&UploadedImage> for Part {
    fn from(img: &UploadedImage) -> Self {
        Part::InlineData {
            inline_data: Blob {
                mime_type: img.mime_type.clone(),
                data: img.data.clone(),
            },
        }
    }
}

impl GenerateContentRequest {
    /// Build a request from assembled prompt parts: image attachments first,
    /// then exactly one text part.
    pub fn from_parts(parts: &PromptParts) -> Self {
        let mut out: Vec<Part> = parts.images.iter().map(Part::from).collect();
        out.push(Part::Text {
            text: parts.text.clone(),
        });
        GenerateContentRequest {
            contents: vec![Content { parts: out }],
        }
    }

    /// The image-generation path accepts a single text part and nothing else.
    pub fn text_only(prompt: &str) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "inlineData", default)]
    pub inline_data: Option<Blob>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate; None when nothing came back.
    pub fn text(&self) -> Option<String> {
        let first = self.candidates.first()?;
        let mut out = String::new();
        for part in &first.content.parts {
            if let Some(t) = &part.text {
                out.push_str(t);
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }

    /// First inline image part of the first candidate, if any.
    pub fn first_inline_image(&self) -> Option<Blob> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_images_before_text() {
        let parts = PromptParts {
            images: vec![UploadedImage {
                mime_type: "image/png".into(),
                data: "QUJD".into(),
            }],
            text: "schrijf iets".into(),
        };
        let req = GenerateContentRequest::from_parts(&parts);
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({
                "contents": [{
                    "parts": [
                        { "inlineData": { "mimeType": "image/png", "data": "QUJD" } },
                        { "text": "schrijf iets" }
                    ]
                }]
            })
        );
    }

    #[test]
    fn text_only_request_has_exactly_one_part() {
        let req = GenerateContentRequest::text_only("poster prompt");
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["contents"][0]["parts"].as_array().unwrap().len(), 1);
        assert_eq!(v["contents"][0]["parts"][0]["text"], "poster prompt");
    }

    #[test]
    fn response_text_concatenates_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Hallo " },
                { "text": "wereld" }
            ]}}]
        }))
        .unwrap();
        assert_eq!(resp.text().as_deref(), Some("Hallo wereld"));
        assert!(resp.first_inline_image().is_none());
    }

    #[test]
    fn response_without_candidates_yields_nothing() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.text().is_none());
        assert!(resp.first_inline_image().is_none());
    }

    #[test]
    fn first_inline_image_is_extracted() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "hier is je poster" },
                { "inlineData": { "mimeType": "image/png", "data": "aW1n" } },
                { "inlineData": { "mimeType": "image/webp", "data": "dHdv" } }
            ]}}]
        }))
        .unwrap();
        let blob = resp.first_inline_image().unwrap();
        assert_eq!(blob.mime_type, "image/png");
        assert_eq!(blob.data, "aW1n");
    }
}
