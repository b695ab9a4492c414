use serde::{Deserialize, Serialize};

/// Fixed instruction sent on every request.
pub const PROMPT: &str = r#"Gere uma única 'Palavra do Dharma' para reflexão diária. Esta palavra e sua explicação devem ser inspiradas em diversos textos e conceitos budistas, oferecendo uma variedade de perspectivas e ensinamentos. Forneça um título conciso (a Palavra do Dharma) e uma breve e perspicaz explicação. A resposta deve estar no formato JSON.

Exemplo de estrutura JSON:
{
  "title": "Equanimidade",
  "explanation": "Manter a calma e a serenidade diante das vicissitudes da vida, sem apego ou aversão. A equanimidade nos liberta das reações impulsivas e nos ajuda a cultivar a paz interior, independentemente das circunstâncias externas."
}

Por favor, certifique-se de que o título seja uma única palavra significativa ou uma frase curta, e que a explicação seja concisa, mas profunda, adequada para reflexão diária."#;

const TITLE_DESCRIPTION: &str = "A palavra ou frase curta do Dharma.";
const EXPLANATION_DESCRIPTION: &str = "Uma breve explicação da palavra do Dharma.";

/// Body of a `generateContent` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: ResponseSchema,
}

/// Object schema constraining the model output to `{title, explanation}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: SchemaProperties,
    pub required: [&'static str; 2],
    pub property_ordering: [&'static str; 2],
}

// Field order here is the property order on the wire
#[derive(Debug, Serialize)]
pub struct SchemaProperties {
    pub title: StringProperty,
    pub explanation: StringProperty,
}

#[derive(Debug, Serialize)]
pub struct StringProperty {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

impl StringProperty {
    const fn new(description: &'static str) -> Self {
        Self {
            kind: "STRING",
            description,
        }
    }
}

impl GenerateContentRequest {
    /// The one request this app ever sends
    pub fn dharma_word() -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(PROMPT.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: ResponseSchema {
                    kind: "OBJECT",
                    properties: SchemaProperties {
                        title: StringProperty::new(TITLE_DESCRIPTION),
                        explanation: StringProperty::new(EXPLANATION_DESCRIPTION),
                    },
                    required: ["title", "explanation"],
                    property_ordering: ["title", "explanation"],
                },
            },
        }
    }
}

/// The subset of a `generateContent` response this app reads.
#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if there are any.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::dharma_word()).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], PROMPT);
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );

        let schema = &body["generationConfig"]["responseSchema"];
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["title"]["type"], "STRING");
        assert_eq!(schema["properties"]["explanation"]["type"], "STRING");
        assert_eq!(schema["required"], json!(["title", "explanation"]));
        assert_eq!(schema["propertyOrdering"], json!(["title", "explanation"]));
    }

    #[test]
    fn test_schema_lists_title_before_explanation() {
        let raw = serde_json::to_string(&GenerateContentRequest::dharma_word()).unwrap();
        let title_at = raw.find("\"title\":{").unwrap();
        let explanation_at = raw.find("\"explanation\":{").unwrap();
        assert!(title_at < explanation_at);
    }

    #[test]
    fn test_prompt_carries_json_example() {
        assert!(PROMPT.contains("\"title\": \"Equanimidade\""));
        assert!(PROMPT.contains("formato JSON"));
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"title\":" }, { "text": "\"Metta\"}" }] }
            }]
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("{\"title\":\"Metta\"}"));
    }

    #[test]
    fn test_response_text_absent_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.text().is_none());

        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{}] })).unwrap();
        assert!(response.text().is_none());

        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "content": { "parts": [{}] } }] }))
                .unwrap();
        assert!(response.text().is_none());
    }
}
