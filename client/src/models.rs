use serde::{Deserialize, Serialize};

/// Raw values posted by the form. Missing fields are treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub url: String,
    pub questions: String,
}

impl FormInput {
    pub fn new(url: impl Into<String>, questions: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            questions: questions.into(),
        }
    }
}

/// Body of `POST /hackrx/run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackRxRequest {
    pub documents: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HackRxResponse {
    #[serde(default)]
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_without_answers_defaults_to_empty() {
        let response: HackRxResponse = serde_json::from_str(r#"{"status": "done"}"#).unwrap();
        assert!(response.answers.is_empty());
    }

    #[test]
    fn response_with_null_answers_is_rejected() {
        assert!(serde_json::from_str::<HackRxResponse>(r#"{"answers": null}"#).is_err());
    }

    #[test]
    fn non_string_answers_are_rejected() {
        assert!(serde_json::from_str::<HackRxResponse>(r#"{"answers": ["x", 2]}"#).is_err());
    }

    #[test]
    fn request_serializes_with_backend_field_names() {
        let request = HackRxRequest {
            documents: "https://example.com/policy.pdf".to_string(),
            questions: vec!["A?".to_string(), "B?".to_string()],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "documents": "https://example.com/policy.pdf",
                "questions": ["A?", "B?"]
            })
        );
    }

    #[test]
    fn form_input_fills_missing_fields() {
        let input: FormInput = serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(input.url, "https://example.com");
        assert!(input.questions.is_empty());
    }
}
