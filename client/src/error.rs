use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    DocumentUrl,
    Questions,
}

impl InputField {
    pub fn prompt(&self) -> &'static str {
        match self {
            InputField::DocumentUrl => "Please enter a document URL.",
            InputField::Questions => "Please enter at least one question.",
        }
    }
}

/// Every way a single form submission can end without answers.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("{}", .0.prompt())]
    MissingInput(InputField),

    #[error("HACKATHON_API_KEY not set in frontend/.env")]
    MissingCredential,

    #[error("Backend error: {status} {body}")]
    Backend { status: u16, body: String },

    #[error("Request error: {0}")]
    Transport(String),
}

impl FormError {
    /// True when the submission was rejected before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, FormError::MissingInput(_) | FormError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_form_prompts() {
        assert_eq!(
            FormError::MissingInput(InputField::DocumentUrl).to_string(),
            "Please enter a document URL."
        );
        assert_eq!(
            FormError::MissingInput(InputField::Questions).to_string(),
            "Please enter at least one question."
        );
        assert_eq!(
            FormError::MissingCredential.to_string(),
            "HACKATHON_API_KEY not set in frontend/.env"
        );
    }

    #[test]
    fn backend_error_carries_status_and_body() {
        let err = FormError::Backend {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "Backend error: 503 overloaded");
        assert!(!err.is_validation());
    }

    #[test]
    fn transport_error_is_prefixed() {
        let err = FormError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Request error: connection refused");
        assert!(FormError::MissingCredential.is_validation());
    }
}
