use crate::config::FrontendConfig;
use crate::error::{FormError, InputField};
use crate::hackrx_service::HackRxService;
use crate::models::*;
use crate::question_parser::{is_blank, parse_questions};
use anyhow::Result;
use uuid::Uuid;

pub struct FormController {
    service: HackRxService,
    api_key: Option<String>,
}

impl FormController {
    pub fn new(config: &FrontendConfig) -> Result<Self> {
        let service = HackRxService::new(config)?;
        log::info!("Form controller targeting {}", service.run_url());

        Ok(Self {
            service,
            api_key: config.api_key.clone(),
        })
    }

    /// Checks the form in order (URL, questions, credential) and stops at the
    /// first failure. Returns the credential and payload to send.
    pub fn prepare(&self, input: &FormInput) -> Result<(&str, HackRxRequest), FormError> {
        if is_blank(&input.url) {
            return Err(FormError::MissingInput(InputField::DocumentUrl));
        }
        let questions = parse_questions(&input.questions);
        if questions.is_empty() {
            return Err(FormError::MissingInput(InputField::Questions));
        }
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(FormError::MissingCredential)?;

        let request = HackRxRequest {
            documents: input.url.clone(),
            questions,
        };

        Ok((api_key, request))
    }

    pub async fn submit(&self, input: &FormInput) -> Result<Vec<QuestionAnswer>, FormError> {
        let (api_key, request) = self.prepare(input)?;

        let request_id = Uuid::new_v4();
        let start_time = std::time::Instant::now();
        log::info!(
            "[{}] Sending {} questions about {}",
            request_id,
            request.questions.len(),
            request.documents
        );

        let response = match self.service.run(api_key, &request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!(
                    "[{}] Submission failed after {} ms: {}",
                    request_id,
                    start_time.elapsed().as_millis(),
                    e
                );
                return Err(e);
            }
        };

        log::info!(
            "[{}] Received {} answers in {} ms",
            request_id,
            response.answers.len(),
            start_time.elapsed().as_millis()
        );

        Ok(pair_answers(request.questions, response.answers))
    }
}

/// Matches answers to questions by position, stopping at the shorter list.
pub fn pair_answers(questions: Vec<String>, answers: Vec<String>) -> Vec<QuestionAnswer> {
    if questions.len() != answers.len() {
        log::warn!(
            "Backend returned {} answers for {} questions; showing {} pairs",
            answers.len(),
            questions.len(),
            questions.len().min(answers.len())
        );
    }

    questions
        .into_iter()
        .zip(answers)
        .map(|(question, answer)| QuestionAnswer { question, answer })
        .collect()
}
