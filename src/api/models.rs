use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Body of `POST /generate`. Fields are optional on the wire so that a missing
/// field is reported as [`ApiError::MissingFields`].
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    pub problem: Option<String>,
    pub language: Option<String>,
    pub mode: Option<String>,
}

/// A validated [`GenerateRequest`].
#[derive(Debug)]
pub struct Generation<'a> {
    pub problem: &'a str,
    pub language: &'a str,
    pub mode: &'a str,
}

impl GenerateRequest {
    pub fn validate(&self) -> Result<Generation<'_>, ApiError> {
        match (
            non_empty(&self.problem),
            non_empty(&self.language),
            non_empty(&self.mode),
        ) {
            (Some(problem), Some(language), Some(mode)) => Ok(Generation {
                problem,
                language,
                mode,
            }),
            _ => Err(ApiError::MissingFields),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub solution: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(problem: Option<&str>, language: Option<&str>, mode: Option<&str>) -> GenerateRequest {
        GenerateRequest {
            problem: problem.map(str::to_string),
            language: language.map(str::to_string),
            mode: mode.map(str::to_string),
        }
    }

    #[test]
    fn complete_request_validates() {
        let req = request(Some("two sum"), Some("Python"), Some("exam"));
        let generation = req.validate().unwrap();
        assert_eq!(generation.problem, "two sum");
        assert_eq!(generation.language, "Python");
        assert_eq!(generation.mode, "exam");
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        for req in [
            request(None, Some("Python"), Some("brief")),
            request(Some("two sum"), None, Some("brief")),
            request(Some("two sum"), Some("Python"), None),
            request(Some(""), Some("Python"), Some("brief")),
            GenerateRequest::default(),
        ] {
            assert!(matches!(req.validate(), Err(ApiError::MissingFields)));
        }
    }
}
