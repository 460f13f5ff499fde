use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::ModelError;

use super::{GenerateContentResponse, GenerativeModel};

/// A scripted model for tests. Returns queued replies in order and records
/// every prompt it was asked to complete.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<GenerateContentResponse, ModelError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<GenerateContentResponse, ModelError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::default(),
        }
    }

    /// A model that answers once with `text`.
    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(GenerateContentResponse::from_text(text))])
    }

    /// A model that answers once with no candidates.
    pub fn empty() -> Self {
        Self::new(vec![Ok(GenerateContentResponse::default())])
    }

    /// A model that fails once with `message`.
    pub fn failing(message: &str) -> Self {
        Self::new(vec![Err(ModelError::Rejected(message.to_string()))])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse, ModelError> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap_or_else(PoisonError::into_inner);
            prompts.push(prompt.to_string());
            prompts.len()
        };

        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                Err(ModelError::Rejected(format!(
                    "ScriptedModel: no more replies (called {call} times)"
                )))
            })
    }
}
