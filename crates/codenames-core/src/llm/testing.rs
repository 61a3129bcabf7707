//! Scripted provider shared by the unit tests in this crate.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use codenames_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use super::box_provider::BoxLlmProvider;
use super::provider::LlmProvider;

/// Prompts the scripted provider has been sent, in order.
#[derive(Clone, Default)]
pub(crate) struct CallLog(Arc<Mutex<Vec<CompletionRequest>>>);

impl CallLog {
    pub(crate) fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    /// Last user message of every request.
    pub(crate) fn prompts(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.last_user_message().unwrap_or_default().to_string())
            .collect()
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.0.lock().unwrap().clone()
    }
}

/// Provider that plays back a fixed list of outcomes, then repeats `tail`.
pub(crate) struct ScriptedProvider {
    script: Mutex<VecDeque<Result<String, LlmError>>>,
    tail: Option<String>,
    log: CallLog,
}

impl ScriptedProvider {
    pub(crate) fn new(script: Vec<Result<String, LlmError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            tail: None,
            log: CallLog::default(),
        }
    }

    /// Replies with the given texts in order.
    pub(crate) fn replies(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    /// Replies with `reply` forever.
    pub(crate) fn always(reply: &str) -> Self {
        Self::new(Vec::new()).then_always(reply)
    }

    pub(crate) fn then_always(mut self, reply: &str) -> Self {
        self.tail = Some(reply.to_string());
        self
    }

    /// Box the provider and hand back its call log.
    pub(crate) fn boxed(self) -> (BoxLlmProvider, CallLog) {
        let log = self.log.clone();
        (BoxLlmProvider::new(self), log)
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.log.0.lock().unwrap().push(request.clone());
        let next = self.script.lock().unwrap().pop_front();
        let content = match next {
            Some(outcome) => outcome?,
            None => self.tail.clone().ok_or_else(|| LlmError::Provider {
                message: "script exhausted".to_string(),
            })?,
        };
        Ok(CompletionResponse {
            content,
            model: "scripted-model".to_string(),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 2,
            },
        })
    }
}
