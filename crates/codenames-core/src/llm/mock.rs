//! Offline provider with canned, keyword-selected replies.
//!
//! Stands in for a live model when no network or API key is available.
//! Replies are chosen from the last user message only, so the same prompt
//! always yields the same answer.

use codenames_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use super::provider::LlmProvider;

/// Reply to prompts asking for a clue.
pub const CLUE_REPLY: &str = "('pebble',2)";

/// Reply to prompts asking for a guess.
pub const GUESS_REPLY: &str = "DOG CAT";

/// Reply to yes/no prompts.
pub const CONTINUE_REPLY: &str = "no";

/// Reply to anything else.
pub const DEFAULT_REPLY: &str = "SAFE";

/// Deterministic provider used when the configured provider type is `mock`.
#[derive(Debug, Default, Clone)]
pub struct OfflineProvider;

impl OfflineProvider {
    pub fn new() -> Self {
        Self
    }

    /// Pick the canned reply for a prompt.
    ///
    /// Order matters: guesser prompts mention the clue too, so the
    /// yes/no and "return only" checks run first.
    pub fn reply_for(prompt: &str) -> &'static str {
        let text = prompt.to_lowercase();
        if text.contains("'yes' or 'no'") {
            CONTINUE_REPLY
        } else if text.contains("return only") {
            GUESS_REPLY
        } else if text.contains("clue") {
            CLUE_REPLY
        } else if text.contains("guess") {
            GUESS_REPLY
        } else {
            DEFAULT_REPLY
        }
    }
}

impl LlmProvider for OfflineProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let prompt = request.last_user_message().unwrap_or_default();
        Ok(CompletionResponse {
            content: Self::reply_for(prompt).to_string(),
            model: "offline".to_string(),
            usage: Usage::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codenames_types::llm::Message;

    #[test]
    fn test_clue_prompt_gets_clue_reply() {
        let reply = OfflineProvider::reply_for(
            "Provide a single word clue and number for the guesser in the following format ('pebble',2).",
        );
        assert_eq!(reply, CLUE_REPLY);
    }

    #[test]
    fn test_guesser_prompt_gets_word_list() {
        let reply = OfflineProvider::reply_for(
            "The Codemaster's clue is: (ANIMAL, 2). Return ONLY the word, no extra text.",
        );
        assert_eq!(reply, GUESS_REPLY);
    }

    #[test]
    fn test_yes_no_prompt_declines() {
        let reply = OfflineProvider::reply_for(
            "Would you like to keep guessing? Answer only 'yes' or 'no'.",
        );
        assert_eq!(reply, CONTINUE_REPLY);
    }

    #[test]
    fn test_unrelated_prompt_gets_default() {
        assert_eq!(OfflineProvider::reply_for("hello there"), DEFAULT_REPLY);
        assert_eq!(OfflineProvider::reply_for("make a guess"), GUESS_REPLY);
    }

    #[tokio::test]
    async fn test_complete_uses_last_user_message() {
        let provider = OfflineProvider::new();
        let request = CompletionRequest {
            model: String::new(),
            messages: vec![
                Message::system("Only return clues when asked."),
                Message::user("Give me a clue"),
            ],
            max_tokens: 16,
            temperature: None,
        };
        let response = provider.complete(&request).await.unwrap();
        assert_eq!(response.content, CLUE_REPLY);
        assert_eq!(provider.name(), "mock");
    }
}
