//! Templated replies for the chat endpoint
//!
//! There is no answer synthesis anywhere in this crate. The responder
//! builds fixed strings that reference the user's message, the selected
//! page, and (when a document is attached) a snippet of that page's
//! extracted text.

use crate::config::ChatConfig;
use crate::types::ChatMessage;

/// Builds the canned assistant replies
pub struct TemplateResponder {
    assistant_name: String,
    snippet_chars: usize,
}

impl TemplateResponder {
    /// Create a responder from the chat configuration
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            assistant_name: config.assistant_name.clone(),
            snippet_chars: config.snippet_chars,
        }
    }

    /// Build the templated reply for a chat message
    pub fn respond(
        &self,
        message: &str,
        page_number: u32,
        history: &[ChatMessage],
        page_text: Option<&str>,
    ) -> String {
        let mut reply = format!(
            "{} received your question about page {}: \"{}\".",
            self.assistant_name, page_number, message
        );

        match history.len() {
            0 => {}
            1 => reply.push_str(" This conversation has 1 earlier message."),
            n => reply.push_str(&format!(" This conversation has {} earlier messages.", n)),
        }

        match page_text {
            Some(text) if !text.trim().is_empty() => {
                reply.push_str(&format!(
                    " Page {} begins: \"{}\"",
                    page_number,
                    truncate_snippet(text.trim(), self.snippet_chars)
                ));
            }
            Some(_) => {
                reply.push_str(&format!(
                    " Page {} has no extractable text.",
                    page_number
                ));
            }
            None => {}
        }

        reply.push_str(" Answer generation is not connected yet.");
        reply
    }
}

/// Truncate to at most `max_chars` characters, appending "..." when cut
fn truncate_snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
