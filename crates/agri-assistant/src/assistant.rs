//! Assistant front door and conversation transcript.

use crate::error::AssistantError;
use crate::offline::OfflineResponder;
use crate::rules::OnlineResponder;
use crate::types::*;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// First message of every conversation.
pub const WELCOME: &str = "Hello! I am your agricultural assistant. You can ask me any question about farming, crops, weather, or market prices.";

/// Canned questions shown under the chat.
pub const SUGGESTED_QUERIES: &[SuggestedQuery] = &[
    SuggestedQuery { text: "How to control blast in rice?", icon: "leaf" },
    SuggestedQuery { text: "Best time to sow wheat?", icon: "cloud-rain" },
    SuggestedQuery { text: "How to get crop insurance?", icon: "lightbulb" },
    SuggestedQuery { text: "What is the market price for paddy?", icon: "bar-chart" },
    SuggestedQuery { text: "Fertilizer dose for wheat?", icon: "flask" },
    SuggestedQuery { text: "How to improve soil health?", icon: "sprout" },
    SuggestedQuery { text: "How to store grains safely?", icon: "warehouse" },
];

/// Answers farming questions from the online or offline answer set.
#[derive(Clone)]
pub struct Assistant {
    responder: Arc<dyn Responder>,
    connectivity: Connectivity,
    reply_delay: Duration,
}

impl Assistant {
    pub fn new(connectivity: Connectivity) -> Self {
        let responder: Arc<dyn Responder> = match connectivity {
            Connectivity::Online => Arc::new(OnlineResponder::new()),
            Connectivity::Offline => Arc::new(OfflineResponder::new()),
        };

        info!("Assistant ready (mode={})", responder.name());

        Self {
            responder,
            connectivity,
            reply_delay: Duration::ZERO,
        }
    }

    /// Wait this long before each reply.
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Answer a message. Blank messages are rejected.
    #[instrument(skip(self))]
    pub async fn reply(&self, message: &str) -> Result<String, AssistantError> {
        let query = message.trim().to_lowercase();
        if query.is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        let answer = self.responder.respond(&query).await;
        debug!(responder = self.responder.name(), "Answered query");
        Ok(answer)
    }

    pub fn suggested_queries(&self) -> &'static [SuggestedQuery] {
        SUGGESTED_QUERIES
    }
}

/// A chat session with the assistant.
pub struct Conversation {
    assistant: Assistant,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Start a conversation containing only the welcome message.
    pub fn new(assistant: Assistant) -> Self {
        Self {
            assistant,
            messages: vec![ChatMessage::bot("welcome", WELCOME)],
        }
    }

    /// Send a user message and append the bot's reply.
    ///
    /// Returns the reply. Blank input leaves the transcript unchanged.
    pub async fn send(&mut self, text: &str) -> Result<&ChatMessage, AssistantError> {
        if text.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        let now = Utc::now().timestamp_millis();
        self.messages.push(ChatMessage::user(now.to_string(), text));

        let answer = self.assistant.reply(text).await?;
        self.messages
            .push(ChatMessage::bot((now + 1).to_string(), answer));

        Ok(&self.messages[self.messages.len() - 1])
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
