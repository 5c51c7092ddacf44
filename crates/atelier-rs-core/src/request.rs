//! Request and response models for outfit generation.

use crate::error::StylistError;
use serde::{Deserialize, Serialize};

/// An inbound outfit request. Lives only for the duration of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitRequest {
    pub event: String,
    pub weather: String,
    pub mood: String,
    /// Optional free-text context appended to the user instruction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Optional per-caller user id; defaults come from config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl OutfitRequest {
    /// Trim all fields and reject empty required ones.
    pub fn validated(mut self) -> Result<Self, StylistError> {
        self.event = self.event.trim().to_string();
        self.weather = self.weather.trim().to_string();
        self.mood = self.mood.trim().to_string();
        self.context = self
            .context
            .map(|context| context.trim().to_string())
            .filter(|context| !context.is_empty());
        self.user_id = self
            .user_id
            .map(|user_id| user_id.trim().to_string())
            .filter(|user_id| !user_id.is_empty());

        for (name, value) in [
            ("event", &self.event),
            ("weather", &self.weather),
            ("mood", &self.mood),
        ] {
            if value.is_empty() {
                return Err(StylistError::InvalidRequest(format!(
                    "{name} must not be empty"
                )));
            }
        }
        Ok(self)
    }

    /// One-line scenario description, used as the memory search query.
    pub fn scenario_line(&self) -> String {
        format!(
            "Event: {}, Weather: {}, Mood: {}",
            self.event, self.weather, self.mood
        )
    }
}

/// The generated recommendation returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutfitResult {
    pub outfit: String,
}
