//! Prompt assembly for the stylist persona.

use crate::request::OutfitRequest;

/// Fixed persona and output contract for the completion call. The three
/// section headings are load-bearing: clients render them directly.
const PERSONA: &str = "You are a helpful, creative, and professional fashion stylist. \
Your response must be a single, complete outfit recommendation tailored specifically \
to the user's request, formatted as exactly three markdown sections in this order \
and with no other content:\n\
\n\
**Style Vibe**: one line capturing the overall vibe.\n\
\n\
**Recommended Outfit**: a list with exactly these entries:\n\
- Top: ...\n\
- Bottom: ...\n\
- Shoes: ...\n\
- Accessories: ...\n\
\n\
**Stylist's Note**: a short personalized styling note.";

/// Ordered system + user instruction pair for one completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPrompt {
    pub system: String,
    pub user: String,
}

/// Merge retrieved context (if any) into the fixed persona template and
/// derive the user instruction. Pure; no I/O.
pub fn compose(context: &str, request: &OutfitRequest) -> ComposedPrompt {
    let system = if context.trim().is_empty() {
        PERSONA.to_string()
    } else {
        format!(
            "The user's previous related interactions and preferences:\n{context}\n\n{PERSONA}"
        )
    };

    let mut user = format!(
        "Generate a single, complete outfit for the following scenario: \
Event: {}, Weather: {}, Mood/Style: {}.",
        request.event, request.weather, request.mood
    );
    if let Some(extra) = &request.context {
        user.push_str(&format!(" Additional context: {extra}."));
    }

    ComposedPrompt { system, user }
}
