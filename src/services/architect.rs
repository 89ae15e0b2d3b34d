//! Architecture generation service — prompt construction plus the call to
//! the generation backend, with fixed-fallback failure recovery.
//!
//! DESIGN
//! ======
//! A failed or empty generation never surfaces as an error. The call site
//! substitutes a fixed human-readable string instead; the parser then runs
//! normally on it, segments to nothing, and the client shows its
//! "no sections found" state. No retries, no cancellation, no timeout
//! beyond what the HTTP client enforces.

use std::sync::Arc;

use tracing::{info, warn};

use crate::llm::LlmChat;

/// Substituted for the generator's output on any failure. Contains no
/// architecture heading, so parsing it yields an empty option sequence.
pub const FALLBACK_RESULT: &str = "Something went wrong";

const SYSTEM_PROMPT: &str = "You are a helpful architecture assistant.";
const GENERATE_MAX_TOKENS: u32 = 4096;

pub(crate) fn build_prompt(system_description: &str, constraints: &str) -> String {
    format!(
        "You are a senior cloud architect. Given the system: \"{system_description}\" \
         and constraints: \"{constraints}\", generate 3 possible architecture designs.\n\n\
         Each design should include:\n\
         1. Short description\n\
         2. Technologies used\n\
         3. Mermaid.js diagram\n\
         4. Pros & Cons (bullet points)"
    )
}

/// Ask the generation backend for architecture candidates and return the
/// raw markdown document, or [`FALLBACK_RESULT`] on any failure.
pub async fn generate(
    llm: Option<&Arc<dyn LlmChat>>,
    system_description: &str,
    constraints: &str,
) -> String {
    let Some(llm) = llm else {
        warn!("generation backend not configured; substituting fallback result");
        return FALLBACK_RESULT.to_owned();
    };

    let prompt = build_prompt(system_description, constraints);
    match llm.chat(GENERATE_MAX_TOKENS, SYSTEM_PROMPT, &prompt).await {
        Ok(text) if !text.trim().is_empty() => {
            info!(result_len = text.len(), "generation complete");
            text
        }
        Ok(_) => {
            warn!("generation returned empty text; substituting fallback result");
            FALLBACK_RESULT.to_owned()
        }
        Err(e) => {
            warn!(error = %e, "generation failed; substituting fallback result");
            FALLBACK_RESULT.to_owned()
        }
    }
}

#[cfg(test)]
#[path = "architect_test.rs"]
mod tests;
