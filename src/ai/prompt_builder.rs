//! Prompt assembly for conversation summaries.

/// Fixed system instruction sent with every summarization request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that summarizes conversations. \
     Provide clear, concise summaries that capture the key points, decisions, and action items.";

/// Build the user prompt from formatted message lines.
///
/// The template is deterministic: an instruction header naming the context
/// label, one message line per input line in order, then a fixed
/// three-point footer. No truncation happens here; the token limit is
/// detected from the remote error, not estimated locally.
#[must_use]
pub fn build_summary_prompt(lines: &[String], context_label: &str) -> String {
    let mut prompt = format!("Please summarize the following {context_label}:\n\n");

    for line in lines {
        prompt.push_str(line);
        prompt.push('\n');
    }

    prompt.push_str("\nProvide a concise summary that includes:\n");
    prompt.push_str("1. Main topics discussed\n");
    prompt.push_str("2. Key decisions made\n");
    prompt.push_str("3. Action items or next steps (if any)\n");

    prompt
}
