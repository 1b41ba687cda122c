//! Prompt templates for the three writing tasks
//!
//! Each builder embeds the raw form input into a fixed instruction and
//! tells the model to reach for Google Search when the input needs external
//! or current information. The client treats the result as an opaque string.

/// Tone choices offered for email replies, in picker order.
pub const TONES: &[&str] = &[
    "Formal",
    "Casual",
    "Concise",
    "Persuasive",
    "Friendly",
    "Direct",
];

/// Prompt for drafting a reply to a pasted email.
pub fn email_reply(tone: &str, email_content: &str) -> String {
    format!(
        "You are a helpful assistant. Please draft a reply to the following email.\n\
         The desired tone for the reply is: {tone}.\n\
         Use Google Search if the email content requires external information or current events \
         to formulate an accurate and helpful response.\n\
         \n\
         Original Email:\n\
         ---\n\
         {email_content}\n\
         ---\n\
         \n\
         Suggested Reply:"
    )
}

/// Prompt for a formal subscription-cancellation draft.
///
/// The reason clause is omitted entirely when the user left it blank.
pub fn cancel_subscription(name: &str, reason: &str) -> String {
    let mut prompt = format!(
        "You are a helpful assistant. Please draft a formal email to cancel the subscription for: \"{name}\"."
    );
    if !reason.trim().is_empty() {
        prompt.push_str(&format!(
            "\nThe reason for cancellation is: \"{reason}\"."
        ));
    }
    prompt.push_str(
        "\nInclude placeholders for account details if necessary (e.g., [Your Name], [Account Number]).\n\
         If the request is general, like \"how to cancel Netflix\", use Google Search to provide \
         helpful, generic steps or advice for finding cancellation information.\n\
         Provide the cancellation email draft or guidance.",
    );
    prompt
}

/// Prompt for structuring meeting notes into an overview, takeaways, and
/// action items.
pub fn meeting_notes(transcript: &str) -> String {
    format!(
        "You are a helpful assistant. Analyze the following meeting content/transcript:\n\
         ---\n\
         {transcript}\n\
         ---\n\
         Please provide the following in a structured format:\n\
         1. A concise overview of the meeting.\n\
         2. Key takeaways (as bullet points).\n\
         3. Actionable items (list each with assignee if mentioned, task description, and deadline if mentioned).\n\
         \n\
         Use Google Search if any points require external information for clarification, context, \
         or to verify facts mentioned during the meeting.\n\
         Present the output clearly."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_embeds_tone_body_and_search_instruction() {
        let prompt = email_reply("Concise", "Can we move Friday's meeting?");
        assert!(prompt.contains("The desired tone for the reply is: Concise."));
        assert!(prompt.contains("Can we move Friday's meeting?"));
        assert!(prompt.contains("Use Google Search"));
        assert!(prompt.ends_with("Suggested Reply:"));
    }

    #[test]
    fn cancel_with_reason_includes_reason_clause() {
        let prompt = cancel_subscription("Netflix", "Found a better alternative");
        assert!(prompt.contains("cancel the subscription for: \"Netflix\""));
        assert!(prompt.contains("The reason for cancellation is: \"Found a better alternative\"."));
    }

    #[test]
    fn cancel_without_reason_omits_reason_clause() {
        for blank in ["", "   ", "\n"] {
            let prompt = cancel_subscription("Netflix", blank);
            assert!(!prompt.contains("reason for cancellation"));
            assert!(prompt.contains("[Account Number]"));
        }
    }

    #[test]
    fn meeting_notes_embeds_transcript_and_structure() {
        let prompt = meeting_notes("John: ship it. Sarah: agreed.");
        assert!(prompt.contains("John: ship it. Sarah: agreed."));
        assert!(prompt.contains("Key takeaways"));
        assert!(prompt.contains("Actionable items"));
        assert!(prompt.contains("Use Google Search"));
    }

    #[test]
    fn default_tone_is_formal() {
        assert_eq!(TONES[0], "Formal");
    }
}
