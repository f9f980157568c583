//! Classification of raw user input.

/// Words that end the session when typed on their own (any case).
pub const TERMINATION_KEYWORDS: [&str; 3] = ["exit", "quit", "bye"];

/// Result of the frontend's read step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSignal {
    /// A line was submitted (untrimmed).
    Continue(String),
    /// Interrupt or end of input: stop without error.
    Terminate,
}

/// What a submitted line asks the loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// Blank or whitespace-only; re-prompt.
    Empty,
    /// A termination keyword.
    Terminate,
    /// Text to send, already trimmed.
    Message(String),
}

/// Classify one raw input line.
pub fn classify_input(raw: &str) -> UserInput {
    let trimmed = raw.trim();
    if is_termination_keyword(trimmed) {
        UserInput::Terminate
    } else if trimmed.is_empty() {
        UserInput::Empty
    } else {
        UserInput::Message(trimmed.to_string())
    }
}

fn is_termination_keyword(text: &str) -> bool {
    TERMINATION_KEYWORDS
        .iter()
        .any(|kw| text.eq_ignore_ascii_case(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_any_case_and_padding() {
        for raw in ["exit", "EXIT", " Bye ", "QuIt", "\tquit\n", "bye"] {
            assert_eq!(classify_input(raw), UserInput::Terminate, "input {raw:?}");
        }
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(classify_input(""), UserInput::Empty);
        assert_eq!(classify_input("   \t "), UserInput::Empty);
    }

    #[test]
    fn test_message_is_trimmed() {
        assert_eq!(
            classify_input("  Hello  "),
            UserInput::Message("Hello".to_string())
        );
    }

    #[test]
    fn test_keyword_inside_sentence_is_a_message() {
        assert_eq!(
            classify_input("how do I exit vim"),
            UserInput::Message("how do I exit vim".to_string())
        );
        assert_eq!(
            classify_input("exit!"),
            UserInput::Message("exit!".to_string())
        );
    }
}
