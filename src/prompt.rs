//! Push confirmation prompt.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

use crate::error::PromptError;

/// Asks the operator whether to push.
#[cfg_attr(test, mockall::automock)]
pub trait PushConfirmer {
    /// Returns `true` when the push should go ahead.
    fn confirm_push(&self, remote: &str, branch: &str) -> Result<bool, PromptError>;
}

/// Confirmer backed by the real terminal.
///
/// Uses a dialoguer prompt on a TTY and a plain line read otherwise, so
/// piped or closed stdin still resolves through the empty-means-yes default.
pub struct TerminalConfirmer;

impl PushConfirmer for TerminalConfirmer {
    fn confirm_push(&self, remote: &str, branch: &str) -> Result<bool, PromptError> {
        let question = push_question(remote, branch);

        let answer = if io::stdin().is_terminal() {
            Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| PromptError::Interaction(e.to_string()))?
        } else {
            read_answer(&mut io::stdin().lock(), &mut io::stdout(), &question)?
        };

        Ok(parse_push_answer(&answer))
    }
}

/// Confirmer that replays a fixed answer, for non-interactive callers.
pub struct ScriptedConfirmer {
    answer: String,
}

impl ScriptedConfirmer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

impl PushConfirmer for ScriptedConfirmer {
    fn confirm_push(&self, _remote: &str, _branch: &str) -> Result<bool, PromptError> {
        Ok(parse_push_answer(&self.answer))
    }
}

fn push_question(remote: &str, branch: &str) -> String {
    format!("Push to {}/{}? (y/n)", remote, branch)
}

/// Write the question and read one line. End of input yields an empty answer.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, PromptError> {
    write!(output, "{}: ", question).map_err(PromptError::ReadFailed)?;
    output.flush().map_err(PromptError::ReadFailed)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(PromptError::ReadFailed)?;
    Ok(line)
}

/// Normalize an answer: empty means yes, `y` means yes, anything else no.
pub fn parse_push_answer(answer: &str) -> bool {
    let normalized = answer.trim().to_lowercase();
    normalized.is_empty() || normalized == "y"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_empty_answer_defaults_to_yes() {
        assert!(parse_push_answer(""));
        assert!(parse_push_answer("   \n"));
    }

    #[test]
    fn test_y_answer_any_case() {
        assert!(parse_push_answer("y"));
        assert!(parse_push_answer("Y"));
        assert!(parse_push_answer("  Y \n"));
    }

    #[test]
    fn test_n_answer_any_case() {
        assert!(!parse_push_answer("n"));
        assert!(!parse_push_answer(" N \n"));
    }

    #[test]
    fn test_other_answers_decline() {
        // Only a literal "y" confirms
        assert!(!parse_push_answer("yes"));
        assert!(!parse_push_answer("sure"));
        assert!(!parse_push_answer("1"));
    }

    #[test]
    fn test_read_answer_writes_question() {
        let mut input = Cursor::new("n\n");
        let mut output = Vec::new();
        let answer = read_answer(&mut input, &mut output, "Push to origin/main? (y/n)").unwrap();

        assert_eq!(answer, "n\n");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Push to origin/main? (y/n): "
        );
    }

    #[test]
    fn test_read_answer_closed_input_is_empty() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let answer = read_answer(&mut input, &mut output, "Push?").unwrap();
        assert!(answer.is_empty());
        assert!(parse_push_answer(&answer));
    }

    #[test]
    fn test_read_answer_only_consumes_one_line() {
        let mut input = Cursor::new("y\nn\n");
        let mut output = Vec::new();
        let answer = read_answer(&mut input, &mut output, "Push?").unwrap();
        assert_eq!(answer, "y\n");
    }

    #[test]
    fn test_push_question_names_target() {
        assert_eq!(push_question("upstream", "dev"), "Push to upstream/dev? (y/n)");
    }

    #[test]
    fn test_scripted_confirmer() {
        assert!(ScriptedConfirmer::new("").confirm_push("origin", "main").unwrap());
        assert!(!ScriptedConfirmer::new("N").confirm_push("origin", "main").unwrap());
    }
}
