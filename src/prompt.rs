//! Yes/no questions put to the operator.

use std::collections::VecDeque;
use std::error::Error;
use std::io::{self, BufRead, Stdin, Stdout, Write};

/// Asks the operator a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool, Box<dyn Error>>;
}

/// `y` or `yes` in any case; anything else is a no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Prints `<question> (y/n) ` and reads one line of input.
pub struct ConsoleConfirm<R, W> {
    input: R,
    output: W,
}

impl ConsoleConfirm<io::StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        ConsoleConfirm::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleConfirm { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for ConsoleConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool, Box<dyn Error>> {
        write!(self.output, "{question} (y/n) ")?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer)?;
        if read == 0 {
            log::warn!("End of input while asking '{question}', treating as no");
            return Ok(false);
        }
        let yes = is_affirmative(&answer);
        log::debug!("confirm('{question}') answer='{}' => {yes}", answer.trim());
        Ok(yes)
    }
}

/// Pre-recorded answers, handed out in order.
///
/// Runs out as "no". Every question asked is kept in `asked`.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: &[bool]) -> Self {
        ScriptedConfirm {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, question: &str) -> Result<bool, Box<dyn Error>> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        for yes in ["y", "Y", "yes", "YES", "Yes", " yes\n"] {
            assert!(is_affirmative(yes), "{yes:?}");
        }
        for no in ["n", "no", "", "yeah", "ye", "1"] {
            assert!(!is_affirmative(no), "{no:?}");
        }
    }

    #[test]
    fn test_console_confirm_reads_lines() {
        let input = io::Cursor::new("Yes\nnope\n");
        let mut output = Vec::new();
        {
            let mut console = ConsoleConfirm::new(input, &mut output);
            assert!(console.confirm("Dump it?").unwrap());
            assert!(!console.confirm("Again?").unwrap());
            // input exhausted
            assert!(!console.confirm("Third?").unwrap());
        }
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed, "Dump it? (y/n) Again? (y/n) Third? (y/n) ");
    }

    #[test]
    fn test_scripted_confirm() {
        let mut scripted = ScriptedConfirm::new(&[false, true]);
        assert!(!scripted.confirm("a").unwrap());
        assert!(scripted.confirm("b").unwrap());
        assert!(!scripted.confirm("c").unwrap());
        assert_eq!(scripted.asked, vec!["a", "b", "c"]);
    }
}
