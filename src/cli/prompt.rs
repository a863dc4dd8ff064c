//! Interactive confirmation on the terminal

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one answer line; only "y" or "yes" (any case)
/// confirms
pub fn ask<R: BufRead, W: Write>(prompt: &str, mut input: R, mut output: W) -> io::Result<bool> {
    write!(output, "{} (y/N): ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Ask on stdin; a read failure counts as "no"
pub fn confirm_on_stdin(prompt: &str) -> bool {
    ask(prompt, io::stdin().lock(), io::stdout()).unwrap_or(false)
}

/// Confirmer for a command: skips the question when `--yes` was given
pub fn confirmer(assume_yes: bool) -> impl FnMut(&str) -> bool {
    move |prompt| assume_yes || confirm_on_stdin(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(input: &str) -> bool {
        let mut output = Vec::new();
        ask("Continue?", input.as_bytes(), &mut output).unwrap()
    }

    #[test]
    fn test_accepted_answers() {
        assert!(answer("y\n"));
        assert!(answer("YES\n"));
        assert!(answer("  Yes  \n"));
    }

    #[test]
    fn test_everything_else_declines() {
        assert!(!answer("n\n"));
        assert!(!answer("\n"));
        assert!(!answer(""));
        assert!(!answer("yep\n"));
    }

    #[test]
    fn test_prompt_is_written() {
        let mut output = Vec::new();
        ask("Delete?", "n\n".as_bytes(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Delete? (y/N): ");
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let mut confirm = confirmer(true);
        assert!(confirm("anything"));
    }
}
