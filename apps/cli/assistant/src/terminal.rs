//! Text rendering of the solver screen.

use client_core::view::{INPUT_PLACEHOLDER, SOLVING_LABEL, SolverView, SubmitControl};

pub const TITLE: &str = "Journey To Calculus Assistant";
pub const PROMPT: &str = "> ";

pub const HELP: &str = "\
Type an algebra problem and press Enter to solve it, e.g. 2x + 3 = 7
Commands:
  :help   show this message
  :quit   leave the assistant";

pub fn banner() -> String {
    format!("{TITLE}\n{INPUT_PLACEHOLDER}\nType :help for commands.\n")
}

fn submit_line(submit: &SubmitControl) -> String {
    if submit.disabled {
        format!("[ {} ] (busy)", submit.label)
    } else {
        format!("[ {} ]", submit.label)
    }
}

/// The line shown while a request is in flight.
pub fn progress_line() -> String {
    submit_line(&SubmitControl {
        label: SOLVING_LABEL,
        disabled: true,
    })
}

/// Full screen for a settled view.
pub fn render(view: &SolverView) -> String {
    let mut out = String::new();

    if view.question.is_empty() {
        out.push_str("Question: (empty)\n");
    } else {
        out.push_str(&format!("Question: {}\n", view.question));
    }
    out.push_str(&submit_line(&view.submit));
    out.push('\n');

    if let Some(result) = &view.result {
        out.push_str(&format!("Solution: {}\n", result.solution.text));
        if !result.steps.is_empty() {
            out.push_str("Steps:\n");
            for (index, step) in result.steps.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", index + 1, step.text));
            }
        }
    }

    if let Some(error) = &view.error {
        out.push_str(&format!("Error: {error}\n"));
    }

    out
}
