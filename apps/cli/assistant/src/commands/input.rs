/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    Help,
    /// Anything else, including an empty line, is a question.
    Question(String),
}

/// Interpret a line read from the terminal (line terminator optional).
///
/// Questions are passed on untrimmed apart from the terminator.
pub fn parse_line(line: &str) -> Input {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    match line.trim() {
        ":quit" | ":q" | ":exit" => Input::Quit,
        ":help" | ":h" | ":?" => Input::Help,
        _ => Input::Question(line.to_string()),
    }
}
