use crate::commands::input::{Input, parse_line};

/// **VALUE**: Quit and help commands are recognized with or without a line terminator.
///
/// **BUG THIS CATCHES**: Would catch `read_line` output (which keeps `\n` or
/// `\r\n`) being compared verbatim, so `:quit` would be sent to the server.
#[test]
fn given_command_lines_when_parsed_then_commands_recognized() {
    // GIVEN / WHEN / THEN
    assert_eq!(parse_line(":quit\n"), Input::Quit);
    assert_eq!(parse_line(":q\r\n"), Input::Quit);
    assert_eq!(parse_line(":exit"), Input::Quit);
    assert_eq!(parse_line("  :help  \n"), Input::Help);
    assert_eq!(parse_line(":?"), Input::Help);
}

/// **VALUE**: An empty line is still a question.
///
/// **WHY THIS MATTERS**: Questions are not validated; submitting nothing must
/// reach the server exactly like any other text.
///
/// **BUG THIS CATCHES**: Would catch a front-end that silently skips blank input.
#[test]
fn given_empty_line_when_parsed_then_empty_question() {
    // GIVEN: A bare newline
    // WHEN
    let input = parse_line("\n");

    // THEN
    assert_eq!(input, Input::Question(String::new()));
}

/// **VALUE**: Question text keeps its inner and leading whitespace.
#[test]
fn given_question_line_when_parsed_then_text_preserved_without_terminator() {
    // GIVEN
    let line = "  2x + 3 = 7\r\n";

    // WHEN
    let input = parse_line(line);

    // THEN
    assert_eq!(input, Input::Question(String::from("  2x + 3 = 7")));
}
