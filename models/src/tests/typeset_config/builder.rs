use crate::{DelimiterPair, ModelError, TypesetConfig, TypesetConfigBuilder};

/// **VALUE**: Verifies that a builder with no delimiters is rejected.
///
/// **WHY THIS MATTERS**: An engine configured without delimiters would never find
/// any math, silently rendering every solution as raw TeX.
///
/// **BUG THIS CATCHES**: Would catch if the emptiness check is removed during refactoring.
#[test]
fn given_no_delimiters_when_building_then_returns_validation_error() {
    // GIVEN: Builder with only flags set
    let builder = TypesetConfigBuilder::default().with_process_escapes(true);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "At least one math delimiter pair is required");
        }
    }
}

#[test]
fn given_empty_closing_delimiter_when_building_then_returns_validation_error() {
    let result = TypesetConfigBuilder::default().with_inline("$", "").build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Math delimiters cannot be empty");
        }
    }
}

/// **VALUE**: The same opening delimiter cannot mean both inline and display math.
///
/// **BUG THIS CATCHES**: Would catch a config where `$` is registered twice, which makes
/// the scanner's choice of closing delimiter ambiguous.
#[test]
fn given_duplicate_opening_delimiter_when_building_then_returns_validation_error() {
    let result = TypesetConfigBuilder::default()
        .with_inline("$", "$")
        .with_display("$", "$")
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Duplicate opening delimiter: $");
        }
    }
}

#[test]
fn given_standard_delimiters_when_building_then_matches_default_config() {
    // GIVEN: The delimiter set the assistant configures on mount
    let builder = TypesetConfigBuilder::default()
        .with_inline("$", "$")
        .with_inline("\\(", "\\)")
        .with_display("$$", "$$")
        .with_display("\\[", "\\]");

    // WHEN: Building without explicit flags
    let config = builder.build().unwrap();

    // THEN: Flags default to escapes on, messages off, same as TypesetConfig::default()
    assert_eq!(config, TypesetConfig::default());
    assert!(config.process_escapes);
    assert!(!config.show_messages);
    assert_eq!(config.display_math[0], DelimiterPair::new("$$", "$$"));
}
