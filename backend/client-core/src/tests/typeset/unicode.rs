// Unit tests for the Unicode typesetting engine
// Tests delimiter scanning, escape processing and configuration guards

use crate::error::typeset::TypesetError;
use crate::typeset::{Typesetter, UnicodeTypesetter};

use models::{TypesetConfig, TypesetConfigBuilder};

fn configured() -> UnicodeTypesetter {
    let mut engine = UnicodeTypesetter::new();
    engine.configure(&TypesetConfig::default()).unwrap();
    engine
}

/// **VALUE**: Typesetting before configuration is an error, not a silent no-op.
///
/// **BUG THIS CATCHES**: Would catch an engine that scans with an empty delimiter list
/// and returns raw TeX as if it had been typeset.
#[test]
fn given_unconfigured_engine_when_typesetting_then_returns_not_configured() {
    let engine = UnicodeTypesetter::new();

    let result = engine.typeset("$x^2$");

    assert!(matches!(result, Err(TypesetError::NotConfigured { .. })));
}

#[test]
fn given_inline_math_when_typesetting_then_only_math_segment_is_converted() {
    let engine = configured();

    let output = engine.typeset("Result: $x^2 = 4$ so $x = \\pm 2$").unwrap();

    assert_eq!(output, "Result: x² = 4 so x = ± 2");
}

/// **VALUE**: All four default delimiter pairs are recognised, longest first.
///
/// **BUG THIS CATCHES**: Would catch `$$` being read as an empty `$...$` segment
/// followed by stray dollars.
#[test]
fn given_every_default_delimiter_when_typesetting_then_each_segment_is_converted() {
    let engine = configured();

    assert_eq!(engine.typeset("$$\\frac{1}{2}$$").unwrap(), "1/2");
    assert_eq!(engine.typeset("\\(x_1\\)").unwrap(), "x₁");
    assert_eq!(engine.typeset("\\[\\sqrt{9} = 3\\]").unwrap(), "√9 = 3");
}

#[test]
fn given_escaped_dollar_when_escapes_enabled_then_renders_literal_dollar() {
    let engine = configured();

    assert_eq!(engine.typeset("costs \\$5").unwrap(), "costs $5");
    assert_eq!(engine.typeset("$a \\$ b$").unwrap(), "a $ b");
}

#[test]
fn given_escaped_dollar_when_escapes_disabled_then_backslash_is_kept() {
    let config = TypesetConfigBuilder::default()
        .with_inline("\\(", "\\)")
        .with_process_escapes(false)
        .build()
        .unwrap();
    let mut engine = UnicodeTypesetter::new();
    engine.configure(&config).unwrap();

    assert_eq!(engine.typeset("costs \\$5").unwrap(), "costs \\$5");
}

#[test]
fn given_unclosed_delimiter_when_typesetting_then_text_is_kept_verbatim() {
    let engine = configured();

    assert_eq!(engine.typeset("price $5 today").unwrap(), "price $5 today");
    assert_eq!(engine.typeset("π ≈ 3.14").unwrap(), "π ≈ 3.14");
}
