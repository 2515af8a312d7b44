use crate::error::typeset::TypesetError;
use crate::typeset::{Typesetter, tex_to_unicode};

use common::ErrorLocation;

use models::{DelimiterPair, TypesetConfig};

use std::panic::Location;

use log::trace;

/// Terminal typesetting engine: delimited TeX becomes Unicode notation.
///
/// Text outside math delimiters is copied unchanged, except for `\$` which
/// becomes `$` when escape processing is enabled. An opening delimiter with
/// no matching close is kept as literal text.
#[derive(Debug, Default)]
pub struct UnicodeTypesetter {
    /// Longest opening delimiter first, so `$$` wins over `$`.
    delimiters: Vec<DelimiterPair>,
    process_escapes: bool,
    configured: bool,
}

impl UnicodeTypesetter {
    pub fn new() -> Self {
        Self::default()
    }

    fn opening_at(&self, rest: &str) -> Option<&DelimiterPair> {
        self.delimiters
            .iter()
            .find(|pair| rest.starts_with(pair.open.as_str()))
    }
}

impl Typesetter for UnicodeTypesetter {
    fn configure(&mut self, config: &TypesetConfig) -> Result<(), TypesetError> {
        let mut delimiters: Vec<DelimiterPair> = config
            .inline_math
            .iter()
            .chain(config.display_math.iter())
            .cloned()
            .collect();
        delimiters.sort_by(|a, b| b.open.len().cmp(&a.open.len()));

        self.delimiters = delimiters;
        self.process_escapes = config.process_escapes;
        self.configured = true;
        Ok(())
    }

    fn typeset(&self, text: &str) -> Result<String, TypesetError> {
        if !self.configured {
            return Err(TypesetError::NotConfigured {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut out = String::with_capacity(text.len());
        let mut index = 0;

        while index < text.len() {
            let rest = &text[index..];

            if self.process_escapes && rest.starts_with("\\$") {
                out.push('$');
                index += 2;
                continue;
            }

            if let Some(pair) = self.opening_at(rest) {
                let body_start = index + pair.open.len();
                if let Some(body_end) = find_close(text, body_start, &pair.close) {
                    let body = &text[body_start..body_end];
                    trace!("Math segment {}{}{}", pair.open, body, pair.close);
                    out.push_str(&tex_to_unicode(body));
                    index = body_end + pair.close.len();
                    continue;
                }
            }

            let Some(c) = rest.chars().next() else {
                break;
            };
            out.push(c);
            index += c.len_utf8();
        }

        Ok(out)
    }
}

/// Byte index of the first unescaped `close` at or after `from`.
fn find_close(text: &str, from: usize, close: &str) -> Option<usize> {
    let mut index = from;
    while index < text.len() {
        let rest = &text[index..];
        if rest.starts_with(close) {
            return Some(index);
        }

        let mut chars = rest.chars();
        let c = chars.next()?;
        index += c.len_utf8();
        if c == '\\' {
            // Skip the escaped character so `\$` never closes `$`.
            if let Some(escaped) = chars.next() {
                index += escaped.len_utf8();
            }
        }
    }
    None
}
