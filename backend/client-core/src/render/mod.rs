//! Decides how server-supplied text is presented.
//!
//! Text is either math markup (handed to the typesetting engine), plain text,
//! or a placeholder when empty. Whatever the mode, it is stripped of terminal
//! control sequences first: nothing from the server reaches the terminal raw.

use models::{RenderBlock, RenderMode};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NO_SOLUTION_PLACEHOLDER: &str = "No solution";
pub const NO_STEP_PLACEHOLDER: &str = "No step available";

/// CSI, OSC and two-byte escape sequences.
static ESCAPE_SEQUENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b(?:\[[0-?]*[ -/]*[@-~]|\][^\x07\x1b]*(?:\x07|\x1b\\)?|[@-Z\\-_])")
        .unwrap_or_else(|e| panic!("escape sequence pattern is invalid: {e}"))
});

/// Which signal decides that text is trusted math markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrustPolicy {
    /// Markup when the text contains `$` and not `Error`.
    Heuristic,
    /// The server's `markup` attestation decides; the heuristic applies only
    /// when the server sent none.
    #[default]
    Attested,
}

/// Content sniffing: contains a `$` and does not contain `Error`.
pub fn looks_like_markup(text: &str) -> bool {
    text.contains('$') && !text.contains("Error")
}

/// Mode of `text` under the content-sniffing heuristic.
pub fn classify(text: &str) -> RenderMode {
    if text.is_empty() {
        RenderMode::Placeholder
    } else if looks_like_markup(text) {
        RenderMode::Markup
    } else {
        RenderMode::Plain
    }
}

/// Mode of `text` under `policy`, given the server's attestation.
pub fn classify_with(policy: TrustPolicy, attestation: Option<bool>, text: &str) -> RenderMode {
    if text.is_empty() {
        return RenderMode::Placeholder;
    }

    match (policy, attestation) {
        (TrustPolicy::Attested, Some(true)) => RenderMode::Markup,
        (TrustPolicy::Attested, Some(false)) => RenderMode::Plain,
        (TrustPolicy::Attested, None) | (TrustPolicy::Heuristic, _) => classify(text),
    }
}

/// Whether the typesetting pass may rewrite the result under `policy`.
///
/// Delimiters are honored wherever they appear, plain blocks included; only
/// an explicit `markup: false` under [`TrustPolicy::Attested`] opts out.
pub fn may_typeset(policy: TrustPolicy, attestation: Option<bool>) -> bool {
    !matches!((policy, attestation), (TrustPolicy::Attested, Some(false)))
}

/// Remove escape sequences and control characters other than newline and tab.
pub fn sanitize(text: &str) -> String {
    ESCAPE_SEQUENCE
        .replace_all(text, "")
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Build the block for one piece of server text.
pub fn render_block(
    policy: TrustPolicy,
    attestation: Option<bool>,
    text: &str,
    placeholder: &str,
) -> RenderBlock {
    match classify_with(policy, attestation, text) {
        RenderMode::Placeholder => RenderBlock::new(RenderMode::Placeholder, placeholder),
        mode => RenderBlock::new(mode, sanitize(text)),
    }
}
