//! TeX math to Unicode conversion for the terminal.
//!
//! Covers what algebra answers actually contain: fractions, roots, scripts,
//! greek letters, relations and common operators. Unknown commands degrade
//! to their bare name.

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

/// Deepest group nesting that is converted; the remaining input is kept as written.
const MAX_DEPTH: usize = 64;

#[rustfmt::skip]
static SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // greek
        ("alpha", "α"), ("beta", "β"), ("gamma", "γ"), ("delta", "δ"),
        ("epsilon", "ε"), ("varepsilon", "ε"), ("zeta", "ζ"), ("eta", "η"),
        ("theta", "θ"), ("vartheta", "ϑ"), ("iota", "ι"), ("kappa", "κ"),
        ("lambda", "λ"), ("mu", "μ"), ("nu", "ν"), ("xi", "ξ"), ("pi", "π"),
        ("rho", "ρ"), ("sigma", "σ"), ("tau", "τ"), ("upsilon", "υ"),
        ("phi", "φ"), ("varphi", "φ"), ("chi", "χ"), ("psi", "ψ"),
        ("omega", "ω"), ("Gamma", "Γ"), ("Delta", "Δ"), ("Theta", "Θ"),
        ("Lambda", "Λ"), ("Xi", "Ξ"), ("Pi", "Π"), ("Sigma", "Σ"),
        ("Phi", "Φ"), ("Psi", "Ψ"), ("Omega", "Ω"),
        // operators
        ("cdot", "·"), ("times", "×"), ("div", "÷"), ("pm", "±"), ("mp", "∓"),
        ("circ", "∘"), ("ast", "∗"), ("sum", "∑"), ("prod", "∏"), ("int", "∫"),
        ("partial", "∂"), ("nabla", "∇"), ("infty", "∞"), ("degree", "°"),
        // relations and arrows
        ("leq", "≤"), ("le", "≤"), ("geq", "≥"), ("ge", "≥"), ("neq", "≠"),
        ("ne", "≠"), ("approx", "≈"), ("equiv", "≡"), ("sim", "∼"),
        ("lt", "<"), ("gt", ">"), ("to", "→"), ("rightarrow", "→"),
        ("leftarrow", "←"), ("Rightarrow", "⇒"), ("Leftarrow", "⇐"),
        ("implies", "⟹"), ("iff", "⟺"), ("mapsto", "↦"),
        // sets and logic
        ("in", "∈"), ("notin", "∉"), ("subset", "⊂"), ("subseteq", "⊆"),
        ("cup", "∪"), ("cap", "∩"), ("emptyset", "∅"), ("varnothing", "∅"),
        ("forall", "∀"), ("exists", "∃"), ("neg", "¬"), ("land", "∧"),
        ("lor", "∨"), ("wedge", "∧"), ("vee", "∨"),
        // punctuation
        ("ldots", "…"), ("cdots", "⋯"), ("dots", "…"), ("lbrace", "{"),
        ("rbrace", "}"), ("langle", "⟨"), ("rangle", "⟩"), ("lvert", "|"),
        ("rvert", "|"), ("mid", "|"), ("quad", "  "), ("qquad", "    "),
    ])
});

/// Commands that only affect sizing or style and render as nothing.
#[rustfmt::skip]
const IGNORED: &[&str] = &[
    "displaystyle", "textstyle", "scriptstyle", "limits", "nolimits", "big", "Big",
    "bigg", "Bigg", "bigl", "bigr", "Bigl", "Bigr",
];

/// Commands whose single argument is shown as-is.
#[rustfmt::skip]
const TEXT_COMMANDS: &[&str] = &[
    "text", "textrm", "textit", "textbf", "mathrm", "mathit", "mathbf", "mathsf",
    "operatorname", "mbox",
];

const FRACTIONS: &[&str] = &["frac", "dfrac", "tfrac"];

#[rustfmt::skip]
fn superscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰', '1' => '¹', '2' => '²', '3' => '³', '4' => '⁴',
        '5' => '⁵', '6' => '⁶', '7' => '⁷', '8' => '⁸', '9' => '⁹',
        '+' => '⁺', '-' | '−' => '⁻', '=' => '⁼', '(' => '⁽', ')' => '⁾',
        'n' => 'ⁿ', 'i' => 'ⁱ',
        _ => return None,
    })
}

#[rustfmt::skip]
fn subscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀', '1' => '₁', '2' => '₂', '3' => '₃', '4' => '₄',
        '5' => '₅', '6' => '₆', '7' => '₇', '8' => '₈', '9' => '₉',
        '+' => '₊', '-' | '−' => '₋', '=' => '₌', '(' => '₍', ')' => '₎',
        'a' => 'ₐ', 'e' => 'ₑ', 'o' => 'ₒ', 'x' => 'ₓ', 'h' => 'ₕ',
        'k' => 'ₖ', 'l' => 'ₗ', 'm' => 'ₘ', 'n' => 'ₙ', 'p' => 'ₚ',
        's' => 'ₛ', 't' => 'ₜ',
        _ => return None,
    })
}

fn blackboard(c: char) -> char {
    match c {
        'R' => 'ℝ',
        'N' => 'ℕ',
        'Z' => 'ℤ',
        'Q' => 'ℚ',
        'C' => 'ℂ',
        other => other,
    }
}

/// Convert the body of one math segment (delimiters already removed).
pub fn tex_to_unicode(tex: &str) -> String {
    MathParser::new(tex, 0).render()
}

struct MathParser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl MathParser {
    fn new(tex: &str, depth: usize) -> Self {
        Self {
            chars: tex.chars().collect(),
            pos: 0,
            depth,
        }
    }

    fn render(mut self) -> String {
        let mut out = String::new();
        // A stray `}` ends a sequence early; keep going until the input is used up.
        while self.pos < self.chars.len() {
            out.push_str(&self.parse_sequence());
        }
        out
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Run `parse` one nesting level deeper, or give up on conversion past [`MAX_DEPTH`].
    fn nested(&mut self, parse: impl FnOnce(&mut Self) -> String) -> String {
        if self.depth >= MAX_DEPTH {
            debug!("TeX nested deeper than {MAX_DEPTH} levels, keeping the rest verbatim");
            let rest = self.chars[self.pos..].iter().collect();
            self.pos = self.chars.len();
            return rest;
        }

        self.depth += 1;
        let out = parse(self);
        self.depth -= 1;
        out
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Atoms and scripts up to the end of input or a closing `}` (consumed).
    fn parse_sequence(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            match c {
                '}' => {
                    self.pos += 1;
                    break;
                }
                '^' => {
                    self.pos += 1;
                    let script = self.parse_argument();
                    out.push_str(&with_script(&script, '^', superscript));
                }
                '_' => {
                    self.pos += 1;
                    let script = self.parse_argument();
                    out.push_str(&with_script(&script, '_', subscript));
                }
                _ => out.push_str(&self.parse_atom()),
            }
        }
        out
    }

    fn parse_atom(&mut self) -> String {
        match self.next() {
            Some('{') => self.nested(Self::parse_sequence),
            Some('\\') => self.parse_command(),
            Some('~') => String::from(" "),
            Some(c) => c.to_string(),
            None => String::new(),
        }
    }

    /// A command or script argument: a braced group or a single atom.
    fn parse_argument(&mut self) -> String {
        self.nested(|parser| {
            parser.skip_whitespace();
            match parser.peek() {
                Some('{') => {
                    parser.pos += 1;
                    parser.parse_sequence()
                }
                Some('}') | None => String::new(),
                Some(_) => parser.parse_atom(),
            }
        })
    }

    /// Raw text up to `close`, for optional `[...]` arguments.
    fn parse_bracketed(&mut self, close: char) -> String {
        self.nested(|parser| {
            let mut raw = String::new();
            while let Some(c) = parser.next() {
                if c == close {
                    break;
                }
                raw.push(c);
            }
            MathParser::new(&raw, parser.depth).render()
        })
    }

    fn parse_command(&mut self) -> String {
        let name: String = match self.peek() {
            Some(c) if c.is_ascii_alphabetic() => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
                    self.pos += 1;
                }
                self.chars[start..self.pos].iter().collect()
            }
            Some(c) => {
                self.pos += 1;
                return match c {
                    ',' | ';' | ':' | ' ' | '\\' => String::from(" "),
                    '!' => String::new(),
                    other => other.to_string(),
                };
            }
            None => return String::from("\\"),
        };

        match name.as_str() {
            n if FRACTIONS.contains(&n) => {
                let numerator = self.parse_argument();
                let denominator = self.parse_argument();
                format!("{}/{}", grouped(&numerator), grouped(&denominator))
            }
            "sqrt" => {
                self.skip_whitespace();
                let index = if self.peek() == Some('[') {
                    self.pos += 1;
                    self.parse_bracketed(']')
                } else {
                    String::new()
                };
                let radicand = self.parse_argument();
                let index: String = index.chars().filter_map(superscript).collect();
                format!("{index}√{}", grouped(&radicand))
            }
            "mathbb" => self.parse_argument().chars().map(blackboard).collect(),
            "left" | "right" => {
                self.skip_whitespace();
                // `\left.` is an invisible delimiter.
                if self.peek() == Some('.') {
                    self.pos += 1;
                }
                String::new()
            }
            n if TEXT_COMMANDS.contains(&n) => self.parse_argument(),
            n if IGNORED.contains(&n) => String::new(),
            n => SYMBOLS
                .get(n)
                .map(|symbol| symbol.to_string())
                .unwrap_or_else(|| n.to_string()),
        }
    }
}

/// Operand of `/` or `√`: bare when it is a single alphanumeric run.
fn grouped(operand: &str) -> String {
    if !operand.is_empty() && operand.chars().all(char::is_alphanumeric) {
        operand.to_string()
    } else {
        format!("({operand})")
    }
}

fn with_script(script: &str, marker: char, map: fn(char) -> Option<char>) -> String {
    if let Some(mapped) = script.chars().map(map).collect::<Option<String>>() {
        return mapped;
    }

    if script.chars().count() == 1 {
        format!("{marker}{script}")
    } else {
        format!("{marker}({script})")
    }
}
