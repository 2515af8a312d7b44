use crate::typeset::tex_to_unicode;

#[test]
fn given_powers_and_indices_when_converted_then_uses_unicode_scripts() {
    assert_eq!(tex_to_unicode("x^2 = 4"), "x² = 4");
    assert_eq!(tex_to_unicode("x^{10} + x_{1}"), "x¹⁰ + x₁");
    assert_eq!(tex_to_unicode("x^{n+1}"), "xⁿ⁺¹");
}

/// **VALUE**: Scripts without a Unicode form stay readable instead of being dropped.
///
/// **BUG THIS CATCHES**: Would catch if partially mappable scripts are mangled, e.g.
/// `e^{ix}` rendered as `eⁱx`, which reads as a different expression.
#[test]
fn given_unmappable_script_when_converted_then_falls_back_to_caret_notation() {
    assert_eq!(tex_to_unicode("e^{ix}"), "e^(ix)");
    assert_eq!(tex_to_unicode("2^y"), "2^y");
}

#[test]
fn given_fractions_and_roots_when_converted_then_groups_compound_operands() {
    assert_eq!(tex_to_unicode("\\frac{x}{2}"), "x/2");
    assert_eq!(tex_to_unicode("\\frac{x + 1}{2}"), "(x + 1)/2");
    assert_eq!(tex_to_unicode("\\sqrt{2}"), "√2");
    assert_eq!(tex_to_unicode("\\sqrt{x - 1}"), "√(x - 1)");
    assert_eq!(tex_to_unicode("\\sqrt[3]{8}"), "³√8");
}

#[test]
fn given_symbols_and_relations_when_converted_then_maps_to_unicode() {
    assert_eq!(tex_to_unicode("x = \\pm 2"), "x = ± 2");
    assert_eq!(tex_to_unicode("x \\leq 3 \\wedge x \\neq 0"), "x ≤ 3 ∧ x ≠ 0");
    assert_eq!(tex_to_unicode("x \\in \\mathbb{R}"), "x ∈ ℝ");
    assert_eq!(tex_to_unicode("2 \\pi r"), "2 π r");
}

/// **VALUE**: Output of the solving service (sympy `latex()`) renders cleanly.
///
/// **WHY THIS MATTERS**: These shapes come straight from real answers: sized delimiters,
/// set braces and interval notation.
#[test]
fn given_sympy_style_output_when_converted_then_drops_sizing_commands() {
    assert_eq!(tex_to_unicode("\\left(x + 1\\right)^{2}"), "(x + 1)²");
    assert_eq!(tex_to_unicode("\\left\\{-2, 2\\right\\}"), "{-2, 2}");
    assert_eq!(tex_to_unicode("\\left(-\\infty, 3\\right]"), "(-∞, 3]");
    assert_eq!(tex_to_unicode("\\left. x \\right|"), " x |");
}

#[test]
fn given_unknown_command_when_converted_then_keeps_bare_name() {
    assert_eq!(tex_to_unicode("\\sin{x}"), "sinx");
    assert_eq!(tex_to_unicode("\\log x"), "log x");
    assert_eq!(tex_to_unicode("\\text{if } x"), "if  x");
}

/// **VALUE**: Pathologically nested input is converted without exhausting the stack.
///
/// **WHY THIS MATTERS**: The text comes from the network. A solution made of thousands
/// of nested groups must not abort the whole client.
///
/// **BUG THIS CATCHES**: Would catch unbounded recursion through groups, script and
/// command arguments, or `\sqrt[...]` indices.
#[test]
fn given_deeply_nested_input_when_converted_then_rest_is_kept_verbatim() {
    // GIVEN: Nesting far beyond any real answer
    let braces = "{".repeat(20_000);
    let scripts = "^{".repeat(20_000);
    let roots = "\\sqrt".repeat(20_000);
    let indices = "\\sqrt[".repeat(20_000);

    // WHEN
    let from_braces = tex_to_unicode(&braces);
    let from_scripts = tex_to_unicode(&scripts);
    let from_roots = tex_to_unicode(&roots);
    let from_indices = tex_to_unicode(&indices);

    // THEN: Conversion stops at the nesting limit and keeps the remainder as written
    assert!(!from_braces.is_empty());
    assert!(from_braces.chars().all(|c| c == '{'));
    assert!(from_braces.len() < braces.len());
    assert!(from_scripts.contains("^{^{"));
    assert!(from_roots.contains("\\sqrt\\sqrt"));
    assert!(from_indices.ends_with("√()"));
}

/// **VALUE**: Ordinary nesting is untouched by the depth limit.
#[test]
fn given_moderately_nested_input_when_converted_then_fully_converted() {
    assert_eq!(tex_to_unicode("{{{{{{{{x}}}}}}}}^{2}"), "x²");
    assert_eq!(tex_to_unicode("\\frac{\\frac{1}{2}}{\\sqrt{\\sqrt{x}}}"), "(1/2)/(√(√x))");
}
