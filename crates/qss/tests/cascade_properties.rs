//! Integration tests for cascade resolution and attribute compilation
//! through the public API:
//! - override precedence (universal < element < class < element.class)
//! - two-level descendant combinator
//! - category uniqueness of resolved sets
//! - determinism independent of cache state

use qss::{
    AttributeCompiler, CascadeResolver, DocumentPath, Rgba, StyleCategory, StyleProperty,
    Stylesheet,
};

fn doc_path(segments: &[(&str, &str)]) -> DocumentPath {
    let mut path = DocumentPath::root();
    for (element, class) in segments {
        path.push(*element, *class);
    }
    path
}

// ============================================================================
// OVERRIDE PRECEDENCE
// ============================================================================

#[test]
fn specific_element_rule_overrides_universal() {
    let sheet = Stylesheet::new()
        .rule("*", [StyleProperty::FontSize(12.0)])
        .rule("p", [StyleProperty::FontSize(14.0)]);

    let mut resolver = CascadeResolver::new(sheet);
    let styles = resolver.resolve(&doc_path(&[("p", "")]));

    assert_eq!(
        styles.get(StyleCategory::FontSize),
        Some(&StyleProperty::FontSize(14.0))
    );
}

#[test]
fn class_combination_unions_with_element_class_on_top() {
    let sheet = Stylesheet::new()
        .rule("p", [StyleProperty::FontSize(14.0)])
        .rule(".note", [StyleProperty::Kerning(2.0)])
        .rule(
            "p.note",
            [
                StyleProperty::Kerning(5.0),
                StyleProperty::ForegroundColor(Rgba::rgb(255, 0, 0)),
            ],
        );

    let mut resolver = CascadeResolver::new(sheet);
    let styles = resolver.resolve(&doc_path(&[("p", "note")]));

    // Union of all three rules, with `p.note` overriding the category it
    // shares with `.note`.
    assert_eq!(
        styles.get(StyleCategory::FontSize),
        Some(&StyleProperty::FontSize(14.0))
    );
    assert_eq!(
        styles.get(StyleCategory::Kerning),
        Some(&StyleProperty::Kerning(5.0))
    );
    assert_eq!(
        styles.get(StyleCategory::ForegroundColor),
        Some(&StyleProperty::ForegroundColor(Rgba::rgb(255, 0, 0)))
    );
}

#[test]
fn class_rule_applies_to_any_element_carrying_it() {
    let sheet = Stylesheet::new().rule(".warn", [StyleProperty::ForegroundColor(Rgba::rgb(
        200, 100, 0,
    ))]);

    let mut resolver = CascadeResolver::new(sheet);
    let on_span = resolver.resolve(&doc_path(&[("span", "warn")]));
    let on_div = resolver.resolve(&doc_path(&[("div", "warn")]));

    assert!(on_span.contains(StyleCategory::ForegroundColor));
    assert!(on_div.contains(StyleCategory::ForegroundColor));
}

// ============================================================================
// DESCENDANT COMBINATOR
// ============================================================================

#[test]
fn descendant_rule_matches_immediate_parent_only() {
    let sheet = Stylesheet::new().rule("h1 i", [StyleProperty::ForegroundColor(Rgba::rgb(
        0, 255, 0,
    ))]);
    let mut resolver = CascadeResolver::new(sheet);

    let direct = resolver.resolve(&doc_path(&[("h1", ""), ("i", "")]));
    assert!(direct.contains(StyleCategory::ForegroundColor));

    // `i` under `p` is not an `h1 i` match.
    let elsewhere = resolver.resolve(&doc_path(&[("p", ""), ("i", "")]));
    assert!(!elsewhere.contains(StyleCategory::ForegroundColor));

    // Only the immediate parent is consulted: h1 > b > i does not match.
    let deeper = resolver.resolve(&doc_path(&[("h1", ""), ("b", ""), ("i", "")]));
    assert!(!deeper.contains(StyleCategory::ForegroundColor));
}

#[test]
fn inherited_categories_survive_unrelated_overrides() {
    let sheet = Stylesheet::new()
        .rule("*", [StyleProperty::FontName("serif".to_string())])
        .rule("p", [StyleProperty::FontSize(14.0)])
        .rule("i", [StyleProperty::Kerning(5.0)]);

    let mut resolver = CascadeResolver::new(sheet);
    let styles = resolver.resolve(&doc_path(&[("p", ""), ("i", "")]));

    // Font name from `*`, size from `p`, kerning from `i`, all present.
    assert!(styles.contains(StyleCategory::FontName));
    assert_eq!(
        styles.get(StyleCategory::FontSize),
        Some(&StyleProperty::FontSize(14.0))
    );
    assert_eq!(
        styles.get(StyleCategory::Kerning),
        Some(&StyleProperty::Kerning(5.0))
    );
}

// ============================================================================
// CATEGORY UNIQUENESS & DETERMINISM
// ============================================================================

#[test]
fn resolved_sets_hold_one_property_per_category() {
    let sheet = Stylesheet::new()
        .rule("*", [StyleProperty::FontSize(12.0)])
        .rule("p", [StyleProperty::FontSize(14.0)])
        .rule(".note", [StyleProperty::FontSize(16.0)])
        .rule("p.note", [StyleProperty::FontSize(18.0)]);

    let mut resolver = CascadeResolver::new(sheet);
    let styles = resolver.resolve(&doc_path(&[("p", "note")]));

    assert_eq!(styles.len(), 1);
    assert_eq!(
        styles.get(StyleCategory::FontSize),
        Some(&StyleProperty::FontSize(18.0))
    );
}

#[test]
fn compile_is_a_pure_function_of_the_path() {
    let sheet = || {
        Stylesheet::new()
            .rule("*", [StyleProperty::FontSize(12.0)])
            .rule("p", [StyleProperty::ParagraphSpacing(10.0)])
    };
    let target = doc_path(&[("p", ""), ("i", "")]);

    let mut warmed = AttributeCompiler::new(sheet());
    warmed.compile(&doc_path(&[("p", "")]));
    warmed.compile(&target);
    let from_warm = warmed.compile(&target);

    let mut fresh = AttributeCompiler::new(sheet());
    let from_fresh = fresh.compile(&target);

    assert_eq!(from_warm, from_fresh);
}

#[test]
#[should_panic(expected = "empty document path")]
fn compiling_an_empty_path_panics() {
    let mut compiler = AttributeCompiler::new(Stylesheet::new());
    compiler.compile(&DocumentPath::new());
}

#[test]
fn compiler_exposes_its_resolver_and_stylesheet() {
    let sheet = Stylesheet::new().rule("p", [StyleProperty::FontSize(14.0)]);
    let compiler = AttributeCompiler::new(sheet);
    assert_eq!(compiler.resolver().stylesheet().len(), 1);
}
