//! Compiles a small article fragment against a realistic stylesheet and
//! prints the resulting runs.
//!
//! Run with: `cargo run --example article`

use qss::{LineStyle, Rgba, StyleProperty, Stylesheet};
use quill::compile_markup;

const ARTICLE: &str = r#"
<h1>The <i>Quill</i> Engine</h1>
<p class="intro">Styled text from markup, one cascade at a time.</p>
<p>Every run below carries the attributes resolved for its position in
the document tree. Links such as
<a href="https://example.com/docs">the documentation</a> keep their
attributes for hit-testing after layout.</p>
<p class="blockquote">Indented quotes get their own margins from a
single class rule.</p>
"#;

fn main() {
    let blue = Rgba::rgb(0, 0, 255);
    let red = Rgba::rgb(255, 0, 0);

    let stylesheet = Stylesheet::new()
        .rule(
            "*",
            [
                StyleProperty::FontName("Avenir-Book".to_string()),
                StyleProperty::FontSize(12.0),
            ],
        )
        .rule(
            "h1",
            [
                StyleProperty::FontName("Courier-Bold".to_string()),
                StyleProperty::FontSize(18.0),
                StyleProperty::ParagraphSpacing(25.0),
                StyleProperty::ForegroundColor(blue),
            ],
        )
        .rule(
            "h1 i",
            [
                StyleProperty::FontName("Courier-BoldOblique".to_string()),
                StyleProperty::ForegroundColor(blue),
            ],
        )
        .rule(
            "p",
            [
                StyleProperty::FontSize(14.0),
                StyleProperty::ParagraphSpacing(10.0),
                StyleProperty::FirstLineHeadIndent(20.0),
            ],
        )
        .rule(
            "p.blockquote",
            [
                StyleProperty::FirstLineHeadIndent(50.0),
                StyleProperty::HeadIndent(50.0),
                StyleProperty::TailIndent(-50.0),
            ],
        )
        .rule(
            "a",
            [
                StyleProperty::ForegroundColor(red),
                StyleProperty::UnderlineStyle(
                    LineStyle::DOUBLE | LineStyle::PATTERN_DASH_DOT_DOT,
                ),
            ],
        )
        .rule(
            "i",
            [
                StyleProperty::FontName("Courier-Oblique".to_string()),
                StyleProperty::Kerning(5.0),
            ],
        )
        .rule("b", [StyleProperty::FontName("Courier-Bold".to_string())]);

    let document = match compile_markup(ARTICLE, stylesheet) {
        Ok(document) => document,
        Err(err) => {
            eprintln!("compile failed: {err}");
            std::process::exit(1);
        }
    };

    for (index, run) in document.iter().enumerate() {
        let font = run
            .attributes
            .font
            .as_ref()
            .map(|font| format!("{} {:.0}pt", font.family, font.size))
            .unwrap_or_else(|| "(inherited font)".to_string());
        let kind = if run.is_paragraph_break() {
            "¶ break"
        } else {
            "text"
        };
        print!("{index:3} [{kind}] {font}");
        if let Some(href) = run.anchor_value("href") {
            print!(" -> {href}");
        }
        if !run.is_paragraph_break() {
            print!("  {:?}", run.text);
        }
        println!();
    }

    println!("---");
    println!("{} runs, {} anchored", document.len(), document.anchored_runs().count());
}
