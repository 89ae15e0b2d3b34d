//! Tests for the architecture assembler.

use super::*;

const TWO_OPTION_RESPONSE: &str = "### Architecture Option 1: Foo\n\
Some summary line.\n\
```mermaid\n\
graph TD;\n\
A-->B;\n\
```\n\
Pros: fast\n\
Cons: costly\n\
### Architecture Option 2: Bar\n\
Other text.";

#[test]
fn end_to_end_two_options() {
    let options = extract_options(TWO_OPTION_RESPONSE);
    assert_eq!(options.len(), 2);

    let first = &options[0];
    assert!(!first.summary.trim().is_empty());
    assert_eq!(first.diagram, "graph TD;\nA-->B;");
    assert_eq!(first.pros, "fast");
    assert_eq!(first.cons, "costly");

    let second = &options[1];
    assert!(!second.summary.trim().is_empty());
    assert!(second.summary.contains("Other text."));
    assert_eq!(second.diagram, "");
    assert_eq!(second.pros, "");
    assert_eq!(second.cons, "");
}

#[test]
fn parsing_is_idempotent() {
    let first = extract_options(TWO_OPTION_RESPONSE);
    let second = extract_options(TWO_OPTION_RESPONSE);
    assert_eq!(first, second);
}

#[test]
fn cap_keeps_first_six_in_document_order() {
    let mut text = String::new();
    for i in 1..=8 {
        text.push_str(&format!("## Architecture Option {i}: Design {i}\nBody {i}\n"));
    }
    let options = extract_options(&text);
    assert_eq!(options.len(), MAX_OPTIONS);
    for (i, option) in options.iter().enumerate() {
        assert!(option.summary.contains(&format!("Body {}", i + 1)));
    }
}

#[test]
fn order_matches_headings() {
    let text = "## Architecture Option 1: A\nalpha\n\
                ## Architecture Option 2: B\nbeta\n\
                ## Architecture Option 3: C\ngamma\n";
    let summaries: Vec<String> = extract_options(text).into_iter().map(|o| o.summary).collect();
    assert_eq!(summaries.len(), 3);
    assert!(summaries[0].contains("alpha"));
    assert!(summaries[1].contains("beta"));
    assert!(summaries[2].contains("gamma"));
}

#[test]
fn all_blank_blocks_are_filtered() {
    // A block of bare heading markers strips to an empty summary and has
    // no diagram, pros, or cons — it must not survive assembly.
    let text = "## Architecture Option 1:\n####\n## Architecture Option 2:\nreal content";
    let options = extract_options(text);
    assert_eq!(options.len(), 1);
    assert!(options[0].summary.contains("real content"));
}

#[test]
fn every_returned_option_has_a_non_empty_field() {
    let options = extract_options(TWO_OPTION_RESPONSE);
    assert!(options.iter().all(|o| !o.is_blank()));
}

#[test]
fn no_heading_yields_empty_sequence() {
    assert!(extract_options("Plain prose, no structure.").is_empty());
    assert!(extract_options("").is_empty());
    assert!(extract_options("Something went wrong").is_empty());
}

#[test]
fn summary_takes_first_five_lines() {
    let text = "## Architecture Option 1: X\nl1\nl2\nl3\nl4\nl5\nl6\nl7";
    let options = extract_options(text);
    let summary = &options[0].summary;
    assert!(summary.contains("l4"));
    assert!(!summary.contains("l5"));
    assert!(!summary.contains("l6"));
}

#[test]
fn summary_strips_bullets_and_heading_markers() {
    let text = "## Architecture Option 1: X\n## Overview\n- first point\n* second point";
    let options = extract_options(text);
    let summary = &options[0].summary;
    assert!(summary.contains("Overview"));
    assert!(summary.contains("first point"));
    assert!(summary.contains("second point"));
    assert!(!summary.contains('#'));
    assert!(!summary.contains("- "));
}

#[test]
fn fields_are_derived_independently() {
    // Missing diagram must not affect pros/cons and vice versa.
    let text = "## Architecture Option 1: X\nPros: quick\nCons: fragile";
    let options = extract_options(text);
    assert_eq!(options[0].diagram, "");
    assert_eq!(options[0].pros, "quick");
    assert_eq!(options[0].cons, "fragile");
}

#[test]
fn is_blank_requires_all_fields_blank() {
    let blank = ArchitectureOption {
        summary: "  ".into(),
        diagram: String::new(),
        pros: " ".into(),
        cons: String::new(),
    };
    assert!(blank.is_blank());

    let diagram_only = ArchitectureOption {
        summary: String::new(),
        diagram: "graph TD; A;".into(),
        pros: String::new(),
        cons: String::new(),
    };
    assert!(!diagram_only.is_blank());
}

#[test]
fn option_serde_round_trip() {
    let options = extract_options(TWO_OPTION_RESPONSE);
    let json = serde_json::to_string(&options).unwrap();
    let restored: Vec<ArchitectureOption> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, options);
}
