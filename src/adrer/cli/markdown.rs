//! Terminal rendering of ADR markdown for `view`.
//!
//! This is a light restyle, not a full markdown renderer: headings are bold,
//! inline code is highlighted, rules become a line and list items get bullets.
//! Anything else passes through as text.

use colored::Colorize;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

const RULE_WIDTH: usize = 60;

pub(super) fn style_markdown(source: &str) -> String {
    let mut out = String::new();
    let mut heading: Option<(HeadingLevel, String)> = None;
    let mut in_code_block = false;
    let mut list_depth = 0usize;

    for event in Parser::new(source) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => heading = Some((level, String::new())),
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = heading.take() {
                    let styled = match level {
                        HeadingLevel::H1 => text.bold().underline().cyan().to_string(),
                        HeadingLevel::H2 => text.bold().cyan().to_string(),
                        _ => text.bold().to_string(),
                    };
                    out.push_str(&styled);
                    out.push_str("\n\n");
                }
            }
            Event::Text(text) => match heading.as_mut() {
                Some((_, buf)) => buf.push_str(&text),
                None if in_code_block => out.push_str(&text.dimmed().to_string()),
                None => out.push_str(&text),
            },
            Event::Code(code) => {
                let styled = code.yellow().to_string();
                match heading.as_mut() {
                    Some((_, buf)) => buf.push_str(&styled),
                    None => out.push_str(&styled),
                }
            }
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                out.push('\n');
            }
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    out.push('\n');
                }
            }
            Event::Start(Tag::Item) => {
                out.push_str(&"  ".repeat(list_depth));
                out.push_str("• ");
            }
            Event::End(TagEnd::Item) => out.push('\n'),
            Event::End(TagEnd::Paragraph) if list_depth == 0 => out.push_str("\n\n"),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => {
                out.push_str(&"─".repeat(RULE_WIDTH).dimmed().to_string());
                out.push_str("\n\n");
            }
            _ => {}
        }
    }

    let trimmed = out.trim_end();
    format!("{}\n", trimmed)
}
