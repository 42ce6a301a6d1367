// SPDX-License-Identifier: MPL-2.0
//! Markdown description parsing.
//!
//! Product descriptions and specifications are authored as markdown in the
//! admin tooling. Rendering to a widget tree is the view's job; this module
//! only folds the event stream into a flat list of text blocks the view can
//! lay out. Inline emphasis is flattened to plain text and raw HTML is
//! dropped before rendering.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// One renderable block of a parsed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading with its level (1-6).
    Heading { level: u8, text: String },
    /// Plain paragraph. Soft line breaks are preserved as newlines, matching
    /// the storefront's `breaks: true` rendering of author line breaks.
    Paragraph(String),
    /// Bulleted list item.
    ListItem(String),
}

/// Parses a markdown source into renderable blocks.
#[must_use]
pub fn parse_description(source: &str) -> Vec<Block> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Drop inline/block raw HTML before rendering.
    let parser = Parser::new_ext(source, options).filter(|event| {
        !matches!(event, Event::Html(_) | Event::InlineHtml(_))
    });

    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut heading_level: Option<u8> = None;
    let mut in_item = false;

    let mut flush = |current: &mut String, heading_level: &mut Option<u8>, in_item: bool| {
        let text = current.trim().to_string();
        current.clear();
        if text.is_empty() {
            *heading_level = None;
            return;
        }
        let block = match heading_level.take() {
            Some(level) => Block::Heading { level, text },
            None if in_item => Block::ListItem(text),
            None => Block::Paragraph(text),
        };
        blocks.push(block);
    };

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush(&mut current, &mut heading_level, in_item);
                heading_level = Some(heading_rank(level));
            }
            Event::Start(Tag::Item) => {
                flush(&mut current, &mut heading_level, in_item);
                in_item = true;
            }
            Event::End(TagEnd::Heading(_)) | Event::End(TagEnd::Paragraph) => {
                flush(&mut current, &mut heading_level, in_item);
            }
            Event::End(TagEnd::Item) => {
                flush(&mut current, &mut heading_level, in_item);
                in_item = false;
            }
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::SoftBreak | Event::HardBreak => current.push('\n'),
            _ => {}
        }
    }
    flush(&mut current, &mut heading_level, in_item);

    blocks
}

fn heading_rank(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_yields_no_blocks() {
        assert!(parse_description("").is_empty());
    }

    #[test]
    fn paragraphs_and_headings_are_split() {
        let blocks = parse_description("# Materiales\n\nMadera nativa.\n\nPintura no tóxica.");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 1,
                    text: "Materiales".to_string()
                },
                Block::Paragraph("Madera nativa.".to_string()),
                Block::Paragraph("Pintura no tóxica.".to_string()),
            ]
        );
    }

    #[test]
    fn list_items_become_individual_blocks() {
        let blocks = parse_description("- Largo: 30 cm\n- Ancho: 10 cm");
        assert_eq!(
            blocks,
            vec![
                Block::ListItem("Largo: 30 cm".to_string()),
                Block::ListItem("Ancho: 10 cm".to_string()),
            ]
        );
    }

    #[test]
    fn soft_breaks_are_kept_as_newlines() {
        let blocks = parse_description("Primera línea\nSegunda línea");
        assert_eq!(
            blocks,
            vec![Block::Paragraph("Primera línea\nSegunda línea".to_string())]
        );
    }

    #[test]
    fn inline_emphasis_is_flattened() {
        let blocks = parse_description("Un tren **artesanal** de *madera*.");
        assert_eq!(
            blocks,
            vec![Block::Paragraph("Un tren artesanal de madera.".to_string())]
        );
    }

    #[test]
    fn raw_html_is_dropped() {
        let blocks = parse_description("<script>alert(1)</script>\n\nTexto seguro.");
        assert_eq!(blocks, vec![Block::Paragraph("Texto seguro.".to_string())]);
    }
}
