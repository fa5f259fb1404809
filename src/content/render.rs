//! Body rendering into typed display blocks
//!
//! The site's posts use a constrained markdown subset: headings up to level
//! four, bullet lists, `**bold**` emphasis, and image references under the
//! asset prefix. The renderer splits the body on blank-line boundaries and
//! classifies each unit by its leading token, first match wins. It is a
//! best-effort transform, not a markdown parser.

use lazy_static::lazy_static;
use regex::Regex;

/// Asset path prefix recognized for image references
pub const DEFAULT_ASSET_PREFIX: &str = "/attached_assets/";

lazy_static! {
    static ref STRONG_RE: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
}

/// An inline run of body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Strong(String),
}

/// One display block of a rendered body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { spans: Vec<Span> },
    List { items: Vec<Vec<Span>> },
    Image { alt: String, src: String },
}

/// Converts a raw body into an ordered block sequence
pub struct ContentRenderer {
    image_re: Regex,
}

impl ContentRenderer {
    pub fn new() -> Self {
        Self::with_asset_prefix(DEFAULT_ASSET_PREFIX)
    }

    /// Recognize image references under a different asset prefix
    pub fn with_asset_prefix(prefix: &str) -> Self {
        let pattern = format!(r"!\[([^\]]*)\]\(({}[^)]+)\)", regex::escape(prefix));
        Self {
            image_re: Regex::new(&pattern).unwrap(),
        }
    }

    pub fn render(&self, content: &str) -> Vec<Block> {
        content
            .split("\n\n")
            .filter_map(|unit| self.classify(unit))
            .collect()
    }

    fn classify(&self, unit: &str) -> Option<Block> {
        let unit = unit.trim();
        if unit.is_empty() {
            return None;
        }

        if let Some(caps) = self.image_re.captures(unit) {
            return Some(Block::Image {
                alt: caps[1].to_string(),
                src: caps[2].to_string(),
            });
        }

        for (marker, level) in [("#### ", 4), ("### ", 3), ("## ", 2), ("# ", 1)] {
            if let Some(text) = unit.strip_prefix(marker) {
                return Some(Block::Heading {
                    level,
                    text: text.trim().to_string(),
                });
            }
        }

        if unit.starts_with("- ") || unit.contains("\n- ") {
            let items: Vec<Vec<Span>> = unit
                .lines()
                .filter_map(|line| line.trim().strip_prefix("- "))
                .map(parse_spans)
                .collect();
            if !items.is_empty() {
                return Some(Block::List { items });
            }
        }

        Some(Block::Paragraph {
            spans: parse_spans(unit),
        })
    }
}

impl Default for ContentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lift `**bold**` runs into strong-emphasis spans
fn parse_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in STRONG_RE.captures_iter(text) {
        let m = caps.get(0).unwrap();
        if m.start() > last {
            spans.push(Span::Text(text[last..m.start()].to_string()));
        }
        spans.push(Span::Strong(caps[1].to_string()));
        last = m.end();
    }
    if last < text.len() {
        spans.push(Span::Text(text[last..].to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_bold_paragraph() {
        let renderer = ContentRenderer::new();
        let blocks = renderer.render("## Title\n\nSome **bold** text");
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            Block::Heading {
                level: 2,
                text: "Title".to_string()
            }
        );
        assert_eq!(
            blocks[1],
            Block::Paragraph {
                spans: vec![
                    Span::Text("Some ".to_string()),
                    Span::Strong("bold".to_string()),
                    Span::Text(" text".to_string()),
                ]
            }
        );
    }

    #[test]
    fn test_all_heading_levels() {
        let renderer = ContentRenderer::new();
        let blocks = renderer.render("# One\n\n## Two\n\n### Three\n\n#### Four");
        let levels: Vec<u8> = blocks
            .iter()
            .map(|b| match b {
                Block::Heading { level, .. } => *level,
                _ => 0,
            })
            .collect();
        assert_eq!(levels, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_image_reference() {
        let renderer = ContentRenderer::new();
        let blocks = renderer.render("![Training run](/attached_assets/run.png)");
        assert_eq!(
            blocks,
            vec![Block::Image {
                alt: "Training run".to_string(),
                src: "/attached_assets/run.png".to_string(),
            }]
        );
    }

    #[test]
    fn test_image_outside_asset_prefix_is_literal_text() {
        let renderer = ContentRenderer::new();
        let blocks = renderer.render("![alt](https://example.com/x.png)");
        assert!(matches!(blocks[0], Block::Paragraph { .. }));
    }

    #[test]
    fn test_bullet_list_with_bold_items() {
        let renderer = ContentRenderer::new();
        let blocks = renderer.render("- **Fast**: sub-second\n- Cheap");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::List { items } => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0][0], Span::Strong("Fast".to_string()));
                assert_eq!(items[1], vec![Span::Text("Cheap".to_string())]);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_list_after_intro_line() {
        let renderer = ContentRenderer::new();
        let blocks = renderer.render("Key points:\n- one\n- two");
        match &blocks[0] {
            Block::List { items } => assert_eq!(items.len(), 2),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_heading_marker_wins_over_other_content() {
        let renderer = ContentRenderer::new();
        let blocks = renderer.render("## Heading with **bold** words");
        assert_eq!(
            blocks[0],
            Block::Heading {
                level: 2,
                text: "Heading with **bold** words".to_string()
            }
        );
    }

    #[test]
    fn test_empty_units_are_dropped() {
        let renderer = ContentRenderer::new();
        assert!(renderer.render("").is_empty());
        assert_eq!(renderer.render("a\n\n\n\nb").len(), 2);
    }

    #[test]
    fn test_custom_asset_prefix() {
        let renderer = ContentRenderer::with_asset_prefix("/media/");
        let blocks = renderer.render("![x](/media/pic.png)");
        assert!(matches!(blocks[0], Block::Image { .. }));
    }
}
