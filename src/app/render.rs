//! Pure planning step between catalog content and widgets.
//!
//! One node per block, in block order; `Unknown` blocks plan nothing. The
//! widget layer (`crate::ui::content`) realizes the plan without making any
//! further content decisions.

use super::catalog::{ContentBlock, DocEntry};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode<'a> {
    Heading { text: &'a str },
    Body { text: &'a str },
    Listing { language: &'a str, code: &'a str },
    LinkButton { label: &'a str, url: &'a str },
}

/// Map an entry's content to render nodes.
pub fn plan(entry: &DocEntry) -> Vec<RenderNode<'_>> {
    entry
        .content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Title { text } => Some(RenderNode::Heading { text }),
            ContentBlock::Paragraph { text } => Some(RenderNode::Body { text }),
            ContentBlock::Code { language, code } => {
                Some(RenderNode::Listing { language, code })
            }
            ContentBlock::Button { label, url } => Some(RenderNode::LinkButton { label, url }),
            ContentBlock::Unknown => None,
        })
        .collect()
}

/// Delay between two consecutive blocks of the entrance reveal.
pub const STAGGER_STEP_SECS: f64 = 0.1;

/// Reveal delay for the node at `index`.
pub fn stagger_delay(index: usize) -> f64 {
    STAGGER_STEP_SECS * index as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog::ContentBlock;

    fn entry(content: Vec<ContentBlock>) -> DocEntry {
        DocEntry {
            id: "mongodb".to_string(),
            name: "MongoDB".to_string(),
            content,
        }
    }

    #[test]
    fn test_one_node_per_block_in_order() {
        let entry = entry(vec![
            ContentBlock::title("Installation"),
            ContentBlock::paragraph("Install the package."),
            ContentBlock::code("bash", "npm install build-my-meta"),
            ContentBlock::button("View on npm", "https://www.npmjs.com/package/build-my-meta"),
        ]);
        let nodes = plan(&entry);
        assert_eq!(
            nodes,
            vec![
                RenderNode::Heading { text: "Installation" },
                RenderNode::Body { text: "Install the package." },
                RenderNode::Listing { language: "bash", code: "npm install build-my-meta" },
                RenderNode::LinkButton {
                    label: "View on npm",
                    url: "https://www.npmjs.com/package/build-my-meta",
                },
            ]
        );
    }

    #[test]
    fn test_unknown_blocks_are_skipped_silently() {
        let entry = entry(vec![
            ContentBlock::title("Installation"),
            ContentBlock::code("bash", "npm install build-my-meta"),
            ContentBlock::Unknown,
        ]);
        let nodes = plan(&entry);
        assert_eq!(nodes.len(), 2);
        assert!(matches!(nodes[0], RenderNode::Heading { .. }));
        assert!(matches!(nodes[1], RenderNode::Listing { .. }));
    }

    #[test]
    fn test_empty_content_plans_nothing() {
        assert!(plan(&entry(Vec::new())).is_empty());
    }

    #[test]
    fn test_stagger_delays_grow_with_index() {
        assert_eq!(stagger_delay(0), 0.0);
        assert!(stagger_delay(3) > stagger_delay(2));
        assert!((stagger_delay(5) - 0.5).abs() < 1e-9);
    }
}
