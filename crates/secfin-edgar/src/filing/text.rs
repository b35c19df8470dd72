//! Plain-text extraction from filing documents

use scraper::{Html, Node};

/// Elements whose contents never reach the extracted text
const SKIPPED_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Extract whitespace-collapsed text from an HTML (or plain text) document
pub fn extract_text(content: &str) -> String {
    if !content.contains('<') {
        return collapse_whitespace(content);
    }

    let document = Html::parse_document(content);
    let mut text = String::with_capacity(content.len() / 4);

    for node in document.tree.root().descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(element) if SKIPPED_ELEMENTS.contains(&element.name()))
        });
        if !hidden {
            text.push_str(fragment);
            text.push(' ');
        }
    }

    collapse_whitespace(&text)
}

/// Collapse every whitespace run to a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
