use html5ever::LocalName;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Elements whose entire subtree is invisible chrome rather than page
/// content. `noscript` is included because the parser treats its children
/// as raw text, which would otherwise leak markup into the output.
fn is_skipped(local: &LocalName) -> bool {
    matches!(
        &**local,
        "script" | "style" | "noscript" | "nav" | "header" | "footer" | "aside"
    )
}

/// Extracts readable text from an HTML document: boilerplate subtrees are
/// dropped, the remaining text nodes are trimmed and joined with single
/// spaces, and the result is cut to `max_length` characters with a `"..."`
/// marker appended when it was longer. Malformed input degrades to whatever
/// text the parser recovers; this never fails.
pub fn extract_text(raw_html: &str, max_length: usize) -> String {
    let parsed = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut std::io::Cursor::new(raw_html));
    let Ok(dom) = parsed else {
        return String::new();
    };

    let mut text = String::new();
    collect_text(&dom.document, &mut text);
    truncate_chars(text, max_length)
}

fn collect_text(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => {
            let contents = contents.borrow();
            let trimmed = contents.trim();
            if !trimmed.is_empty() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(trimmed);
            }
        }
        NodeData::Element { name, .. } => {
            if is_skipped(&name.local) {
                return;
            }
            for child in handle.children.borrow().iter() {
                collect_text(child, out);
            }
        }
        _ => {
            for child in handle.children.borrow().iter() {
                collect_text(child, out);
            }
        }
    }
}

/// The marker sits on top of the bound: a truncated string is exactly
/// `max_length + 3` characters long.
fn truncate_chars(mut text: String, max_length: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max_length) {
        text.truncate(idx);
        text.push_str("...");
    }
    text
}
