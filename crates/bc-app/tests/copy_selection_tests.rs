//! Tests for the [`CopySelection`] use case.

mod common;

use std::sync::Arc;

use bc_app::use_cases::CopySelection;
use bc_core::clipboard::MimeType;
use bc_core::node::Node;

use common::{FixedSelection, RecordingClipboard};

#[tokio::test]
async fn copy_writes_one_multi_format_item() {
    let selection = Arc::new(FixedSelection::of(vec![
        Node::element("p", vec![Node::text("Hello")]),
        Node::element("p", vec![Node::text("World")]),
    ]));
    let clipboard = Arc::new(RecordingClipboard::multi_format());

    CopySelection::new(selection, clipboard.clone())
        .execute()
        .unwrap()
        .expect("write spawned")
        .await
        .unwrap();

    let writes = clipboard.writes.lock().unwrap();
    assert_eq!(writes.len(), 1);
    let items = &writes[0];
    assert_eq!(items[0].mime, MimeType::text_plain());
    assert_eq!(items[0].text, "Hello\n\nWorld");
    assert_eq!(items[1].mime, MimeType::text_html());
    assert_eq!(items[1].text, "<p>Hello</p><p>World</p>");
    drop(writes);
    assert_eq!(clipboard.text_write_count(), 0);
}

#[tokio::test]
async fn copy_with_empty_selection_touches_nothing() {
    let selection = Arc::new(FixedSelection::empty());
    let clipboard = Arc::new(RecordingClipboard::multi_format());

    let write = CopySelection::new(selection, clipboard.clone())
        .execute()
        .unwrap();

    assert!(write.is_none());
    assert_eq!(clipboard.write_count(), 0);
    assert_eq!(clipboard.text_write_count(), 0);
}

#[tokio::test]
async fn copy_rejection_falls_back_to_plain_text_exactly_once() {
    let selection = Arc::new(FixedSelection::of(vec![Node::element(
        "p",
        vec![Node::text("payload")],
    )]));
    let clipboard = Arc::new(RecordingClipboard::failing_multi_format());

    CopySelection::new(selection, clipboard.clone())
        .execute()
        .unwrap()
        .expect("write spawned")
        .await
        .unwrap();

    assert_eq!(clipboard.write_count(), 0);
    let texts = clipboard.text_writes.lock().unwrap();
    assert_eq!(*texts, ["payload"]);
}

#[tokio::test]
async fn copy_degrades_when_backend_is_plain_text_only() {
    let selection = Arc::new(FixedSelection::of(vec![Node::element(
        "heading",
        vec![Node::text("Title")],
    )]));
    let clipboard = Arc::new(RecordingClipboard::plain_text_only());

    CopySelection::new(selection, clipboard.clone())
        .execute()
        .unwrap()
        .expect("write spawned")
        .await
        .unwrap();

    assert_eq!(clipboard.write_count(), 0);
    let texts = clipboard.text_writes.lock().unwrap();
    assert_eq!(*texts, ["Title"]);
}

#[tokio::test]
async fn copy_serializes_documents_straight_from_editor_json() {
    let document: Vec<Node> = serde_json::from_str(
        r#"[
            {"type": "heading", "children": [{"text": "Notes"}]},
            {"type": "p", "children": [{"text": "first "}, {"text": "line", "bold": true}]},
            {"bogus": {"shape": true}}
        ]"#,
    )
    .unwrap();
    let selection = Arc::new(FixedSelection::of(document));
    let clipboard = Arc::new(RecordingClipboard::multi_format());

    CopySelection::new(selection, clipboard.clone())
        .execute()
        .unwrap()
        .expect("write spawned")
        .await
        .unwrap();

    let writes = clipboard.writes.lock().unwrap();
    assert_eq!(writes[0][0].text, "Notes\n\nfirst line");
    assert_eq!(
        writes[0][1].text,
        "<heading>Notes</heading><p>first line</p><p></p>"
    );
}
