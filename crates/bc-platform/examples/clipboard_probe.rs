//! Manual probe: serialize a small block document and write it to the
//! system clipboard, then paste elsewhere to inspect the result.

use anyhow::Result;

use bc_core::clipboard::ClipboardPayload;
use bc_core::node::Node;
use bc_core::ports::SystemClipboardPort;
use bc_platform::SystemClipboard;

#[tokio::main]
async fn main() -> Result<()> {
    let nodes = vec![
        Node::element("heading", vec![Node::text("BlockClip probe")]),
        Node::element("p", vec![Node::text("plain text and HTML in one item")]),
    ];
    let payload = ClipboardPayload::from_nodes(&nodes);

    let clipboard = SystemClipboard::new();
    if clipboard.supports_multi_format() {
        clipboard.write(payload.items()).await?;
        println!("wrote text/plain + text/html");
    } else {
        clipboard.write_text(payload.text.clone()).await?;
        println!("wrote text/plain only");
    }
    println!("text: {:?}", payload.text);
    println!("html: {:?}", payload.html);
    Ok(())
}
