//! Parent link extraction from dependent stylesheets.
//!
//! A dependent style declares no formatting rules of its own, only a
//! `<link rel="independent-parent" href="..."/>` pointing at its parent.
//! The scan streams quick-xml events instead of building a tree; XML
//! declarations and processing instructions are skipped by the reader.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// `rel` value that marks the parent link of a dependent style.
pub const PARENT_LINK_REL: &str = "independent-parent";

/// Returns the `href` of the first `link` element (in document order) whose
/// `rel` attribute equals `independent-parent`.
///
/// `None` means no such link exists or the document is not well-formed XML;
/// the caller decides whether that is an error.
pub fn extract_parent_link(content: &str) -> Option<String> {
    let mut reader = Reader::from_str(content);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"link" {
                    if let Some(href) = parent_href(&e) {
                        return Some(href);
                    }
                }
            }
            Ok(Event::Eof) => return None,
            // Malformed XML: report "not found" rather than failing the scan.
            Err(_) => return None,
            Ok(_) => {}
        }
    }
}

/// `href` of a `link` element if its `rel` is `independent-parent`.
fn parent_href(e: &BytesStart<'_>) -> Option<String> {
    let mut is_parent_link = false;
    let mut href = None;
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"rel" => {
                if let Ok(value) = attr.unescape_value() {
                    is_parent_link = value == PARENT_LINK_REL;
                }
            }
            b"href" => {
                if let Ok(value) = attr.unescape_value() {
                    href = Some(value.into_owned());
                }
            }
            _ => {}
        }
    }
    if is_parent_link {
        href
    } else {
        None
    }
}
