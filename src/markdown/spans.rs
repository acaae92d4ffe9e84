//! The bold-span scan: splitting a line into styled runs.

use memchr::memmem;

use crate::document::Span;

/// Two-character delimiter toggling bold emphasis.
const MARKER: &[u8] = b"**";

/// Split a line into contiguous runs sharing one emphasis state.
///
/// Scans left to right for `**` markers, toggling a bold flag that starts
/// out false. Text accumulated since the previous marker is emitted with the
/// state in effect before the toggle; empty accumulations produce no span.
/// Marker pairing is not validated: an odd marker count leaves the rest of
/// the line bold.
///
/// Joining the returned span texts in order reproduces the input line with
/// every `**` removed.
///
/// # Examples
///
/// ```
/// use mdocx::scan_spans;
///
/// let spans = scan_spans("**Bold:** plain text");
/// assert_eq!(spans.len(), 2);
/// assert!(spans[0].bold);
/// assert_eq!(spans[1].text, " plain text");
/// ```
pub fn scan_spans(line: &str) -> Vec<Span> {
    let bytes = line.as_bytes();
    let mut spans = Vec::new();
    let mut bold = false;
    let mut pos = 0;

    // `*` is ASCII, so match offsets always land on char boundaries.
    while let Some(found) = memmem::find(&bytes[pos..], MARKER) {
        let start = pos + found;
        if start > pos {
            spans.push(Span::new(&line[pos..start], bold));
        }
        bold = !bold;
        pos = start + MARKER.len();
    }

    if pos < line.len() {
        spans.push(Span::new(&line[pos..], bold));
    }

    spans
}
