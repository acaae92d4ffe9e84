//! Shared text utilities.

use std::borrow::Cow;

/// Decode raw bytes to a string, handling the encodings proposal text
/// actually arrives in.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. Falls back to Windows-1252 (common in text exported from word processors)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if !had_errors {
        return text;
    }

    let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_text("résumé".as_bytes()), "résumé");
    }

    #[test]
    fn test_decode_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"hello");
        assert_eq!(decode_text(&bytes), "hello");
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        // 0x93/0x94 are curly quotes in CP1252 and invalid UTF-8
        let bytes = [0x93, b'h', b'i', 0x94];
        assert_eq!(decode_text(&bytes), "\u{201C}hi\u{201D}");
    }
}
