//! Streaming UTF-8 decoding for chunked response bodies.
//!
//! A chunk boundary can land inside a multi-byte character, so decoding
//! each chunk on its own would corrupt it. [`Utf8StreamDecoder`] keeps the
//! incomplete tail of one chunk and prepends it to the next.

use std::char::REPLACEMENT_CHARACTER;

#[derive(Debug, Default, Clone)]
pub struct Utf8StreamDecoder {
    pending: Vec<u8>,
}

impl Utf8StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes as much of `chunk` (plus any held-back bytes) as possible.
    ///
    /// Invalid sequences become U+FFFD. An incomplete sequence at the end
    /// of the input is held back until the next call or [`finish`].
    ///
    /// [`finish`]: Utf8StreamDecoder::finish
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let mut out = String::with_capacity(self.pending.len());
        let mut consumed = 0;

        while consumed < self.pending.len() {
            let rest = &self.pending[consumed..];
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    out.push_str(text);
                    consumed = self.pending.len();
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&rest[..valid]));
                    match e.error_len() {
                        Some(invalid_len) => {
                            out.push(REPLACEMENT_CHARACTER);
                            consumed += valid + invalid_len;
                        }
                        None => {
                            // truncated sequence at the end, wait for more bytes
                            consumed += valid;
                            break;
                        }
                    }
                }
            }
        }

        self.pending.drain(..consumed);
        out
    }

    /// Flushes held-back bytes at end of stream.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        let out = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        out
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(chunks: &[&[u8]]) -> String {
        let mut decoder = Utf8StreamDecoder::new();
        let mut text = String::new();
        for chunk in chunks {
            text.push_str(&decoder.decode(chunk));
        }
        text.push_str(&decoder.finish());
        text
    }

    #[test]
    fn test_ascii_chunks() {
        assert_eq!(decode_all(&[b"It's ", b"funny."]), "It's funny.");
    }

    #[test]
    fn test_two_byte_char_split_across_chunks() {
        let bytes = "café".as_bytes();
        let (head, tail) = bytes.split_at(bytes.len() - 1);

        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(head), "caf");
        assert!(decoder.has_pending());
        assert_eq!(decoder.decode(tail), "é");
        assert!(!decoder.has_pending());
    }

    #[test]
    fn test_four_byte_char_one_byte_per_chunk() {
        let bytes = "🤣".as_bytes();
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(&bytes[0..1]), "");
        assert_eq!(decoder.decode(&bytes[1..2]), "");
        assert_eq!(decoder.decode(&bytes[2..3]), "");
        assert_eq!(decoder.decode(&bytes[3..4]), "🤣");
    }

    #[test]
    fn test_every_split_point_matches_whole_decode() {
        let text = "Pourquoi? Parce que 世界 🤣 ñ fin.";
        let bytes = text.as_bytes();
        for split in 0..=bytes.len() {
            let (a, b) = bytes.split_at(split);
            assert_eq!(decode_all(&[a, b]), text, "split at byte {}", split);
        }
    }

    #[test]
    fn test_invalid_byte_is_replaced_and_decoding_continues() {
        assert_eq!(decode_all(&[b"ab\xFFcd"]), "ab\u{FFFD}cd");
    }

    #[test]
    fn test_truncated_sequence_flushed_on_finish() {
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b"ok\xE4\xB8"), "ok");
        assert_eq!(decoder.finish(), "\u{FFFD}");
        assert!(!decoder.has_pending());
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_empty_chunk_yields_nothing() {
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b""), "");
    }
}
