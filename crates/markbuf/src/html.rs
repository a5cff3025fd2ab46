//! The bundled HTML escaper.

use bstr::ByteSlice;

use crate::escape::{Escaper, Transform};

// Bytes that cannot appear verbatim in HTML text or quoted attribute values.
const SPECIAL: &[u8] = b"&<>\"'";

fn replacement(byte: u8) -> &'static [u8] {
    match byte {
        b'&' => b"&amp;",
        b'<' => b"&lt;",
        b'>' => b"&gt;",
        b'"' => b"&quot;",
        b'\'' => b"&#x27;",
        _ => unreachable!("not an HTML special byte"),
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` to their entity forms; every other
/// byte passes through.
///
/// Only ASCII bytes are rewritten and every replacement is ASCII, so UTF-8
/// input stays valid UTF-8. Scanning uses a vectorized byte-set search,
/// and the transform copies clean runs between escape points in bulk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn scan(&self, input: &[u8]) -> Option<usize> {
        input.find_byteset(SPECIAL)
    }

    fn max_expansion(&self) -> usize {
        // `"` and `'` expand to six bytes each.
        6
    }

    fn transform(&self, input: &[u8], dest: &mut [u8]) -> Transform {
        let mut read = 0;
        let mut written = 0;
        while read < input.len() {
            let rest = &input[read..];
            let run = rest.find_byteset(SPECIAL).unwrap_or(rest.len());
            if run > 0 {
                if written + run > dest.len() {
                    return Transform::DestTooSmall;
                }
                dest[written..written + run].copy_from_slice(&rest[..run]);
                written += run;
                read += run;
                if read == input.len() {
                    break;
                }
            }
            let entity = replacement(input[read]);
            if written + entity.len() > dest.len() {
                return Transform::DestTooSmall;
            }
            dest[written..written + entity.len()].copy_from_slice(entity);
            written += entity.len();
            read += 1;
        }
        Transform::Complete { written }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};

    use rstest::rstest;

    use super::HtmlEscaper;
    use crate::escape::{Escaper, Transform};

    fn escape_all(input: &str) -> String {
        let esc = HtmlEscaper;
        let mut dest = vec![0u8; input.len() * esc.max_expansion()];
        match esc.transform(input.as_bytes(), &mut dest) {
            Transform::Complete { written } => {
                String::from_utf8(dest[..written].to_vec()).unwrap()
            }
            Transform::DestTooSmall => panic!("worst-case destination was too small"),
        }
    }

    #[rstest]
    #[case("", "")]
    #[case("hello", "hello")]
    #[case("a&b", "a&amp;b")]
    #[case("<script>", "&lt;script&gt;")]
    #[case("\"quoted\"", "&quot;quoted&quot;")]
    #[case("it's", "it&#x27;s")]
    #[case("&&&", "&amp;&amp;&amp;")]
    #[case("fish & chips > soup", "fish &amp; chips &gt; soup")]
    #[case("héllo wörld", "héllo wörld")]
    fn escapes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_all(input), expected);
    }

    #[test]
    fn scan_reports_first_special() {
        assert_eq!(HtmlEscaper.scan(b"ab<cd"), Some(2));
        assert_eq!(HtmlEscaper.scan(b"&"), Some(0));
        assert_eq!(HtmlEscaper.scan(b"plain text"), None);
        assert_eq!(HtmlEscaper.scan(b""), None);
    }

    #[test]
    fn undersized_destination_reports_too_small() {
        let mut dest = [0u8; 4];
        assert_eq!(
            HtmlEscaper.transform(b"a&b", &mut dest),
            Transform::DestTooSmall
        );
    }

    #[test]
    fn exact_destination_suffices() {
        // "a&b" escapes to exactly seven bytes.
        let mut dest = [0u8; 7];
        assert_eq!(
            HtmlEscaper.transform(b"a&b", &mut dest),
            Transform::Complete { written: 7 }
        );
        assert_eq!(&dest, b"a&amp;b");
    }
}
