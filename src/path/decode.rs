use crate::path::{PathError, PathResult};

// Escapes of these characters survive `decodeURI` untouched.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// Strips the leading `#` of a `location.hash` value.
#[inline]
pub fn fragment_to_path(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

/// Decodes percent escapes the way `decodeURI` does.
#[tracing::instrument(level = "trace", fields(input_len = input.len() as u64))]
pub fn decode_fragment(input: &str) -> PathResult<String> {
    let bytes = input.as_bytes();
    if memchr::memchr(b'%', bytes).is_none() {
        return Ok(input.to_string());
    }

    let mut output = Vec::with_capacity(bytes.len());
    let mut idx = 0usize;
    while idx < bytes.len() {
        let byte = bytes[idx];
        if byte != b'%' {
            output.push(byte);
            idx += 1;
            continue;
        }

        if idx + 2 >= bytes.len() {
            return Err(PathError::InvalidPercentEncoding {
                input: input.to_string(),
                index: idx,
            });
        }
        let value = decode_hex_pair(bytes[idx + 1], bytes[idx + 2]).ok_or_else(|| {
            PathError::InvalidPercentEncoding {
                input: input.to_string(),
                index: idx,
            }
        })?;

        if RESERVED.contains(&value) {
            output.extend_from_slice(&bytes[idx..idx + 3]);
        } else {
            output.push(value);
        }
        idx += 3;
    }

    String::from_utf8(output).map_err(|_| PathError::InvalidUtf8AfterDecoding {
        input: input.to_string(),
    })
}

fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    fn val(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    Some(val(hi)? << 4 | val(lo)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_leading_hash() {
        assert_eq!(fragment_to_path("#organizations/42"), "organizations/42");
        assert_eq!(fragment_to_path("##x"), "#x");
        assert_eq!(fragment_to_path(""), "");
    }

    #[test]
    fn passes_through_plain_fragments() {
        assert_eq!(decode_fragment("achievements/7").unwrap(), "achievements/7");
    }

    #[test]
    fn decodes_utf8_sequences() {
        assert_eq!(
            decode_fragment("organizations/Sm%C3%A5land").unwrap(),
            "organizations/Småland"
        );
        assert_eq!(decode_fragment("a%20b").unwrap(), "a b");
    }

    #[test]
    fn keeps_reserved_escapes_encoded() {
        assert_eq!(decode_fragment("a%2Fb").unwrap(), "a%2Fb");
        assert_eq!(decode_fragment("q%3Fx%23y").unwrap(), "q%3Fx%23y");
    }

    #[test]
    fn decodes_escaped_percent_sign() {
        assert_eq!(decode_fragment("100%25").unwrap(), "100%");
        assert_eq!(decode_fragment("%2541").unwrap(), "%41");
    }

    #[test]
    fn decodes_escape_at_end_of_input() {
        assert_eq!(decode_fragment("a%41").unwrap(), "aA");
        assert_eq!(decode_fragment("%41").unwrap(), "A");
    }

    #[test]
    fn rejects_truncated_escape() {
        let err = decode_fragment("abc%4").unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidPercentEncoding {
                input: "abc%4".to_string(),
                index: 3,
            }
        );
    }

    #[test]
    fn rejects_non_hex_escape() {
        match decode_fragment("%zz").unwrap_err() {
            PathError::InvalidPercentEncoding { index, .. } => assert_eq!(index, 0),
            other => panic!("expected InvalidPercentEncoding, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_utf8_after_decoding() {
        match decode_fragment("%C3").unwrap_err() {
            PathError::InvalidUtf8AfterDecoding { input } => assert_eq!(input, "%C3"),
            other => panic!("expected InvalidUtf8AfterDecoding, got {other:?}"),
        }
    }
}
