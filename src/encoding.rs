// Input decoding: UTF-8 or UTF-16, detected from the BOM or, failing that,
// from the byte pattern of the first characters.
use crate::error::EncodingError;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::io::Read;
use tracing::debug;

/// Bytes inspected when sniffing BOM-less UTF-16.
const SNIFF_LEN: usize = 64;

/// Text of the whole input file plus the encoding it was read as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub encoding: &'static Encoding,
    pub text: String,
}

impl Decoded {
    /// Input lines without their terminators (`\n` or `\r\n`).
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }
}

/// Read everything from `reader` and decode it.
pub fn read_decoded<R: Read>(mut reader: R) -> crate::error::ProcResult<Decoded> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode(&bytes)?)
}

/// Decode a raw input buffer.
///
/// - A UTF-8 or UTF-16 BOM decides the encoding and is stripped.
/// - Without a BOM, valid UTF-8 wins.
/// - Otherwise, a NUL in every other byte of the first characters marks
///   UTF-16; the parity of the NULs picks little- or big-endian.
///
/// Malformed sequences are never replaced: they fail the whole input.
pub fn decode(bytes: &[u8]) -> Result<Decoded, EncodingError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((enc, bom_len)) => (enc, &bytes[bom_len..]),
        None => (sniff(bytes)?, bytes),
    };
    debug!(encoding = encoding.name(), bytes = bytes.len(), "detected input encoding");

    let text = if encoding == UTF_8 {
        std::str::from_utf8(body).map(str::to_owned).ok()
    } else {
        encoding
            .decode_without_bom_handling_and_without_replacement(body)
            .map(|cow| cow.into_owned())
    };
    let text = text.ok_or(EncodingError::Malformed {
        encoding: encoding.name(),
    })?;
    Ok(Decoded { encoding, text })
}

fn sniff(bytes: &[u8]) -> Result<&'static Encoding, EncodingError> {
    // NUL is valid UTF-8, so UTF-16 has to be ruled out first.
    if let Some(enc) = sniff_utf16(bytes) {
        return Ok(enc);
    }
    if std::str::from_utf8(bytes).is_ok() {
        return Ok(UTF_8);
    }
    Err(EncodingError::Unrecognized)
}

fn sniff_utf16(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let units = head.len() / 2;
    if units == 0 {
        return None;
    }
    let zeros_at = |half: usize| head.chunks_exact(2).filter(|u| u[half] == 0).count();
    // ASCII text in UTF-16 has its zero byte in the high half of each unit.
    match (zeros_at(0), zeros_at(1)) {
        (0, high) if high * 2 >= units => Some(UTF_16LE),
        (high, 0) if high * 2 >= units => Some(UTF_16BE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(s: &str, bom: bool) -> Vec<u8> {
        let mut out = if bom { vec![0xFF, 0xFE] } else { Vec::new() };
        out.extend(s.encode_utf16().flat_map(|u| u.to_le_bytes()));
        out
    }

    fn utf16be(s: &str, bom: bool) -> Vec<u8> {
        let mut out = if bom { vec![0xFE, 0xFF] } else { Vec::new() };
        out.extend(s.encode_utf16().flat_map(|u| u.to_be_bytes()));
        out
    }

    const SAMPLE: &str = "01/02/2020,Bayern,100,5%\n01/03/2020,Zürich,10,1%\n";

    #[test]
    fn plain_utf8() {
        let d = decode(SAMPLE.as_bytes()).unwrap();
        assert_eq!(d.encoding, UTF_8);
        assert_eq!(d.text, SAMPLE);
        assert_eq!(d.lines().count(), 2);
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(SAMPLE.as_bytes());
        let d = decode(&bytes).unwrap();
        assert_eq!(d.encoding, UTF_8);
        assert_eq!(d.text, SAMPLE);
    }

    #[test]
    fn utf16_with_bom() {
        let d = decode(&utf16le(SAMPLE, true)).unwrap();
        assert_eq!(d.encoding, UTF_16LE);
        assert_eq!(d.text, SAMPLE);

        let d = decode(&utf16be(SAMPLE, true)).unwrap();
        assert_eq!(d.encoding, UTF_16BE);
        assert_eq!(d.text, SAMPLE);
    }

    #[test]
    fn utf16_without_bom_is_sniffed() {
        let d = decode(&utf16le(SAMPLE, false)).unwrap();
        assert_eq!(d.encoding, UTF_16LE);
        assert_eq!(d.text, SAMPLE);

        let d = decode(&utf16be(SAMPLE, false)).unwrap();
        assert_eq!(d.encoding, UTF_16BE);
        assert_eq!(d.text, SAMPLE);
    }

    #[test]
    fn crlf_lines_are_split_cleanly() {
        let d = decode(b"a\r\nb\r\n").unwrap();
        assert_eq!(d.lines().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn latin1_bytes_are_unrecognized() {
        // "Zürich" in ISO-8859-1
        let bytes = b"01/02/2020,Z\xfcrich,10,1%\n";
        assert_eq!(decode(bytes), Err(EncodingError::Unrecognized));
    }

    #[test]
    fn truncated_utf16_is_malformed() {
        let mut bytes = utf16le(SAMPLE, true);
        bytes.push(0x41);
        assert_eq!(
            decode(&bytes),
            Err(EncodingError::Malformed { encoding: "UTF-16LE" })
        );
    }

    #[test]
    fn empty_input_is_empty_utf8() {
        let d = decode(b"").unwrap();
        assert_eq!(d.encoding, UTF_8);
        assert_eq!(d.lines().count(), 0);
    }

    #[test]
    fn read_decoded_consumes_reader() {
        let d = read_decoded(std::io::Cursor::new(utf16le("x\n", true))).unwrap();
        assert_eq!(d.text, "x\n");
        assert_eq!(d.encoding_name(), "UTF-16LE");
    }
}
