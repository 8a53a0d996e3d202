use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracker_logging::tracker_warn;

/// Page text after charset detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub html: String,
    pub encoding: &'static str,
}

/// Decodes the response body, choosing the charset from the BOM, then the
/// `Content-Type` header, then a `chardetng` guess.
///
/// Malformed sequences become U+FFFD; a bad byte never fails the run.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> DecodedPage {
    let encoding = sniff_encoding(bytes, content_type);
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracker_warn!("Page contained invalid {} sequences; replaced", used.name());
    }
    DecodedPage {
        html: text.into_owned(),
        encoding: used.name(),
    }
}

fn sniff_encoding(bytes: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((bom, _)) = Encoding::for_bom(bytes) {
        return bom;
    }
    if let Some(declared) = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return declared;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']))
    })
}
