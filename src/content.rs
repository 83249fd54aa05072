//! Download header construction from a stored filename. No I/O here.

pub const OCTET_STREAM: &str = "application/octet-stream";

const MIME_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("txt", "text/plain"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
];

/// Lowercased suffix after the last `.`, or `None` when the name has no dot.
pub fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Content type for a filename. Unknown or missing extensions map to `application/octet-stream`.
pub fn content_type_for(filename: &str) -> &'static str {
    let Some(ext) = extension(filename) else {
        return OCTET_STREAM;
    };
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(OCTET_STREAM)
}

/// `Content-Disposition` value marking the body as an attachment.
///
/// The quoted `filename` parameter is an ASCII fallback with quotes, backslashes,
/// control and non-ASCII characters replaced by `_`, so the stored name can never
/// terminate the header or inject a new one. The original name is kept in the
/// RFC 5987 `filename*` parameter.
pub fn content_disposition(filename: &str) -> String {
    let fallback = ascii_fallback(filename);
    let encoded = rfc5987_encode(filename);
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    )
}

fn ascii_fallback(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim().is_empty() {
        "download".to_string()
    } else {
        cleaned
    }
}

fn rfc5987_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_extensions_case_insensitively() {
        assert_eq!(content_type_for("report.PDF"), "application/pdf");
        assert_eq!(content_type_for("r.txt"), "text/plain");
        assert_eq!(content_type_for("photo.JpEg"), "image/jpeg");
        assert_eq!(content_type_for("scan.png"), "image/png");
        assert_eq!(content_type_for("old.doc"), "application/msword");
        assert_eq!(
            content_type_for("brief.v2.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn falls_back_to_octet_stream() {
        assert_eq!(content_type_for("notes"), OCTET_STREAM);
        assert_eq!(content_type_for("archive.zip"), OCTET_STREAM);
        assert_eq!(content_type_for("trailing."), OCTET_STREAM);
        assert_eq!(content_type_for(""), OCTET_STREAM);
    }

    #[test]
    fn extension_uses_last_dot() {
        assert_eq!(extension("a.tar.GZ").as_deref(), Some("gz"));
        assert_eq!(extension("noext"), None);
    }

    #[test]
    fn disposition_keeps_plain_names() {
        assert_eq!(
            content_disposition("report.pdf"),
            "attachment; filename=\"report.pdf\"; filename*=UTF-8''report.pdf"
        );
    }

    #[test]
    fn disposition_neutralises_header_injection() {
        let value = content_disposition("evil\"\r\nSet-Cookie: x=1.pdf");
        assert!(!value.contains('\r'));
        assert!(!value.contains('\n'));
        assert!(value.starts_with("attachment; filename=\"evil___Set-Cookie: x=1.pdf\";"));
        assert!(value.ends_with("filename*=UTF-8''evil%22%0D%0ASet-Cookie%3A%20x%3D1.pdf"));
    }

    #[test]
    fn disposition_encodes_non_ascii() {
        let value = content_disposition("résumé.pdf");
        assert!(value.contains("filename=\"r_sum_.pdf\""));
        assert!(value.contains("filename*=UTF-8''r%C3%A9sum%C3%A9.pdf"));
    }

    #[test]
    fn disposition_never_emits_empty_fallback() {
        assert!(content_disposition("").contains("filename=\"download\""));
    }
}
