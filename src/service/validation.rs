//! Upload request validation and base64 decoding.

use crate::error::AppError;
use crate::publication::{NewPublication, UploadRequest};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

const PAD_INDIFFERENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const STANDARD_ANY_PAD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, PAD_INDIFFERENT);
const URL_SAFE_ANY_PAD: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, PAD_INDIFFERENT);

pub struct UploadValidator;

impl UploadValidator {
    /// Check required fields and decode the content. Nothing is written on failure.
    pub fn validate(req: UploadRequest) -> Result<NewPublication, AppError> {
        let title = non_blank(req.title);
        let filename = non_blank(req.filename);
        let encoded = non_blank(req.content_base64);

        let missing: Vec<&str> = [
            ("title", title.is_none()),
            ("filename", filename.is_none()),
            ("contentBase64", encoded.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();
        let (Some(title), Some(filename), Some(encoded)) = (title, filename, encoded) else {
            return Err(AppError::Validation(format!(
                "title, filename and contentBase64 are required (missing: {})",
                missing.join(", ")
            )));
        };

        let content = decode_content(&encoded)?;
        if content.is_empty() {
            return Err(AppError::Validation("contentBase64 decodes to empty content".into()));
        }

        Ok(NewPublication {
            title,
            date: req.date.filter(|d| !d.is_empty()),
            summary: req.summary.filter(|s| !s.is_empty()),
            filename,
            content,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Decode standard or URL-safe base64, padded or not. ASCII whitespace (line wrapping) is ignored.
pub fn decode_content(encoded: &str) -> Result<Vec<u8>, AppError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD_ANY_PAD
        .decode(&compact)
        .or_else(|_| URL_SAFE_ANY_PAD.decode(&compact))
        .map_err(|e| AppError::Validation(format!("contentBase64 is not valid base64: {}", e)))
}
