use std::sync::OnceLock;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use batchform_core::errors::{FormError, FormResult};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Standard alphabet, padding optional on decode.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

static DATA_URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn data_url_regex() -> &'static Regex {
    DATA_URL_REGEX.get_or_init(|| {
        Regex::new(r"data:(.*?);(?:.*;)*name=(.*?)\.(.*?);(?:.*;)*base64,(.*)").expect("data URL regex")
    })
}

/// A `data:` URL carrying a named file, e.g.
/// `data:image/png;name=logo.png;base64,iVBORw0...`.
///
/// The file name is split at its first `.`: everything before it is the
/// (percent-decoded) name, the rest up to the next `;` is the extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataUrl {
    /// MIME type, e.g. `image/png`
    pub mime_type: String,
    /// File name without extension
    pub filename: String,
    /// File extension without the dot
    pub extension: String,
    /// Base64 payload, still encoded
    pub b64data: String,
}

/// Decoded file carried by a [`DataUrl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrlFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// Splits a data URL into its parts. The payload is not decoded here.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidDataUrl`] when the URL lacks a `name=` or `base64,`
    /// part, or when the name is not valid percent-encoded UTF-8.
    pub fn parse(input: &str) -> FormResult<Self> {
        let captures = data_url_regex().captures(input).ok_or_else(|| {
            FormError::InvalidDataUrl(
                "Invalid base64 format. Ensure it includes name and base64 parts.".to_string(),
            )
        })?;

        let group = |index: usize| captures.get(index).map_or("", |m| m.as_str());
        let filename = urlencoding::decode(group(2))
            .map_err(|err| FormError::InvalidDataUrl(format!("Invalid file name encoding: {err}")))?
            .into_owned();

        Ok(Self {
            mime_type: group(1).to_string(),
            filename,
            extension: group(3).to_string(),
            b64data: group(4).to_string(),
        })
    }

    /// The decoded payload. ASCII whitespace is ignored and padding is
    /// optional, as browsers accept.
    pub fn buffer(&self) -> FormResult<Vec<u8>> {
        let data: String = self.b64data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        Ok(FORGIVING.decode(data)?)
    }

    /// `name.extension`
    pub fn file_name_with_extension(&self) -> String {
        format!("{}.{}", self.filename, self.extension)
    }

    pub fn to_file(&self) -> FormResult<DataUrlFile> {
        Ok(DataUrlFile {
            name: self.file_name_with_extension(),
            mime_type: self.mime_type.clone(),
            bytes: self.buffer()?,
        })
    }
}

impl std::str::FromStr for DataUrl {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
