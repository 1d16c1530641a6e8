use crate::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Encode raw bytes to standard Base64.
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a standard Base64 string back to raw bytes.
pub fn decode_str(data: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(data)?)
}

/// Read a file and return its Base64 representation, for building
/// image-to-image, inpaint and controlnet payloads.
pub fn file_to_base64(path: impl AsRef<Path>) -> Result<String> {
    Ok(STANDARD.encode(fs::read(path)?))
}

/// Decode Base64 image data and write the raw bytes to `path`, overwriting
/// any existing file.
pub fn base64_to_file(data: &str, path: impl AsRef<Path>) -> Result<()> {
    let bytes = STANDARD.decode(data)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Parsed response from a generation endpoint.
///
/// The provider returns a JSON object whose shape varies per pipeline; the
/// raw value is kept verbatim and the common fields are exposed through
/// accessors. A response without an `image` field is valid (for example when
/// the payload requested a hosted URL instead of inline data).
#[derive(Debug, Clone)]
pub struct ImageResult {
    raw: Value,
}

impl ImageResult {
    pub(crate) fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The Base64-encoded image data, if the response carried one.
    pub fn image(&self) -> Option<&str> {
        self.raw.get("image").and_then(Value::as_str)
    }

    /// Decode the `image` field to raw bytes. `Ok(None)` when the field is
    /// absent.
    pub fn decode_image(&self) -> Result<Option<Vec<u8>>> {
        self.image().map(decode_str).transpose()
    }

    /// Write the decoded image to `path`. Returns `Ok(false)` without
    /// touching the filesystem when the response has no `image` field.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<bool> {
        match self.image() {
            Some(data) => {
                base64_to_file(data, path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Seed used for the generation, when reported.
    pub fn seed(&self) -> Option<u64> {
        self.raw.get("seed").and_then(Value::as_u64)
    }

    /// Credit cost of the request, when reported.
    pub fn cost(&self) -> Option<f64> {
        self.raw.get("cost").and_then(Value::as_f64)
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    pub fn into_inner(self) -> Value {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base64_round_trip() {
        for input in [&b""[..], &b"a"[..], &b"\x00\xffhello\x01"[..]] {
            let encoded = encode_bytes(input);
            assert_eq!(decode_str(&encoded).unwrap(), input);
        }
    }

    #[test]
    fn test_base64_round_trip_large() {
        let input: Vec<u8> = (0..3 * 1024 * 1024).map(|i| (i % 251) as u8).collect();
        let encoded = encode_bytes(&input);
        assert_eq!(decode_str(&encoded).unwrap(), input);
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        assert!(decode_str("not valid base64!!!").is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join("getimg-image-file-round-trip.bin");
        let bytes = b"\x89PNG\r\n\x1a\nfake image body";

        base64_to_file(&encode_bytes(bytes), &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
        assert_eq!(file_to_base64(&path).unwrap(), encode_bytes(bytes));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_image_result_accessors() {
        let result = ImageResult::new(json!({
            "image": encode_bytes(b"pixels"),
            "seed": 42,
            "cost": 0.25,
        }));
        assert_eq!(result.decode_image().unwrap().unwrap(), b"pixels");
        assert_eq!(result.seed(), Some(42));
        assert_eq!(result.cost(), Some(0.25));
    }

    #[test]
    fn test_save_skips_when_image_missing() {
        let path = std::env::temp_dir().join("getimg-image-result-missing.bin");
        let _ = std::fs::remove_file(&path);

        let result = ImageResult::new(json!({"url": "https://cdn.example/img.png"}));
        assert!(!result.save(&path).unwrap());
        assert!(!path.exists());
    }
}
