//! Image fetcher port for the captioned picture service.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::params::DisplayParams;

/// A request for one captioned picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Text rendered onto the picture; appended to the request path.
    pub caption: String,
    /// Display parameters sent as query parameters.
    #[serde(flatten)]
    pub display: DisplayParams,
}

impl FetchRequest {
    /// Create a request for `caption` using the shared display parameters.
    #[must_use]
    pub fn new(caption: &str, display: &DisplayParams) -> Self {
        Self { caption: caption.to_string(), display: display.clone() }
    }
}

/// A successfully fetched picture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedImage {
    /// HTTP status the service answered with.
    pub status: u16,
    /// Raw encoded image bytes.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

/// Boxed future type returned by [`ImageFetcher::fetch`].
pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<FetchedImage, CardError>> + Send + 'a>>;

/// Fetches captioned pictures from an external service.
pub trait ImageFetcher: Send + Sync {
    /// Fetch one picture. A single attempt; no retry.
    fn fetch(&self, request: &FetchRequest) -> FetchFuture<'_>;
}

/// Serde helper for serializing `Vec<u8>` as base64 strings in cassettes.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> DisplayParams {
        DisplayParams { width: 400, height: 500, color: "Pink".into(), size: 100 }
    }

    #[test]
    fn request_serializes_flat() {
        let request = FetchRequest::new("Hello", &display());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "caption": "Hello",
                "width": 400,
                "height": 500,
                "color": "Pink",
                "size": 100
            })
        );
    }

    #[test]
    fn fetched_image_data_is_base64() {
        let image = FetchedImage { status: 200, data: vec![0xFF, 0xD8, 0xFF, 0xE0] };
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["data"], "/9j/4A==");

        let back: FetchedImage = serde_json::from_value(json).unwrap();
        assert_eq!(back.data, vec![0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(back.status, 200);
    }

    #[test]
    fn invalid_base64_rejected() {
        let result: Result<FetchedImage, _> =
            serde_json::from_value(serde_json::json!({"status": 200, "data": "not base64!"}));
        assert!(result.is_err());
    }
}
