//! Validated card parameters shared by both fetches.

use serde::{Deserialize, Serialize};

/// Display parameters sent as query parameters on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayParams {
    /// Requested image width in pixels; also the placement offset of the second image.
    pub width: u32,
    /// Requested image height in pixels.
    pub height: u32,
    /// Caption text color, a name (`"Pink"`) or hex (`"#ff00aa"`).
    pub color: String,
    /// Caption text size.
    pub size: u32,
}

/// Everything one run needs: both captions plus the shared display parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardParams {
    /// Caption for the first (left) image.
    pub greeting: String,
    /// Caption for the second (right) image.
    pub who: String,
    /// Parameters reused unchanged for both requests.
    pub display: DisplayParams,
}

impl CardParams {
    /// Build validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a caption is empty, a dimension is zero, or the
    /// color is neither a color name nor a hex color.
    pub fn new(
        greeting: impl Into<String>,
        who: impl Into<String>,
        display: DisplayParams,
    ) -> Result<Self, String> {
        let greeting = greeting.into();
        let who = who.into();
        validate_caption(&greeting)?;
        validate_caption(&who)?;
        validate_positive("width", display.width)?;
        validate_positive("height", display.height)?;
        validate_positive("size", display.size)?;
        validate_color(&display.color)?;
        Ok(Self { greeting, who, display })
    }
}

/// Validate a caption.
///
/// # Errors
///
/// Returns an error if the caption is empty, only whitespace, or a `.`/`..`
/// path segment, which URL normalization would drop from the request path.
pub fn validate_caption(caption: &str) -> Result<(), String> {
    if caption.trim().is_empty() {
        Err("Caption must not be empty".to_string())
    } else if matches!(caption, "." | "..") {
        Err(format!("Caption '{caption}' is not allowed"))
    } else {
        Ok(())
    }
}

fn validate_positive(name: &str, value: u32) -> Result<(), String> {
    if value == 0 {
        Err(format!("{name} must be a positive integer"))
    } else {
        Ok(())
    }
}

/// Validate a caption color: a color name or `#rgb` / `#rrggbb`.
///
/// # Errors
///
/// Returns an error if the value is not a plausible color.
pub fn validate_color(color: &str) -> Result<(), String> {
    let valid = if let Some(hex) = color.strip_prefix('#') {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else {
        (1..=32).contains(&color.len()) && color.chars().all(|c| c.is_ascii_alphabetic())
    };

    if valid {
        Ok(())
    } else {
        Err(format!("Unsupported color '{color}'. Use a color name or #rgb / #rrggbb"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> DisplayParams {
        DisplayParams { width: 400, height: 500, color: "Pink".into(), size: 100 }
    }

    #[test]
    fn valid_params() {
        let params = CardParams::new("Hello", "You", display()).unwrap();
        assert_eq!(params.greeting, "Hello");
        assert_eq!(params.who, "You");
        assert_eq!(params.display.width, 400);
    }

    #[test]
    fn empty_caption_rejected() {
        assert!(CardParams::new("", "You", display()).is_err());
        assert!(CardParams::new("Hello", "   ", display()).is_err());
    }

    #[test]
    fn dot_segment_captions_rejected() {
        assert!(validate_caption(".").is_err());
        assert!(validate_caption("..").is_err());
        assert!(CardParams::new("Hello", "..", display()).is_err());
        assert!(validate_caption("...").is_ok());
        assert!(validate_caption("a.b").is_ok());
    }

    #[test]
    fn zero_dimension_rejected() {
        let mut d = display();
        d.width = 0;
        assert!(CardParams::new("Hello", "You", d).is_err());

        let mut d = display();
        d.size = 0;
        let err = CardParams::new("Hello", "You", d).unwrap_err();
        assert!(err.contains("size"));
    }

    #[test]
    fn color_names() {
        assert!(validate_color("Pink").is_ok());
        assert!(validate_color("blue").is_ok());
        assert!(validate_color("").is_err());
        assert!(validate_color("light blue").is_err());
        assert!(validate_color("red1").is_err());
    }

    #[test]
    fn color_hex() {
        assert!(validate_color("#fff").is_ok());
        assert!(validate_color("#FF00aa").is_ok());
        assert!(validate_color("#ff00a").is_err());
        assert!(validate_color("#ggg").is_err());
        assert!(validate_color("#").is_err());
    }
}
