//! PNG encoding and `data:` URLs.

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use texshot_core::{Result, TexshotError};

/// MIME type of exported images.
pub const PNG_MIME: &str = "image/png";

/// Encode a bitmap as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| TexshotError::Encode(e.to_string()))?;
    Ok(bytes)
}

/// Wrap PNG bytes in a base64 `data:` URL.
///
/// # Example
///
/// ```
/// use texshot_render::data_url;
/// assert_eq!(data_url(b"hi"), "data:image/png;base64,aGk=");
/// ```
pub fn data_url(png: &[u8]) -> String {
    format!("data:{};base64,{}", PNG_MIME, STANDARD.encode(png))
}

/// Split a base64 `data:` URL into its MIME type and payload.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>)> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| TexshotError::Encode("not a data URL".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| TexshotError::Encode("data URL has no payload".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| TexshotError::Encode("data URL is not base64".to_string()))?;

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| TexshotError::Encode(e.to_string()))?;
    Ok((mime.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_png_signature() {
        let image = RgbaImage::from_pixel(3, 2, Rgba([255, 0, 0, 255]));
        let png = encode_png(&image).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_data_url_decodes() {
        let url = data_url(&[1, 2, 3]);
        assert!(url.starts_with("data:image/png;base64,"));
        let (mime, bytes) = decode_data_url(&url).unwrap();
        assert_eq!(mime, PNG_MIME);
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_bad_data_urls() {
        assert!(decode_data_url("http://x").is_err());
        assert!(decode_data_url("data:image/png;base64").is_err());
        assert!(decode_data_url("data:text/plain,hello").is_err());
        assert!(decode_data_url("data:image/png;base64,@@@").is_err());
    }
}
