use base64::{engine::general_purpose::STANDARD, Engine};

/// Base64 encode an image for inline display.
///
/// Returns `None` for a missing or empty image so listings without a picture carry
/// no annotation.
pub fn encode_image(image: Option<&[u8]>) -> Option<String> {
    image
        .filter(|bytes| !bytes.is_empty())
        .map(|bytes| STANDARD.encode(bytes))
}
