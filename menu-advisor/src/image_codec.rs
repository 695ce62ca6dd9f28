//! Image normalization and transport encoding.
//!
//! Front ends hand over either a single decoded image or an ordered gallery
//! (one element per photographed menu page). [`ImageInput::normalize`]
//! collapses that to one image; [`to_png_data_uri`] serializes it
//! losslessly to PNG and wraps the base64 payload in a `data:` URI, the
//! shape the completion service expects for image parts.

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{DynamicImage, ImageFormat};

use crate::error::AdvisorError;

/// Heterogeneous image input accepted from front ends.
#[derive(Debug, Clone)]
pub enum ImageInput {
    /// One decoded image.
    Single(DynamicImage),
    /// Ordered collection of decoded images; the first element is used.
    Gallery(Vec<DynamicImage>),
}

impl ImageInput {
    /// Returns the normalized image: the single image, or the gallery's
    /// first element.
    ///
    /// # Errors
    /// Returns [`AdvisorError::UnsupportedImageInput`] for an empty gallery.
    pub fn normalize(&self) -> Result<&DynamicImage, AdvisorError> {
        match self {
            ImageInput::Single(image) => Ok(image),
            ImageInput::Gallery(images) => images
                .first()
                .ok_or(AdvisorError::UnsupportedImageInput("empty image collection")),
        }
    }
}

/// Encodes an image losslessly as PNG into a `data:image/png;base64,` URI.
///
/// # Errors
/// Returns [`AdvisorError::ImageEncode`] if PNG serialization fails.
pub fn to_png_data_uri(image: &DynamicImage) -> Result<String, AdvisorError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    let payload = STANDARD.encode(buffer.into_inner());
    Ok(format!("data:image/png;base64,{payload}"))
}
