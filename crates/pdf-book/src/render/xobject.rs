//! Image XObject creation for illustrations
//!
//! Illustrations are decoded with the `image` crate and embedded as
//! 8-bit DeviceRGB image XObjects. An alpha channel, when present and
//! requested, becomes a DeviceGray soft mask.

use crate::types::{BookError, Result};
use image::DynamicImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;

/// An image embedded in the output document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub id: ObjectId,
    /// Source width in pixels
    pub width: u32,
    /// Source height in pixels
    pub height: u32,
}

/// Decode an image file from disk
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| BookError::Image {
        path: path.to_owned(),
        reason: e.to_string(),
    })
}

/// Add an image XObject (and its soft mask) to `doc`.
pub fn embed_image(doc: &mut Document, img: &DynamicImage, with_alpha: bool) -> EmbeddedImage {
    let (width, height) = (img.width(), img.height());

    let smask_id = if with_alpha && img.color().has_alpha() {
        let alpha: Vec<u8> = img.to_rgba8().pixels().map(|p| p.0[3]).collect();
        Some(doc.add_object(Stream::new(
            image_dict(width, height, "DeviceGray"),
            alpha,
        )))
    } else {
        None
    };

    let mut dict = image_dict(width, height, "DeviceRGB");
    if let Some(smask_id) = smask_id {
        dict.set("SMask", Object::Reference(smask_id));
    }
    let id = doc.add_object(Stream::new(dict, img.to_rgb8().into_raw()));

    EmbeddedImage { id, width, height }
}

fn image_dict(width: u32, height: u32, color_space: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict
}
