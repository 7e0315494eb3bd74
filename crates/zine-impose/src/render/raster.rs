//! Image XObjects for placed photos

use image::DynamicImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::types::*;

/// Decode a photo and embed it as an Image XObject.
///
/// Samples are stored as Flate-compressed 8-bit RGB. Sources with an alpha
/// channel also get an 8-bit `/SMask`.
pub fn create_image_xobject(output: &mut Document, image: &SourceImage) -> Result<ObjectId> {
    let kind = image.kind().ok_or_else(|| {
        ZineError::Render(format!(
            "Unsupported image format '{}' reached the embedder",
            image.declared_format
        ))
    })?;
    let decoded = image::load_from_memory_with_format(&image.bytes, kind.image_format())?;
    let (width, height) = (decoded.width(), decoded.height());

    let mut image_dict = image_dictionary(width, height, b"DeviceRGB");
    if let Some(alpha) = alpha_channel(&decoded) {
        let mut mask = Stream::new(image_dictionary(width, height, b"DeviceGray"), alpha);
        mask.compress()?;
        let mask_id = output.add_object(mask);
        image_dict.set("SMask", Object::Reference(mask_id));
    }

    let mut stream = Stream::new(image_dict, decoded.to_rgb8().into_raw());
    stream.compress()?;
    Ok(output.add_object(stream))
}

fn image_dictionary(width: u32, height: u32, color_space: &[u8]) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict
}

/// Alpha samples, or `None` for opaque sources
fn alpha_channel(decoded: &DynamicImage) -> Option<Vec<u8>> {
    if !decoded.color().has_alpha() {
        return None;
    }
    let rgba = decoded.to_rgba8();
    Some(rgba.pixels().map(|pixel| pixel.0[3]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32, alpha: u8) -> SourceImage {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, alpha]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        SourceImage::new(bytes, "png")
    }

    // lopdf leaves tiny streams uncompressed
    fn samples(stream: &Stream) -> Vec<u8> {
        stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone())
    }

    #[test]
    fn test_image_xobject_dictionary() {
        let mut doc = Document::with_version("1.7");
        let id = create_image_xobject(&mut doc, &png(4, 3, 255)).unwrap();
        let stream = doc.get_object(id).unwrap().as_stream().unwrap();

        assert_eq!(stream.dict.get(b"Width").unwrap().as_i64().unwrap(), 4);
        assert_eq!(stream.dict.get(b"Height").unwrap().as_i64().unwrap(), 3);
        assert_eq!(
            stream.dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
            b"DeviceRGB"
        );
        assert_eq!(samples(stream).len(), 4 * 3 * 3);
    }

    #[test]
    fn test_alpha_becomes_soft_mask() {
        let mut doc = Document::with_version("1.7");
        let id = create_image_xobject(&mut doc, &png(2, 2, 128)).unwrap();
        let stream = doc.get_object(id).unwrap().as_stream().unwrap();

        let mask_id = stream.dict.get(b"SMask").unwrap().as_reference().unwrap();
        let mask = doc.get_object(mask_id).unwrap().as_stream().unwrap();
        assert_eq!(samples(mask), vec![128; 4]);
    }

    #[test]
    fn test_corrupt_payload_is_image_error() {
        let mut doc = Document::with_version("1.7");
        let bogus = SourceImage::new(b"not a png".to_vec(), "image/png");
        let err = create_image_xobject(&mut doc, &bogus).unwrap_err();
        assert!(matches!(err, ZineError::Image(_)));
        assert_eq!(err.kind(), ErrorKind::RenderFailure);
    }

    #[test]
    fn test_unsupported_kind_is_render_failure() {
        let mut doc = Document::with_version("1.7");
        let gif = SourceImage::new(b"GIF89a".to_vec(), "image/gif");
        let err = create_image_xobject(&mut doc, &gif).unwrap_err();
        assert!(matches!(err, ZineError::Render(_)));
        assert_eq!(err.kind(), ErrorKind::RenderFailure);
    }
}
