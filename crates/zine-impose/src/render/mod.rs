//! PDF rendering
//!
//! Serializes a [`GeneratedDocument`] with lopdf:
//! - one Image XObject per placed photo
//! - one content stream per page (images, strokes, then text)
//! - a shared Helvetica font resource

mod page;
mod raster;

pub use page::{page_content, text_bytes};
pub use raster::create_image_xobject;

use log::debug;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::compose::GeneratedDocument;
use crate::types::*;

/// Resource name of the shared text font
pub(crate) const FONT_RESOURCE: &str = "F1";

/// Render the composed document to PDF bytes.
///
/// Output is deterministic: the same document and images always produce the
/// same bytes.
pub fn render_document(doc: &GeneratedDocument, images: &[SourceImage]) -> Result<Vec<u8>> {
    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();
    let font_id = output.add_object(helvetica_font());

    let mut kids = Vec::new();
    for page in &doc.pages {
        let mut xobjects = Dictionary::new();
        for draw in &page.images {
            let Some(image) = images.get(draw.image_index) else {
                return Err(ZineError::Render(format!(
                    "Image {} is missing from the request",
                    draw.image_index
                )));
            };
            let image_id = create_image_xobject(&mut output, image)?;
            xobjects.set(image_name(draw.image_index), Object::Reference(image_id));
        }

        let content = page_content(page);
        let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut fonts = Dictionary::new();
        fonts.set(FONT_RESOURCE, Object::Reference(font_id));

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));
        resources.set("Font", Object::Dictionary(fonts));

        let page_id = add_page(
            &mut output,
            pages_id,
            page.width_pt,
            page.height_pt,
            resources,
            content_id,
        );
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len();
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(page_count as i64)),
    ]);
    output
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    output.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    output.save_to(&mut bytes)?;
    debug!("Rendered {} pages ({} bytes)", page_count, bytes.len());
    Ok(bytes)
}

/// XObject resource name for a request image
pub(crate) fn image_name(image_index: usize) -> String {
    format!("Im{}", image_index)
}

fn helvetica_font() -> Dictionary {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    font_dict
}

fn add_page(
    output: &mut Document,
    parent_pages_id: ObjectId,
    width_pt: f32,
    height_pt: f32,
    resources: Dictionary,
    content_id: ObjectId,
) -> ObjectId {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width_pt),
            Object::Real(height_pt),
        ]),
    );
    page_dict.set("Resources", Object::Dictionary(resources));
    page_dict.set("Contents", Object::Reference(content_id));
    output.add_object(page_dict)
}
