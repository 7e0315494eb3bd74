//! Document composition
//!
//! Turns a layout plan plus the request's images and options into a
//! [`GeneratedDocument`]:
//! 1. Clip the images to the mode's capacity
//! 2. Resolve each image's panel and aspect-fit it
//! 3. Attach mini zine overlays (borders, guides, captions)
//! 4. Append the back-text page when requested

mod back_page;
mod model;
mod overlay;

pub use back_page::back_text_page;
pub use model::*;
pub use overlay::*;

use log::{debug, warn};

use crate::layout::{LayoutPlan, fit_image};
use crate::options::ZineOptions;
use crate::text::Helvetica;
use crate::types::*;

/// Lay out every page of the document
pub fn compose(
    plan: &LayoutPlan,
    images: &[SourceImage],
    options: &ZineOptions,
) -> Result<GeneratedDocument> {
    if images.is_empty() {
        return Err(ZineError::NoImages);
    }

    let capacity = plan.capacity();
    let ignored = images.len().saturating_sub(capacity);
    if ignored > 0 {
        warn!(
            "{} accepts at most {} images; ignoring the last {}",
            plan.mode.token(),
            capacity,
            ignored
        );
    }

    let (width, height) = (plan.geometry.page_width_pt, plan.geometry.page_height_pt);
    let mut front = GeneratedPage::new(width, height);
    let mut skipped = Vec::new();

    for (index, image) in images.iter().take(capacity).enumerate() {
        let logical_page = index + 1;
        let Some(panel) = plan.panel_for_page(logical_page) else {
            continue;
        };

        if image.kind().is_none() {
            warn!(
                "Skipping image {} with unsupported format '{}'",
                logical_page, image.declared_format
            );
            skipped.push(index);
            continue;
        }

        let (pixel_width, pixel_height) = image.dimensions()?;
        let fitted = fit_image(pixel_width, pixel_height, &panel.rect);

        debug!(
            "Image {} ({}x{}px) -> slot {}{} at scale {:.3}",
            logical_page,
            pixel_width,
            pixel_height,
            panel.slot,
            if panel.rotated180 { " (rotated)" } else { "" },
            fitted.scale
        );

        front.images.push(ImageDraw {
            image_index: index,
            logical_page,
            slot: panel.slot,
            pixel_width,
            pixel_height,
            rect: fitted.rect,
            rotated180: panel.rotated180,
        });
    }

    let mut pages = Vec::new();
    let mut back_text = None;

    if plan.mode.is_zine() {
        if options.panel_borders {
            front.strokes.extend(panel_borders(plan));
        }
        if options.fold_guides {
            front.strokes.extend(fold_guides(plan));
        }
        front.texts.extend(cover_captions(
            plan,
            &options.cover_caption,
            &options.back_caption,
            &Helvetica,
        ));
    }
    pages.push(front);

    // The plan decides the page structure, not `options.mode`
    if plan.mode.is_zine() && options.include_back_text {
        let (page, fit) = back_text_page(&plan.geometry, &options.back_text, &Helvetica);
        pages.push(page);
        back_text = Some(fit);
    } else if options.include_back_text {
        debug!("Back text is only available for the mini zine; ignoring it");
    }

    Ok(GeneratedDocument {
        mode: plan.mode,
        pages,
        skipped,
        ignored,
        back_text,
    })
}
