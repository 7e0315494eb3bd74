use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use zine_impose::compose::*;
use zine_impose::constants::*;
use zine_impose::layout::{ZINE_PAGE_ORDER, plan};
use zine_impose::*;

/// Create an in-memory photo of the given size
fn create_test_image(width: u32, height: u32, format: ImageFormat) -> SourceImage {
    let img = RgbImage::from_pixel(width, height, Rgb([30, 120, 200]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();
    let declared = match format {
        ImageFormat::Jpeg => "image/jpeg",
        _ => "image/png",
    };
    SourceImage::new(bytes, declared)
}

fn create_test_images(count: usize) -> Vec<SourceImage> {
    (0..count)
        .map(|i| {
            // Alternate landscape/portrait so both fit axes get exercised
            if i % 2 == 0 {
                create_test_image(40, 30, ImageFormat::Png)
            } else {
                create_test_image(30, 40, ImageFormat::Jpeg)
            }
        })
        .collect()
}

#[test]
fn test_single_sheet_partial() {
    let plan = plan(LayoutMode::SingleSheet);
    let images = create_test_images(5);
    let doc = compose(&plan, &images, &ZineOptions::single_sheet()).unwrap();

    assert_eq!(doc.page_count(), 1);
    let page = &doc.pages[0];
    assert_eq!(page.populated_slots(), vec![0, 1, 2, 3, 4]);
    assert!(page.images.iter().all(|draw| !draw.rotated180));
    assert!(page.strokes.is_empty());
    assert!(page.texts.is_empty());
    assert_eq!((page.width_pt, page.height_pt), (LETTER_WIDTH_PT, LETTER_HEIGHT_PT));
}

#[test]
fn test_single_sheet_overflow_is_clipped() {
    let plan = plan(LayoutMode::SingleSheet);
    let images = create_test_images(15);
    let doc = compose(&plan, &images, &ZineOptions::single_sheet()).unwrap();

    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.images_placed(), 12);
    assert_eq!(doc.ignored, 3);
    let indices: Vec<_> = doc.pages[0].images.iter().map(|d| d.image_index).collect();
    assert_eq!(indices, (0..12).collect::<Vec<_>>());
}

#[test]
fn test_mini_zine_full() {
    let plan = plan(LayoutMode::MiniZine);
    let images = create_test_images(8);
    let doc = compose(&plan, &images, &ZineOptions::mini_zine()).unwrap();

    assert_eq!(doc.page_count(), 1);
    let page = &doc.pages[0];
    assert_eq!((page.width_pt, page.height_pt), (LETTER_HEIGHT_PT, LETTER_WIDTH_PT));

    let first = page.images.iter().find(|d| d.image_index == 0).unwrap();
    assert_eq!(first.slot, 1);
    let last = page.images.iter().find(|d| d.image_index == 7).unwrap();
    assert_eq!(last.slot, 0);
    assert!(last.rotated180);

    for draw in &page.images {
        assert_eq!(draw.slot, ZINE_PAGE_ORDER[draw.logical_page - 1]);
        assert_eq!(draw.rotated180, draw.slot < 4);
    }

    // Default overlays: 8 borders, 2 captions
    assert_eq!(page.strokes.len(), 8);
    assert_eq!(page.texts.len(), 2);
    assert_eq!(page.texts[0].text, DEFAULT_COVER_CAPTION);
    assert_eq!(page.texts[1].text, DEFAULT_BACK_CAPTION);
}

#[test]
fn test_mini_zine_empty_back_text() {
    let plan = plan(LayoutMode::MiniZine);
    let images = create_test_images(8);
    let options = ZineOptions::mini_zine().with_back_text("");
    let doc = compose(&plan, &images, &options).unwrap();

    assert_eq!(doc.page_count(), 2);
    let back = &doc.pages[1];
    assert!(back.images.is_empty());
    assert_eq!(back.texts.len(), 1);
    assert_eq!(back.texts[0].text, "");

    let fit = doc.back_text.unwrap();
    assert_eq!(fit.font_size, MAX_FONT_SIZE);
    assert_eq!(fit.lines, vec![String::new()]);
}

#[test]
fn test_mini_zine_unsupported_image_leaves_blank_panel() {
    let plan = plan(LayoutMode::MiniZine);
    let mut images = create_test_images(8);
    images[2] = SourceImage::new(b"GIF89a".to_vec(), "image/gif");

    let doc = compose(&plan, &images, &ZineOptions::mini_zine()).unwrap();
    let page = &doc.pages[0];

    assert_eq!(doc.skipped, vec![2]);
    assert_eq!(page.images.len(), 7);
    // Logical page 3 lives in slot 3
    assert!(page.image_in_slot(3).is_none());
    // Captions are unaffected
    assert_eq!(page.texts.len(), 2);
}

#[test]
fn test_back_text_ignored_for_single_sheet() {
    let plan = plan(LayoutMode::SingleSheet);
    let images = create_test_images(2);
    let options = ZineOptions::single_sheet().with_back_text("not for sheets");
    let doc = compose(&plan, &images, &options).unwrap();

    assert_eq!(doc.page_count(), 1);
    assert!(doc.back_text.is_none());
}

#[test]
fn test_sheet_plan_with_zine_options_has_no_back_page() {
    let plan = plan(LayoutMode::SingleSheet);
    let images = create_test_images(3);
    let options = ZineOptions::mini_zine().with_back_text("x");
    let doc = compose(&plan, &images, &options).unwrap();

    assert_eq!(doc.mode, LayoutMode::SingleSheet);
    assert_eq!(doc.page_count(), 1);
    assert!(doc.back_text.is_none());
    assert!(doc.pages[0].strokes.is_empty());
    assert!(doc.pages[0].texts.is_empty());
}

#[test]
fn test_no_images() {
    let plan = plan(LayoutMode::MiniZine);
    let result = compose(&plan, &[], &ZineOptions::mini_zine());
    match result {
        Err(ZineError::NoImages) => {}
        _ => panic!("Expected NoImages error"),
    }
}

#[test]
fn test_images_aspect_fit_and_centered() {
    let plan = plan(LayoutMode::MiniZine);
    let images = create_test_images(8);
    let doc = compose(&plan, &images, &ZineOptions::mini_zine()).unwrap();

    for draw in &doc.pages[0].images {
        let cell = plan.panel(draw.slot).unwrap().rect;
        assert!(cell.contains(&draw.rect));
        assert!((draw.rect.center_x() - cell.center_x()).abs() < 0.01);
        assert!((draw.rect.center_y() - cell.center_y()).abs() < 0.01);

        let source_ratio = draw.pixel_width as f32 / draw.pixel_height as f32;
        let drawn_ratio = draw.rect.width / draw.rect.height;
        assert!((source_ratio - drawn_ratio).abs() < 0.001);

        let tight_w = (draw.rect.width - cell.width).abs() < 0.01;
        let tight_h = (draw.rect.height - cell.height).abs() < 0.01;
        assert!(tight_w || tight_h);
    }
}

#[test]
fn test_rotated_image_stays_in_its_cell() {
    let plan = plan(LayoutMode::MiniZine);
    let images = create_test_images(8);
    let doc = compose(&plan, &images, &ZineOptions::mini_zine()).unwrap();

    for draw in doc.pages[0].images.iter().filter(|d| d.rotated180) {
        let unit = zine_impose::layout::Rect::new(0.0, 0.0, 1.0, 1.0);
        let drawn = draw.transform().apply_rect(&unit);
        assert!((drawn.x - draw.rect.x).abs() < 0.01);
        assert!((drawn.y - draw.rect.y).abs() < 0.01);
        assert!((drawn.width - draw.rect.width).abs() < 0.01);
        assert!((drawn.height - draw.rect.height).abs() < 0.01);
    }
}

#[test]
fn test_overlay_options() {
    let plan = plan(LayoutMode::MiniZine);
    let images = create_test_images(1);
    let mut options = ZineOptions::mini_zine();
    options.panel_borders = false;
    options.fold_guides = true;

    let doc = compose(&plan, &images, &options).unwrap();
    let page = &doc.pages[0];
    assert!(page.strokes.iter().all(|s| matches!(s, Stroke::Line { .. })));
    assert_eq!(page.strokes.len(), 6);

    // Captions land on pages 1 and 8 even though only page 1 has a photo
    assert_eq!(page.texts.len(), 2);
    let back_panel = plan.panel_for_page(8).unwrap();
    assert!(back_panel.rect.contains(&page.texts[1].background.unwrap()));
}
