//! Content placement within cells
//!
//! Two independent pieces live here:
//! - aspect-fit scaling and centering of an image inside its cell
//! - the affine transforms used to draw content, including the 180° flip
//!   that keeps rotated content in place

use super::Rect;

/// Scale factor that fits `src` entirely inside `target` without distortion.
pub fn fit_scale(src_width: f32, src_height: f32, target_width: f32, target_height: f32) -> f32 {
    let scale_w = target_width / src_width;
    let scale_h = target_height / src_height;
    scale_w.min(scale_h)
}

/// Result of placing an image in a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedImage {
    /// Where the image is drawn, centred in the cell
    pub rect: Rect,
    /// Points per source pixel
    pub scale: f32,
}

/// Aspect-fit an image of `pixel_width` x `pixel_height` into `cell`, centred.
pub fn fit_image(pixel_width: u32, pixel_height: u32, cell: &Rect) -> FittedImage {
    let (w, h) = (pixel_width.max(1) as f32, pixel_height.max(1) as f32);
    let scale = fit_scale(w, h, cell.width, cell.height);

    let drawn_width = w * scale;
    let drawn_height = h * scale;

    FittedImage {
        rect: Rect::new(
            cell.x + (cell.width - drawn_width) / 2.0,
            cell.y + (cell.height - drawn_height) / 2.0,
            drawn_width,
            drawn_height,
        ),
        scale,
    }
}

// =============================================================================
// Transforms
// =============================================================================

/// A PDF affine matrix `[a b c d e f]`.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn translate(tx: f32, ty: f32) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::identity()
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    /// Half-turn about `(cx, cy)`.
    ///
    /// PDF rotates about the current origin, so the pivot has to be moved
    /// there and back: translate(c) · rotate(180°) · translate(-c), which
    /// collapses to `[-1 0 0 -1 2cx 2cy]`.
    pub fn rotate_180_about(cx: f32, cy: f32) -> Self {
        Self {
            a: -1.0,
            b: 0.0,
            c: 0.0,
            d: -1.0,
            e: 2.0 * cx,
            f: 2.0 * cy,
        }
    }

    /// Matrix that maps the unit square onto `rect`, optionally flipped in
    /// place about the rectangle's centre. Image XObjects are drawn in the unit
    /// square, so this is the full `cm` for an image draw.
    pub fn image_placement(rect: &Rect, rotated180: bool) -> Self {
        let place = Self::scale(rect.width, rect.height).then(&Self::translate(rect.x, rect.y));
        if rotated180 {
            let (cx, cy) = rect.center();
            place.then(&Self::rotate_180_about(cx, cy))
        } else {
            place
        }
    }

    /// Apply `self` first, then `next`.
    pub fn then(&self, next: &Transform) -> Transform {
        Transform {
            a: self.a * next.a + self.b * next.c,
            b: self.a * next.b + self.b * next.d,
            c: self.c * next.a + self.d * next.c,
            d: self.c * next.b + self.d * next.d,
            e: self.e * next.a + self.f * next.c + next.e,
            f: self.e * next.b + self.f * next.d + next.f,
        }
    }

    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Operands in `cm` order
    pub fn to_array(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Bounding box of `rect` after the transform
    pub fn apply_rect(&self, rect: &Rect) -> Rect {
        let corners = [
            self.apply(rect.x, rect.y),
            self.apply(rect.right(), rect.y),
            self.apply(rect.x, rect.top()),
            self.apply(rect.right(), rect.top()),
        ];
        let min_x = corners.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
        let min_y = corners.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = corners.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}
