use serde::{Deserialize, Serialize};

/// A sub-region placed inside a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Fit content of `in_width` x `in_height` into an `out_width` x `out_height`
/// box, keeping the aspect ratio, and center it.
///
/// Zero-sized content, or a box with no extent at all, yields an all-zero rect.
/// A box with one zero side is unbounded in that direction. The computed side
/// is then clamped to `u32::MAX`.
pub fn scale(in_width: u32, in_height: u32, out_width: u32, out_height: u32) -> Rect {
    let mut out = Rect::default();

    if in_width == 0 || in_height == 0 || (out_width == 0 && out_height == 0) {
        return out;
    }

    let ratio_width = ratio(in_width, out_width);
    let ratio_height = ratio(in_height, out_height);

    if ratio_width < ratio_height {
        out.width = clamp_floor(f64::from(in_width) / ratio_height);
        out.height = out_height;
    } else {
        out.width = out_width;
        out.height = clamp_floor(f64::from(in_height) / ratio_width);
    }

    if out.width < out_width {
        out.x = (out_width - out.width) / 2;
    }
    if out.height < out_height {
        out.y = (out_height - out.height) / 2;
    }

    out
}

fn clamp_floor(length: f64) -> u32 {
    length.floor().clamp(0.0, f64::from(u32::MAX)) as u32
}

fn ratio(content: u32, bound: u32) -> f64 {
    if bound == 0 {
        0.0
    } else {
        f64::from(content) / f64::from(bound)
    }
}
