use image::{GrayImage, Rgba, RgbaImage, imageops};

use crate::config::IconConfig;
use crate::mask::rounded_mask;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// 逐像素选择：遮罩非零处保留原图，其余为全透明，不做 alpha 混合。
pub fn apply_mask(artwork: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    debug_assert_eq!(artwork.dimensions(), mask.dimensions());

    RgbaImage::from_fn(artwork.width(), artwork.height(), |x, y| {
        if mask.get_pixel(x, y)[0] == 0 {
            TRANSPARENT
        } else {
            *artwork.get_pixel(x, y)
        }
    })
}

pub fn make_rounded_icon(source: &RgbaImage, config: &IconConfig) -> RgbaImage {
    let padding = config.padding();
    let inset = config.inset_size();

    let resized = imageops::resize(source, inset, inset, config.filter.filter_type());
    let mask = rounded_mask(inset, config.radius_frac);
    let masked = apply_mask(&resized, &mask);

    // 直接替换像素，留白保持透明
    let mut canvas = RgbaImage::from_pixel(config.out_size, config.out_size, TRANSPARENT);
    imageops::replace(&mut canvas, &masked, padding as i64, padding as i64);
    canvas
}
