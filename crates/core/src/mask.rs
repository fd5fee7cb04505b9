use image::{GrayImage, Luma, imageops};
use imageproc::drawing::draw_filled_circle_mut;

pub const MASK_OPAQUE: Luma<u8> = Luma([255]);

/// 圆角半径：`size * radius_frac` 向下取整，最大为 `(size - 1) / 2`。
pub fn corner_radius(size: u32, radius_frac: f64) -> u32 {
    let radius = (size as f64 * radius_frac) as u32;
    radius.min(size.saturating_sub(1) / 2)
}

/// 生成 `size × size` 的圆角矩形遮罩，内部为 255，外部为 0，边缘不做抗锯齿。
pub fn rounded_mask(size: u32, radius_frac: f64) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    if size == 0 {
        return mask;
    }

    let radius = corner_radius(size, radius_frac);
    let near = radius as i32;
    let far = (size - 1 - radius) as i32;

    // 十字形的横竖两条带
    let band = size - 2 * radius;
    let horizontal = GrayImage::from_pixel(size, band, MASK_OPAQUE);
    let vertical = GrayImage::from_pixel(band, size, MASK_OPAQUE);
    imageops::replace(&mut mask, &horizontal, 0, near as i64);
    imageops::replace(&mut mask, &vertical, near as i64, 0);

    // 四个圆角
    for center in [(near, near), (far, near), (near, far), (far, far)] {
        draw_filled_circle_mut(&mut mask, center, near, MASK_OPAQUE);
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn radius_truncates_and_clamps() {
        assert_eq!(corner_radius(820, 0.225), 184);
        assert_eq!(corner_radius(1000, 0.225), 225);
        assert_eq!(corner_radius(200, 0.225), 45);
        assert_eq!(corner_radius(64, 0.3), 19);
        assert_eq!(corner_radius(10, 0.5), 4);
        assert_eq!(corner_radius(9, 0.5), 4);
        assert_eq!(corner_radius(2, 0.5), 0);
        assert_eq!(corner_radius(64, 0.0), 0);
    }

    #[test]
    fn inset_mask_clips_corners() {
        let mask = rounded_mask(820, 0.225);
        assert_eq!(mask.dimensions(), (820, 820));
        for (x, y) in [(0, 0), (819, 0), (0, 819), (819, 819), (20, 20)] {
            assert_eq!(mask.get_pixel(x, y)[0], 0, "({x}, {y}) 应在圆角外");
        }
        for (x, y) in [(410, 410), (0, 410), (410, 0), (819, 410), (410, 819)] {
            assert_eq!(mask.get_pixel(x, y)[0], 255, "({x}, {y}) 应在圆角内");
        }
    }

    #[test]
    fn mask_is_binary() {
        let mask = rounded_mask(200, 0.225);
        assert!(mask.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }

    #[test]
    fn zero_radius_fills_everything() {
        let mask = rounded_mask(16, 0.0);
        assert!(mask.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn empty_mask_for_zero_size() {
        assert_eq!(rounded_mask(0, 0.225).dimensions(), (0, 0));
    }

    proptest! {
        #[test]
        fn mask_is_mirror_symmetric(size in 1u32..96, radius_frac in 0.0f64..=0.5) {
            let mask = rounded_mask(size, radius_frac);
            for y in 0..size {
                for x in 0..size {
                    let value = mask.get_pixel(x, y)[0];
                    prop_assert_eq!(value, mask.get_pixel(size - 1 - x, y)[0]);
                    prop_assert_eq!(value, mask.get_pixel(x, size - 1 - y)[0]);
                }
            }
        }

        #[test]
        fn corner_is_clear_only_when_rounded(size in 1u32..96, radius_frac in 0.0f64..=0.5) {
            let mask = rounded_mask(size, radius_frac);
            let rounded = corner_radius(size, radius_frac) > 0;
            prop_assert_eq!(mask.get_pixel(0, 0)[0] == 0, rounded);
            prop_assert_eq!(mask.get_pixel(size / 2, size / 2)[0], 255);
        }

        #[test]
        fn mask_is_deterministic(size in 1u32..64, radius_frac in 0.0f64..=0.5) {
            prop_assert_eq!(rounded_mask(size, radius_frac), rounded_mask(size, radius_frac));
        }
    }
}
