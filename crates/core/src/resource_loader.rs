use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, ImageReader, RgbaImage};

pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("无法打开源图标：{}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("无法识别源图标格式：{}", path.display()))?;
    let image = reader
        .decode()
        .with_context(|| format!("源图标解码失败：{}", path.display()))?;
    Ok(image.to_rgba8())
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("写入图片失败：{}", path.display()))
}
