use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use log::debug;

use crate::resource_loader::save_png;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconVariant {
    pub size: u32,
    pub scale: u32,
}

impl IconVariant {
    pub fn pixel_size(&self) -> Option<u32> {
        self.size.checked_mul(self.scale)
    }

    pub fn file_name(&self) -> String {
        if self.scale == 1 {
            format!("icon_{0}x{0}.png", self.size)
        } else {
            format!("icon_{0}x{0}@{1}x.png", self.size, self.scale)
        }
    }
}

/// iconset 中的全部输出，按尺寸顺序，每个尺寸先 1x 后 2x。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputSet {
    variants: Vec<IconVariant>,
}

impl OutputSet {
    pub fn new(sizes: &[u32]) -> Self {
        let variants = sizes
            .iter()
            .flat_map(|&size| [1, 2].map(|scale| IconVariant { size, scale }))
            .collect();
        OutputSet { variants }
    }

    pub fn variants(&self) -> &[IconVariant] {
        &self.variants
    }
}

pub fn write_iconset(
    canvas: &RgbaImage,
    dir: &Path,
    output_set: &OutputSet,
    filter: FilterType,
) -> Result<Vec<PathBuf>> {
    // 先检查全部边长，再写任何文件
    let planned = output_set
        .variants()
        .iter()
        .map(|variant| {
            variant
                .pixel_size()
                .map(|pixel_size| (variant, pixel_size))
                .with_context(|| format!("{} 的边长超出范围", variant.file_name()))
        })
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(dir).with_context(|| format!("创建 iconset 目录失败：{}", dir.display()))?;

    let mut written = Vec::with_capacity(planned.len());
    for (variant, pixel_size) in planned {
        let path = dir.join(variant.file_name());

        // 与画布同尺寸时直接写出原图，避免重采样损失
        if canvas.dimensions() == (pixel_size, pixel_size) {
            save_png(canvas, &path)?;
        } else {
            let resized = imageops::resize(canvas, pixel_size, pixel_size, filter);
            save_png(&resized, &path)?;
        }

        debug!("已写出 {}（{}x{}）", path.display(), pixel_size, pixel_size);
        written.push(path);
    }

    Ok(written)
}
