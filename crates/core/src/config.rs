use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "icon.yaml";

/// 单个输出（含 @2x）允许的最大边长。
pub const MAX_ICON_SIZE: u32 = 16384;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ResizeFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PackagerConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_program() -> String {
    "iconutil".to_string()
}

fn default_format() -> String {
    "icns".to_string()
}

impl Default for PackagerConfig {
    fn default() -> Self {
        PackagerConfig {
            program: default_program(),
            format: default_format(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct IconConfig {
    #[serde(default = "default_source")]
    pub source: PathBuf,
    #[serde(default = "default_rounded_output")]
    pub rounded_output: PathBuf,
    #[serde(default = "default_iconset_dir")]
    pub iconset_dir: PathBuf,
    #[serde(default = "default_archive_output")]
    pub archive_output: PathBuf,
    #[serde(default = "default_true")]
    pub overwrite_source: bool,
    #[serde(default = "default_out_size")]
    pub out_size: u32,
    #[serde(default = "default_padding_frac")]
    pub padding_frac: f64,
    #[serde(default = "default_radius_frac")]
    pub radius_frac: f64,
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
    #[serde(default)]
    pub filter: ResizeFilter,
    #[serde(default)]
    pub packager: PackagerConfig,
}

fn default_source() -> PathBuf {
    PathBuf::from("icon.png")
}

fn default_rounded_output() -> PathBuf {
    PathBuf::from("icon_rounded.png")
}

fn default_iconset_dir() -> PathBuf {
    PathBuf::from("icon.iconset")
}

fn default_archive_output() -> PathBuf {
    PathBuf::from("icon.icns")
}

fn default_true() -> bool {
    true
}

fn default_out_size() -> u32 {
    1024
}

fn default_padding_frac() -> f64 {
    0.1
}

fn default_radius_frac() -> f64 {
    0.225
}

fn default_sizes() -> Vec<u32> {
    vec![16, 32, 64, 128, 256, 512]
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            source: default_source(),
            rounded_output: default_rounded_output(),
            iconset_dir: default_iconset_dir(),
            archive_output: default_archive_output(),
            overwrite_source: true,
            out_size: default_out_size(),
            padding_frac: default_padding_frac(),
            radius_frac: default_radius_frac(),
            sizes: default_sizes(),
            filter: ResizeFilter::default(),
            packager: PackagerConfig::default(),
        }
    }
}

impl IconConfig {
    /// 读取 YAML 配置；文件不存在时使用默认值。
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(IconConfig::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("读取图标配置失败：{}", config_path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("图标配置无效：{}", config_path.display()))?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: IconConfig = serde_yaml::from_str(content).context("解析图标配置失败")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.out_size == 0 || self.out_size > MAX_ICON_SIZE {
            bail!("out_size 必须位于 [1, {}] 区间，当前为 {}", MAX_ICON_SIZE, self.out_size);
        }
        if !(0.0..0.5).contains(&self.padding_frac) {
            bail!("padding_frac 必须位于 [0, 0.5) 区间，当前为 {}", self.padding_frac);
        }
        if !(0.0..=0.5).contains(&self.radius_frac) {
            bail!("radius_frac 必须位于 [0, 0.5] 区间，当前为 {}", self.radius_frac);
        }
        if self.sizes.is_empty() {
            bail!("sizes 不能为空");
        }
        if self.sizes.contains(&0) {
            bail!("sizes 中不能包含 0");
        }
        if let Some(size) = self.sizes.iter().find(|&&size| size > MAX_ICON_SIZE / 2) {
            bail!("sizes 中的 {} 过大，@2x 边长不能超过 {}", size, MAX_ICON_SIZE);
        }
        if self.packager.program.trim().is_empty() {
            bail!("packager.program 不能为空");
        }
        Ok(())
    }

    /// 画布每一侧透明留白的像素数（向下取整）。
    pub fn padding(&self) -> u32 {
        (self.out_size as f64 * self.padding_frac) as u32
    }

    pub fn inset_size(&self) -> u32 {
        self.out_size - 2 * self.padding()
    }
}
