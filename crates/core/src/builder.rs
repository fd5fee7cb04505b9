use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use crate::config::{CONFIG_FILE_NAME, IconConfig};
use crate::icon_generator::make_rounded_icon;
use crate::iconset::{OutputSet, write_iconset};
use crate::packager::package;
use crate::resource_loader::{load_image, save_png};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub rounded: PathBuf,
    pub iconset: Vec<PathBuf>,
    pub archive: PathBuf,
    pub overwritten_source: Option<PathBuf>,
}

pub struct IconBuilder {
    base_dir: PathBuf,
    config: IconConfig,
}

impl IconBuilder {
    pub fn new(base_dir: &Path, config: IconConfig) -> Result<Self> {
        config.validate()?;
        Ok(IconBuilder {
            base_dir: base_dir.to_path_buf(),
            config,
        })
    }

    /// 使用 `base_dir` 下的 `icon.yaml`（可选）构建。
    pub fn from_dir(base_dir: &Path) -> Result<Self> {
        let config = IconConfig::load(&base_dir.join(CONFIG_FILE_NAME))?;
        Self::new(base_dir, config)
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    fn path(&self, relative: &Path) -> PathBuf {
        self.base_dir.join(relative)
    }

    pub fn run(&self) -> Result<BuildReport> {
        let config = &self.config;

        let source_path = self.path(&config.source);
        let source = load_image(&source_path)?;
        info!(
            "已加载源图标 {}（{}x{}）",
            source_path.display(),
            source.width(),
            source.height()
        );

        let icon = make_rounded_icon(&source, config);

        let rounded = self.path(&config.rounded_output);
        save_png(&icon, &rounded)?;
        info!("已写出圆角图标 {}", rounded.display());

        let iconset_dir = self.path(&config.iconset_dir);
        let output_set = OutputSet::new(&config.sizes);
        let iconset = write_iconset(&icon, &iconset_dir, &output_set, config.filter.filter_type())?;
        info!("已写出 {} 个 iconset 文件到 {}", iconset.len(), iconset_dir.display());

        let archive = self.path(&config.archive_output);
        package(&config.packager, &iconset_dir, &archive)?;
        info!("已生成图标包 {}", archive.display());

        let overwritten_source = if config.overwrite_source {
            save_png(&icon, &source_path)?;
            info!("已用圆角图标覆盖 {}", source_path.display());
            Some(source_path)
        } else {
            None
        };

        Ok(BuildReport {
            rounded,
            iconset,
            archive,
            overwritten_source,
        })
    }
}
