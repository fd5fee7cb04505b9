use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::config::PackagerConfig;

/// 打包工具参数：`-c <format> <iconset_dir> -o <output>`。
pub fn packager_args(config: &PackagerConfig, iconset_dir: &Path, output: &Path) -> Vec<OsString> {
    vec![
        OsString::from("-c"),
        OsString::from(&config.format),
        iconset_dir.as_os_str().to_owned(),
        OsString::from("-o"),
        output.as_os_str().to_owned(),
    ]
}

pub fn package(config: &PackagerConfig, iconset_dir: &Path, output: &Path) -> Result<()> {
    let result = Command::new(&config.program)
        .args(packager_args(config, iconset_dir, output))
        .output()
        .with_context(|| format!("无法运行打包工具 {}", config.program))?;

    if !result.status.success() {
        bail!(
            "{} 执行失败（{}）：{}",
            config.program,
            result.status,
            String::from_utf8_lossy(&result.stderr).trim()
        );
    }

    Ok(())
}
