use std::path::{Path, PathBuf};

use anyhow::Result;
use env_logger::Env;
use log::debug;

use squircle_core::IconBuilder;

pub fn get_current_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|path| path.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// 构建图标，成功时返回要打印的确认信息。
fn run(work_dir: &Path) -> Result<String> {
    let builder = IconBuilder::from_dir(work_dir)?;
    let report = builder.run()?;
    Ok(format!("完成！已生成圆角图标：{}", report.archive.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let work_dir = get_current_dir();
    debug!("工作目录：{}", work_dir.display());

    let message = run(&work_dir)?;
    println!("{}", message);
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;

    use image::{Rgba, RgbaImage};

    use super::*;

    fn work_dir(name: &str, packager: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("make-icon-{}-{}", name, std::process::id()));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();
        RgbaImage::from_pixel(32, 32, Rgba([200, 60, 40, 255]))
            .save(dir.join("icon.png"))
            .unwrap();
        fs::write(
            dir.join("icon.yaml"),
            format!("out_size: 64\nsizes: [16, 32]\npackager:\n  program: \"{}\"\n", packager),
        )
        .unwrap();
        dir
    }

    #[test]
    fn success_names_the_archive() {
        let dir = work_dir("ok", "true");
        let message = run(&dir).unwrap();
        assert!(message.starts_with("完成！"));
        assert!(message.ends_with(&dir.join("icon.icns").display().to_string()));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn failed_packaging_yields_no_confirmation() {
        let dir = work_dir("fail", "false");
        let err = run(&dir).unwrap_err();
        assert!(err.to_string().contains("false"));
        fs::remove_dir_all(&dir).ok();
    }
}
