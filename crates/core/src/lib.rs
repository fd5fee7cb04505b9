mod builder;
mod config;
mod icon_generator;
mod iconset;
mod mask;
mod packager;
mod resource_loader;

pub use builder::{BuildReport, IconBuilder};
pub use config::{CONFIG_FILE_NAME, IconConfig, PackagerConfig, ResizeFilter};
pub use icon_generator::{TRANSPARENT, apply_mask, make_rounded_icon};
pub use iconset::{IconVariant, OutputSet, write_iconset};
pub use mask::{corner_radius, rounded_mask};
pub use packager::{package, packager_args};
pub use resource_loader::{load_image, save_png};
