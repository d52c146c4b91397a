mod loader;
mod render;

pub use loader::{find_render_config, load_render_config, parse_render_config, CONFIG_FILE_NAME};
pub use render::{RenderConfig, RenderStyle};
