mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LoadResult};
pub use model::{CONFIG_VERSION, Config, InputConfig, RenderConfig};
