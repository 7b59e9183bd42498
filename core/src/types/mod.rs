pub(crate) mod config;
pub use config::{ConfigError, StoreConfig};

pub(crate) mod node;
pub use node::{Node, Scalar, Tree};

pub(crate) mod path;
pub use path::{DEFAULT_SEPARATOR, Path, Segment, Separator, SeparatorError};
