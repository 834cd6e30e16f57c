pub mod model;
pub mod parse;
pub mod paths;

pub use model::{ClusterConfig, ClusterProvider, HostConfig, SvcopenConfig};
pub use parse::parse_config_content;
