mod load_config;

pub use load_config::{ConfigLocation, load_config, locate_config};
