pub mod host_check;
pub mod service;
