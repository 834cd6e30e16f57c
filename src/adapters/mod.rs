pub mod machine_command;
pub mod oc_command;
pub mod snapshot_file;
pub mod static_host;
pub mod system_browser;

pub use machine_command::MachineCommandAdapter;
pub use oc_command::OcCommandAdapter;
pub use snapshot_file::SnapshotFileAdapter;
pub use static_host::StaticHost;
pub use system_browser::SystemBrowser;
