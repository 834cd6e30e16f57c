pub mod config;
pub mod error;
pub mod host;
pub mod resolution;
pub mod service_record;

pub use config::{ClusterConfig, ClusterProvider, HostConfig, SvcopenConfig};
pub use error::AppError;
pub use host::HostStatus;
pub use resolution::{
    EndpointSource, ResolutionError, ResolveQuery, ResolvedEndpoint, candidate_namespaces,
    resolve,
};
pub use service_record::ServiceRecord;
