pub mod actor;
pub mod snapshot;

pub use actor::BackendActor;
pub use snapshot::SnapshotBackend;
