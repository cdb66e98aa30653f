// Adapters layer: concrete implementations of the domain ports (storage, scorers).

pub mod http;
pub mod random;
pub mod storage;

pub use http::RemoteScorer;
pub use random::RandomScorer;
pub use storage::LocalManifestStore;
