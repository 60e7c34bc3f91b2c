//! External Service Clients
//!
//! Clients for the two external collaborators the labeling service
//! depends on: the object store that holds uploaded ingredient photos and
//! the managed label-detection API. Each collaborator sits behind a trait
//! so handlers can be exercised against in-process fakes, and each
//! produces its own error kind; status-code mapping happens at the HTTP
//! edge only.

pub mod label_detection;
pub mod object_store;

pub use label_detection::{DetectionError, LabelDetection, RekognitionDetector};
pub use object_store::{ObjectStore, S3ObjectStore, StorageError};
