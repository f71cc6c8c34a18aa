//! Handoff - Transient Navigation State Transfer
//!
//! Handoff carries transient state between two views ("apps") of a host
//! application. When a user is redirected from view A to view B to perform
//! an editing task, the helper records which view originated the redirect
//! and, optionally, a package describing an object to embed, so that view
//! B can resume the correct context and navigate the user back when done.
//!
//! # Architecture
//!
//! One record lives under a reserved key in a persistent key-value store:
//! - Writes merge a sub-state into the record, preserving sibling
//!   sub-states and foreign keys owned by other writers
//! - Reads validate the sub-state's shape and report malformed data as
//!   absent, never as an error
//!
//! The store, the navigation subsystem, and the application registry are
//! injected collaborators, substitutable with in-memory fakes for testing.

pub mod error;
pub mod navigation;
pub mod registry;
pub mod storage;
pub mod transfer;

pub use error::{HandoffError, Result};
pub use navigation::{NavigateOptions, Navigator, RecordingNavigator};
pub use registry::{AppDescriptor, AppRegistry};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use transfer::{
    EditorState, EditorTransferOptions, EmbeddablePackage, PackageTransferOptions, StateTransfer,
    TransferRecord, EDITOR_STATE_KEY, EMBEDDABLE_PACKAGE_KEY, TRANSFER_STORAGE_KEY,
};
