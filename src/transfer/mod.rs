//! State transfer between views.
//!
//! The [`StateTransfer`] helper carries transient state across a redirect:
//! the outgoing side merges a sub-state into the transfer record and
//! triggers navigation, the incoming side reads the sub-state back and
//! optionally deletes it. The persistent store is the single source of
//! truth; every operation reads the record fresh.

pub mod state;

pub use state::{EditorState, EmbeddablePackage, TransferRecord};

use tracing::{debug, warn};

use crate::error::Result;
use crate::navigation::{NavigateOptions, Navigator};
use crate::registry::AppRegistry;
use crate::storage::{FileStore, KeyValueStore};

/// Reserved top-level storage key for the transfer record.
pub const TRANSFER_STORAGE_KEY: &str = "handoff.stateTransfer";

/// Reserved sub-key for editor state.
pub const EDITOR_STATE_KEY: &str = "editorState";

/// Reserved sub-key for embeddable package state.
pub const EMBEDDABLE_PACKAGE_KEY: &str = "embeddablePackage";

/// Options for [`StateTransfer::navigate_to_editor`].
#[derive(Debug, Clone)]
pub struct EditorTransferOptions {
    /// Editor state to carry to the destination.
    pub state: EditorState,
    /// Path within the destination app.
    pub path: Option<String>,
    /// Replace the current history entry.
    pub replace: Option<bool>,
}

/// Options for [`StateTransfer::navigate_to_with_embeddable_package`].
#[derive(Debug, Clone)]
pub struct PackageTransferOptions {
    /// Package to carry to the destination.
    pub state: EmbeddablePackage,
    /// Path within the destination app.
    pub path: Option<String>,
    /// Replace the current history entry.
    pub replace: Option<bool>,
}

/// Carries transient navigation state between two views of the host
/// application.
pub struct StateTransfer<S: KeyValueStore, N: Navigator> {
    store: S,
    navigator: N,
    registry: Option<AppRegistry>,
}

impl<N: Navigator> StateTransfer<FileStore, N> {
    /// Create a transfer helper backed by the default file store rooted at
    /// `root`.
    pub fn with_file_store(
        navigator: N,
        registry: Option<AppRegistry>,
        root: &std::path::Path,
    ) -> Self {
        Self::new(navigator, registry, FileStore::new(root))
    }
}

impl<S: KeyValueStore, N: Navigator> StateTransfer<S, N> {
    /// Create a transfer helper from its collaborators.
    pub fn new(navigator: N, registry: Option<AppRegistry>, store: S) -> Self {
        Self {
            store,
            navigator,
            registry,
        }
    }

    /// Get the injected store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the injected navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Human-readable title for a known application identifier.
    ///
    /// Returns `None` for unknown identifiers and when no registry was
    /// supplied. Pure lookup, no side effects.
    pub fn app_name_from_id(&self, id: &str) -> Option<String> {
        self.registry
            .as_ref()
            .and_then(|registry| registry.title_of(id))
            .map(str::to_string)
    }

    /// Merge editor state into the transfer record, then navigate to
    /// `destination_app_id`.
    ///
    /// Sibling sub-states and foreign keys already in the record survive
    /// the write.
    pub fn navigate_to_editor(
        &self,
        destination_app_id: &str,
        options: EditorTransferOptions,
    ) -> Result<()> {
        let mut record = self.load_record()?;
        record.editor_state = Some(serde_json::to_value(&options.state)?);
        self.save_record(record)?;

        debug!(
            destination_app_id,
            originating_app = %options.state.originating_app,
            "transferring editor state"
        );

        self.navigator.navigate(
            destination_app_id,
            &NavigateOptions {
                path: options.path,
                replace: options.replace,
            },
        )
    }

    /// Merge an embeddable package into the transfer record, then navigate
    /// to `destination_app_id`.
    pub fn navigate_to_with_embeddable_package(
        &self,
        destination_app_id: &str,
        options: PackageTransferOptions,
    ) -> Result<()> {
        let mut record = self.load_record()?;
        record.embeddable_package = Some(serde_json::to_value(&options.state)?);
        self.save_record(record)?;

        debug!(
            destination_app_id,
            kind = %options.state.kind,
            "transferring embeddable package"
        );

        self.navigator.navigate(
            destination_app_id,
            &NavigateOptions {
                path: options.path,
                replace: options.replace,
            },
        )
    }

    /// Read incoming editor state, if a well-formed one is pending.
    ///
    /// Malformed sub-records are reported as absent, never as errors. With
    /// `remove_after_fetch`, the sub-key is deleted from the record while
    /// siblings survive.
    pub fn incoming_editor_state(&self, remove_after_fetch: bool) -> Result<Option<EditorState>> {
        let mut record = self.load_record()?;

        let state = match record.editor_state.clone() {
            Some(value) => {
                let parsed = EditorState::from_value(value);
                if parsed.is_none() {
                    warn!("discarding malformed incoming editor state");
                }
                parsed
            }
            None => None,
        };

        if remove_after_fetch && record.editor_state.is_some() {
            record.editor_state = None;
            self.save_record(record)?;
        }

        Ok(state)
    }

    /// Read an incoming embeddable package, if a well-formed one is
    /// pending. Same contract as [`incoming_editor_state`].
    ///
    /// [`incoming_editor_state`]: StateTransfer::incoming_editor_state
    pub fn incoming_embeddable_package(
        &self,
        remove_after_fetch: bool,
    ) -> Result<Option<EmbeddablePackage>> {
        let mut record = self.load_record()?;

        let package = match record.embeddable_package.clone() {
            Some(value) => {
                let parsed = EmbeddablePackage::from_value(value);
                if parsed.is_none() {
                    warn!("discarding malformed incoming embeddable package");
                }
                parsed
            }
            None => None,
        };

        if remove_after_fetch && record.embeddable_package.is_some() {
            record.embeddable_package = None;
            self.save_record(record)?;
        }

        Ok(package)
    }

    /// Delete pending editor state without reading it, preserving
    /// siblings.
    pub fn clear_editor_state(&self) -> Result<()> {
        let mut record = self.load_record()?;
        if record.editor_state.take().is_some() {
            self.save_record(record)?;
        }
        Ok(())
    }

    /// Delete a pending embeddable package without reading it, preserving
    /// siblings.
    pub fn clear_embeddable_package(&self) -> Result<()> {
        let mut record = self.load_record()?;
        if record.embeddable_package.take().is_some() {
            self.save_record(record)?;
        }
        Ok(())
    }

    /// Read the transfer record fresh from the store. An absent key or a
    /// record that is not a JSON object reads as empty.
    fn load_record(&self) -> Result<TransferRecord> {
        match self.store.get(TRANSFER_STORAGE_KEY)? {
            Some(value) => match serde_json::from_value(value) {
                Ok(record) => Ok(record),
                Err(_) => {
                    warn!("transfer record is not an object; treating as empty");
                    Ok(TransferRecord::default())
                }
            },
            None => Ok(TransferRecord::default()),
        }
    }

    /// Persist the transfer record. An empty record removes the top-level
    /// key instead of storing `{}`.
    fn save_record(&self, record: TransferRecord) -> Result<()> {
        if record.is_empty() {
            self.store.remove(TRANSFER_STORAGE_KEY)
        } else {
            self.store
                .set(TRANSFER_STORAGE_KEY, serde_json::to_value(&record)?)
        }
    }
}
