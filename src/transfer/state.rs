//! Transfer record schema.
//!
//! Defines the JSON shapes stored under the reserved transfer key. The
//! record and the editor state both flatten unrecognized fields into a
//! side map so foreign data round-trips untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The single record stored under [`TRANSFER_STORAGE_KEY`].
///
/// Sub-states are kept as raw JSON here; shape validation happens when a
/// typed accessor reads them out.
///
/// [`TRANSFER_STORAGE_KEY`]: crate::transfer::TRANSFER_STORAGE_KEY
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransferRecord {
    /// Pending editor state, if a redirect is in flight.
    #[serde(default, rename = "editorState", skip_serializing_if = "Option::is_none")]
    pub editor_state: Option<Value>,

    /// Pending embeddable package, if a redirect is in flight.
    #[serde(
        default,
        rename = "embeddablePackage",
        skip_serializing_if = "Option::is_none"
    )]
    pub embeddable_package: Option<Value>,

    /// Foreign sub-keys owned by other writers, preserved verbatim.
    #[serde(flatten)]
    pub foreign: Map<String, Value>,
}

impl TransferRecord {
    /// True when the record holds no sub-states and no foreign data.
    pub fn is_empty(&self) -> bool {
        self.editor_state.is_none() && self.embeddable_package.is_none() && self.foreign.is_empty()
    }
}

/// State carried from an originating view to an editor view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    /// Identifier of the application that initiated the redirect.
    pub originating_app: String,

    /// Path to return to within the originating app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originating_path: Option<String>,

    /// Input to restore when editing resumes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_input: Option<Value>,

    /// Free-form fields preserved on round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EditorState {
    /// Create an editor state with only the originating app set.
    pub fn new(originating_app: impl Into<String>) -> Self {
        Self {
            originating_app: originating_app.into(),
            originating_path: None,
            value_input: None,
            extra: Map::new(),
        }
    }

    /// Structural validation of a stored sub-record.
    ///
    /// Returns `None` unless the value is an object carrying a non-empty
    /// originating app identifier string.
    pub fn from_value(value: Value) -> Option<Self> {
        serde_json::from_value::<Self>(value)
            .ok()
            .filter(|state| !state.originating_app.is_empty())
    }
}

/// Description of an object to be created or edited in the destination
/// view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddablePackage {
    /// Kind of embeddable being transferred.
    #[serde(rename = "type")]
    pub kind: String,

    /// The embeddable's configuration/state.
    pub input: Value,
}

impl EmbeddablePackage {
    /// Create a package from a kind and its input.
    pub fn new(kind: impl Into<String>, input: Value) -> Self {
        Self {
            kind: kind.into(),
            input,
        }
    }

    /// Structural validation of a stored sub-record.
    ///
    /// Returns `None` unless the value is an object carrying a `type`
    /// string and a defined `input`.
    pub fn from_value(value: Value) -> Option<Self> {
        serde_json::from_value::<Self>(value)
            .ok()
            .filter(|package| !package.input.is_null())
    }
}
