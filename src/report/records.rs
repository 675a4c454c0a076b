//! Violation Records
//!
//! Typed representation of the engine's result payload. The engine reports
//! each constraint failure as a message plus a chain of entity references
//! identifying where in the document it occurred.

use serde::{Deserialize, Serialize};

/// One constraint failure reported by the engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Violation {
    /// Human-readable failure message.
    #[serde(default)]
    pub error: String,
    /// Location chain, innermost entity first. Empty for failures that
    /// apply to the document as a whole.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity: Vec<EntityRef>,
    /// Set when the failure comes from an enforced deprecation rather than
    /// a plain constraint. Carried for wire fidelity, not rendered.
    #[serde(
        default,
        rename = "enforcedDeprecation",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub enforced_deprecation: bool,
}

/// One step in a violation's location chain.
///
/// The engine discriminates on `refType`. Reference kinds introduced by
/// future engine versions decode as [`EntityRef::Unknown`] instead of
/// failing the whole payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "refType")]
pub enum EntityRef {
    /// A block within the document or a parent block.
    #[serde(rename = "block")]
    Block {
        kind: String,
        /// Position among sibling blocks of the same kind; absent means 0.
        #[serde(default)]
        index: usize,
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        block_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rel: Option<String>,
    },
    /// A key in a block's data payload.
    #[serde(rename = "data attribute")]
    Data { name: String },
    /// A plain attribute of a document or block.
    #[serde(rename = "attribute")]
    Attribute { name: String },
    /// A reference kind this build does not know about.
    #[serde(other)]
    Unknown,
}

/// Outcome of one document validation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}
