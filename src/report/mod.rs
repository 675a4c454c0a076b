//! Engine Result Handling
//!
//! Decoding of the engine's validation payload into typed records, and
//! resolution of each violation's entity chain into a display path.

pub mod codec;
pub mod path;
pub mod records;

pub use codec::{EnginePayload, MalformedResult, decode_outcome, encode, encode_all};
pub use path::resolve_path;
pub use records::{EntityRef, ValidationOutcome, Violation};
