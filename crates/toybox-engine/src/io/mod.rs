//! Data crossing the boundary to the backend: block records, hydration of a
//! [`BlockList`](crate::editing::BlockList) from persisted records, the
//! multipart submission plan, and file helpers for the command-line driver.

pub mod files;
pub mod hydrate;
pub mod records;
pub mod submission;

pub use files::{IoError, read_records, write_records};
pub use hydrate::HydrateError;
pub use records::{
    BlockRecord, ImageRecord, RecordError, parse_records, records_to_json, records_to_json_pretty,
};
pub use submission::{FieldNaming, FilePart, Submission};
