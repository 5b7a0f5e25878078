//! Record types for the lnkd data-binding layer.
//!
//! Everything here is plain data: profiles, the person sub-record shared by
//! every update shape, the update envelope with its tagged payload, and the
//! renderers that turn a payload into a human-readable notification string.
//! Building these records from XML lives in `lnkd-xml`.

pub mod person;
pub mod profile;
pub mod render;
pub mod update;

pub use person::{Person, Source};
pub use render::{LinkStyle, Render};
pub use update::{Payload, Update, UpdateType};
