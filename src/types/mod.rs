//! Core types for parsed design documents.

pub mod card;
pub mod color;
pub mod document;
pub mod group;
pub mod sections;

pub use card::{CardRecord, HeaderKind};
pub use color::{Color, ColorSet};
pub use document::ParsedDocument;
pub use group::{Group, Shard};
pub use sections::{DocumentSections, Section};
