//! Audio bookkeeping.
//!
//! No device I/O lives here - the director tracks which named clips are
//! sounding on which pooled voices, and the presentation layer mirrors
//! that into a real mixer.

pub mod director;

pub use director::{AudioDirector, Voice};
