//! # Warren Testkit
//!
//! Deterministic mock implementations of the Warren effect traits plus
//! fixture builders. Everything here runs in controlled single-threaded
//! test contexts, so interior state uses blocking `std::sync::Mutex`
//! for test clarity rather than async locks.

pub mod builders;
pub mod memory_prefs;
pub mod mock_host;
pub mod recording_surface;

pub use builders::{achievement, identity_record, tab};
pub use memory_prefs::MemoryPrefs;
pub use mock_host::{HostCall, MockHost};
pub use recording_surface::{RecordingSurface, SurfaceEvent};
