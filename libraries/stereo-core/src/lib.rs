//! Stereo Core
//!
//! Platform-agnostic domain types, the catalog trait and error handling shared by
//! every Stereo crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Band`, `Album`, `Song` and the denormalized `SongInfo`
//! - **Catalog**: the read-only lookup interface the selection engine consumes
//! - **Error Handling**: unified `StereoError` and `Result` types
//!
//! It also ships `MemoryCatalog`, an in-memory catalog with the same ordering rules
//! as the on-device store, used by tests and the command-line front end.
//!
//! # Example
//!
//! ```rust
//! use stereo_core::{Catalog, LibraryFile, MemoryCatalog, SongOrder};
//!
//! let json = r#"{
//!     "bands": [{ "id": 1, "name": "Band A" }],
//!     "albums": [{ "id": 10, "name": "Debut", "band_id": 1, "year": 1999 }],
//!     "songs": [
//!         { "id": 100, "name": "One", "path": "/music/a/01.mp3", "band_id": 1, "album_id": 10, "year": 1999 },
//!         { "id": 101, "name": "Two", "path": "/music/a/02.mp3", "band_id": 1, "album_id": 10, "year": 1999 }
//!     ]
//! }"#;
//!
//! let library: LibraryFile = serde_json::from_str(json).unwrap();
//! let catalog = MemoryCatalog::from_library(library).unwrap();
//!
//! let songs = catalog.songs_for_band(1, SongOrder::Ordered).unwrap();
//! assert_eq!(songs[0].name, "One");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod memory;
pub mod types;

pub use catalog::{Catalog, SongOrder};
pub use error::{Result, StereoError};
pub use memory::{LibraryFile, MemoryCatalog};
pub use types::{Album, AlbumId, Band, BandId, Song, SongId, SongInfo, Year};
