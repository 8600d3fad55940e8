mod album;
mod band;
mod song;
mod song_info;

pub use album::{Album, AlbumId};
pub use band::{Band, BandId};
pub use song::{Song, SongId, Year};
pub use song_info::SongInfo;
