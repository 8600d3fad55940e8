//! Console commands

use std::fmt;
use std::str::FromStr;
use stereo_backend::ControllerHandle;
use stereo_core::{AlbumId, BandId, Year};
use thiserror::Error;

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlayPause,
    Next,
    Restart,
    Forward,
    Back,
    Band,
    Album,
    Year,
    SubMode,
    LockBand(BandId),
    LockAlbum(AlbumId),
    LockYear(Year),
    Bands,
    Albums,
    Years,
    Pause,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs a number")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a valid number")]
    BadNumber(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let arg = words.next();

        let command = match word.to_ascii_lowercase().as_str() {
            "p" | "play" => Self::PlayPause,
            "n" | "next" => Self::Next,
            "r" | "restart" => Self::Restart,
            "f" | "fwd" | "forward" => Self::Forward,
            "b" | "back" => Self::Back,
            "band" => Self::Band,
            "album" => Self::Album,
            "year" => Self::Year,
            "s" | "sub" => Self::SubMode,
            "lock-band" => Self::LockBand(number(arg, "lock-band")?),
            "lock-album" => Self::LockAlbum(number(arg, "lock-album")?),
            "lock-year" => Self::LockYear(number(arg, "lock-year")?),
            "bands" => Self::Bands,
            "albums" => Self::Albums,
            "years" => Self::Years,
            "pause" => Self::Pause,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn number<T: FromStr>(arg: Option<&str>, command: &'static str) -> Result<T, ParseCommandError> {
    let arg = arg.ok_or(ParseCommandError::MissingArgument(command))?;
    arg.parse()
        .map_err(|_| ParseCommandError::BadNumber(arg.to_string()))
}

impl Command {
    /// Queue the matching controller request. Returns `false` for commands the
    /// console handles itself.
    pub fn apply(self, controller: &ControllerHandle) -> bool {
        match self {
            Self::PlayPause => controller.toggle_play_pause(),
            Self::Next => controller.next_song(),
            Self::Restart => controller.restart_current_song(),
            Self::Forward => controller.skip_forward(),
            Self::Back => controller.skip_backward(),
            Self::Band => controller.toggle_band_mode(),
            Self::Album => controller.toggle_album_mode(),
            Self::Year => controller.toggle_year_mode(),
            Self::SubMode => controller.change_sub_mode(),
            Self::LockBand(id) => controller.lock_specific_band(id),
            Self::LockAlbum(id) => controller.lock_specific_album(id),
            Self::LockYear(year) => controller.lock_specific_year(year),
            Self::Bands => controller.request_band_list(),
            Self::Albums => controller.request_album_list(),
            Self::Years => controller.request_year_list(),
            Self::Pause => controller.force_pause(),
            Self::Help | Self::Quit => return false,
        }
        true
    }
}

/// Help text listing every command
pub struct Help;

impl fmt::Display for Help {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("p, play", "toggle play/pause"),
            ("pause", "pause"),
            ("n, next", "next song"),
            ("r, restart", "restart current song"),
            ("f, fwd", "skip forward (next album or year)"),
            ("b, back", "skip back (album start or previous year)"),
            ("band", "lock to the current band, or back to shuffle"),
            ("album", "lock to the current album, or back to shuffle"),
            ("year", "lock to the current year, or back to shuffle"),
            ("s, sub", "next sub-mode"),
            ("lock-band <id>", "play a band"),
            ("lock-album <id>", "play an album from track one"),
            ("lock-year <year>", "play a year"),
            ("bands, albums, years", "list the library"),
            ("q, quit", "exit"),
        ];
        for (command, what) in rows {
            writeln!(f, "  {command:<22} {what}")?;
        }
        Ok(())
    }
}
