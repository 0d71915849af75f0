use std::path::PathBuf;

use clap::Parser;

use crate::config::PlaylistFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Write an M3U playlist (the default)
    #[arg(short = 'm', long = "m3u", overrides_with = "xspf")]
    pub m3u: bool,

    /// Write an XSPF playlist
    #[arg(short = 'x', long = "xspf", overrides_with = "m3u")]
    pub xspf: bool,

    /// Append to the playlist file if it exists
    #[arg(short, long)]
    pub append: bool,

    /// Playlist file to write
    #[arg(short, long)]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Console log level
    #[arg(long, default_value = "warn", env = "TRACKLIST_LOG_LEVEL")]
    pub log_level: log::LevelFilter,

    /// Also write a debug log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Directories to scan for audio files
    #[arg(required = true, value_parser = is_directory)]
    pub dirs: Vec<PathBuf>,
}

impl Args {
    /// The format picked on the command line, if any.
    pub fn format(&self) -> Option<PlaylistFormat> {
        if self.xspf {
            Some(PlaylistFormat::Xspf)
        } else if self.m3u {
            Some(PlaylistFormat::M3u)
        } else {
            None
        }
    }
}

fn is_directory(s: &str) -> Result<PathBuf, String> {
    let p: PathBuf = s.into();
    if p.is_dir() {
        Ok(p)
    } else {
        Err(format!("unable to locate dir `{}`", s))
    }
}
