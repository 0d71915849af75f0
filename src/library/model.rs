use std::path::PathBuf;

/// Attributes gathered from one audio file.
///
/// Optional fields are `None` when the tag is missing or blank; use
/// [`TrackInfo::set`] so blank values never end up as `Some("")`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackInfo {
    pub file: PathBuf,
    /// Duration in seconds.
    pub length: f64,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub track_number: Option<String>,
    pub title: Option<String>,
}

/// The tag fields that can contribute to a playlist title.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TitleField {
    Artist,
    Album,
    Year,
    TrackNumber,
    Title,
}

impl TrackInfo {
    /// A track that only knows where it lives.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: TitleField) -> Option<&str> {
        match field {
            TitleField::Artist => self.artist.as_deref(),
            TitleField::Album => self.album.as_deref(),
            TitleField::Year => self.year.as_deref(),
            TitleField::TrackNumber => self.track_number.as_deref(),
            TitleField::Title => self.title.as_deref(),
        }
    }

    /// Store a trimmed value, or clear the field when the value is blank.
    pub fn set(&mut self, field: TitleField, value: Option<&str>) {
        let value = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        match field {
            TitleField::Artist => self.artist = value,
            TitleField::Album => self.album = value,
            TitleField::Year => self.year = value,
            TitleField::TrackNumber => self.track_number = value,
            TitleField::Title => self.title = value,
        }
    }

    /// File name without extension, used when no tag contributes to a title.
    pub fn file_stem(&self) -> String {
        self.file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
