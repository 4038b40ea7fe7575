use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    pub name: String,
    pub url: String,
    /// Nominal length in seconds, shown until the decoder reports the real one.
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Playlist {
    pub name: String,
    pub artist: String,
    pub year: u16,
    #[serde(rename = "track", default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(rename = "playlist", default)]
    playlists: Vec<Playlist>,
}

/// Ordered playlists. Never empty, and no playlist is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    playlists: Vec<Playlist>,
}

impl Library {
    pub fn new(playlists: Vec<Playlist>) -> Result<Self> {
        if playlists.is_empty() {
            bail!("library has no playlists");
        }
        if let Some(empty) = playlists.iter().find(|p| p.tracks.is_empty()) {
            bail!("playlist '{}' has no tracks", empty.name);
        }
        Ok(Self { playlists })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading library {}", path.display()))?;
        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&text, &base).with_context(|| format!("parsing library {}", path.display()))
    }

    /// Parses a TOML library, resolving relative track locations against `base`.
    pub fn parse(text: &str, base: &Path) -> Result<Self> {
        let mut document: Document = toml::from_str(text)?;
        for track in document
            .playlists
            .iter_mut()
            .flat_map(|p| p.tracks.iter_mut())
        {
            track.url = resolve_url(&track.url, base);
        }
        Self::new(document.playlists)
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn get(&self, index: usize) -> Option<&Playlist> {
        self.playlists.get(index)
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }
}

fn resolve_url(url: &str, base: &Path) -> String {
    if url.contains("://") {
        return url.to_string();
    }
    let path = PathBuf::from(url);
    if path.is_absolute() || base.as_os_str().is_empty() {
        url.to_string()
    } else {
        base.join(path).to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[[playlist]]
name = "Night Drive"
artist = "Neon Coast"
year = 2023

[[playlist.track]]
name = "Overture"
url = "audio/overture.mp3"
duration = 184.0

[[playlist.track]]
name = "Remote"
url = "https://example.com/remote.mp3"
duration = 200.0

[[playlist]]
name = "Morning"
artist = "Field Notes"
year = 2021

[[playlist.track]]
name = "Dew"
url = "/music/dew.flac"
duration = 95.5
"#;

    #[test]
    fn parses_playlists_in_order() {
        let library = Library::parse(SAMPLE, Path::new("/srv/library")).unwrap();
        assert_eq!(library.len(), 2);
        let first = &library.playlists()[0];
        assert_eq!(first.name, "Night Drive");
        assert_eq!(first.year, 2023);
        assert_eq!(first.tracks.len(), 2);
        assert_eq!(library.get(1).unwrap().tracks[0].duration, 95.5);
    }

    #[test]
    fn resolves_relative_locations_only() {
        let library = Library::parse(SAMPLE, Path::new("/srv/library")).unwrap();
        let tracks = &library.playlists()[0].tracks;
        assert_eq!(
            PathBuf::from(&tracks[0].url),
            Path::new("/srv/library").join("audio/overture.mp3")
        );
        assert_eq!(tracks[1].url, "https://example.com/remote.mp3");
        assert_eq!(library.playlists()[1].tracks[0].url, "/music/dew.flac");
    }

    #[test]
    fn rejects_empty_library() {
        assert!(Library::parse("", Path::new("")).is_err());
        assert!(Library::new(vec![]).is_err());
    }

    #[test]
    fn rejects_playlist_without_tracks() {
        let text = r#"
[[playlist]]
name = "Empty"
artist = "Nobody"
year = 2020
"#;
        let err = Library::parse(text, Path::new("")).unwrap_err();
        assert!(err.to_string().contains("Empty"));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlists.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let library = Library::load(&path).unwrap();
        assert_eq!(
            PathBuf::from(&library.playlists()[0].tracks[0].url),
            dir.path().join("audio/overture.mp3")
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Library::load(Path::new("/nonexistent/playlists.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/playlists.toml"));
    }
}
