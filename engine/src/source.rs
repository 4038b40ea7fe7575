use crate::error::MediaError;
use std::path::PathBuf;
use url::Url;

/// Turns a track locator into a local file path.
///
/// Plain paths are taken as-is, `file://` URLs are decoded, any other
/// scheme is refused since the engine only plays local media.
pub fn resolve(locator: &str) -> Result<PathBuf, MediaError> {
    let locator = locator.trim();
    if locator.is_empty() {
        return Err(MediaError::load(locator, "empty locator"));
    }
    match Url::parse(locator) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map_err(|_| MediaError::load(locator, "malformed file URL")),
        // Windows drive letters parse as a one-letter scheme.
        Ok(url) if url.scheme().len() == 1 => Ok(PathBuf::from(locator)),
        Ok(url) => Err(MediaError::load(
            locator,
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(_) => Ok(PathBuf::from(locator)),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::error::MediaError;
    use std::path::PathBuf;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(
            resolve("music/intro.mp3").unwrap(),
            PathBuf::from("music/intro.mp3")
        );
        assert_eq!(
            resolve("/srv/music/intro.mp3").unwrap(),
            PathBuf::from("/srv/music/intro.mp3")
        );
    }

    #[cfg(unix)]
    #[test]
    fn file_urls_are_decoded() {
        assert_eq!(
            resolve("file:///srv/music/night%20drive.ogg").unwrap(),
            PathBuf::from("/srv/music/night drive.ogg")
        );
    }

    #[test]
    fn remote_urls_are_refused() {
        let err = resolve("https://example.com/a.mp3").unwrap_err();
        assert!(matches!(err, MediaError::Load { .. }));
        assert!(err.to_string().contains("https"));
    }

    #[test]
    fn empty_locator_is_an_error() {
        assert!(resolve("   ").is_err());
    }
}
