use crate::error::MediaError;
use std::{fs::File, path::Path};
use symphonia::core::{
    formats::FormatOptions, io::MediaSourceStream, meta::MetadataOptions, probe::Hint,
};

/// Reads the container headers and returns the decoded length in seconds.
///
/// `Ok(None)` means the file is readable but does not declare its length
/// (common for raw MP3 streams without a Xing header).
pub fn duration(path: &Path) -> Result<Option<f64>, MediaError> {
    let url = path.display().to_string();
    let file = File::open(path).map_err(|e| MediaError::load(&url, e))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());
    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }
    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| MediaError::load(&url, format!("unsupported or unreadable audio: {e}")))?;
    let track = probed
        .format
        .default_track()
        .ok_or_else(|| MediaError::load(&url, "no decodable audio track"))?;

    let params = &track.codec_params;
    let seconds = match (params.time_base, params.n_frames) {
        (Some(time_base), Some(frames)) => {
            let time = time_base.calc_time(frames);
            Some(time.seconds as f64 + time.frac)
        }
        (None, Some(frames)) => params
            .sample_rate
            .filter(|rate| *rate > 0)
            .map(|rate| frames as f64 / rate as f64),
        _ => None,
    };
    Ok(seconds.filter(|s| s.is_finite() && *s > 0.0))
}
