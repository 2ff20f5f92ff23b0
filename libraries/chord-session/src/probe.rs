//! Duration probe backed by symphonia
//!
//! Reads container metadata from the in-memory payload; no audio is
//! decoded. Any failure degrades to an unknown duration.

use chord_core::DurationProbe;
use std::io::Cursor;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Probe durations with symphonia's format readers
pub struct SymphoniaProbe;

impl DurationProbe for SymphoniaProbe {
    fn probe(&self, payload: &[u8], mime_type: &str) -> f64 {
        match probe_duration(payload, mime_type) {
            Some(seconds) => seconds,
            None => {
                tracing::debug!(mime = mime_type, "duration probe failed");
                0.0
            }
        }
    }
}

fn probe_duration(payload: &[u8], mime_type: &str) -> Option<f64> {
    let source = Box::new(Cursor::new(payload.to_vec()));
    let stream = MediaSourceStream::new(source, MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    hint.mime_type(mime_type);
    if let Some(extension) = extension_for_mime(mime_type) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .ok()?;

    let params = &probed.format.default_track()?.codec_params;
    let time = params.time_base?.calc_time(params.n_frames?);

    Some(time.seconds as f64 + time.frac)
}

fn extension_for_mime(mime_type: &str) -> Option<&'static str> {
    match mime_type {
        "audio/mpeg" | "audio/mp3" => Some("mp3"),
        "audio/mp4" | "audio/aac" => Some("m4a"),
        "audio/ogg" => Some("ogg"),
        "audio/wav" | "audio/wave" | "audio/x-wav" => Some("wav"),
        "audio/flac" | "audio/x-flac" => Some("flac"),
        "audio/webm" => Some("webm"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_payload_probes_to_zero() {
        let probe = SymphoniaProbe;
        assert_eq!(probe.probe(&[0u8; 32], "audio/mpeg"), 0.0);
    }

    #[test]
    fn empty_payload_probes_to_zero() {
        let probe = SymphoniaProbe;
        assert_eq!(probe.probe(&[], "audio/ogg"), 0.0);
    }

    #[test]
    fn known_mimes_map_to_extensions() {
        assert_eq!(extension_for_mime("audio/mpeg"), Some("mp3"));
        assert_eq!(extension_for_mime("audio/flac"), Some("flac"));
        assert_eq!(extension_for_mime("audio/unknown"), None);
    }
}
