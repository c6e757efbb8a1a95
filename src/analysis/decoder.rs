use std::fs::File;
use std::path::Path;

use log::debug;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AnalysisError;

/// Clip audio entièrement décodé, un vecteur d'échantillons par canal.
pub struct DecodedClip {
    pub channels: Vec<Vec<f32>>,
    pub sample_rate: u32,
}

impl DecodedClip {
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

/// Décode un fichier audio en canaux séparés, échantillons f32 normalisés.
///
/// Le nombre de canaux vient des paramètres du codec : un fichier stéréo
/// sans aucune trame produit bien deux canaux vides (l'échec se manifeste
/// alors dans l'estimateur, pas ici).
pub fn decode_to_channels(path: &Path) -> Result<DecodedClip, AnalysisError> {
    debug!("decoding {}", path.display());

    let file = File::open(path)?;
    let stream = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AnalysisError::Decode(e.to_string()))?;
    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| AnalysisError::Decode("no audio track found".into()))?;
    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| AnalysisError::Decode("unknown sample rate".into()))?;
    let channel_count = track
        .codec_params
        .channels
        .map(|c| c.count())
        .ok_or_else(|| AnalysisError::Decode("unknown channel layout".into()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::Decode(e.to_string()))?;

    let mut channels: Vec<Vec<f32>> = vec![Vec::new(); channel_count];
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // Fin de flux : symphonia la signale par une erreur d'E/S EOF.
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(AnalysisError::Decode(e.to_string())),
        };
        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            // Paquet corrompu isolé : on continue avec le reste du flux.
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => return Err(AnalysisError::Decode(e.to_string())),
        };

        let spec = *decoded.spec();
        let buf = sample_buf.get_or_insert_with(|| {
            SampleBuffer::<f32>::new(decoded.capacity() as u64, spec)
        });
        buf.copy_interleaved_ref(decoded);

        // Désentrelacement trame par trame.
        for frame in buf.samples().chunks_exact(channel_count) {
            for (channel, &sample) in channels.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }
    }

    debug!(
        "decoded {}: {} channels, {} frames at {} Hz",
        path.display(),
        channel_count,
        channels.first().map_or(0, Vec::len),
        sample_rate
    );

    Ok(DecodedClip {
        channels,
        sample_rate,
    })
}
