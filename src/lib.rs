pub mod analysis;
pub mod batch;
pub mod config;
pub mod error;
pub mod model;

use std::path::Path;

pub use config::PoolConfig;
use error::AnalysisError;
use model::StereoAnalysis;

/// Analyse un fichier stéréo : une fréquence dominante par canal.
pub fn analyze_file(path: &Path) -> Result<StereoAnalysis, AnalysisError> {
    // 1. Décodage complet en canaux séparés
    let clip = analysis::decoder::decode_to_channels(path)?;

    // 2. Vérification de la forme stéréo
    if clip.channel_count() != 2 {
        return Err(AnalysisError::NotStereo {
            channels: clip.channel_count(),
        });
    }

    // 3. Fréquence dominante de chaque canal, indépendamment
    let left_hz = analysis::estimator::dominant_frequency(&clip.channels[0], clip.sample_rate)?;
    let right_hz = analysis::estimator::dominant_frequency(&clip.channels[1], clip.sample_rate)?;

    Ok(StereoAnalysis {
        path: path.to_path_buf(),
        left_hz,
        right_hz,
    })
}

/// Variante infaillible : tout échec devient une ligne d'erreur lisible.
///
/// C'est la frontière de confinement des erreurs par fichier : rien ne
/// remonte au-delà sous forme d'exception, un fichier invalide ne peut donc
/// pas interrompre un lot en cours.
pub fn report_for(path: &Path) -> String {
    match analyze_file(path) {
        Ok(analysis) => analysis.report(),
        Err(AnalysisError::NotStereo { .. }) => {
            format!("Error: {} must be stereo (2 channels)", path.display())
        }
        Err(e) => format!("Error analyzing {}: {}", path.display(), e),
    }
}
