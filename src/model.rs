use std::path::PathBuf;

/// Fréquences dominantes d'un fichier stéréo, déjà arrondies à 2 décimales.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoAnalysis {
    pub path: PathBuf,
    pub left_hz: f64,
    pub right_hz: f64,
}

impl StereoAnalysis {
    /// Fréquence de battement perçue : écart absolu entre les deux canaux.
    pub fn beat_hz(&self) -> f64 {
        (self.right_hz - self.left_hz).abs()
    }

    /// Rapport sur quatre lignes destiné à la sortie standard.
    pub fn report(&self) -> String {
        format!(
            "\nAnalysis of {}:\n\
             Left channel frequency:  {:.2} Hz\n\
             Right channel frequency: {:.2} Hz\n\
             Binaural beat frequency: {:.2} Hz",
            self.path.display(),
            self.left_hz,
            self.right_hz,
            self.beat_hz(),
        )
    }
}
