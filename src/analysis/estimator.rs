use num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::AnalysisError;

/// Fréquence dominante d'un canal, en Hz, arrondie à 2 décimales.
///
/// La recherche du maximum ne porte que sur les bins strictement positifs :
/// le bin 0 (composante continue) et la moitié négative du spectre sont
/// exclus, y compris le bin N/2 (fréquence de Nyquist, négative par la
/// convention d'enroulement standard quand N est pair). À magnitudes égales,
/// le bin d'indice le plus bas gagne.
pub fn dominant_frequency(samples: &[f32], sample_rate: u32) -> Result<f64, AnalysisError> {
    let n = samples.len();
    // Bins strictement positifs : 1..⌈N/2⌉. En dessous de 3 échantillons
    // cette plage est vide (pour N = 2 le bin 1 est la fréquence de Nyquist,
    // négative par convention).
    let positive_end = n.div_ceil(2);
    if positive_end < 2 {
        return Err(AnalysisError::EmptySignal);
    }

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(n);

    let mut buffer: Vec<Complex<f32>> = samples
        .iter()
        .map(|&s| Complex::new(s, 0.0))
        .collect();
    fft.process(&mut buffer);

    let mut best_bin = 1;
    let mut best_magnitude = buffer[1].norm();
    for (bin, coeff) in buffer.iter().enumerate().take(positive_end).skip(2) {
        let magnitude = coeff.norm();
        if magnitude > best_magnitude {
            best_bin = bin;
            best_magnitude = magnitude;
        }
    }

    let freq = best_bin as f64 * sample_rate as f64 / n as f64;
    Ok(round2(freq))
}

/// Arrondi à 2 décimales, demi-valeurs éloignées de zéro.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn sine(freq: f64, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (TAU * freq * i as f64 / sample_rate as f64).sin() as f32)
            .collect()
    }

    #[test]
    fn pure_tone_on_a_bin_is_exact() {
        // Résolution de 1 Hz : 8000 échantillons à 8 kHz.
        let samples = sine(440.0, 8000, 8000);
        assert_eq!(dominant_frequency(&samples, 8000).unwrap(), 440.0);
    }

    #[test]
    fn off_bin_tone_lands_within_one_bin() {
        // Résolution de 4 Hz : le pic doit tomber à moins d'un bin du vrai.
        let samples = sine(441.3, 8000, 2000);
        let freq = dominant_frequency(&samples, 8000).unwrap();
        assert!((freq - 441.3).abs() <= 4.0, "got {freq}");
    }

    #[test]
    fn silence_resolves_to_first_positive_bin() {
        // Spectre plat : l'égalité se résout sur le bin le plus bas, R/N.
        let samples = vec![0.0f32; 256];
        let freq = dominant_frequency(&samples, 8000).unwrap();
        assert_eq!(freq, round2(8000.0 / 256.0));
        // Déterminisme sur appels répétés.
        assert_eq!(dominant_frequency(&samples, 8000).unwrap(), freq);
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            dominant_frequency(&[], 44100),
            Err(AnalysisError::EmptySignal)
        ));
        // Jusqu'à 2 échantillons inclus, aucun bin strictement positif.
        assert!(matches!(
            dominant_frequency(&[1.0], 44100),
            Err(AnalysisError::EmptySignal)
        ));
        assert!(matches!(
            dominant_frequency(&[1.0, -1.0], 44100),
            Err(AnalysisError::EmptySignal)
        ));
    }

    #[test]
    fn halfway_value_rounds_away_from_zero() {
        // R/N = 0.125 Hz exact en binaire ; le bin 1001 vaut 125.125 Hz.
        let samples = sine(125.125, 1000, 8000);
        assert_eq!(dominant_frequency(&samples, 1000).unwrap(), 125.13);
        assert_eq!(round2(125.125), 125.13);
    }

    #[test]
    fn nyquist_bin_is_excluded_for_even_lengths() {
        // Signal alterné +1/-1 : toute l'énergie au bin N/2, exclu du
        // spectre positif. Le maximum restant se résout au premier bin.
        let samples: Vec<f32> = (0..64).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let freq = dominant_frequency(&samples, 6400).unwrap();
        assert!(freq < 3200.0, "Nyquist must not win, got {freq}");
    }
}
