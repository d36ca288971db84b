//! Sequence feature extraction.
//!
//! Maps an amino-acid sequence to the fixed six-value vector the classifier
//! was trained on. The property tables and the terminal-window arithmetic
//! must stay numerically identical to the training pipeline.

use serde::Serialize;

use crate::types::{PredictError, PredictResult};

/// Number of values in a feature vector.
pub const FEATURE_COUNT: usize = 6;

/// Symbols considered for each terminal charge feature.
pub const TERMINAL_WINDOW: usize = 10;

/// Electrostatic charge approximation for a residue.
///
/// Unrecognized symbols (including lowercase letters) are neutral.
pub fn charge(residue: char) -> f64 {
    match residue {
        'D' | 'E' => -1.0,
        'K' | 'R' => 1.0,
        'H' => 0.5,
        _ => 0.0,
    }
}

/// Structural flexibility approximation for a residue.
///
/// Unrecognized symbols map to 0.
#[rustfmt::skip]
pub fn flexibility(residue: char) -> f64 {
    match residue {
        'A' => 0.36, 'C' => 0.35, 'D' => 0.51, 'E' => 0.50, 'F' => 0.31,
        'G' => 0.54, 'H' => 0.32, 'I' => 0.46, 'K' => 0.47, 'L' => 0.37,
        'M' => 0.30, 'N' => 0.46, 'P' => 0.51, 'Q' => 0.49, 'R' => 0.53,
        'S' => 0.51, 'T' => 0.44, 'V' => 0.39, 'W' => 0.31, 'Y' => 0.42,
        _ => 0.0,
    }
}

/// Fixed-order feature vector derived from a sequence.
///
/// Layout: `[mean charge, std charge, mean flexibility, std flexibility,
/// N-terminal charge, C-terminal charge]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Single-precision copy for the model input tensor.
    pub fn to_f32(&self) -> [f32; FEATURE_COUNT] {
        self.0.map(|v| v as f32)
    }

    pub fn mean_charge(&self) -> f64 {
        self.0[0]
    }

    pub fn std_charge(&self) -> f64 {
        self.0[1]
    }

    pub fn mean_flexibility(&self) -> f64 {
        self.0[2]
    }

    pub fn std_flexibility(&self) -> f64 {
        self.0[3]
    }

    pub fn n_terminal_charge(&self) -> f64 {
        self.0[4]
    }

    pub fn c_terminal_charge(&self) -> f64 {
        self.0[5]
    }
}

/// Extract the feature vector for a sequence.
///
/// Terminal windows shrink to the sequence length for sequences shorter than
/// [`TERMINAL_WINDOW`], but the sums are always divided by the full window
/// size. Returns [`PredictError::InvalidInput`] for an empty sequence.
pub fn extract_features(sequence: &str) -> PredictResult<FeatureVector> {
    let residues: Vec<char> = sequence.chars().collect();
    if residues.is_empty() {
        return Err(PredictError::InvalidInput(
            "sequence must contain at least one residue".to_string(),
        ));
    }

    let charges: Vec<f64> = residues.iter().map(|&aa| charge(aa)).collect();
    let flex: Vec<f64> = residues.iter().map(|&aa| flexibility(aa)).collect();

    let (mean_charge, std_charge) = mean_and_std(&charges);
    let (mean_flex, std_flex) = mean_and_std(&flex);

    let window = residues.len().min(TERMINAL_WINDOW);
    let n_term: f64 = charges[..window].iter().sum::<f64>() / TERMINAL_WINDOW as f64;
    let c_term: f64 =
        charges[charges.len() - window..].iter().sum::<f64>() / TERMINAL_WINDOW as f64;

    Ok(FeatureVector([
        mean_charge,
        std_charge,
        mean_flex,
        std_flex,
        n_term,
        c_term,
    ]))
}

/// Arithmetic mean and population standard deviation, two-pass.
fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: &str = "ACDEFGHIKLMNPQRSTVWY";

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_always_six_values() {
        for seq in ["A", STANDARD, "MTEYKLVVVGAGGVGKSALTIQLIQY"] {
            let f = extract_features(seq).unwrap();
            assert_eq!(f.as_array().len(), FEATURE_COUNT);
            assert!(f.as_array().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_neutral_sequence() {
        let f = extract_features("AAAAAAAAAAAAAAA").unwrap();
        assert_eq!(f.mean_charge(), 0.0);
        assert_eq!(f.std_charge(), 0.0);
        assert_eq!(f.n_terminal_charge(), 0.0);
        assert_eq!(f.c_terminal_charge(), 0.0);
        assert!(approx(f.mean_flexibility(), 0.36));
        assert!(approx(f.std_flexibility(), 0.0));
    }

    #[test]
    fn test_all_aspartate() {
        let f = extract_features("DDDDDDDDDD").unwrap();
        assert_eq!(f.mean_charge(), -1.0);
        assert_eq!(f.std_charge(), 0.0);
        assert_eq!(f.n_terminal_charge(), -1.0);
        assert_eq!(f.c_terminal_charge(), -1.0);
        assert!(approx(f.mean_flexibility(), 0.51));
    }

    #[test]
    fn test_population_std() {
        let f = extract_features("DK").unwrap();
        assert_eq!(f.mean_charge(), 0.0);
        assert_eq!(f.std_charge(), 1.0);
        assert!(approx(f.mean_flexibility(), 0.49));
        assert!(approx(f.std_flexibility(), 0.02));
    }

    #[test]
    fn test_terminal_windows_are_separate() {
        // 10 lysines, 5 alanines, 10 glutamates
        let seq = format!("{}{}{}", "K".repeat(10), "A".repeat(5), "E".repeat(10));
        let f = extract_features(&seq).unwrap();
        assert_eq!(f.n_terminal_charge(), 1.0);
        assert_eq!(f.c_terminal_charge(), -1.0);
        assert_eq!(f.mean_charge(), 0.0);
    }

    #[test]
    fn test_short_sequence_divides_by_full_window() {
        let f = extract_features("K").unwrap();
        assert!(approx(f.n_terminal_charge(), 0.1));
        assert!(approx(f.c_terminal_charge(), 0.1));
        assert_eq!(f.mean_charge(), 1.0);

        let f = extract_features("HHHH").unwrap();
        assert!(approx(f.n_terminal_charge(), 0.2));
        assert!(approx(f.c_terminal_charge(), 0.2));
    }

    #[test]
    fn test_short_windows_overlap() {
        // Both windows cover the whole sequence when it is shorter than 10.
        let f = extract_features("RAAD").unwrap();
        assert_eq!(f.n_terminal_charge(), f.c_terminal_charge());
        assert_eq!(f.n_terminal_charge(), 0.0);
    }

    #[test]
    fn test_unrecognized_symbols_are_neutral() {
        let f = extract_features("XXBZ*").unwrap();
        assert_eq!(f.as_array(), &[0.0; FEATURE_COUNT]);

        // Lookup is case-sensitive.
        let lower = extract_features("dddd").unwrap();
        assert_eq!(lower.mean_charge(), 0.0);
        assert_eq!(lower.mean_flexibility(), 0.0);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let err = extract_features("").unwrap_err();
        assert!(matches!(err, PredictError::InvalidInput(_)));
    }

    #[test]
    fn test_deterministic() {
        let seq = "MTEYKLVVVGAGGVGKSALTIQLIQYHFVDEYDPTIEDSYRKQVVIDGETCLLDILDTAGQEEY";
        let a = extract_features(seq).unwrap();
        let b = extract_features(seq).unwrap();
        let bits_a: Vec<u64> = a.as_array().iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u64> = b.as_array().iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_tables_cover_standard_alphabet() {
        for aa in STANDARD.chars() {
            let f = flexibility(aa);
            assert!((0.30..=0.54).contains(&f), "{aa} flexibility {f}");
        }
        let charged: Vec<char> = STANDARD.chars().filter(|&aa| charge(aa) != 0.0).collect();
        assert_eq!(charged, vec!['D', 'E', 'H', 'K', 'R']);
    }

    #[test]
    fn test_to_f32_preserves_order() {
        let f = extract_features("DDDDDDDDDD").unwrap();
        let row = f.to_f32();
        assert_eq!(row[0], -1.0f32);
        assert_eq!(row[4], -1.0f32);
        assert_eq!(row[5], -1.0f32);
    }
}
