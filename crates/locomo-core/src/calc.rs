//! Score derivations shared by the result types.

use crate::models::locomo25::QUESTION_COUNT;

/// Two-step ratio: the two maximal strides divided by body height.
///
/// Returns `0.0` for a zero height instead of dividing by zero. Height is
/// validated as positive upstream, so this only guards stray callers.
pub fn two_step_score(step1_cm: f64, step2_cm: f64, height_cm: f64) -> f64 {
    if height_cm == 0.0 {
        return 0.0;
    }
    (step1_cm + step2_cm) / height_cm
}

/// Sum of the 25 Locomo25 answers (0–100).
///
/// Callers guarantee every answer is in 0..=4.
pub fn questionnaire_total(answers: &[u8; QUESTION_COUNT]) -> u32 {
    answers.iter().map(|&a| u32::from(a)).sum()
}
