use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Cap on the reported progress toward a weight goal.
pub const MAX_PROGRESS_PCT: f64 = 100.0;

/// Progress of a weight series toward a target weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProgress {
    /// Latest reading.
    pub current_weight: f64,

    /// Current minus start; negative when weight was lost.
    pub weight_change: f64,

    /// |start − current| / |start − target| as a percentage, capped at 100.
    pub progress_percentage: f64,

    /// Distance left to the target in kg.
    pub remaining_kg: f64,

    pub is_losing: bool,
}

/// Measure progress from `start_weight` toward `target_weight`.
///
/// `readings` are in chronological order; the last one is the current weight.
pub fn weight_progress(
    start_weight: f64,
    target_weight: f64,
    readings: &[f64],
) -> Result<WeightProgress> {
    let Some(&current_weight) = readings.last() else {
        return Err(PlannerError::InvalidInput(
            "no weight readings".to_string(),
        ));
    };

    let total = (start_weight - target_weight).abs();
    if total == 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "target weight {} equals start weight",
            target_weight
        )));
    }

    let progress = (start_weight - current_weight).abs() / total * 100.0;

    Ok(WeightProgress {
        current_weight,
        weight_change: current_weight - start_weight,
        progress_percentage: progress.min(MAX_PROGRESS_PCT),
        remaining_kg: (current_weight - target_weight).abs(),
        is_losing: start_weight > target_weight,
    })
}

/// Summary of a BMI series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiTrend {
    pub current: f64,

    /// Last minus first reading; 0 for a single reading.
    pub trend: f64,

    pub average: f64,
}

pub fn bmi_trend(readings: &[f64]) -> Result<BmiTrend> {
    let (Some(&first), Some(&current)) = (readings.first(), readings.last()) else {
        return Err(PlannerError::InvalidInput("no BMI readings".to_string()));
    };

    Ok(BmiTrend {
        current,
        trend: current - first,
        average: readings.iter().sum::<f64>() / readings.len() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_progress_losing() {
        let p = weight_progress(90.0, 80.0, &[90.0, 88.0, 86.0]).unwrap();
        assert_eq!(p.current_weight, 86.0);
        assert!((p.weight_change + 4.0).abs() < 1e-9);
        assert!((p.progress_percentage - 40.0).abs() < 1e-9);
        assert!((p.remaining_kg - 6.0).abs() < 1e-9);
        assert!(p.is_losing);
    }

    #[test]
    fn test_weight_progress_gaining_and_capped() {
        // Overshot a gain goal of 60 -> 65 by 2 kg
        let p = weight_progress(60.0, 65.0, &[62.0, 67.0]).unwrap();
        assert_eq!(p.progress_percentage, MAX_PROGRESS_PCT);
        assert!((p.remaining_kg - 2.0).abs() < 1e-9);
        assert!(!p.is_losing);
    }

    #[test]
    fn test_weight_progress_wrong_direction_counts_distance() {
        let p = weight_progress(80.0, 70.0, &[85.0]).unwrap();
        assert!((p.progress_percentage - 50.0).abs() < 1e-9);
        assert!((p.weight_change - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_weight_progress_invalid() {
        assert!(matches!(
            weight_progress(80.0, 70.0, &[]),
            Err(PlannerError::InvalidInput(_))
        ));
        assert!(matches!(
            weight_progress(75.0, 75.0, &[74.0]),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bmi_trend() {
        let t = bmi_trend(&[26.0, 25.5, 24.5]).unwrap();
        assert_eq!(t.current, 24.5);
        assert!((t.trend + 1.5).abs() < 1e-9);
        assert!((t.average - 25.333333333).abs() < 1e-6);

        let single = bmi_trend(&[22.0]).unwrap();
        assert_eq!(single.trend, 0.0);
        assert_eq!(single.average, 22.0);

        assert!(matches!(bmi_trend(&[]), Err(PlannerError::InvalidInput(_))));
    }
}
