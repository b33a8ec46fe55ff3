//! Summary statistics for angular data, computed from the resultant of the
//! unit vectors at each angle.

use serde::Serialize;

/// Sum of the unit vectors (cos, sin) of every angle
fn resultant(samples: &[f64]) -> Option<(f64, f64)> {
    if samples.is_empty() {
        return None;
    }

    Some(
        samples
            .iter()
            .fold((0.0, 0.0), |(c, s), angle| (c + angle.cos(), s + angle.sin())),
    )
}

/// Direction of the resultant vector, in [-pi, pi]
pub fn circular_mean(samples: &[f64]) -> Option<f64> {
    let (c, s) = resultant(samples)?;
    Some(s.atan2(c))
}

/// Length of the resultant divided by the number of samples, in [0, 1]
pub fn mean_resultant_length(samples: &[f64]) -> Option<f64> {
    let (c, s) = resultant(samples)?;
    Some((c.hypot(s) / samples.len() as f64).min(1.0))
}

/// One minus the mean resultant length.  Zero when every angle is the
/// same, close to one for uniformly spread angles.
pub fn circular_variance(samples: &[f64]) -> Option<f64> {
    mean_resultant_length(samples).map(|r| 1.0 - r)
}

/// Result of the Rayleigh test for uniformity on the circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RayleighTest {
    /// Test statistic n * R^2
    pub statistic: f64,

    /// Approximate probability of a statistic this large under uniformity
    pub p_value: f64,
}

impl RayleighTest {
    /// Is the null hypothesis of uniformity rejected at significance `alpha`
    pub fn rejects_uniformity(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Rayleigh test against the uniform distribution, using the second order
/// series approximation of the p-value
pub fn rayleigh_test(samples: &[f64]) -> Option<RayleighTest> {
    let r = mean_resultant_length(samples)?;
    let n = samples.len() as f64;
    let z = n * r * r;

    let correction = 1.0 + (2.0 * z - z.powi(2)) / (4.0 * n)
        - (24.0 * z - 132.0 * z.powi(2) + 76.0 * z.powi(3) - 9.0 * z.powi(4))
            / (288.0 * n * n);
    let p_value = ((-z).exp() * correction).clamp(0.0, 1.0);

    Some(RayleighTest {
        statistic: z,
        p_value,
    })
}

/// Collected circular statistics of a set of samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircularSummary {
    pub count: usize,
    pub mean: f64,
    pub resultant_length: f64,
    pub variance: f64,
    pub rayleigh: RayleighTest,
}

impl CircularSummary {
    /// Summarise the samples, or None if there are none
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let resultant_length = mean_resultant_length(samples)?;

        Some(Self {
            count: samples.len(),
            mean: circular_mean(samples)?,
            resultant_length,
            variance: 1.0 - resultant_length,
            rayleigh: rayleigh_test(samples)?,
        })
    }
}
