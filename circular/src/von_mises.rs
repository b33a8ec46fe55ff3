//! Sampling from the von Mises distribution using the ratio-of-uniforms
//! acceptance/rejection scheme from L. Barabesi (1995), "Generating von
//! Mises variates by the ratio-of-uniforms method".

use std::f64::consts::PI;

use rand::{distributions::Distribution, SeedableRng};
use tracing::trace;

use crate::{Error, Result, Rng, Seed, UniformSource};

/// Concentration above which the envelope switches to the 1/sqrt(kappa)
/// scale
const KAPPA_THRESHOLD: f64 = 1.3;

/// Scale of the ratio-of-uniforms proposal for a given concentration
pub fn sampling_parameter(kappa: f64) -> f64 {
    if kappa > KAPPA_THRESHOLD {
        1.0 / kappa.sqrt()
    } else {
        PI * (-kappa).exp()
    }
}

/// Wrap any angle into the range (-pi, pi]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.sin().atan2(angle.cos());

    // atan2 can return exactly -pi, which is the same direction as pi
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// Check that a mean direction lies in [-pi, pi]
pub fn check_mean_direction(mu: f64) -> Result<f64> {
    if (-PI..=PI).contains(&mu) {
        Ok(mu)
    } else {
        Err(Error::invalid(
            "mu",
            format!("the distribution mean must be a real value between -pi and pi, got {mu}"),
        ))
    }
}

/// Check that a concentration is real, finite and non-negative
pub fn check_concentration(kappa: f64) -> Result<f64> {
    if kappa.is_finite() && kappa >= 0.0 {
        Ok(kappa)
    } else {
        Err(Error::invalid(
            "kappa",
            format!("the concentration parameter must be a real, non-negative value, got {kappa}"),
        ))
    }
}

/// Check that at least one sample was requested
pub fn check_sample_count(num_samples: usize) -> Result<usize> {
    if num_samples >= 1 {
        Ok(num_samples)
    } else {
        Err(Error::invalid(
            "num_samples",
            "the number of samples must be a positive integer, got 0",
        ))
    }
}

/// Unimodal von Mises distribution on the circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VonMises {
    mu: f64,
    kappa: f64,
    scale: f64,
}

impl VonMises {
    /// Create a distribution with mean direction `mu` in [-pi, pi] and
    /// concentration `kappa` >= 0
    pub fn new(mu: f64, kappa: f64) -> Result<Self> {
        let mu = check_mean_direction(mu)?;
        let kappa = check_concentration(kappa)?;

        Ok(Self {
            mu,
            kappa,
            scale: sampling_parameter(kappa),
        })
    }

    /// The mean direction
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// The concentration
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// The scale of the rejection envelope, see [`sampling_parameter`]
    pub fn sampling_parameter(&self) -> f64 {
        self.scale
    }

    /// Draw a single sample in (-pi, pi]
    pub fn sample_with<R: UniformSource + ?Sized>(&self, rng: &mut R) -> f64 {
        let (angle, _) = self.propose(rng);
        wrap_angle(angle + self.mu)
    }

    /// Run the rejection loop until a centred angle is accepted, returning
    /// it together with the number of proposals it took
    fn propose<R: UniformSource + ?Sized>(&self, rng: &mut R) -> (f64, u64) {
        let kappa = self.kappa;
        let mut proposals = 0;

        loop {
            proposals += 1;

            // u1 in (0, 1] so the division and logarithm stay finite
            let u1 = 1.0 - rng.uniform();
            let u2 = rng.uniform();

            let angle = self.scale * (2.0 * u2 - 1.0) / u1;
            if angle.abs() > PI {
                continue;
            }

            // cheap quadratic bound before the exact density test
            if kappa * angle * angle < 4.0 - 4.0 * u1 {
                break (angle, proposals);
            }

            if kappa * angle.cos() < 2.0 * u1.ln() + kappa {
                continue;
            }

            break (angle, proposals);
        }
    }

    /// Fill a new vector with `num_samples` samples
    pub fn sample_n<R: UniformSource + ?Sized>(
        &self,
        rng: &mut R,
        num_samples: usize,
    ) -> Result<Vec<f64>> {
        let num_samples = check_sample_count(num_samples)?;

        let mut samples = Vec::new();
        samples.try_reserve_exact(num_samples).map_err(|err| {
            Error::invalid(
                "num_samples",
                format!("cannot allocate {num_samples} samples: {err}"),
            )
        })?;

        let mut proposals = 0;
        for _ in 0..num_samples {
            let (angle, tries) = self.propose(&mut *rng);
            proposals += tries;
            samples.push(wrap_angle(angle + self.mu));
        }

        trace!(
            mu = self.mu,
            kappa = self.kappa,
            num_samples,
            proposals,
            "generated von Mises samples"
        );

        Ok(samples)
    }
}

impl Distribution<f64> for VonMises {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sample_with(rng)
    }
}

/// Von Mises sampler that owns its random number generator, so repeated
/// calls continue the same random sequence
#[derive(Debug, Clone)]
pub struct VonMisesSampler<R = Rng> {
    rng: R,
}

impl<R: UniformSource> VonMisesSampler<R> {
    /// Create a sampler drawing from the given uniform source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `num_samples` independent samples with mean direction `mu`
    /// and concentration `kappa`.  All parameters are validated before the
    /// first random number is drawn.
    pub fn generate(&mut self, mu: f64, kappa: f64, num_samples: usize) -> Result<Vec<f64>> {
        VonMises::new(mu, kappa)?.sample_n(&mut self.rng, num_samples)
    }

    /// Access the underlying uniform source
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Take back the underlying uniform source
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl VonMisesSampler<Rng> {
    /// Create a sampler backed by a PCG generator, identical seeds give
    /// identical samples
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Rng::seed_from_u64(seed))
    }

    /// Create a sampler from either a fixed or an entropy seed
    pub fn seeded(seed: Seed) -> Self {
        Self::from_seed(seed.resolve())
    }

    /// Create a sampler with a seed mixed from time and system randomness
    pub fn from_entropy() -> Self {
        Self::seeded(Seed::Entropy)
    }
}

/// Generate `num_samples` von Mises samples in one call.  With an explicit
/// seed the output is reproducible, otherwise the generator is seeded from
/// entropy.
pub fn generate(mu: f64, kappa: f64, num_samples: usize, seed: Option<u64>) -> Result<Vec<f64>> {
    VonMisesSampler::seeded(seed.into()).generate(mu, kappa, num_samples)
}
