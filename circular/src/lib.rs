//! Random sampling from distributions on the circle.
//!
//! The von Mises sampler draws its uniform numbers from any
//! [`UniformSource`], so it can be driven by the bundled PCG generator
//! [`Rng`], by any `rand` generator, or by a fixed sequence in tests.

mod error;
mod rng;
mod seed;
mod von_mises;

pub mod stats;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use error::Result;

pub use rng::Rng;
pub use rng::UniformSource;

pub use seed::Seed;

pub use von_mises::check_concentration;
pub use von_mises::check_mean_direction;
pub use von_mises::check_sample_count;
pub use von_mises::generate;
pub use von_mises::sampling_parameter;
pub use von_mises::wrap_angle;
pub use von_mises::VonMises;
pub use von_mises::VonMisesSampler;
