mod seed;
mod stats;

pub use self::rng::Scripted;
