use crate::{seed::split_mix, Seed};

#[test]
fn fixed_seed_resolves_to_itself() {
    assert_eq!(Seed::Fixed(1234).resolve(), 1234);
    assert_eq!(Seed::from(99u64).resolve(), 99);
}

#[test]
fn optional_seed_conversion() {
    assert_eq!(Seed::from(Some(5)), Seed::Fixed(5));
    assert_eq!(Seed::from(None), Seed::Entropy);
    assert_eq!(Seed::default(), Seed::Entropy);
}

#[test]
fn entropy_seeds_differ_between_calls() {
    let a = Seed::Entropy.resolve();
    let b = Seed::Entropy.resolve();
    assert_ne!(a, b);
}

#[test]
fn split_mix_reference() {
    // first output of SplitMix64 started from state zero
    assert_eq!(split_mix(0), 0xe220a8397b1dcdaf);
}
