//! Benchmark input data
//!
//! The canned sample string mirrors the published measurements this suite is
//! compared against. Randomized input comes from a caller-owned `rand`
//! generator; there is no process-global engine, so tests and benches control
//! their own seeding.

use rand::Rng;

const SAMPLE: &str =
    "This is\x07 a test string \x07containing some \r\ncontrol\x08 characters\x07 to be removed. \x07";
const SAMPLE_CLEAN: &str =
    "This is a test string containing some control characters to be removed. ";

/// The standard dirty input: `repeat` concatenated copies of the sample
/// sentence.
pub fn sample_text(repeat: usize) -> String {
    SAMPLE.repeat(repeat)
}

/// Expected cleaning output for `sample_text(repeat)`.
pub fn sample_clean(repeat: usize) -> String {
    SAMPLE_CLEAN.repeat(repeat)
}

/// Printable ASCII with roughly `ctrl_ratio` control characters mixed in.
///
/// `ctrl_ratio` is clamped to [0, 1]. The generator is supplied by the
/// caller, who owns seeding and reproducibility.
pub fn random_text(rng: &mut impl Rng, len: usize, ctrl_ratio: f64) -> String {
    let ctrl_ratio = ctrl_ratio.clamp(0.0, 1.0);
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        if rng.gen_bool(ctrl_ratio) {
            out.push(rng.gen_range(0u8..0x20) as char);
        } else {
            out.push(rng.gen_range(0x20u8..0x7f) as char);
        }
    }
    out
}
