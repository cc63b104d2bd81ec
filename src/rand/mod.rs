//! Random index sampling from a baseline generator combined with an
//! optional secure source.

mod baseline;
mod hw;
mod urand;

pub use baseline::Baseline;
pub use urand::Urandom;

use crate::{Error, Result};

const U32_RANGE: u64 = 1 << 32;

/// A cryptographically strong source of uniform 32-bit values.
pub trait SecureRandom {
    /// Fill `dest` with independent uniform `u32` values.
    fn fill_u32(&self, dest: &mut [u32]) -> Result<()>;

    /// One-time capability check run when a [`RandomSource`] is built.
    fn probe(&self) -> bool {
        let mut word = [0u32; 1];
        self.fill_u32(&mut word).is_ok()
    }
}

/// Sums a baseline sample and a secure sample modulo `n`.
///
/// The secure source is probed once in the constructor. A source that
/// fails the probe is dropped and contributes zero for the lifetime of
/// the instance.
pub struct RandomSource {
    baseline: Baseline,
    secure: Option<Box<dyn SecureRandom>>,
}

impl RandomSource {
    pub fn new(secure: Option<Box<dyn SecureRandom>>) -> Self {
        Self::with_baseline(Baseline::new(), secure)
    }

    pub fn with_baseline(baseline: Baseline, secure: Option<Box<dyn SecureRandom>>) -> Self {
        let secure = secure.filter(|s| s.probe());
        if secure.is_some() {
            log::debug!("secure random source enabled");
        } else {
            log::debug!(
                "secure random source unavailable, using baseline ({}) only",
                hw::source_name()
            );
        }
        Self { baseline, secure }
    }

    /// Baseline only.
    pub fn baseline_only() -> Self {
        Self {
            baseline: Baseline::new(),
            secure: None,
        }
    }

    /// Probe `/dev/urandom` and fall back to baseline only.
    pub fn detect() -> Self {
        let secure = Urandom::open().map(|u| Box::new(u) as Box<dyn SecureRandom>);
        Self::new(secure)
    }

    pub fn has_secure(&self) -> bool {
        self.secure.is_some()
    }

    pub fn source_name(&self) -> &'static str {
        if self.has_secure() {
            "/dev/urandom + baseline"
        } else {
            hw::source_name()
        }
    }

    /// Uniform integer in `[0, n)`.
    pub fn sample_uniform(&self, n: usize) -> Result<usize> {
        let bound = n as u64;
        if bound == 0 || bound > U32_RANGE {
            return Err(Error::ArithmeticFault { value: 0, bound });
        }

        let x = self.baseline.sample(bound)?;
        let y = match &self.secure {
            Some(secure) => unbiased(secure.as_ref(), bound)?,
            None => 0,
        };
        Ok(((x + y) % bound) as usize)
    }
}

impl std::fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomSource")
            .field("secure", &self.secure.is_some())
            .finish_non_exhaustive()
    }
}

/// Rejection sampling over `u32` draws.
///
/// A draw is rejected when it falls in the short last bucket, so every
/// accepted `x % n` is equally likely. Fewer than half of the draws can be
/// rejected for any `n`, so the loop ends quickly. Do not replace this with
/// a bare modulo.
fn unbiased(secure: &dyn SecureRandom, n: u64) -> Result<u64> {
    let mut word = [0u32; 1];
    loop {
        secure.fill_u32(&mut word)?;
        let x = word[0] as u64;
        if x - x % n <= U32_RANGE - n {
            return Ok(x % n);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;
    use crate::{Charset, Config, Generator};

    /// Replays a fixed sequence, then repeats the last value.
    struct Scripted {
        values: RefCell<VecDeque<u32>>,
        last: Cell<u32>,
        draws: Rc<Cell<usize>>,
    }

    impl Scripted {
        fn new(values: &[u32]) -> (Self, Rc<Cell<usize>>) {
            let draws = Rc::new(Cell::new(0));
            let source = Self {
                values: RefCell::new(values.iter().copied().collect()),
                last: Cell::new(values.last().copied().unwrap_or(0)),
                draws: draws.clone(),
            };
            (source, draws)
        }
    }

    impl SecureRandom for Scripted {
        fn fill_u32(&self, dest: &mut [u32]) -> Result<()> {
            for slot in dest.iter_mut() {
                *slot = self.values.borrow_mut().pop_front().unwrap_or(self.last.get());
                self.draws.set(self.draws.get() + 1);
            }
            Ok(())
        }

        fn probe(&self) -> bool {
            true
        }
    }

    struct Broken;

    impl SecureRandom for Broken {
        fn fill_u32(&self, _: &mut [u32]) -> Result<()> {
            Err(Error::SecureSource("no capability".into()))
        }
    }

    /// Passes the capability check, then fails every read.
    struct FailsAfterProbe;

    impl SecureRandom for FailsAfterProbe {
        fn fill_u32(&self, _: &mut [u32]) -> Result<()> {
            Err(Error::SecureSource("device closed".into()))
        }

        fn probe(&self) -> bool {
            true
        }
    }

    #[test]
    fn read_failure_after_probe_propagates() {
        let rng = RandomSource::new(Some(Box::new(FailsAfterProbe)));
        assert!(rng.has_secure());
        assert!(matches!(rng.sample_uniform(10), Err(Error::SecureSource(_))));
    }

    #[test]
    fn read_failure_after_probe_yields_no_password() {
        let generator = Generator::new(RandomSource::new(Some(Box::new(FailsAfterProbe))));
        let result = generator.generate(&Config::fixed_length(16));
        assert!(matches!(result, Err(Error::SecureSource(_))));

        let charset = Charset::build(&Config::default());
        let result = generator.generate_from_charset(&charset, 16);
        assert!(matches!(result, Err(Error::SecureSource(_))));
    }

    #[test]
    fn debug_hides_generator_state() {
        let rng = RandomSource::with_baseline(Baseline::with_seed(0xdead_beef), None);
        let debug = format!("{rng:?}");
        assert!(!debug.contains(&0xdead_beef_u64.to_string()));
        assert!(!debug.to_lowercase().contains("deadbeef"));
        assert_eq!(format!("{:?}", Baseline::with_seed(5)), "Baseline { .. }");
    }

    #[test]
    fn rejection_skips_biased_tail() {
        // n = 3: 2^32 - 1 is in the short bucket, 2^32 - 2 is not
        let (source, draws) = Scripted::new(&[u32::MAX, u32::MAX - 1]);
        assert_eq!(unbiased(&source, 3).unwrap(), (u32::MAX as u64 - 1) % 3);
        assert_eq!(draws.get(), 2);
    }

    #[test]
    fn rejection_accepts_power_of_two_immediately() {
        let (source, draws) = Scripted::new(&[u32::MAX]);
        assert_eq!(unbiased(&source, 16).unwrap(), 15);
        assert_eq!(draws.get(), 1);
    }

    #[test]
    fn broken_source_disabled_at_construction() {
        let rng = RandomSource::new(Some(Box::new(Broken)));
        assert!(!rng.has_secure());
        for _ in 0..100 {
            assert!(rng.sample_uniform(10).unwrap() < 10);
        }
    }

    #[test]
    fn combines_baseline_and_secure() {
        let (source, _) = Scripted::new(&[4]);
        let a = RandomSource::with_baseline(Baseline::with_seed(11), Some(Box::new(source)));
        let b = Baseline::with_seed(11);
        for _ in 0..50 {
            let expected = (b.sample(7).unwrap() + 4) % 7;
            assert_eq!(a.sample_uniform(7).unwrap() as u64, expected);
        }
    }

    #[test]
    fn single_symbol_is_always_zero() {
        let rng = RandomSource::baseline_only();
        for _ in 0..100 {
            assert_eq!(rng.sample_uniform(1).unwrap(), 0);
        }
    }

    #[test]
    fn zero_bound_is_a_fault() {
        let rng = RandomSource::baseline_only();
        assert!(matches!(
            rng.sample_uniform(0),
            Err(Error::ArithmeticFault { bound: 0, .. })
        ));
    }

    #[test]
    fn baseline_only_is_uniform() {
        const N: usize = 10;
        const TRIALS: usize = 100_000;

        let rng = RandomSource::with_baseline(Baseline::with_seed(0x5eed), None);
        let mut counts = [0usize; N];
        for _ in 0..TRIALS {
            counts[rng.sample_uniform(N).unwrap()] += 1;
        }

        let expected = TRIALS as f64 / N as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        // 9 degrees of freedom, p = 0.001 critical value
        assert!(chi2 < 27.88, "chi-squared {chi2} for {counts:?}");
    }
}
