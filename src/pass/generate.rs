//! Password generation.

use zeroize::Zeroize;

use super::{Charset, entropy, length};
use crate::rand::RandomSource;
use crate::settings::Config;
use crate::{Error, Result};

/// A generated password with the figures used to report its strength.
///
/// The password text is zeroed when the value is dropped.
pub struct GeneratedPassword {
    password: String,
    length: usize,
    charset_size: usize,
    entropy_bits: f64,
}

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.password
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn charset_size(&self) -> usize {
        self.charset_size
    }

    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }

    pub fn entropy_display(&self) -> String {
        entropy::format(self.entropy_bits)
    }

    pub fn strength(&self) -> &'static str {
        entropy::strength(self.entropy_bits)
    }
}

impl std::fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("length", &self.length)
            .field("charset_size", &self.charset_size)
            .field("entropy_bits", &self.entropy_bits)
            .finish_non_exhaustive()
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Builds passwords from a [`Config`] using one random source.
#[derive(Debug)]
pub struct Generator {
    rng: RandomSource,
}

impl Generator {
    pub fn new(rng: RandomSource) -> Self {
        Self { rng }
    }

    /// Generator over `/dev/urandom` when it can be read, else baseline only.
    pub fn detect() -> Self {
        Self::new(RandomSource::detect())
    }

    pub fn random_source(&self) -> &RandomSource {
        &self.rng
    }

    /// Generate a single password based on `config`.
    pub fn generate(&self, config: &Config) -> Result<GeneratedPassword> {
        let charset = Charset::build(config);
        if charset.is_empty() {
            return Err(Error::EmptyCharset);
        }

        let length = length::resolve(config, charset.len())?;
        log::debug!(
            "generating {length} chars from a set of {} ({:?})",
            charset.len(),
            config.length_mode
        );

        let password = self.generate_from_charset(&charset, length)?;
        Ok(GeneratedPassword {
            password,
            length,
            charset_size: charset.len(),
            entropy_bits: entropy::calculate(length, charset.len()),
        })
    }

    /// Generate `count` independent passwords.
    pub fn generate_batch(&self, config: &Config, count: usize) -> Result<Vec<GeneratedPassword>> {
        (0..count).map(|_| self.generate(config)).collect()
    }

    /// Draw `length` characters from a non-empty `charset`.
    pub fn generate_from_charset(&self, charset: &Charset, length: usize) -> Result<String> {
        let mut password = String::with_capacity(length * 4);
        for _ in 0..length {
            let idx = self.rng.sample_uniform(charset.len())?;
            match charset.get(idx) {
                Some(c) => password.push(c),
                None => {
                    password.zeroize();
                    return Err(Error::ArithmeticFault {
                        value: idx as u64,
                        bound: charset.len() as u64,
                    });
                }
            }
        }
        Ok(password)
    }
}
