//! Random password generator.

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

use crate::charset::{ALL, ALPHANUMERIC, DIGITS, LOWERCASE, SPECIAL, UPPERCASE};

/// Parameters for [`generate_password_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    include_special: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            include_special: true,
        }
    }
}

impl GenerationConfig {
    /// Shortest length accepted as requested.
    pub const MIN_LENGTH: usize = 8;
    /// Length used when the request is shorter than `MIN_LENGTH`.
    pub const FALLBACK_LENGTH: usize = 12;
    pub const DEFAULT_LENGTH: usize = 16;
    /// Upper bound offered by length selectors. Not enforced.
    pub const MAX_SUGGESTED_LENGTH: usize = 30;

    /// Builds a config, replacing any length below `MIN_LENGTH` with
    /// `FALLBACK_LENGTH`.
    pub fn new(length: usize, include_special: bool) -> Self {
        let length = if length < Self::MIN_LENGTH {
            Self::FALLBACK_LENGTH
        } else {
            length
        };
        Self {
            length,
            include_special,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn include_special(&self) -> bool {
        self.include_special
    }

    fn required_pools(&self) -> &'static [&'static [u8]] {
        if self.include_special {
            &[LOWERCASE, UPPERCASE, DIGITS, SPECIAL]
        } else {
            &[LOWERCASE, UPPERCASE, DIGITS]
        }
    }

    fn fill_pool(&self) -> &'static [u8] {
        if self.include_special { ALL } else { ALPHANUMERIC }
    }
}

/// Generates a password from the operating system's random source.
///
/// The result always holds at least one lowercase letter, one uppercase
/// letter, one digit and, when `include_special` is set, one character
/// from `!@#$%^&*`. Lengths below 8 produce a 12 character password.
pub fn generate_password(length: usize, include_special: bool) -> SecretString {
    generate_password_with(&GenerationConfig::new(length, include_special), &mut OsRng)
}

/// Generates a password using the supplied random source.
pub fn generate_password_with<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> SecretString {
    // One guaranteed character per pool, then a uniform fill.
    let mut chars: Vec<u8> = Vec::with_capacity(config.length);
    for pool in config.required_pools() {
        chars.push(pick(pool, &mut *rng));
    }
    let fill = config.fill_pool();
    while chars.len() < config.length {
        chars.push(pick(fill, &mut *rng));
    }

    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = config.length,
        include_special = config.include_special,
        "password generated"
    );

    let password: String = chars.into_iter().map(char::from).collect();
    SecretString::new(password.into())
}

fn pick<R: Rng + ?Sized>(pool: &[u8], rng: &mut R) -> u8 {
    pool[rng.gen_range(0..pool.len())]
}
