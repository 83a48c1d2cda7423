//! Fixed character pools and sequences shared by the evaluator and generator.

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*";

/// Union of the pools used when special characters are excluded.
pub const ALPHANUMERIC: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Union of every pool.
pub const ALL: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Ascending runs whose 3-wide windows count as sequential.
/// The digit run wraps so that `890` is covered.
const SEQUENCES: [&[u8]; 2] = [b"abcdefghijklmnopqrstuvwxyz", b"01234567890"];

pub const SEQUENCE_WINDOW: usize = 3;

pub fn is_special(c: char) -> bool {
    c.is_ascii() && SPECIAL.contains(&(c as u8))
}

/// Iterates every sequential window, `abc` through `xyz` then `012` through `890`.
pub fn sequential_windows() -> impl Iterator<Item = &'static [u8]> {
    SEQUENCES
        .into_iter()
        .flat_map(|sequence| sequence.windows(SEQUENCE_WINDOW))
}
