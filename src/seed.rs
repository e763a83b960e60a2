//! Seed derivation and the derived-value helpers built on top of it.
//!
//! Every visual property of an avatar comes from [`hash_code`] of the name,
//! optionally offset or multiplied by a small per-shape index, then fed
//! through one of the pure functions below. None of them keep state, so
//! the order in which a generator calls them never matters.

/// Computes the seed for a name.
///
/// This is the classic 31-multiplier string hash over the name's bytes,
/// evaluated with 32-bit signed wrap-around, then made non-negative.
///
/// ```
/// use boring_avatars::seed::hash_code;
///
/// assert_eq!(hash_code("Mary Baker"), 629_664_820);
/// ```
pub fn hash_code(name: &str) -> u64 {
    let hash = name.bytes().fold(0i32, |hash, byte| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(byte))
    });

    u64::from(hash.unsigned_abs())
}

/// Returns the decimal digit of `number` at `position` (0 = least significant).
pub fn digit(number: u64, position: u32) -> u64 {
    10u64
        .checked_pow(position)
        .map_or(0, |divisor| (number / divisor) % 10)
}

/// Returns `true` when the digit at `position` is even.
pub fn boolean(number: u64, position: u32) -> bool {
    digit(number, position) % 2 == 0
}

/// Returns `number mod range` as a float, negated when the digit at `index`
/// is even.
///
/// Index 0 never flips the sign, which is how generators ask for an
/// unsigned magnitude.
pub fn unit(number: u64, range: u64, index: u32) -> f64 {
    let value = (number % range) as f64;

    if index != 0 && boolean(number, index) {
        -value
    } else {
        value
    }
}

/// Picks a color from `colors`, cycling with `number mod len`.
///
/// # Panics
///
/// Panics if `colors` is empty. [`Palette`](crate::Palette) always holds
/// five entries, so this only matters for callers passing their own slices.
pub fn pick_color<S: AsRef<str>>(number: u64, colors: &[S]) -> &str {
    colors[(number % colors.len() as u64) as usize].as_ref()
}
