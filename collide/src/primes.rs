//! Selection of prime table sizes.
//!
//! Table capacity is a prime drawn at random from a window scaled to `1.5n..3n` of the number
//! of values `n`, which keeps the load factor below 1.
use collide_core::CollideError;
use rand::seq::IndexedRandom;
use rand::Rng;

/// The smallest prime that can be returned by [`find_prime`].
pub const SMALLEST_ODD_PRIME: usize = 3;

/// Checks whether `x` is prime using trial division by odd numbers up to `sqrt(x)`.
pub fn is_prime(x: u64) -> bool {
    match x {
        0 | 1 => false,
        2 => true,
        _ if x % 2 == 0 => false,
        _ => {
            let mut divisor = 3;
            while divisor <= x / divisor {
                if x % divisor == 0 {
                    return false;
                }
                divisor += 2;
            }
            true
        }
    }
}

/// Collects odd primes of the half-open window `[low, high)`.
fn window_primes(low: usize, high: usize) -> Vec<usize> {
    let first_odd = low.max(SMALLEST_ODD_PRIME) | 1;
    (first_odd..high)
        .step_by(2)
        .filter(|&x| is_prime(x as u64))
        .collect()
}

/// Finds a prime table size for `n` values.
///
/// Searches windows `[3n / (i + 1), 3n / i)` for `i = 1, 2, ...` and returns a prime chosen
/// uniformly at random from the first window that contains any. Only odd primes are
/// considered; when no window can contain one [`SMALLEST_ODD_PRIME`] is returned.
///
/// # Guarantees
///
/// - The result is an odd prime within `(2, 3n]`.
///
/// # Errors
///
/// - [`CollideError::InvalidPrimeBound`] if `n` is 0 or `3n` overflows.
pub fn find_prime<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<usize, CollideError> {
    if n == 0 {
        return Err(CollideError::InvalidPrimeBound(n));
    }
    let upper = n.checked_mul(3).ok_or(CollideError::InvalidPrimeBound(n))?;

    let mut i = 1;
    while upper / i > SMALLEST_ODD_PRIME {
        let primes = window_primes(upper / (i + 1), upper / i);
        if let Some(&prime) = primes.choose(rng) {
            log::trace!(
                "Picked prime {} out of {} candidates for n = {}",
                prime,
                primes.len(),
                n
            );
            return Ok(prime);
        }
        i += 1;
    }

    Ok(SMALLEST_ODD_PRIME)
}
