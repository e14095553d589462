//! Primality test and ordinal formatting used by the counter screen.

/// Trial-division primality test.
///
/// Divisors are checked up to and including `floor(sqrt(n))`, using
/// `i * i <= n` so perfect squares of primes are rejected without
/// going through floating point.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// English ordinal for `n`: `1st`, `2nd`, `3rd`, `4th`, `11th`, `22nd`, ...
pub fn ordinal(n: i64) -> String {
    let abs = n.unsigned_abs();
    let suffix = match (abs % 10, abs % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
