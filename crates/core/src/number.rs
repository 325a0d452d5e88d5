/// Decimal digits of `|n|`, most significant first
///
/// `digits(0)` is `[0]`. The magnitude is taken with `unsigned_abs` so
/// `i64::MIN` is handled without overflow.
pub fn digits(n: i64) -> Vec<u32> {
    n.unsigned_abs()
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

/// Check if `n` is a prime number
///
/// Trial division by every integer in `[2, floor(sqrt(n))]`. Anything below 2,
/// including every negative number, is not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let n = n as u64;
    let mut i: u64 = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// Check if `n` is a perfect number
///
/// A perfect number equals the sum of its divisors strictly below itself.
/// Divisors are collected in pairs `(i, n / i)` up to `sqrt(n)`, which yields
/// the same answer as summing every divisor in `[1, n - 1]`.
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let n = n as u64;
    let mut sum: u64 = 1;
    let mut i: u64 = 2;
    while i * i <= n {
        if n % i == 0 {
            sum += i;
            let pair = n / i;
            if pair != i {
                sum += pair;
            }
            if sum > n {
                return false;
            }
        }
        i += 1;
    }

    sum == n
}

/// Check if `n` is an Armstrong (narcissistic) number
///
/// Both sides of the comparison use `|n|`, so `-153` is reported as Armstrong
/// just like `153`.
pub fn is_armstrong(n: i64) -> bool {
    let digits = digits(n);
    let power = digits.len() as u32;
    let target = u128::from(n.unsigned_abs());

    let mut sum: u128 = 0;
    for d in digits {
        let term = match u128::from(d).checked_pow(power) {
            Some(term) => term,
            None => return false,
        };
        sum = match sum.checked_add(term) {
            Some(sum) => sum,
            None => return false,
        };
        if sum > target {
            return false;
        }
    }

    sum == target
}

/// Sum of the decimal digits of `|n|`
pub fn digit_sum(n: i64) -> u64 {
    digits(n).into_iter().map(u64::from).sum()
}

/// Whether `n` is odd
///
/// Uses `n % 2 != 0` because Rust's remainder keeps the sign of the dividend
/// (`-3 % 2 == -1`).
pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}
