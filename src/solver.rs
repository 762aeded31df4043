//! Solver for the maximum-likelihood equation shared by the sketch estimator and the token
//! estimator.

const C0: f64 = -1.0 / 3.0;
const C1: f64 = 1.0 / 45.0;
const C2: f64 = 1.0 / 472.5;

/// Finds the root `x > 0` of
///
/// `sum_{k=0}^{n} b[k] * 2^(-k) / (exp(x * 2^(-k)) - 1) = a`
///
/// The left-hand side decreases strictly from infinity to zero, so the root is unique. Iteration
/// stops once the step size falls below `relative_error_limit * x`.
///
/// Returns `0` if all `b[k]` vanish (nothing observed) and `+inf` if `a <= 0` while some
/// `b[k]` is positive (no unobserved probability mass left).
///
/// # Panics
///
/// Panics if `n >= 0` and `b` has fewer than `n + 1` entries.
pub fn solve_maximum_likelihood_equation(
    a: f64,
    b: &[u32],
    n: i32,
    relative_error_limit: f64,
) -> f64 {
    assert!(
        n < 0 || (n as usize) < b.len(),
        "histogram has {} levels, but n = {}",
        b.len(),
        n
    );
    let mut k_max = n;
    while k_max >= 0 && b[k_max as usize] == 0 {
        k_max -= 1;
    }
    if k_max < 0 {
        return 0.0;
    }
    if a <= 0.0 {
        return f64::INFINITY;
    }

    // s1 = sum of b[k], s2 = sum of b[k] * 2^k
    let mut k_min = k_max;
    let mut s1 = b[k_max as usize] as u64;
    let mut s2 = b[k_max as usize] as f64 * 2f64.powi(k_max);
    for k in (0..k_max).rev() {
        let t = b[k as usize];
        if t > 0 {
            s1 += t as u64;
            s2 += t as f64 * 2f64.powi(k);
            k_min = k;
        }
    }
    let s1 = s1 as f64;

    let mut x = if s2 <= 1.5 * a {
        s1 / (0.5 * s2 + a)
    } else {
        (s2 / a).ln_1p() * (s1 / s2)
    };

    let mut delta_x = x;
    let mut g_prev = 0.0;

    while delta_x > x * relative_error_limit {
        // x in [2^(kappa - 2), 2^(kappa - 1))
        let raw_x = x.to_bits();
        let kappa = ((raw_x & 0x7FF0_0000_0000_0000) >> 52) as i32 - 1021;

        // x_prime = x / 2^(max(k_max, kappa) + 1), which lies in [0, 0.25]
        let scale = k_max.max(kappa) + 1;
        let mut x_prime = f64::from_bits(raw_x.wrapping_sub((scale as u64) << 52));

        let x_prime2 = x_prime * x_prime;
        let mut h = x_prime + x_prime2 * (C0 + x_prime2 * (C1 - x_prime2 * C2));

        let mut k = kappa - 1;
        while k >= k_max {
            let h_prime = 1.0 - h;
            h = (x_prime + h * h_prime) / (x_prime + h_prime);
            x_prime += x_prime;
            k -= 1;
        }

        let mut g = b[k_max as usize] as f64 * h;
        let mut k = k_max - 1;
        while k >= k_min {
            let h_prime = 1.0 - h;
            h = (x_prime + h * h_prime) / (x_prime + h_prime);
            x_prime += x_prime;
            g += b[k as usize] as f64 * h;
            k -= 1;
        }
        g += x * a;

        if g_prev < g && g <= s1 {
            delta_x *= (g - s1) / (g_prev - g);
        } else {
            delta_x = 0.0;
        }
        x += delta_x;
        g_prev = g;
    }

    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    const LIMIT: f64 = 1e-14;

    fn solve1(a: f64, b0: u32) -> f64 {
        (b0 as f64 / a).ln_1p()
    }

    fn solve2(a: f64, b0: u32, b1: u32) -> f64 {
        let half_b1 = 0.5 * b1 as f64;
        2.0 * ((half_b1 + (half_b1 * half_b1 + 4.0 * a * (a + b0 as f64 + half_b1)).sqrt())
            / (2.0 * a))
            .ln()
    }

    // Reference solution by plain bisection over [0, f64::MAX].
    fn solve_n(a: f64, b: &[u32]) -> f64 {
        let f = |x: f64| {
            let mut sum = 0.0;
            for (i, &bi) in b.iter().enumerate() {
                if bi > 0 {
                    let w = 2f64.powi(-(i as i32));
                    sum += bi as f64 * w / (x * w).exp_m1();
                }
            }
            sum - a
        };
        let mut lo = 0.0f64;
        let mut hi = f64::MAX;
        loop {
            let mid = lo + (hi - lo) * 0.5;
            if mid <= lo || mid >= hi {
                return mid;
            }
            if f(mid) > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        if expected == 0.0 {
            assert_eq!(actual, 0.0);
        } else {
            let rel = ((actual - expected) / expected).abs();
            assert!(rel < 1e-8, "actual {actual} expected {expected} rel {rel}");
        }
    }

    #[test]
    fn test_no_observations() {
        assert_eq!(solve_maximum_likelihood_equation(0.0, &[], -1, LIMIT), 0.0);
        assert_eq!(solve_maximum_likelihood_equation(1.0, &[], -1, LIMIT), 0.0);
        assert_eq!(solve_maximum_likelihood_equation(2.0, &[], -1, LIMIT), 0.0);
        assert_eq!(solve_maximum_likelihood_equation(0.0, &[0, 0, 0], 2, LIMIT), 0.0);
    }

    #[test]
    #[should_panic(expected = "histogram has 3 levels")]
    fn test_histogram_shorter_than_n() {
        solve_maximum_likelihood_equation(1.0, &[1, 0, 2], 3, LIMIT);
    }

    #[test]
    fn test_no_unobserved_mass() {
        let x = solve_maximum_likelihood_equation(0.0, &[1], 0, LIMIT);
        assert!(x.is_infinite() && x > 0.0);
        let x = solve_maximum_likelihood_equation(0.0, &[1, 0], 1, LIMIT);
        assert!(x.is_infinite() && x > 0.0);
    }

    #[test]
    fn test_single_level() {
        for &(a, b0) in &[
            (1.0, 1),
            (2.0, 3),
            (3.0, 2),
            (5.0, 7),
            (11.0, 7),
            (0.03344574927673416, 238),
        ] {
            assert_close(solve_maximum_likelihood_equation(a, &[b0], 0, LIMIT), solve1(a, b0));
        }
        assert_close(
            solve_maximum_likelihood_equation(2f64.powi(-64), &[1], 0, LIMIT),
            solve1(2f64.powi(-64), 1),
        );
    }

    #[test]
    fn test_two_levels() {
        for &(a, b0, b1) in &[
            (3.0, 2, 0),
            (5.0, 7, 0),
            (11.0, 7, 0),
            (0.12274207925281233, 574, 580),
            (1.0, 2, 3),
            (3.0, 2, 1),
        ] {
            assert_close(
                solve_maximum_likelihood_equation(a, &[b0, b1], 1, LIMIT),
                solve2(a, b0, b1),
            );
        }
    }

    #[test]
    fn test_many_levels() {
        let cases: [(f64, &[u32]); 4] = [
            (3.0, &[2, 1, 4, 5]),
            (3.0, &[6, 7, 2, 1, 4, 5]),
            (7.0, &[0, 0, 6, 7, 2, 1, 4, 5, 0, 0, 0, 0]),
            (7.0, &[0, 0, 6, 7, 0, 0, 4, 5, 0, 0, 0, 0]),
        ];
        for (a, b) in cases {
            assert_close(
                solve_maximum_likelihood_equation(a, b, b.len() as i32 - 1, LIMIT),
                solve_n(a, b),
            );
        }

        let mut b = [0u32; 65];
        b[64] = 1;
        assert_close(
            solve_maximum_likelihood_equation(1.0, &b, 64, LIMIT),
            solve_n(1.0, &b),
        );
    }

    #[test]
    fn test_random_single_level() {
        let mut rng = StdRng::seed_from_u64(0x93b7_23ca_5f23_4685);
        for _ in 0..10_000 {
            let a = 1.0 - rng.gen::<f64>();
            let b0 = rng.gen_range(0..1000u32);
            assert_close(solve_maximum_likelihood_equation(a, &[b0], 0, LIMIT), solve1(a, b0));
        }
    }
}
