//! 32-bit hash tokens.
//!
//! A token keeps the lowest 26 bits of a 64-bit hash value together with the number of leading
//! zeros of the remaining 38 bits. Since every admissible sketch uses at most the lowest 26 bits
//! for its register index and the leading-zero count for the update value, adding
//! `reconstruct_hash(compute_token(h))` to a sketch has exactly the same effect as adding `h`.
//!
//! Tokens can therefore be collected (and deduplicated) before deciding whether a sketch is
//! worth allocating, and a sorted token list allows estimating the distinct count directly.

use crate::solver::solve_maximum_likelihood_equation;

const INDEX_BITS: u32 = 26;
const INDEX_MASK: u64 = (1 << INDEX_BITS) - 1;
const NLZ_MASK: u32 = 0x3F;
// 38 ones
const RECONSTRUCTION_PATTERN: u64 = 0x3F_FFFF_FFFF;
// Levels of the token space, the last one (nlz == 38) is folded into level 37.
const MAX_LEVEL: usize = 37;
const TOKEN_ESTIMATOR_RELATIVE_ERROR_LIMIT: f64 = 1e-10;

/// Computes the 32-bit token of a 64-bit hash value.
#[inline]
pub fn compute_token(hash_value: u64) -> u32 {
    let nlz = (hash_value | INDEX_MASK).leading_zeros();
    ((hash_value as u32) << 6) | nlz
}

/// Returns a hash value that has the same token and the same effect on any sketch as every hash
/// value the given token may have been computed from.
///
/// The bits below the leading one of the upper 38 bits are filled with ones.
#[inline]
pub fn reconstruct_hash(token: u32) -> u64 {
    let nlz = token & NLZ_MASK;
    ((RECONSTRUCTION_PATTERN >> nlz) << INDEX_BITS) | (token >> 6) as u64
}

/// Estimates the number of distinct elements from a sorted sequence of tokens.
///
/// Tokens must be given in non-decreasing order; consecutive tokens that map to the same hash
/// value are counted once. Every token represents a disjoint part of the hash space, and the
/// estimate is the maximum-likelihood solution given which parts were hit.
///
/// Returns `0` for an empty sequence and `+inf` if every possible token has been observed.
pub fn estimate_distinct_count_from_tokens<I>(tokens: I) -> f64
where
    I: IntoIterator<Item = u32>,
{
    let mut b = [0u32; MAX_LEVEL + 1];
    // observed probability mass in units of 2^-64
    let mut observed = 0u64;
    let mut count = 0u64;
    let mut previous = None;

    for token in tokens {
        let hash = reconstruct_hash(token);
        if previous == Some(hash) {
            continue;
        }
        previous = Some(hash);
        let level = ((token & NLZ_MASK) as usize).min(MAX_LEVEL);
        b[level] += 1;
        observed = observed.wrapping_add(1u64 << (MAX_LEVEL - level));
        count += 1;
    }

    if count == 0 {
        return 0.0;
    }

    // the total mass 2^64 wraps to zero once every token has been seen
    let unobserved = 0u64.wrapping_sub(observed);
    let a = unobserved as f64 * 2f64.powi(-(MAX_LEVEL as i32));
    solve_maximum_likelihood_equation(
        a,
        &b,
        MAX_LEVEL as i32,
        TOKEN_ESTIMATOR_RELATIVE_ERROR_LIMIT,
    ) * (1u64 << (INDEX_BITS + 1)) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn splitmix64(x: &mut u64) -> u64 {
        *x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = *x;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    #[test]
    fn test_token_layout() {
        assert_eq!(compute_token(0), 38);
        assert_eq!(compute_token(u64::MAX), 0xFFFF_FFC0);
        assert_eq!(compute_token(1 << 63), 0);
        assert_eq!(compute_token(0x3FF_FFFF), 0xFFFF_FFC0 | 38);
        assert_eq!(reconstruct_hash(38), 0);
        assert_eq!(reconstruct_hash(0), 0xFFFF_FFFF_FC00_0000);
    }

    #[test]
    fn test_reconstruct_hash() {
        let mut rng = StdRng::seed_from_u64(0x0266_8000_3f97_8228);
        for nlz in 0..=38u32 {
            for _ in 0..100 {
                let r = rng.gen::<u64>();
                let hash = (((1u64 << 37) >> nlz) << 26) | ((u64::MAX >> nlz) & r);
                let token = compute_token(hash);
                let reconstructed = reconstruct_hash(token);
                assert_eq!(reconstructed, hash | ((0x1F_FFFF_FFFFu64 >> nlz) << 26));
                assert_eq!(compute_token(reconstructed), token);
            }
        }
    }

    fn check_estimate_from_tokens(distinct_count: usize) {
        let mut state = 0u64;
        for _ in 0..10 {
            let mut tokens: Vec<u32> = (0..distinct_count)
                .map(|_| compute_token(splitmix64(&mut state)))
                .collect();
            tokens.sort_unstable();
            let estimate = estimate_distinct_count_from_tokens(tokens.iter().copied());
            let rel = (estimate - distinct_count as f64).abs() / distinct_count as f64;
            assert!(
                rel < 0.01,
                "distinct count {distinct_count}, estimate {estimate}"
            );
        }
    }

    #[test]
    fn test_estimate_from_tokens() {
        for n in [1, 2, 3, 5, 10, 100, 1000, 10_000, 100_000, 1_000_000] {
            check_estimate_from_tokens(n);
        }
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let mut state = 42u64;
        let mut tokens: Vec<u32> = (0..1000)
            .map(|_| compute_token(splitmix64(&mut state)))
            .collect();
        tokens.sort_unstable();
        tokens.dedup();
        let expected = estimate_distinct_count_from_tokens(tokens.iter().copied());
        let doubled = tokens.iter().flat_map(|&t| [t, t]);
        assert_eq!(estimate_distinct_count_from_tokens(doubled), expected);
    }

    #[test]
    fn test_estimate_from_zero_tokens() {
        assert_eq!(estimate_distinct_count_from_tokens(std::iter::empty()), 0.0);
    }

    #[test]
    #[ignore = "iterates over the whole 32-bit token space"]
    fn test_estimate_from_all_tokens() {
        let estimate = estimate_distinct_count_from_tokens(0..=0xFFFF_FFE6u32);
        assert!(estimate.is_infinite());
    }

    #[test]
    #[ignore = "iterates over the whole 32-bit token space"]
    fn test_estimate_from_almost_all_tokens() {
        let estimate = estimate_distinct_count_from_tokens(0..0xFFFF_FFE6u32);
        assert!(estimate.is_finite());
        assert!(estimate > 3e20);
    }
}
