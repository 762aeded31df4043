//! Register arithmetic.
//!
//! A register of a sketch with parameters `(t, d)` is `6 + t + d` bits wide and holds
//! `(u << d) | history`, where `u` is the maximum update value seen so far and bit `k` of the
//! `d`-bit `history` is set if the update value `u - d + k` has been seen as well.
//!
//! Update values are grouped into levels of `2^t` consecutive values. Update value `v` belongs
//! to level `(v - 1) >> t`, and every value of level `j` has probability proportional to `2^-j`
//! (except for the last level, which has the same weight as the one before).

use crate::packed::value_mask;

#[inline]
pub(crate) fn d_mask(d: u32) -> u64 {
    value_mask(d)
}

#[inline]
pub(crate) fn t_mask(t: u32) -> u64 {
    value_mask(t)
}

#[inline]
fn shift_right(s: u64, delta: u64) -> u64 {
    if delta < 64 {
        s >> delta
    } else {
        0
    }
}

/// Splits a hash value into the register index and the update value.
///
/// The lowest `t` bits select the position within a level, the next `p` bits select the
/// register, and the number of leading zeros of the remaining bits (capped at `64 - p - t`)
/// selects the level.
#[inline]
pub(crate) fn index_and_update_value(hash_value: u64, t: u32, p: u32) -> (usize, u64) {
    let idx = ((hash_value >> t) & ((1u64 << p) - 1)) as usize;
    let sub = hash_value & t_mask(t);
    let nlz = (hash_value | ((1u64 << (p + t)) - 1)).leading_zeros() as u64;
    (idx, (nlz << t) + sub + 1)
}

/// Returns the register value after observing update value `v`.
#[inline]
pub(crate) fn update(r: u64, v: u64, d: u32) -> u64 {
    let u = r >> d;
    if v > u {
        let delta = v - u;
        let mut updated = v << d;
        if delta <= d as u64 {
            updated |= ((r & d_mask(d)) | (1u64 << d)) >> delta;
        }
        updated
    } else {
        let delta = u - v;
        if delta > 0 && delta <= d as u64 {
            r | (1u64 << (d as u64 - delta))
        } else {
            r
        }
    }
}

/// Smallest update value that can only have been produced by a hash whose bits above the
/// `from_p + t` lowest bits are all zero.
#[inline]
pub(crate) fn downsize_threshold(t: u32, from_p: u32) -> u64 {
    (((64 - t - from_p) as u64) << t) + 1
}

/// Maps a register of a sketch with parameters `(from_d, from_p)` to the register it would
/// have been in a sketch with `(to_d, to_p)`, where `to_d <= from_d` and `to_p <= from_p`.
///
/// `sub_idx` holds the `from_p - to_p` index bits that the coarser sketch folds into its
/// leading-zero count instead of its register index.
#[allow(clippy::too_many_arguments)]
pub(crate) fn downsize(
    r: u64,
    t: u32,
    from_d: u32,
    to_d: u32,
    from_p: u32,
    to_p: u32,
    sub_idx: usize,
    threshold: u64,
) -> u64 {
    let u = r >> from_d;
    let mut r = r >> (from_d - to_d);
    if u >= threshold {
        let sub_idx_bits = (usize::BITS - sub_idx.leading_zeros()) as i64;
        let shift = ((from_p - to_p) as i64 - sub_idx_bits) << t;
        if shift > 0 {
            // history bits for update values below the threshold move away from the maximum
            let num_bits_to_shift = to_d as i64 + threshold as i64 - u as i64;
            if num_bits_to_shift > 0 {
                let mask = u64::MAX << num_bits_to_shift;
                r = (mask & r) | shift_right(r & !mask, shift as u64);
            }
            r += (shift as u64) << to_d;
        }
    }
    r
}

/// Combines two registers of the same d-parameter.
#[inline]
pub(crate) fn merge(r1: u64, r2: u64, d: u32) -> u64 {
    let u1 = r1 >> d;
    let u2 = r2 >> d;
    if u1 > u2 && u2 > 0 {
        let x = 1u64 << d;
        r1 | shift_right(x | (r2 & (x - 1)), u1 - u2)
    } else if u2 > u1 && u1 > 0 {
        let x = 1u64 << d;
        r2 | shift_right(x | (r1 & (x - 1)), u2 - u1)
    } else {
        r1 | r2
    }
}

/// Returns the unobserved probability mass of register `r` in units of `2^-64`, and reports every
/// observed update value, aggregated per level, to `observed(level, count)`.
///
/// Levels above `63 - t - p` are folded into level `63 - t - p`. An empty register carries the
/// full mass `2^(64 - p)` of its share of the hash space.
pub(crate) fn unobserved_mass<F>(r: u64, t: u32, d: u32, p: u32, mut observed: F) -> u64
where
    F: FnMut(usize, u32),
{
    let u = r >> d;
    if u == 0 {
        return 1u64 << (64 - p);
    }
    let q = (63 - t - p) as u64;
    let level = |j: u64| j.min(q);

    let i = level((u - 1) >> t);
    let mut a = (((i + 2) << t) - u) << (q - i);
    observed(i as usize, 1);

    let history = r & d_mask(d);
    let (u, d) = (u as i64, d as i64);
    // walk levels downwards, starting with the one holding u - 1
    let mut j = (u - 2) >> t;
    while j >= 0 {
        // bit position of update value v is d - u + v
        let lo = d - u + (j << t) + 1;
        let hi = d - u + ((j + 1) << t).min(u - 1);
        if hi < 0 {
            break;
        }
        let lo = lo.max(0);
        let mask = value_mask((hi - lo + 1) as u32) << lo;
        let i = level(j as u64);
        a += ((!history & mask).count_ones() as u64) << (q - i);
        let seen = (history & mask).count_ones();
        if seen > 0 {
            observed(i as usize, seen);
        }
        j -= 1;
    }
    a
}

/// Probability that adding a new distinct element changes register `r`.
#[inline]
pub(crate) fn change_probability(r: u64, t: u32, d: u32, p: u32) -> f64 {
    unobserved_mass(r, t, d, p, |_, _| {}) as f64 * 2f64.powi(-64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_update_value() {
        // t = 2, p = 4: bits 0..2 sub, bits 2..6 index
        let hash = 0b10_0111u64 | (1u64 << 60);
        let (idx, v) = index_and_update_value(hash, 2, 4);
        assert_eq!(idx, 0b1001);
        assert_eq!(v, (3 << 2) + 0b11 + 1);

        // all bits above p + t are zero, nlz is capped at 64 - p - t
        let (idx, v) = index_and_update_value(0, 2, 4);
        assert_eq!(idx, 0);
        assert_eq!(v, (58 << 2) + 1);

        let (idx, v) = index_and_update_value(u64::MAX, 0, 2);
        assert_eq!(idx, 3);
        assert_eq!(v, 1);
    }

    #[test]
    fn test_update_records_history() {
        let d = 4;
        let r = update(0, 7, d);
        assert_eq!(r, 7 << d);

        // smaller value within the window sets a history bit
        let r2 = update(r, 5, d);
        assert_eq!(r2, (7 << d) | 1 << (d - 2));

        // smaller value outside the window is ignored
        assert_eq!(update(r2, 2, d), r2);
        // repeated maximum is ignored
        assert_eq!(update(r2, 7, d), r2);

        // larger value shifts the old maximum into the history
        let r3 = update(r2, 9, d);
        assert_eq!(r3 >> d, 9);
        assert_ne!(r3 & (1 << (d - 2)), 0);
        assert_ne!(r3 & (1 << (d - 4)), 0);

        // a jump beyond the window drops all history
        assert_eq!(update(r3, 20, d), 20 << d);
    }

    #[test]
    fn test_update_is_order_independent() {
        let d = 6;
        let values = [9u64, 3, 7, 8, 12, 10, 2];
        let mut forward = 0;
        for &v in &values {
            forward = update(forward, v, d);
        }
        let mut backward = 0;
        for &v in values.iter().rev() {
            backward = update(backward, v, d);
        }
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_merge_matches_update() {
        let d = 5;
        let a = [4u64, 6, 9];
        let b = [2u64, 8, 11, 7];
        let mut ra = 0;
        a.iter().for_each(|&v| ra = update(ra, v, d));
        let mut rb = 0;
        b.iter().for_each(|&v| rb = update(rb, v, d));
        let mut all = 0;
        a.iter().chain(b.iter()).for_each(|&v| all = update(all, v, d));
        assert_eq!(merge(ra, rb, d), all);
        assert_eq!(merge(rb, ra, d), all);
        assert_eq!(merge(ra, 0, d), ra);
        assert_eq!(merge(ra, ra, d), ra);
    }

    #[test]
    fn test_downsize_without_precision_change() {
        let r = update(update(0, 17, 8), 12, 8);
        let threshold = downsize_threshold(1, 6);
        assert_eq!(downsize(r, 1, 8, 8, 6, 6, 0, threshold), r);
        assert_eq!(downsize(r, 1, 8, 3, 6, 6, 0, threshold), r >> 5);
    }

    #[test]
    fn test_empty_register_mass() {
        for p in 2..=16 {
            let mass = unobserved_mass(0, 2, 20, p, |_, _| panic!("nothing observed"));
            assert_eq!(mass, 1u64 << (64 - p));
            assert_eq!(change_probability(0, 2, 20, p), 2f64.powi(-(p as i32)));
        }
    }

    #[test]
    fn test_mass_decreases_with_information() {
        let (t, d, p) = (2, 20, 8);
        let mut r = 0;
        let mut mass = unobserved_mass(r, t, d, p, |_, _| {});
        for v in [3u64, 9, 5, 14, 10, 13, 1, 2, 4] {
            r = update(r, v, d);
            let next = unobserved_mass(r, t, d, p, |_, _| {});
            assert!(next <= mass);
            mass = next;
        }
    }

    #[test]
    fn test_observed_counts() {
        let (t, d, p) = (0, 3, 4);
        // maximum 5 with 4 and 2 seen; 3 not seen
        let r = update(update(update(0, 5, d), 4, d), 2, d);
        let mut b = [0u32; 64];
        let mass = unobserved_mass(r, t, d, p, |i, c| b[i] += c);
        assert_eq!(&b[..6], &[0, 1, 0, 1, 1, 0]);
        // everything above 5 plus update value 3
        let q = 63 - t - p;
        assert_eq!(mass, (1u64 << (q - 4)) + (1u64 << (q - 2)));
    }
}
