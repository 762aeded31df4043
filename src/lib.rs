// This implementation follows the Java reference implementation of ExaLogLog
// https://github.com/dynatrace-research/exaloglog-paper
// See the paper "ExaLogLog: Space-Efficient and Practical Approximate Distinct Counting up to the Exa-Scale"

mod bias;
mod error;
mod packed;
mod register;
mod solver;
mod token;

pub use error::{Error, Result};
pub use solver::solve_maximum_likelihood_equation;
pub use token::{compute_token, estimate_distinct_count_from_tokens, reconstruct_hash};

use bias::ML_BIAS_CORRECTION_CONSTANTS;
use packed::PackedArray;

/// Smallest admissible precision parameter.
pub const MIN_P: u32 = 2;
/// Largest admissible t-parameter (64 - 6).
pub const MAX_T: u32 = 58;
const MAX_P_PLUS_T: u32 = 26;
const REGISTER_BASE_BITS: u32 = 6;

// Relative error limit of the maximum-likelihood equation solver, divided by sqrt(m).
const ML_EQUATION_SOLVER_EPS: f64 = 1e-3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::hash::{BuildHasher, Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

/// A trait for observing state changes in the ExaLogLog sketch
pub trait StateChangeObserver {
    /// Called whenever an insertion changed the state, with the amount by which the
    /// probability of a further state change has decreased.
    fn state_changed(&mut self, probability_decrement: f64);
}

/// Returns the smallest admissible precision parameter, which does not depend on `t`.
pub fn min_p() -> u32 {
    MIN_P
}

/// Returns the largest admissible precision parameter for the given t-parameter.
pub fn max_p(t: u32) -> u32 {
    MAX_P_PLUS_T.saturating_sub(t)
}

/// Returns the largest admissible d-parameter for the given t-parameter.
pub fn max_d(t: u32) -> u32 {
    (64 - REGISTER_BASE_BITS).saturating_sub(t)
}

fn register_bit_size(t: u32, d: u32) -> u32 {
    REGISTER_BASE_BITS + t + d
}

fn check_parameter(name: &'static str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        return Err(Error::InvalidParameter {
            name,
            value: value as i64,
            min: min as i64,
            max: max as i64,
        });
    }
    Ok(())
}

fn check_t(t: u32) -> Result<()> {
    check_parameter("t", t, 0, MAX_T)
}

fn check_d(d: u32, t: u32) -> Result<()> {
    check_parameter("d", d, 0, max_d(t))
}

fn check_p(p: u32, t: u32) -> Result<()> {
    check_parameter("precision", p, MIN_P, max_p(t))
}

/// ExaLogLog is a mergeable sketch for approximate distinct counting.
///
/// It generalizes HyperLogLog by `t` additional resolution bits per update value and a
/// `d`-bit history of update values just below the register maximum. `t = 0, d = 0` is a
/// HyperLogLog with 6-bit registers, `t = 0, d = 2` carries the same information as
/// UltraLogLog. `t = 2, d = 20` and `t = 2, d = 24` are good general-purpose choices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExaLogLog {
    t: u32,
    d: u32,
    p: u32,
    state: PackedArray,
}

impl ExaLogLog {
    /// Creates a new empty ExaLogLog sketch.
    ///
    /// `t` must be in `[0, 58]`, `d` in `[0, 58 - t]` and the precision `p` in `[2, 26 - t]`.
    /// The sketch has `2^p` registers of `6 + t + d` bits each.
    pub fn new(t: u32, d: u32, p: u32) -> Result<Self> {
        check_t(t)?;
        check_d(d, t)?;
        check_p(p, t)?;
        Ok(Self {
            t,
            d,
            p,
            state: PackedArray::new(register_bit_size(t, d), 1 << p),
        })
    }

    /// Returns the t-parameter of this sketch.
    pub fn get_t(&self) -> u32 {
        self.t
    }

    /// Returns the d-parameter of this sketch.
    pub fn get_d(&self) -> u32 {
        self.d
    }

    /// Returns the precision parameter of this sketch.
    pub fn get_p(&self) -> u32 {
        self.p
    }

    fn num_registers(&self) -> usize {
        1 << self.p
    }

    #[inline]
    fn get_register(&self, idx: usize) -> u64 {
        self.state.get(idx)
    }

    #[inline]
    fn set_register(&mut self, idx: usize, value: u64) {
        self.state.set(idx, value)
    }

    /// Returns true if the sketch is empty (initial state).
    pub fn is_empty(&self) -> bool {
        self.state.is_zero()
    }

    /// Resets this sketch to its initial state representing an empty set.
    pub fn reset(&mut self) -> &mut Self {
        self.state.clear();
        self
    }

    /// Hashes `value` with a hasher built by `build` and adds the resulting 64-bit hash value.
    pub fn add_value_with_build_hasher<T, S>(&mut self, value: T, build: &S) -> &mut Self
    where
        T: Hash,
        S: BuildHasher + ?Sized,
    {
        let mut h = build.build_hasher();
        value.hash(&mut h);
        let hash = h.finish();
        self.add(hash)
    }

    /// If `build_hasher` is `None` the method falls back to xxh3‑64 hash function.
    pub fn add_value_with<T, S>(&mut self, value: T, build_hasher: Option<&S>) -> &mut Self
    where
        T: Hash,
        S: BuildHasher + ?Sized,
    {
        match build_hasher {
            Some(b) => self.add_value_with_build_hasher(value, b),
            None => self.add_value(value),
        }
    }

    /// Hashes `value` with xxh3-64 and adds the resulting hash value.
    pub fn add_value<T: Hash>(&mut self, value: T) -> &mut Self {
        let mut h = Xxh3::default();
        value.hash(&mut h);
        let hash = h.finish();
        self.add(hash)
    }

    /// Same as [`Self::add_value`] but reports a state change to the given observer.
    pub fn add_value_with_observer<T, O>(
        &mut self,
        value: T,
        observer: Option<&mut O>,
    ) -> &mut Self
    where
        T: Hash,
        O: StateChangeObserver,
    {
        let mut h = Xxh3::default();
        value.hash(&mut h);
        self.add_with_observer(h.finish(), observer)
    }

    /// Adds a new element represented by a 64-bit hash value to this sketch.
    ///
    /// In order to get good estimates, it is important that the hash value is calculated using a
    /// high-quality hash algorithm.
    pub fn add(&mut self, hash_value: u64) -> &mut Self {
        struct NoopObserver;
        impl StateChangeObserver for NoopObserver {
            fn state_changed(&mut self, _: f64) {}
        }
        self.add_with_observer::<NoopObserver>(hash_value, None)
    }

    /// Adds a new element and, if the state has changed, passes the decrement of the state change
    /// probability to the given observer.
    pub fn add_with_observer<O: StateChangeObserver>(
        &mut self,
        hash_value: u64,
        observer: Option<&mut O>,
    ) -> &mut Self {
        let (t, d, p) = (self.t, self.d, self.p);
        let (idx, update_value) = register::index_and_update_value(hash_value, t, p);
        let old = self.get_register(idx);
        let new = register::update(old, update_value, d);
        if new != old {
            self.set_register(idx, new);
            if let Some(obs) = observer {
                let decrement = register::unobserved_mass(old, t, d, p, |_, _| {})
                    - register::unobserved_mass(new, t, d, p, |_, _| {});
                obs.state_changed(decrement as f64 * 2f64.powi(-64));
            }
        }
        self
    }

    /// Computes a token from a given 64-bit hash value.
    ///
    /// `add_token(compute_token(hash))` is equivalent to `add(hash)`. Tokens can be collected
    /// (only distinct ones are needed) and added later, which allows deferring the allocation of
    /// the sketch until enough elements have been seen.
    pub fn compute_token(hash_value: u64) -> u32 {
        token::compute_token(hash_value)
    }

    /// Returns a hash value that is equivalent to all hash values with the given token.
    pub fn reconstruct_hash(token: u32) -> u64 {
        token::reconstruct_hash(token)
    }

    /// Adds a new element represented by a 32-bit token obtained from `compute_token`.
    pub fn add_token(&mut self, token: u32) -> &mut Self {
        self.add(token::reconstruct_hash(token))
    }

    /// Same as [`Self::add_token`] but reports a state change to the given observer.
    pub fn add_token_with_observer<O: StateChangeObserver>(
        &mut self,
        token: u32,
        observer: Option<&mut O>,
    ) -> &mut Self {
        self.add_with_observer(token::reconstruct_hash(token), observer)
    }

    /// Returns an estimate of the number of distinct elements added to this sketch.
    pub fn get_distinct_count_estimate(&self) -> f64 {
        DEFAULT_ESTIMATOR.estimate(self)
    }

    /// Returns an estimate of the number of distinct elements using the given estimator.
    pub fn get_distinct_count_estimate_with<E: Estimator + ?Sized>(&self, estimator: &E) -> f64 {
        estimator.estimate(self)
    }

    /// Returns the probability of an internal state change when a new distinct element is added.
    pub fn get_state_change_probability(&self) -> f64 {
        (0..self.num_registers())
            .map(|idx| {
                register::change_probability(self.get_register(idx), self.t, self.d, self.p)
            })
            .sum()
    }

    /// Creates a copy of this sketch.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns a downsized copy of this sketch whose d-parameter is not larger than `d` and whose
    /// precision is not larger than `p`.
    ///
    /// Parameters larger than the current ones leave the corresponding dimension unchanged.
    pub fn downsize(&self, d: u32, p: u32) -> Result<Self> {
        check_d(d, self.t)?;
        check_p(p, self.t)?;
        if p >= self.p && d >= self.d {
            Ok(self.copy())
        } else {
            let mut downsized = Self::new(self.t, d.min(self.d), p.min(self.p))?;
            downsized.add_sketch(self)?;
            Ok(downsized)
        }
    }

    /// Adds another sketch.
    ///
    /// Both sketches must have the same t-parameter, and the added sketch must not have a smaller
    /// d-parameter or a smaller precision than this sketch. Otherwise, an error is returned and
    /// this sketch is left unchanged.
    pub fn add_sketch(&mut self, other: &ExaLogLog) -> Result<&mut Self> {
        if other.t != self.t {
            return Err(Error::IncompatibleT {
                expected: self.t,
                actual: other.t,
            });
        }
        if other.d < self.d {
            return Err(Error::SmallerD {
                this: self.d,
                other: other.d,
            });
        }
        if other.p < self.p {
            return Err(Error::SmallerPrecision {
                this: self.p,
                other: other.p,
            });
        }

        let (t, d, p) = (self.t, self.d, self.p);
        let sub_count = 1usize << (other.p - p);
        let threshold = register::downsize_threshold(t, other.p);
        let downsize = |r: u64, sub_idx: usize| {
            register::downsize(r, t, other.d, d, other.p, p, sub_idx, threshold)
        };

        for idx in 0..self.num_registers() {
            let mut merged = downsize(other.get_register(idx), 0);
            for sub_idx in 1..sub_count {
                let r = downsize(other.get_register(idx + (sub_idx << p)), sub_idx);
                merged = register::merge(merged, r, d);
            }
            if merged != 0 {
                let current = self.get_register(idx);
                merged = register::merge(merged, current, d);
                if merged != current {
                    self.set_register(idx, merged);
                }
            }
        }
        Ok(self)
    }

    /// Merges two ExaLogLog sketches into a new sketch.
    ///
    /// The precision and the d-parameter of the merged sketch are given by the smaller values of
    /// both sketches. The t-parameters must be equal.
    pub fn merge(sketch1: &ExaLogLog, sketch2: &ExaLogLog) -> Result<Self> {
        if sketch1.t != sketch2.t {
            return Err(Error::IncompatibleT {
                expected: sketch1.t,
                actual: sketch2.t,
            });
        }
        let (coarse, fine) = if sketch1.p <= sketch2.p {
            (sketch1, sketch2)
        } else {
            (sketch2, sketch1)
        };
        let mut result = if coarse.d <= fine.d {
            coarse.copy()
        } else {
            coarse.downsize(fine.d, coarse.p)?
        };
        result.add_sketch(fine)?;
        Ok(result)
    }

    /// Returns an ExaLogLog sketch whose state is kept in the given byte array.
    ///
    /// The precision is inferred from the length, which must be `ceil(2^p * (6 + t + d) / 8)`
    /// for an admissible `p`. If the state was not obtained from a sketch with the same t- and
    /// d-parameters, the behavior is undefined.
    pub fn wrap(t: u32, d: u32, state: Vec<u8>) -> Result<Self> {
        check_t(t)?;
        check_d(d, t)?;
        let bits = register_bit_size(t, d);
        let m = ((state.len() as u64) << 3) / bits as u64;
        if m == 0 {
            return Err(Error::InvalidStateLength { len: state.len() });
        }
        let p = 63 - m.leading_zeros();
        if p < MIN_P || p > max_p(t) || packed::byte_len(bits, 1 << p) != state.len() {
            return Err(Error::InvalidStateLength { len: state.len() });
        }
        Ok(Self {
            t,
            d,
            p,
            state: PackedArray::from_bytes(bits, state),
        })
    }

    /// Returns a reference to the internal state of this sketch.
    pub fn get_state(&self) -> &[u8] {
        self.state.as_bytes()
    }

    /// Consumes the sketch and returns its internal state.
    pub fn into_state(self) -> Vec<u8> {
        self.state.into_bytes()
    }

    #[cfg(feature = "serde")]
    /// Serializes ExaLogLog to a writer using bincode
    /// the serde feature must be enabled
    pub fn save<W: std::io::Write>(&self, mut writer: W) -> std::io::Result<()> {
        bincode::serialize_into(&mut writer, &self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    #[cfg(feature = "serde")]
    /// Loads an ExaLogLog from a bincode stream
    /// the serde feature must be enabled
    pub fn load<R: std::io::Read>(mut reader: R) -> std::io::Result<Self> {
        let sketch: ExaLogLog = bincode::deserialize_from(&mut reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        let invalid = |e: Error| std::io::Error::new(std::io::ErrorKind::InvalidData, e);
        let (t, d, p) = (sketch.t, sketch.d, sketch.p);
        // the register width is only meaningful for admissible parameters
        check_t(t).map_err(invalid)?;
        check_d(d, t).map_err(invalid)?;
        check_p(p, t).map_err(invalid)?;
        if sketch.state.bits() != register_bit_size(t, d) {
            return Err(invalid(Error::InvalidStateLength {
                len: sketch.state.as_bytes().len(),
            }));
        }
        let wrapped = Self::wrap(t, d, sketch.into_state()).map_err(invalid)?;
        if wrapped.p != p {
            return Err(invalid(Error::InvalidStateLength {
                len: wrapped.get_state().len(),
            }));
        }
        Ok(wrapped)
    }
}

// Trait for estimators
pub trait Estimator {
    fn estimate(&self, sketch: &ExaLogLog) -> f64;
}

/// The estimator used by `get_distinct_count_estimate`.
pub const DEFAULT_ESTIMATOR: MaximumLikelihoodEstimator = MaximumLikelihoodEstimator;

/// The bias-reduced Maximum Likelihood Estimator
pub struct MaximumLikelihoodEstimator;

impl Estimator for MaximumLikelihoodEstimator {
    fn estimate(&self, sketch: &ExaLogLog) -> f64 {
        let (t, d, p) = (sketch.t, sketch.d, sketch.p);
        let m = sketch.num_registers();

        // an empty sketch sums up to exactly 2^64, which wraps to zero
        let mut agg: u64 = 0;
        let mut b = [0u32; 64];
        for idx in 0..m {
            let r = sketch.get_register(idx);
            agg = agg.wrapping_add(register::unobserved_mass(r, t, d, p, |i, c| b[i] += c));
        }

        let n = (63 - t - p) as i32;
        if agg == 0 {
            return if b[n as usize] == 0 {
                0.0
            } else {
                f64::INFINITY
            };
        }

        let factor = ((m as u64) << (t + 1)) as f64;
        let a = agg as f64 * 2f64.powi(-64) * factor;

        factor
            * solve_maximum_likelihood_equation(
                a,
                &b,
                n,
                ML_EQUATION_SOLVER_EPS / (m as f64).sqrt(),
            )
            / (1.0 + ML_BIAS_CORRECTION_CONSTANTS[t as usize][d as usize] / m as f64)
    }
}
