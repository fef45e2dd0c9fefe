//! The hash contract.
//!
//! [`Value::hash`] maps every keyable value to 64 bits such that:
//!
//! - strictly equal primitives hash alike, across the numeric encodings
//!   (`Integer(5)`, `BigInteger(5)` and `Float(5.0)` collide on purpose);
//! - `+0` and `-0` hash alike, and every NaN hashes alike;
//! - `true`, `false`, `null` and `undefined` hash to seeds drawn at random
//!   when the runtime starts, not to fixed constants;
//! - strings hash by content through a randomly keyed hasher;
//! - objects and symbols hash by their stable id.
//!
//! Property slots and unresolved references are never keys; hashing them is
//! a caller bug and aborts.

use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{contract_violation, JsError, JsResult};
use crate::value::Value;

/// 2^63 as a double: the first float above the `i64` range.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Bits every NaN hashes as.
const CANONICAL_NAN_BITS: u64 = 0x7FF8_0000_0000_0000;

/// Random seeds for hashing, chosen once per runtime.
///
/// Keys that come from untrusted input must not collide predictably, so the
/// singleton kinds and the string hasher are keyed with random state.
pub struct HashSeeds {
    hash_true: u64,
    hash_false: u64,
    hash_null: u64,
    hash_undefined: u64,
    strings: ahash::RandomState,
}

impl HashSeeds {
    /// Fresh seeds from the thread's random generator.
    pub fn random() -> Self {
        HashSeeds::from_rng(&mut rand::thread_rng())
    }

    /// Deterministic seeds, for reproducible tests.
    pub fn from_seed(seed: u64) -> Self {
        HashSeeds::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    fn from_rng<R: Rng>(rng: &mut R) -> Self {
        HashSeeds {
            hash_true: rng.gen(),
            hash_false: rng.gen(),
            hash_null: rng.gen(),
            hash_undefined: rng.gen(),
            strings: ahash::RandomState::with_seeds(rng.gen(), rng.gen(), rng.gen(), rng.gen()),
        }
    }

    /// The process-wide seeds, initialised on first use and immutable after.
    pub fn global() -> &'static HashSeeds {
        static GLOBAL: OnceLock<HashSeeds> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            debug!("initialising process-wide hash seeds");
            HashSeeds::random()
        })
    }

    fn hash_str(&self, text: &str) -> u64 {
        BuildHasher::hash_one(&self.strings, text)
    }
}

fn float_hash(n: f64) -> u64 {
    if n.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&n) {
        // Integral: agree with the integer encodings. Covers -0 as well.
        (n as i64) as u64
    } else if n.is_nan() {
        CANONICAL_NAN_BITS
    } else {
        n.to_bits()
    }
}

impl Value {
    /// Hash with the process-wide seeds.
    ///
    /// # Panics
    ///
    /// Property slots and unresolved references are never keys; hashing
    /// them aborts.
    pub fn hash(&self) -> u64 {
        self.hash_with(HashSeeds::global())
    }

    /// Hash with explicit seeds.
    pub fn hash_with(&self, seeds: &HashSeeds) -> u64 {
        match self {
            Value::Integer(n) => i64::from(*n) as u64,
            Value::BigInteger(n) => *n as u64,
            Value::Float(n) => float_hash(*n),
            Value::Boolean(true) => seeds.hash_true,
            Value::Boolean(false) => seeds.hash_false,
            Value::Null => seeds.hash_null,
            Value::Undefined => seeds.hash_undefined,
            Value::String(s) => seeds.hash_str(s.as_str()),
            Value::Symbol(sym) => sym.id(),
            Value::Object(obj) => obj.id().as_u64(),
            Value::PropertySlot(_) => {
                contract_violation("property slots must never be used in maps or sets")
            }
            Value::Unresolved(_) => {
                contract_violation("unresolved references must never be used in maps or sets")
            }
        }
    }
}

/// A value usable as a `HashMap` / `HashSet` key.
///
/// Equality is SameValueZero and hashing follows [`Value::hash`], matching
/// the semantics of JavaScript `Map` and `Set`.
///
/// ```
/// use std::collections::HashSet;
/// use js_value::{MapKey, Value};
///
/// let mut set = HashSet::new();
/// set.insert(MapKey::new(Value::Integer(1)).unwrap());
/// assert!(set.contains(&MapKey::new(Value::Float(1.0)).unwrap()));
/// assert!(!set.insert(MapKey::new(Value::BigInteger(1)).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct MapKey(Value);

impl MapKey {
    /// Wrap a value as a key.
    ///
    /// Unresolved references raise their ReferenceError.
    ///
    /// # Panics
    ///
    /// Property slots are never keys.
    pub fn new(value: Value) -> JsResult<Self> {
        match value {
            Value::Unresolved(name) => Err(JsError::reference_error(name.as_str())),
            Value::PropertySlot(_) => {
                contract_violation("property slots must never be used in maps or sets")
            }
            value => Ok(MapKey(value)),
        }
    }

    /// The wrapped value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Unwrap the value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        // Unresolved values are rejected at construction.
        self.0.same_value_zero(&other.0).unwrap_or(false)
    }
}

impl Eq for MapKey {}

impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash());
    }
}
