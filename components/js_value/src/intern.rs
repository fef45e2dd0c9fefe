//! Small-value interning cache.
//!
//! Boxed integers in `-128..=127` (for both integer widths) are handed out
//! from a table built once per runtime thread instead of being allocated on
//! every arithmetic result.
//!
//! This is an allocation optimisation and nothing else. Two equal integers
//! are not guaranteed to share a box (values outside the range never do),
//! so no code may compare boxed integers with [`Rc::ptr_eq`] to decide
//! equality; use [`Value::strict_equals`] and its siblings.

use std::rc::Rc;

use crate::value::Value;

/// Smallest cached integer.
pub const CACHE_MIN: i64 = -128;
/// Largest cached integer.
pub const CACHE_MAX: i64 = 127;

struct SmallValueCache {
    ints: Box<[Rc<Value>]>,
    big_ints: Box<[Rc<Value>]>,
}

impl SmallValueCache {
    fn new() -> Self {
        let ints = (CACHE_MIN..=CACHE_MAX)
            .map(|n| Rc::new(Value::Integer(n as i32)))
            .collect();
        let big_ints = (CACHE_MIN..=CACHE_MAX)
            .map(|n| Rc::new(Value::BigInteger(n)))
            .collect();
        SmallValueCache { ints, big_ints }
    }
}

thread_local! {
    static CACHE: SmallValueCache = SmallValueCache::new();
}

#[inline]
fn slot(n: i64) -> Option<usize> {
    if (CACHE_MIN..=CACHE_MAX).contains(&n) {
        Some((n - CACHE_MIN) as usize)
    } else {
        None
    }
}

/// A boxed `Integer(n)`, shared for small `n`.
///
/// ```
/// use js_value::intern::boxed_int;
/// use js_value::Value;
///
/// assert!(matches!(*boxed_int(7), Value::Integer(7)));
/// assert!(matches!(*boxed_int(100_000), Value::Integer(100_000)));
/// ```
pub fn boxed_int(n: i32) -> Rc<Value> {
    match slot(i64::from(n)) {
        Some(index) => CACHE.with(|cache| Rc::clone(&cache.ints[index])),
        None => Rc::new(Value::Integer(n)),
    }
}

/// A boxed `BigInteger(n)`, shared for small `n`.
pub fn boxed_big_int(n: i64) -> Rc<Value> {
    match slot(n) {
        Some(index) => CACHE.with(|cache| Rc::clone(&cache.big_ints[index])),
        None => Rc::new(Value::BigInteger(n)),
    }
}

/// Box any value, routing small integers through the cache.
pub fn boxed(value: Value) -> Rc<Value> {
    match value {
        Value::Integer(n) => boxed_int(n),
        Value::BigInteger(n) => boxed_big_int(n),
        other => Rc::new(other),
    }
}
