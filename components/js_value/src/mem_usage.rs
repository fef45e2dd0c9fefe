//! Memory accounting over value graphs.
//!
//! [`Value::mem_usage`] estimates the retained size of a value and
//! everything reachable from it. The caller supplies an
//! [`AccountingContext`] that owns the visited set for the duration of one
//! top-level call, so cyclic graphs are walked once, and that can report
//! the size of host resources wrapped by objects.
//!
//! Accounting is a diagnostic path: failures come back as
//! [`AccountingError`] and never abort.

use std::any::Any;
use std::mem::size_of;
use std::ops::{Add, AddAssign};

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::error::AccountingError;
use crate::object::ObjectId;
use crate::value::Value;

/// Size reported for booleans.
pub const SIZE_BOOL: u64 = size_of::<bool>() as u64;
/// Size reported for numbers of either encoding.
pub const SIZE_NUMBER: u64 = size_of::<f64>() as u64;
/// Size reported for empty or pointer-only structures.
pub const SIZE_EMPTY_STRUCT: u64 = size_of::<usize>() as u64;
/// Per-string overhead on top of the text itself.
pub const SIZE_STRING: u64 = size_of::<&str>() as u64;

/// Default limit on nested object visits.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Retained size estimate.
///
/// `current` is the size as laid out now; `projected` is the size the same
/// data would occupy after compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemUsage {
    /// Size as currently laid out
    pub current: u64,
    /// Size after compaction
    pub projected: u64,
}

impl MemUsage {
    /// Nothing retained.
    pub const ZERO: MemUsage = MemUsage {
        current: 0,
        projected: 0,
    };

    /// Same size in both states.
    pub const fn uniform(size: u64) -> Self {
        MemUsage {
            current: size,
            projected: size,
        }
    }
}

impl Add for MemUsage {
    type Output = MemUsage;

    fn add(self, rhs: MemUsage) -> MemUsage {
        MemUsage {
            current: self.current.saturating_add(rhs.current),
            projected: self.projected.saturating_add(rhs.projected),
        }
    }
}

impl AddAssign for MemUsage {
    fn add_assign(&mut self, rhs: MemUsage) {
        *self = *self + rhs;
    }
}

/// The accounting context capability.
pub trait AccountingContext {
    /// Size of a wrapped host resource. `Ok(None)` when the context does
    /// not know the resource and the object should be walked instead.
    fn native_size_of(&mut self, handle: &dyn Any) -> Result<Option<u64>, AccountingError>;

    /// Record a visit to `id`. Returns false if it was already visited in
    /// this walk.
    fn visit(&mut self, id: ObjectId) -> bool;

    /// Enter one level of object nesting.
    fn enter(&mut self) -> Result<(), AccountingError>;

    /// Leave one level of object nesting.
    fn leave(&mut self);
}

type NativeSizer = Box<dyn FnMut(&dyn Any) -> Result<Option<u64>, AccountingError>>;

/// Default [`AccountingContext`]: a visited set, a depth limit and an
/// optional native-size lookup.
///
/// Create a fresh context for every top-level accounting call.
///
/// ```
/// use js_value::{MemUsageContext, Value};
///
/// let mut ctx = MemUsageContext::new();
/// let usage = Value::Integer(1).mem_usage(&mut ctx).unwrap();
/// assert_eq!(usage.current, 8);
/// ```
pub struct MemUsageContext {
    visited: FxHashSet<ObjectId>,
    depth: usize,
    max_depth: usize,
    native_sizer: Option<NativeSizer>,
}

impl MemUsageContext {
    /// A context with the default depth limit and no native lookup.
    pub fn new() -> Self {
        MemUsageContext {
            visited: FxHashSet::default(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            native_sizer: None,
        }
    }

    /// Set the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Install the lookup used for objects that wrap host resources.
    pub fn with_native_sizer<F>(mut self, sizer: F) -> Self
    where
        F: FnMut(&dyn Any) -> Result<Option<u64>, AccountingError> + 'static,
    {
        self.native_sizer = Some(Box::new(sizer));
        self
    }

    /// Number of distinct objects visited so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

impl Default for MemUsageContext {
    fn default() -> Self {
        MemUsageContext::new()
    }
}

impl AccountingContext for MemUsageContext {
    fn native_size_of(&mut self, handle: &dyn Any) -> Result<Option<u64>, AccountingError> {
        match self.native_sizer.as_mut() {
            Some(sizer) => sizer(handle),
            None => Ok(None),
        }
    }

    fn visit(&mut self, id: ObjectId) -> bool {
        self.visited.insert(id)
    }

    fn enter(&mut self) -> Result<(), AccountingError> {
        if self.depth >= self.max_depth {
            warn!(limit = self.max_depth, "memory accounting depth limit reached");
            return Err(AccountingError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl Value {
    /// Estimate the retained size of this value and what it reaches.
    ///
    /// Scalars report a fixed size. Every object counts once per context and
    /// contributes nothing when met again. Objects wrapping a host resource
    /// report the size the context gives for it; other objects are walked
    /// through the object capability.
    pub fn mem_usage(&self, ctx: &mut dyn AccountingContext) -> Result<MemUsage, AccountingError> {
        match self {
            Value::Integer(_) | Value::BigInteger(_) | Value::Float(_) => {
                Ok(MemUsage::uniform(SIZE_NUMBER))
            }
            Value::Boolean(_) => Ok(MemUsage::uniform(SIZE_BOOL)),
            Value::Null | Value::Undefined => Ok(MemUsage::uniform(SIZE_EMPTY_STRUCT)),
            Value::String(s) => Ok(MemUsage::uniform(s.len() as u64 + SIZE_STRING)),
            Value::Symbol(sym) => Ok(match sym.description() {
                Some(desc) => MemUsage::uniform(desc.len() as u64 + SIZE_STRING),
                None => MemUsage::uniform(SIZE_EMPTY_STRUCT),
            }),
            Value::Unresolved(name) => {
                let len = name.len() as u64;
                Ok(MemUsage {
                    current: len,
                    projected: len + SIZE_STRING,
                })
            }
            Value::PropertySlot(slot) => slot.mem_usage(ctx),
            Value::Object(obj) => {
                if !ctx.visit(obj.id()) {
                    trace!(object = obj.id().as_u64(), "already accounted");
                    return Ok(MemUsage::ZERO);
                }
                if let Some(handle) = obj.get().wrapped() {
                    if let Some(size) = ctx.native_size_of(handle)? {
                        debug!(object = obj.id().as_u64(), size, "native size override");
                        return Ok(MemUsage::uniform(size));
                    }
                }
                ctx.enter()?;
                let usage = obj.get().mem_usage(ctx);
                ctx.leave();
                usage
            }
        }
    }
}
