//! Key structures: handles to variables and literals, clause elements, and ternary truth values.
//!
//! Variables and literals are lightweight `Copy` handles.
//! Neither owns any engine state --- each carries only its packed identity and a [SolverId] naming the solver which created it.
//! The id is a plain provenance tag: operations which consume a handle compare tags and reject a mismatch, while keeping a solver alive remains the caller's concern.

use std::sync::atomic::{AtomicU64, Ordering};

pub mod element;
pub mod literal;
pub mod truth;
pub mod variable;

/// The identity of a solver instance, carried by every handle the solver creates.
///
/// Ids are minted from a process-wide counter, so no two solvers --- live or dropped --- share one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SolverId(u64);

impl SolverId {
    /// A fresh id, distinct from every id minted before.
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}
