//! Building engine-ready clauses from caller-supplied handles.
//!
//! A clause is transient: it exists only as the argument to submission, and ownership of the built representation passes to the engine.
//!
//! Validation is all-or-nothing.
//! Every element is checked before any literal reaches the engine, as a partial submission on a mid-clause failure would corrupt the clause database.
//!
//! Duplicate literals and tautologies pass through unmodified --- simplification is the engine's concern, not the facade's.

use crate::{
    codec::Code,
    misc::log::targets,
    structures::{element::Element, SolverId},
    types::err::ErrorKind,
};

/// Converts a sequence of clause elements into the engine's clause representation, validating provenance.
///
/// A variable element contributes its positive literal; a literal element contributes its own code.
/// Any element created by a solver other than `solver` fails the whole clause with [ErrorKind::CrossSolverUsage].
pub(crate) fn build_clause(
    solver: SolverId,
    elements: impl Iterator<Item = Element>,
) -> Result<Vec<Code>, ErrorKind> {
    let mut clause = Vec::new();

    for element in elements {
        if element.solver() != solver {
            log::trace!(target: targets::BUILDER, "Rejected foreign {} {element}", element.kind());
            return Err(ErrorKind::CrossSolverUsage {
                kind: element.kind(),
            });
        }
        clause.push(element.code());
    }

    Ok(clause)
}
