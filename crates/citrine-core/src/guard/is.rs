//! Fluent runtime type check with precise diagnostics.

use citrine_types::error::TypeAssertionError;
use citrine_types::tag::TypeTag;
use serde_json::Value;

/// Begin a type assertion for `candidate`.
///
/// `None` models an absent value, such as an option the caller never
/// provided.
pub fn is(candidate: Option<&Value>) -> TypeAssertion<'_> {
    TypeAssertion { candidate }
}

/// A single-use check bound to one candidate value.
///
/// Produced by [`is`] and consumed immediately by [`instance_of`];
/// carries no state beyond the borrowed candidate.
///
/// [`instance_of`]: TypeAssertion::instance_of
pub struct TypeAssertion<'a> {
    candidate: Option<&'a Value>,
}

impl TypeAssertion<'_> {
    /// Assert that the candidate is present and tagged `expected`.
    ///
    /// Used purely for its validating side effect: a match returns `Ok(())`,
    /// anything else fails with a message naming the expected type and, when
    /// the candidate is present, its actual type.
    pub fn instance_of(&self, expected: TypeTag) -> Result<(), TypeAssertionError> {
        let Some(candidate) = self.candidate else {
            return Err(TypeAssertionError::Missing { expected });
        };

        let actual = TypeTag::of(candidate);
        if actual != expected {
            return Err(TypeAssertionError::Mismatch { actual, expected });
        }
        Ok(())
    }
}
