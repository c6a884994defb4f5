//! Unsupported-field findings

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// One unsupported-field finding, immutable once recorded.
///
/// The same field pattern on a class shared by several task instances is
/// recorded once per instance; occurrences are never collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Type name of the object declaring the field.
    pub owner: String,
    /// Field name exactly as declared.
    pub field: String,
    /// User-facing reason, e.g. `there's no serializer for type 'T'`.
    pub reason: String,
}

impl Violation {
    /// Record a finding.
    #[inline]
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl Display for Violation {
    /// Renders the console bullet body: `field 'Owner.field': reason`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}.{}': {}",
            self.owner, self.field, self.reason
        )
    }
}
