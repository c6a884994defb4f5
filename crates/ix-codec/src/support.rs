//! Per-type serializability answers

/// Registry answer for one runtime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Support {
    /// A leaf codec exists; the value persists as-is.
    Direct,
    /// No leaf codec, but the type is bean-like: its declared fields
    /// persist individually, so traversal descends into them.
    Structural,
    /// No codec at all. Carries the user-facing reason text.
    Unsupported {
        /// Reason shown in the console summary and the report.
        reason: String,
    },
}

impl Support {
    /// Standard answer for an unregistered type.
    #[must_use]
    pub fn unsupported_for(type_name: &str) -> Self {
        Self::Unsupported {
            reason: no_serializer_reason(type_name),
        }
    }

    /// True unless the answer is [`Support::Unsupported`].
    #[inline]
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}

/// Diagnostic text recorded when a type has no registered serializer.
#[must_use]
pub fn no_serializer_reason(type_name: &str) -> String {
    format!("there's no serializer for type '{type_name}'")
}
