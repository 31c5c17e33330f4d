//! Typed conditional signals
//!
//! A scanner that has already recognised a conditional line hands it to
//! [`ConditionalStack::apply`](crate::ConditionalStack::apply) as one of
//! these. Turning text into a `Directive` is left to the caller.

/// A conditional signal with its condition already decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `IF <condition>` - open a new level
    If(bool),
    /// `ELSE` - switch the innermost level to its other arm
    Else,
    /// `ENDIF` - close the innermost level
    EndIf,
}

impl Directive {
    /// Check if this directive opens a level
    pub fn opens(&self) -> bool {
        matches!(self, Directive::If(_))
    }

    /// Check if this directive closes a level
    pub fn closes(&self) -> bool {
        matches!(self, Directive::EndIf)
    }
}

impl From<bool> for Directive {
    fn from(condition: bool) -> Self {
        Directive::If(condition)
    }
}
