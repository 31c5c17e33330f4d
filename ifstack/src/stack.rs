//! Conditional stack evaluation
//!
//! This module keeps the stack of open `IF` levels and derives whether the
//! current nesting point is active. The active flag is the conjunction of
//! every open frame's stored truth, recomputed after each mutation.

use errors::{ConditionalResult, ElseWithoutIf, EndifWithoutIf};

use crate::directive::Directive;
use crate::frame::Frame;

/// Nested `IF` / `ELSE` / `ENDIF` state for one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalStack {
    /// Open frames, innermost last
    frames: Vec<Frame>,
    /// Whether content at the current nesting point is active
    is_active: bool,
}

impl ConditionalStack {
    /// Create an empty stack (top level is active)
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            is_active: true,
        }
    }

    /// Create an empty stack with room for `capacity` nested levels
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            is_active: true,
        }
    }

    /// Open a level for `IF condition`
    pub fn begin_if(&mut self, condition: bool) {
        self.frames.push(Frame::new(condition));
        self.recompute();
        tracing::trace!(
            condition,
            depth = self.frames.len(),
            active = self.is_active,
            "IF"
        );
    }

    /// Switch the innermost level to its `ELSE` arm
    pub fn take_else(&mut self) -> Result<(), ElseWithoutIf> {
        let Some(top) = self.frames.last_mut() else {
            tracing::debug!("ELSE without IF");
            return Err(ElseWithoutIf);
        };
        if !top.enter_else() {
            tracing::debug!(depth = self.frames.len(), "ELSE already taken");
            return Err(ElseWithoutIf);
        }
        self.recompute();
        tracing::trace!(depth = self.frames.len(), active = self.is_active, "ELSE");
        Ok(())
    }

    /// Close the innermost level
    pub fn take_endif(&mut self) -> Result<(), EndifWithoutIf> {
        if self.frames.pop().is_none() {
            tracing::debug!("ENDIF without IF");
            return Err(EndifWithoutIf);
        }
        self.recompute();
        tracing::trace!(depth = self.frames.len(), active = self.is_active, "ENDIF");
        Ok(())
    }

    /// Apply a directive, dispatching to the matching operation
    pub fn apply(&mut self, directive: &Directive) -> ConditionalResult<()> {
        match *directive {
            Directive::If(condition) => self.begin_if(condition),
            Directive::Else => self.take_else()?,
            Directive::EndIf => self.take_endif()?,
        }
        Ok(())
    }

    /// Check if content at the current nesting point is active
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Discard every open level, returning to the initial state
    pub fn reset(&mut self) {
        tracing::debug!(discarded = self.frames.len(), "reset conditional stack");
        self.frames.clear();
        self.recompute();
    }

    /// Release the stack and all of its frames
    pub fn shutdown(self) {
        tracing::debug!(discarded = self.frames.len(), "shut down conditional stack");
    }

    /// Stored truth of each open level, outermost first
    pub fn render(&self) -> Vec<bool> {
        self.frames.iter().map(Frame::branch_true).collect()
    }

    /// Number of open levels
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if no level is open
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Check if there are unmatched conditionals (an `IF` still waiting for `ENDIF`)
    pub fn has_unmatched_conditionals(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Copy of the innermost open frame
    pub fn top(&self) -> Option<Frame> {
        self.frames.last().copied()
    }

    // Vacuously true when no frame is open
    fn recompute(&mut self) {
        self.is_active = self.frames.iter().all(Frame::branch_true);
    }
}

impl Default for ConditionalStack {
    fn default() -> Self {
        Self::new()
    }
}
