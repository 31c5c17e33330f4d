//! Conditional Inclusion Stack
//!
//! This crate tracks nested `IF` / `ELSE` / `ENDIF` state while a caller
//! scans input line by line. The caller decides each `IF` condition and
//! forwards `ELSE` / `ENDIF` as bare signals; the stack answers whether the
//! current line is active.
//!
//! ```
//! use ifstack::ConditionalStack;
//!
//! let mut stack = ConditionalStack::new();
//! stack.begin_if(false);
//! assert!(!stack.is_active());
//! stack.take_else().unwrap();
//! assert!(stack.is_active());
//! stack.take_endif().unwrap();
//! assert!(stack.render().is_empty());
//! ```

mod directive;
mod frame;
mod stack;

pub use directive::Directive;
pub use errors::{ConditionalError, ConditionalResult, ElseWithoutIf, EndifWithoutIf};
pub use frame::Frame;
pub use stack::ConditionalStack;
