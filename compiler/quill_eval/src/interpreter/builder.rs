//! `InterpreterBuilder` for configuring [`Interpreter`] instances.

use super::Interpreter;

/// Default limit on nested interpreted function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for [`Interpreter`].
///
/// ```text
/// let interp = Interpreter::builder().max_call_depth(Some(500)).build();
/// let unlimited = Interpreter::builder().max_call_depth(None).build();
/// ```
#[derive(Clone, Debug)]
pub struct InterpreterBuilder {
    max_call_depth: Option<usize>,
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        InterpreterBuilder {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder::default()
    }

    /// Maximum nesting of interpreted function calls. `None` removes the
    /// limit; deep recursion then runs until memory is exhausted.
    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            call_depth: 0,
            max_call_depth: self.max_call_depth,
        }
    }
}
