//! Quill evaluator.
//!
//! Walks the AST from `quill_ir` against a chain of lexical scopes and
//! produces an [`Entity`]. Failures are values: a runtime error stops
//! evaluation and becomes the program's result as [`Entity::Error`].
//!
//! # Architecture
//!
//! - `entity`: the runtime value model and map keys
//! - `environment`: shared, reference-counted scope frames
//! - `builtins`: the process-wide builtin function registry
//! - `operators` / `unary_operators`: operator semantics by enum dispatch
//! - `interpreter`: the recursive evaluator and its configuration
//!
//! ```text
//! let parsed = quill_parse::parse_source("var x = 2; x * 21");
//! let env = Environment::new();
//! assert_eq!(eval(&parsed.program, &env), Entity::Integer(42));
//! ```

mod builtins;
mod entity;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod unary_operators;

pub use builtins::{lookup_builtin, Builtin, BUILTIN_NAMES};
pub use entity::{Entity, EntityType, FunctionValue, Heap, MapKey};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use quill_ir::Program;

/// Evaluate `program` in `env` with a default [`Interpreter`].
pub fn eval(program: &Program, env: &Environment) -> Entity {
    Interpreter::new().eval_program(program, env)
}

#[cfg(test)]
mod tests;
