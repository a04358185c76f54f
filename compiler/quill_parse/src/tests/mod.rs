//! Parser tests.
//!
//! - `parser`: statements, literals, operator precedence via AST display
//! - `errors`: error reporting and statement-level recovery
