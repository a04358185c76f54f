//! Operator tests, kept apart from the interpreter tests because they call
//! the dispatch functions directly.

mod unary_operators_tests;
