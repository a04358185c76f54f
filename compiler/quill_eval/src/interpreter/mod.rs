//! The tree-walking evaluator.
//!
//! Internally every node evaluates to [`EvalResult`]. `Err` carries either a
//! runtime error or a `return` in flight; `?` propagates both, so an error
//! short-circuits every enclosing construct and a `return` unwinds to the
//! nearest call boundary. [`Interpreter::eval_program`] turns whatever
//! reaches the top into an ordinary [`Entity`].

mod builder;

use std::collections::BTreeMap;

use quill_ir::{BlockStmt, Expr, ExprKind, MapEntry, Program, Stmt, StmtKind};
use quill_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use crate::builtins::lookup_builtin;
use crate::errors::{
    call_depth_exceeded, identifier_not_found, index_not_supported, index_out_of_bounds,
    index_type_mismatch, key_not_found, map_value_type_mismatch, not_a_function,
    unusable_as_map_key, wrong_argument_count, ControlAction, EvalError, EvalResult,
};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::{Entity, EntityType, Environment, MapKey};

/// Evaluator state: call-depth accounting and its limit.
///
/// An interpreter holds no bindings; those live in the [`Environment`]
/// passed to each evaluation, so one interpreter can serve many programs.
#[derive(Debug)]
pub struct Interpreter {
    call_depth: usize,
    max_call_depth: Option<usize>,
}

impl Default for Interpreter {
    fn default() -> Self {
        InterpreterBuilder::new().build()
    }
}

impl Interpreter {
    /// An interpreter with default settings.
    pub fn new() -> Self {
        Interpreter::default()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn max_call_depth(&self) -> Option<usize> {
        self.max_call_depth
    }

    /// Evaluate a whole program.
    ///
    /// The result is the value of the last statement (`null` when it is a
    /// `var` binding or the program is empty), the payload of a top-level
    /// `return`, or [`Entity::Error`] if evaluation failed.
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Entity {
        self.call_depth = 0;
        match self.eval_statements(&program.statements, env) {
            Ok(value) | Err(ControlAction::Return(value)) => value,
            Err(ControlAction::Error(err)) => Entity::Error(err),
        }
    }

    /// Statements in order; the last value wins. Shared by programs and
    /// blocks, which differ only in who catches `Return`.
    fn eval_statements(&mut self, statements: &[Stmt], env: &Environment) -> EvalResult {
        let mut result = Entity::Null;
        for stmt in statements {
            result = self.eval_statement(stmt, env)?;
        }
        Ok(result)
    }

    /// Blocks share the enclosing frame; only calls open a new one.
    fn eval_block(&mut self, block: &BlockStmt, env: &Environment) -> EvalResult {
        self.eval_statements(&block.statements, env)
    }

    fn eval_statement(&mut self, stmt: &Stmt, env: &Environment) -> EvalResult {
        match &stmt.kind {
            StmtKind::Var { name, value } => {
                let value = self.eval_expr(value, env)?;
                env.set(name.name.clone(), value);
                Ok(Entity::Null)
            }
            StmtKind::Return(value) => {
                let value = self.eval_expr(value, env)?;
                Err(ControlAction::Return(value))
            }
            StmtKind::Expression(expr) => self.eval_expr(expr, env),
            StmtKind::Block(block) => self.eval_block(block, env),
        }
    }

    /// Evaluate an expression, growing the host stack when it runs low.
    fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match &expr.kind {
            ExprKind::Ident(name) => env
                .get(name)
                .or_else(|| lookup_builtin(name).map(Entity::Builtin))
                .ok_or_else(|| identifier_not_found(name).into()),
            ExprKind::Int(n) => Ok(Entity::int(*n)),
            ExprKind::Bool(b) => Ok(Entity::bool(*b)),
            ExprKind::Str(s) => Ok(Entity::Str(s.clone())),
            ExprKind::Array(elements) => {
                let values = self.eval_exprs(elements, env)?;
                Ok(Entity::array(values))
            }
            ExprKind::Map(entries) => self.eval_map(entries, env),
            ExprKind::Prefix { op, operand } => {
                let operand = self.eval_expr(operand, env)?;
                Ok(evaluate_unary(&operand, *op)?)
            }
            ExprKind::Infix { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                Ok(evaluate_binary(&left, &right, *op)?)
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expr(condition, env)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Entity::Null)
                }
            }
            ExprKind::Function(literal) => Ok(Entity::function(literal.clone(), env.clone())),
            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(callee, env)?;
                let args = self.eval_exprs(args, env)?;
                self.eval_call(&callee, args)
            }
            ExprKind::Index { collection, index } => {
                let collection = self.eval_expr(collection, env)?;
                if !matches!(collection, Entity::Array(_) | Entity::Map(_)) {
                    return Err(index_not_supported(&collection).into());
                }
                let index = self.eval_expr(index, env)?;
                Ok(eval_index(&collection, &index)?)
            }
        }
    }

    /// Left to right; the first failure stops the rest.
    fn eval_exprs(
        &mut self,
        exprs: &[Expr],
        env: &Environment,
    ) -> Result<Vec<Entity>, ControlAction> {
        exprs.iter().map(|expr| self.eval_expr(expr, env)).collect()
    }

    /// Keys and values must both be integers, booleans or strings. A repeated
    /// key keeps its last value.
    fn eval_map(&mut self, entries: &[MapEntry], env: &Environment) -> EvalResult {
        let mut map = BTreeMap::new();
        for entry in entries {
            let key = self.eval_expr(&entry.key, env)?;
            let key = MapKey::from_entity(&key).ok_or_else(|| unusable_as_map_key(&key))?;
            let value = self.eval_expr(&entry.value, env)?;
            if !value.is_map_scalar() {
                return Err(map_value_type_mismatch(&value).into());
            }
            map.insert(key, value);
        }
        Ok(Entity::map(map))
    }

    /// Apply a callee to evaluated arguments.
    #[tracing::instrument(level = "debug", skip_all)]
    fn eval_call(&mut self, callee: &Entity, args: Vec<Entity>) -> EvalResult {
        match callee {
            Entity::Function(func) => {
                if func.params().len() != args.len() {
                    let want = func.params().len();
                    return Err(wrong_argument_count("fn", want, args.len()).into());
                }
                self.check_call_depth()?;

                let call_env = Environment::new_enclosed(func.env());
                for (param, arg) in func.params().iter().zip(args) {
                    call_env.set(param.name.clone(), arg);
                }

                self.call_depth += 1;
                let result = self.eval_block(func.body(), &call_env);
                self.call_depth -= 1;

                match result {
                    Ok(value) | Err(ControlAction::Return(value)) => Ok(value),
                    Err(err @ ControlAction::Error(_)) => Err(err),
                }
            }
            Entity::Builtin(builtin) => {
                trace!(builtin = builtin.name(), args = args.len(), "builtin dispatch");
                Ok(builtin.call(&args)?)
            }
            other => Err(not_a_function(other).into()),
        }
    }

    /// Fails once the number of active interpreted calls reaches the limit.
    #[inline]
    fn check_call_depth(&self) -> Result<(), EvalError> {
        if let Some(limit) = self.max_call_depth {
            if self.call_depth >= limit {
                debug!(limit, "call depth limit reached");
                return Err(call_depth_exceeded(limit));
            }
        }
        Ok(())
    }
}

/// `collection[index]` for an array or map that is already evaluated.
fn eval_index(collection: &Entity, index: &Entity) -> Result<Entity, EvalError> {
    match collection {
        Entity::Array(elements) => {
            let Entity::Integer(i) = index else {
                return Err(index_type_mismatch(EntityType::Integer, index));
            };
            let elements = elements.borrow();
            usize::try_from(*i)
                .ok()
                .and_then(|i| elements.get(i))
                .cloned()
                .ok_or_else(|| index_out_of_bounds(elements.len(), *i))
        }
        Entity::Map(entries) => {
            let key = MapKey::from_entity(index).ok_or_else(|| unusable_as_map_key(index))?;
            entries
                .borrow()
                .get(&key)
                .cloned()
                .ok_or_else(|| key_not_found(index))
        }
        other => Err(index_not_supported(other)),
    }
}

#[cfg(test)]
mod tests;
