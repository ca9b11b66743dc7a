use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::{core::Value, symbols::SymbolTable},
    },
};

/// Deepest allowed nesting of function calls.
pub const MAX_CALL_DEPTH: usize = 256;

impl Context<'_> {
    /// Evaluates `I IZ <name> YR <args> MKAY`.
    ///
    /// The name is looked up in the current frame first and then among the
    /// top-level variables, which lets functions call themselves and each
    /// other. Arguments are evaluated in the caller's scope. The body runs in
    /// a fresh table holding only the parameters and its own `IT`, so it can
    /// neither see nor change the caller's variables.
    ///
    /// `FOUND YR` supplies the result; a body that ends without one returns
    /// its final `IT`. Either way the result is also written to the caller's
    /// `IT`.
    ///
    /// # Errors
    /// - `UnknownFunction` if nothing is bound to `name`.
    /// - `NotAFunction` if `name` holds a plain value.
    /// - `ArgumentCountMismatch` if the argument count differs from the
    ///   parameter count.
    /// - `RecursionLimit` past [`MAX_CALL_DEPTH`] nested calls.
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<Value> {
        let def = self.resolve_function(name, line)?;

        if def.params.len() != arguments.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: def.params.len(),
                                                             found: arguments.len(),
                                                             line });
        }
        if self.call_depth() >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { name: name.to_string(),
                                                      line });
        }

        let mut frame = SymbolTable::new();
        for (param, argument) in def.params.iter().zip(arguments) {
            let value = self.eval(argument)?;
            frame.declare(param, value);
        }

        log::debug!("calling {name} at depth {}", self.call_depth() + 1);
        self.push_frame(frame);
        let flow = self.eval_block(&def.body);
        let frame = self.pop_frame();

        let value = match flow? {
            Flow::Return(value) => value,
            Flow::Normal | Flow::Break => frame.map(|f| f.it()).unwrap_or_default(),
        };
        log::debug!("{name} returned {value}");

        self.scope_mut().set_it(value.clone());
        Ok(value)
    }

    /// Finds the function bound to `name`.
    fn resolve_function(&self, name: &str, line: usize) -> EvalResult<Rc<FunctionDef>> {
        let local = self.scope().get(name);
        let global = self.symbols().get(name);

        match (local, global) {
            (Some(Value::Funkshun(def)), _) | (_, Some(Value::Funkshun(def))) => Ok(Rc::clone(def)),
            (None, None) => Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                                line }),
            _ => Err(RuntimeError::NotAFunction { name: name.to_string(),
                                                  line }),
        }
    }
}
