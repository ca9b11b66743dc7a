use crate::{
    ast::{BreakScope, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        io::{InputSource, OutputSink},
        value::{core::Value, symbols::SymbolTable},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// Loops, switches and function calls inspect this after every statement of
/// their body and decide whether to keep going.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// Leave the innermost loop or switch.
    Break,
    /// Leave the current function with a value.
    Return(Value),
}

/// Stores the runtime evaluation context.
///
/// The context owns the top-level symbol table handed over by the parser and
/// one extra table per active function call. Output and input go through the
/// borrowed collaborators, so the same program can print to stdout or to a
/// `String` in tests.
///
/// ## Usage
///
/// Create a context from a parsed program's symbol table, call
/// [`Context::run`] with the program body, then inspect the final state with
/// [`Context::symbols`] or take it back with [`Context::into_symbols`].
///
/// # Example
/// ```
/// use lolterpreter::interpreter::{
///     evaluator::core::Context,
///     io::NoInput,
///     lexer::tokenize,
///     parser::core::parse_program,
///     value::core::Value,
/// };
///
/// let tokens = tokenize("HAI\nVISIBLE \"O HAI\"\nSUM OF 2 AN 3\nKTHXBYE\n").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// let mut output = String::new();
/// let mut input = NoInput;
/// let mut context = Context::new(program.symbols, &mut output, &mut input);
/// context.run(&program.body).unwrap();
///
/// assert_eq!(context.symbols().it(), Value::Numbr(5));
/// drop(context);
/// assert_eq!(output, "O HAI\n");
/// ```
pub struct Context<'io> {
    /// Top-level variables and functions.
    globals: SymbolTable,
    /// One table per active call, innermost last.
    frames:  Vec<SymbolTable>,
    output:  &'io mut dyn OutputSink,
    input:   &'io mut dyn InputSource,
}

impl<'io> Context<'io> {
    /// Creates a context that starts from `symbols`.
    #[must_use]
    pub fn new(symbols: SymbolTable,
               output: &'io mut dyn OutputSink,
               input: &'io mut dyn InputSource)
               -> Self {
        Self { globals: symbols,
               frames: Vec::new(),
               output,
               input }
    }

    /// Executes a program body statement by statement.
    ///
    /// Execution stops at the first runtime error. Everything assigned before
    /// the error stays in the top-level table.
    pub fn run(&mut self, body: &[Statement]) -> EvalResult<()> {
        log::debug!("running {} statements", body.len());
        for statement in body {
            if self.eval_statement(statement)? != Flow::Normal {
                break;
            }
        }
        Ok(())
    }

    /// The top-level symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.globals
    }

    /// Consumes the context and returns the top-level symbol table.
    #[must_use]
    pub fn into_symbols(self) -> SymbolTable {
        self.globals
    }

    /// Number of function calls currently active.
    #[must_use]
    pub fn call_depth(&self) -> usize {
        self.frames.len()
    }

    /// The table statements currently read and write.
    pub(crate) fn scope(&self) -> &SymbolTable {
        self.frames.last().unwrap_or(&self.globals)
    }

    /// Mutable access to the table statements currently read and write.
    pub(crate) fn scope_mut(&mut self) -> &mut SymbolTable {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => &mut self.globals,
        }
    }

    pub(crate) fn push_frame(&mut self, frame: SymbolTable) {
        self.frames.push(frame);
    }

    pub(crate) fn pop_frame(&mut self) -> Option<SymbolTable> {
        self.frames.pop()
    }

    pub(crate) fn output(&mut self) -> &mut dyn OutputSink {
        &mut *self.output
    }

    pub(crate) fn input(&mut self) -> &mut dyn InputSource {
        &mut *self.input
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// always evaluated left to right and all of them are evaluated, even when
    /// an earlier one already decides a boolean result.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Not { expr, .. } => self.eval_not(expr),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Variadic { op, operands, .. } => self.eval_variadic(*op, operands),
            Expr::Cast { expr, target, line } => self.eval(expr)?.cast(*target, *line),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
        }
    }

    /// Evaluates a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// [`Flow::Normal`] unless the statement was a `GTFO` or `FOUND YR`, or
    /// contained one that was not consumed by an inner loop or switch.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        log::trace!("executing statement on line {}", statement.line());
        match statement {
            Statement::Print { operands,
                               newline,
                               line, } => {
                self.eval_print(operands, *newline, *line)?;
                Ok(Flow::Normal)
            },
            Statement::Input { name, line } => {
                self.eval_input(name, *line)?;
                Ok(Flow::Normal)
            },
            Statement::Declaration { name, value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Noob,
                };
                self.scope_mut().declare(name, value);
                Ok(Flow::Normal)
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                self.scope_mut().assign(name, value, *line)?;
                Ok(Flow::Normal)
            },
            Statement::Cast { name, target, line } => {
                let value = self.eval_variable(name, *line)?.cast(*target, *line)?;
                self.scope_mut().assign(name, value, *line)?;
                Ok(Flow::Normal)
            },
            Statement::Expression { expr, .. } => {
                let value = self.eval(expr)?;
                self.scope_mut().set_it(value);
                Ok(Flow::Normal)
            },
            Statement::Conditional { then_branch,
                                     guards,
                                     else_branch,
                                     .. } => {
                self.eval_conditional(then_branch, guards, else_branch.as_deref())
            },
            Statement::Switch { cases, default, .. } => {
                self.eval_switch(cases, default.as_deref())
            },
            Statement::Loop { label,
                              step,
                              condition,
                              body,
                              line, } => {
                self.eval_loop(label, step.as_ref(), condition.as_ref(), body, *line)
            },
            Statement::Function(def) => {
                self.scope_mut()
                    .declare(&def.name, Value::Funkshun(def.clone()));
                Ok(Flow::Normal)
            },
            Statement::Return { value, .. } => Ok(Flow::Return(self.eval(value)?)),
            Statement::Break { scope, .. } => match scope {
                BreakScope::Program | BreakScope::Function => {
                    self.scope_mut().set_it(Value::Noob);
                    Ok(Flow::Normal)
                },
                BreakScope::Loop | BreakScope::Switch => Ok(Flow::Break),
            },
        }
    }

    /// Runs a statement list until it ends or a statement leaves it early.
    ///
    /// # Returns
    /// The first flow other than [`Flow::Normal`], or [`Flow::Normal`] if the
    /// whole block ran.
    pub fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            let flow = self.eval_statement(statement)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }
}
