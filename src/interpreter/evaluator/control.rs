use crate::{
    ast::{BinaryOperator, Case, GuardedBranch, LoopCondition, LoopOperation, Statement},
    interpreter::{
        evaluator::{
            binary::comparison::case_matches,
            core::{Context, EvalResult, Flow},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Executes an `O RLY?` conditional.
    ///
    /// `YA RLY` runs when `IT` is truthy. Otherwise each `MEBBE` guard is
    /// evaluated in order and written to `IT`; the first truthy one runs its
    /// arm. `NO WAI` runs when nothing matched.
    ///
    /// # Returns
    /// The flow of the arm that ran, so a `GTFO` or `FOUND YR` inside it
    /// reaches the enclosing loop, switch or function.
    pub fn eval_conditional(&mut self,
                            then_branch: &[Statement],
                            guards: &[GuardedBranch],
                            else_branch: Option<&[Statement]>)
                            -> EvalResult<Flow> {
        if self.scope().it().is_truthy() {
            return self.eval_block(then_branch);
        }

        for guard in guards {
            let value = self.eval(&guard.condition)?;
            let matched = value.is_truthy();
            self.scope_mut().set_it(value);
            if matched {
                return self.eval_block(&guard.body);
            }
        }

        match else_branch {
            Some(body) => self.eval_block(body),
            None => Ok(Flow::Normal),
        }
    }

    /// Executes a `WTF?` switch on the current value of `IT`.
    ///
    /// Only the first matching case runs; there is no fallthrough into later
    /// cases. `OMGWTF` runs only when no case matched. A `GTFO` ends the
    /// switch.
    pub fn eval_switch(&mut self,
                       cases: &[Case],
                       default: Option<&[Statement]>)
                       -> EvalResult<Flow> {
        let it = self.scope().it();
        let body = cases.iter()
                        .find(|case| case_matches(&it, &Value::from(&case.literal)))
                        .map(|case| case.body.as_slice())
                        .or(default);

        let Some(body) = body else {
            return Ok(Flow::Normal);
        };

        match self.eval_block(body)? {
            Flow::Break => Ok(Flow::Normal),
            flow => Ok(flow),
        }
    }

    /// Executes a labeled loop.
    ///
    /// Before every iteration the `TIL` or `WILE` condition is checked; a loop
    /// without one runs until `GTFO`. After the body, the loop variable is
    /// moved by one with the usual arithmetic coercion. A loop variable that
    /// did not exist is created as `0` and removed again when the loop ends.
    ///
    /// # Parameters
    /// - `label`: The loop label, used for logging.
    /// - `step`: `UPPIN`/`NERFIN` and the variable it updates.
    /// - `condition`: The optional `TIL`/`WILE` guard.
    /// - `body`: The loop body.
    /// - `line`: Line number for error reporting.
    pub fn eval_loop(&mut self,
                     label: &str,
                     step: Option<&(LoopOperation, String)>,
                     condition: Option<&LoopCondition>,
                     body: &[Statement],
                     line: usize)
                     -> EvalResult<Flow> {
        let temporary = match step {
            Some((_, variable)) if !self.scope().contains(variable) => {
                self.scope_mut().declare(variable, Value::Numbr(0));
                Some(variable)
            },
            _ => None,
        };

        let result = self.run_loop(step, condition, body, line);

        if let Some(variable) = temporary {
            self.scope_mut().remove(variable);
        }
        log::debug!("left loop {label}");
        result
    }

    fn run_loop(&mut self,
                step: Option<&(LoopOperation, String)>,
                condition: Option<&LoopCondition>,
                body: &[Statement],
                line: usize)
                -> EvalResult<Flow> {
        loop {
            let keep_going = match condition {
                Some(LoopCondition::Til(expr)) => !self.eval(expr)?.is_truthy(),
                Some(LoopCondition::Wile(expr)) => self.eval(expr)?.is_truthy(),
                None => true,
            };
            if !keep_going {
                return Ok(Flow::Normal);
            }

            match self.eval_block(body)? {
                Flow::Normal => {},
                Flow::Break => return Ok(Flow::Normal),
                flow @ Flow::Return(_) => return Ok(flow),
            }

            if let Some((operation, variable)) = step {
                let delta = Value::Numbr(match operation {
                                             LoopOperation::Uppin => 1,
                                             LoopOperation::Nerfin => -1,
                                         });
                let current = self.eval_variable(variable, line)?;
                let next = Self::eval_arithmetic(BinaryOperator::Sum, &current, &delta, line)?;
                self.scope_mut().assign(variable, next, line)?;
            }
        }
    }
}
