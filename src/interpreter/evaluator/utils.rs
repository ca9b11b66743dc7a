use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Wraps an I/O failure with the line of the statement that caused it.
pub(crate) fn io_error(line: usize) -> impl FnOnce(std::io::Error) -> RuntimeError {
    move |error| RuntimeError::Io { error, line }
}

/// Removes one trailing `\n` or `\r\n`.
pub(crate) fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

impl Context<'_> {
    /// Converts a literal into a runtime value. Literals never fail.
    #[must_use]
    pub fn eval_literal(value: &LiteralValue) -> Value {
        value.into()
    }

    /// Looks up a variable in the current scope.
    ///
    /// Inside a function only the call's own table is visible.
    ///
    /// # Errors
    /// `UnknownVariable` if the name is not declared in the current scope.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.scope()
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Executes `VISIBLE`.
    ///
    /// Every operand is evaluated and stringified, the pieces are joined with
    /// no separator, and the result is written with or without a trailing
    /// line break.
    pub fn eval_print(&mut self, operands: &[Expr], newline: bool, line: usize) -> EvalResult<()> {
        let mut text = String::new();
        for operand in operands {
            text.push_str(&self.eval(operand)?.to_string());
        }

        if newline {
            self.output().append_line(&text).map_err(io_error(line))
        } else {
            self.output().append(&text).map_err(io_error(line))
        }
    }

    /// Executes `GIMMEH`.
    ///
    /// The target must already exist. The line read is stored as a YARN
    /// without its line ending; it is never converted to a number.
    ///
    /// # Errors
    /// - `UndeclaredInputTarget` if the variable was never declared.
    /// - `Io` if the input source fails.
    pub fn eval_input(&mut self, name: &str, line: usize) -> EvalResult<()> {
        if !self.scope().contains(name) {
            return Err(RuntimeError::UndeclaredInputTarget { name: name.to_string(),
                                                             line });
        }

        let text = self.input().prompt(name).map_err(io_error(line))?;
        let text = strip_line_ending(text);
        log::debug!("read {text:?} into {name}");
        self.scope_mut().assign(name, Value::Yarn(text), line)
    }
}

#[cfg(test)]
mod tests {
    use super::strip_line_ending;

    #[test]
    fn strips_one_line_ending() {
        assert_eq!(strip_line_ending("42\n".into()), "42");
        assert_eq!(strip_line_ending("42\r\n".into()), "42");
        assert_eq!(strip_line_ending("42\n\n".into()), "42\n");
        assert_eq!(strip_line_ending("42".into()), "42");
    }
}
