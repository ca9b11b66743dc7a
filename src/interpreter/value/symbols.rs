use indexmap::IndexMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Name of the implicit result register.
pub const IT: &str = "IT";

/// An insertion-ordered variable table.
///
/// One table holds the program's top-level variables; every function call
/// gets a fresh one holding only its parameters. `IT` is present from
/// creation and cannot be removed. Names are case-sensitive.
///
/// # Example
/// ```
/// use lolterpreter::interpreter::value::{core::Value, symbols::SymbolTable};
///
/// let mut table = SymbolTable::new();
/// table.declare("X", Value::Numbr(10));
/// table.assign("X", Value::Numbr(11), 1).unwrap();
///
/// assert_eq!(table.get("X"), Some(&Value::Numbr(11)));
/// assert_eq!(table.it(), Value::Noob);
/// assert!(table.assign("Y", Value::Noob, 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    values: IndexMap<String, Value>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a table holding only `IT = NOOB`.
    #[must_use]
    pub fn new() -> Self {
        let mut values = IndexMap::new();
        values.insert(IT.to_string(), Value::Noob);
        Self { values }
    }

    /// Binds `name` to `value`, replacing any earlier binding in place.
    pub fn declare(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Replaces the value of an existing variable.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` if `name` was never declared.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns `true` if `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Current value of `IT`.
    #[must_use]
    pub fn it(&self) -> Value {
        self.values.get(IT).cloned().unwrap_or_default()
    }

    /// Overwrites `IT`.
    pub fn set_it(&mut self, value: Value) {
        self.values.insert(IT.to_string(), value);
    }

    /// Removes a variable, keeping the order of the rest. `IT` stays.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        if name == IT {
            return None;
        }
        self.values.shift_remove(name)
    }

    /// Iterates over the bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Owned copy of every binding in declaration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, Value)> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Number of bindings, `IT` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the table has no bindings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
