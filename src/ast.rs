use std::rc::Rc;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers every constant that can be written directly in
/// source code. It is used in the AST for literal expressions and for the
/// labels of switch cases.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The untyped `NOOB` value.
    Noob,
    /// `WIN` or `FAIL`.
    Troof(bool),
    /// A 64-bit signed integer literal.
    Numbr(i64),
    /// A 64-bit floating-point literal.
    Numbar(f64),
    /// A quoted string with its escapes already decoded.
    Yarn(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Numbr(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Numbar(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Troof(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Yarn(value.to_string())
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Noob => write!(f, "NOOB"),
            Self::Troof(true) => write!(f, "WIN"),
            Self::Troof(false) => write!(f, "FAIL"),
            Self::Numbr(n) => write!(f, "{n}"),
            Self::Numbar(n) => write!(f, "{n:?}"),
            Self::Yarn(s) => write!(f, "{s:?}"),
        }
    }
}

/// The five type names usable in casts and typed declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `NOOB`
    Noob,
    /// `TROOF`
    Troof,
    /// `NUMBR`
    Numbr,
    /// `NUMBAR`
    Numbar,
    /// `YARN`
    Yarn,
}

impl ValueType {
    /// Maps a type keyword to its type, or `None` for any other text.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "NOOB" => Some(Self::Noob),
            "TROOF" => Some(Self::Troof),
            "NUMBR" => Some(Self::Numbr),
            "NUMBAR" => Some(Self::Numbar),
            "YARN" => Some(Self::Yarn),
            _ => None,
        }
    }

    /// The keyword spelling of the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noob => "NOOB",
            Self::Troof => "TROOF",
            Self::Numbr => "NUMBR",
            Self::Numbar => "NUMBAR",
            Self::Yarn => "YARN",
        }
    }

    /// The value a `NOOB` becomes when cast to this type.
    #[must_use]
    pub const fn zero(self) -> LiteralValue {
        match self {
            Self::Noob => LiteralValue::Noob,
            Self::Troof => LiteralValue::Troof(false),
            Self::Numbr => LiteralValue::Numbr(0),
            Self::Numbar => LiteralValue::Numbar(0.0),
            Self::Yarn => LiteralValue::Yarn(String::new()),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every operator is written in prefix form, so the tree mirrors the source
/// order directly and needs no precedence table.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name. `IT` is an ordinary variable here.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `NOT <expr>`
    Not {
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A two-operand operation such as `SUM OF x AN y`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An operation over any number of operands, such as `SMOOSH`.
    Variadic {
        /// The operator.
        op:       VariadicOperator,
        /// Operands in source order.
        operands: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `MAEK <expr> A <type>`
    Cast {
        /// The value being converted.
        expr:   Box<Self>,
        /// The requested type.
        target: ValueType,
        /// Line number in the source code.
        line:   usize,
    },
    /// `I IZ <name> YR <arg> AN YR <arg> MKAY`
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Line number of the expression.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Not { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Variadic { line, .. }
            | Self::Cast { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// Two-operand operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `SUM OF`
    Sum,
    /// `DIFF OF`
    Diff,
    /// `PRODUKT OF`
    Produkt,
    /// `QUOSHUNT OF`
    Quoshunt,
    /// `MOD OF`
    Mod,
    /// `BIGGR OF`
    Biggr,
    /// `SMALLR OF`
    Smallr,
    /// `BOTH OF`
    BothOf,
    /// `EITHER OF`
    EitherOf,
    /// `WON OF`
    WonOf,
    /// `BOTH SAEM`
    BothSaem,
    /// `DIFFRINT`
    Diffrint,
}

impl BinaryOperator {
    /// Returns `true` for operators whose result is always a TROOF.
    #[must_use]
    pub const fn is_boolean(self) -> bool {
        matches!(self,
                 Self::BothOf | Self::EitherOf | Self::WonOf | Self::BothSaem | Self::Diffrint)
    }
}

/// Operators that take an open-ended operand list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariadicOperator {
    /// `ALL OF`: logical and of every operand.
    AllOf,
    /// `ANY OF`: logical or of every operand.
    AnyOf,
    /// `SMOOSH`: string concatenation.
    Smoosh,
}

/// The construct a `GTFO` leaves, fixed when the program is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakScope {
    /// Outside every block; resets `IT` to `NOOB`.
    Program,
    /// Inside a function body but no loop or switch; resets the call's `IT`
    /// to `NOOB` and the body carries on.
    Function,
    /// Inside a loop; ends the loop.
    Loop,
    /// Inside a switch case; ends the switch.
    Switch,
}

/// Update applied to a loop variable after every iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopOperation {
    /// `UPPIN`: add one.
    Uppin,
    /// `NERFIN`: subtract one.
    Nerfin,
}

/// The optional guard checked before each loop iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopCondition {
    /// `TIL <expr>`: keep going while the expression is falsy.
    Til(Expr),
    /// `WILE <expr>`: keep going while the expression is truthy.
    Wile(Expr),
}

/// A `MEBBE <expr>` arm of a conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardedBranch {
    /// The guard, evaluated into `IT`.
    pub condition: Expr,
    /// Statements run when the guard holds.
    pub body:      Vec<Statement>,
    /// Line of the `MEBBE` keyword.
    pub line:      usize,
}

/// An `OMG <literal>` arm of a switch.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// The value compared against `IT`.
    pub literal: LiteralValue,
    /// Statements run when the case matches.
    pub body:    Vec<Statement>,
    /// Line of the `OMG` keyword.
    pub line:    usize,
}

/// A user-defined function.
///
/// Parameters are bound positionally in a fresh frame on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Name of the function.
    pub name:   String,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// Function body.
    pub body:   Vec<Statement>,
    /// Line of the `HOW IZ I` keyword.
    pub line:   usize,
}

/// Represents a single statement in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `VISIBLE a AN b [!]`
    Print {
        /// Operands, concatenated without a separator.
        operands: Vec<Expr>,
        /// `false` when the line ends with `!`.
        newline:  bool,
        /// Line number in the source code.
        line:     usize,
    },
    /// `GIMMEH <name>`
    Input {
        /// The variable receiving the text.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `I HAS A <name> [ITZ <expr>]` in the statement list.
    Declaration {
        /// Name of the new variable.
        name:  String,
        /// Initial value; `None` means `NOOB`.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `<name> R <expr>`
    Assignment {
        /// The variable being assigned.
        name:  String,
        /// The new value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `<name> IS NOW A <type>`
    Cast {
        /// The variable being converted in place.
        name:   String,
        /// The requested type.
        target: ValueType,
        /// Line number in the source code.
        line:   usize,
    },
    /// A bare expression whose value is stored in `IT`.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `O RLY?` with its `YA RLY`, `MEBBE` and `NO WAI` arms.
    Conditional {
        /// Statements under `YA RLY`.
        then_branch: Vec<Statement>,
        /// `MEBBE` arms in source order.
        guards:      Vec<GuardedBranch>,
        /// Statements under `NO WAI`.
        else_branch: Option<Vec<Statement>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `WTF?` with its `OMG` and `OMGWTF` arms.
    Switch {
        /// Cases in source order.
        cases:   Vec<Case>,
        /// Statements under `OMGWTF`.
        default: Option<Vec<Statement>>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `IM IN YR <label> ... IM OUTTA YR <label>`
    Loop {
        /// The loop label.
        label:     String,
        /// Variable update applied after each iteration.
        step:      Option<(LoopOperation, String)>,
        /// Guard checked before each iteration.
        condition: Option<LoopCondition>,
        /// Loop body.
        body:      Vec<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `HOW IZ I ... IF U SAY SO`
    Function(Rc<FunctionDef>),
    /// `FOUND YR <expr>`
    Return {
        /// The returned value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `GTFO`
    Break {
        /// The construct being left.
        scope: BreakScope,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Line number of the statement.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Print { line, .. }
            | Self::Input { line, .. }
            | Self::Declaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::Cast { line, .. }
            | Self::Expression { line, .. }
            | Self::Conditional { line, .. }
            | Self::Switch { line, .. }
            | Self::Loop { line, .. }
            | Self::Return { line, .. }
            | Self::Break { line, .. } => *line,
            Self::Function(def) => def.line,
        }
    }
}
