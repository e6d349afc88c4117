/// Represents a literal value written directly in source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal, quotes removed.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are built by the precedence-climbing parser, so operator
/// precedence and associativity are already resolved in the shape of the
/// tree. Every node records the source line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Reads one line from the input stream. Produced only when a whole
    /// expression is the bare identifier `input`.
    Input {
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator in the source code.
        line:  usize,
    },
    /// Two or more comparisons in a row, such as `a < b <= c`.
    ///
    /// Holds when every adjacent pair holds. Each operand is evaluated at
    /// most once, and evaluation stops at the first pair that fails.
    Comparison {
        /// The leftmost operand.
        first: Box<Self>,
        /// Each further operator with its right operand, left to right.
        rest:  Vec<(BinaryOperator, Self)>,
        /// Line number of the first operator in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use nscharp::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Input { line }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Comparison { line, .. } => *line,
        }
    }
}

/// Represents a statement.
///
/// Bodies of `fun`, `if`, `else` and `while` are owned child sequences, so a
/// program is a plain tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable binding using `let`. Rebinding overwrites.
    Let {
        /// The name of the variable.
        name:  String,
        /// The bound value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print(expr)`.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A function declaration. Recorded, never called.
    Fun {
        /// The name of the function.
        name: String,
        /// The statements of the function body.
        body: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `if` without an `else` block.
    If {
        /// The branch condition.
        condition: Expr,
        /// Statements executed when the condition is truthy.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `if` followed by an `else` block.
    IfElse {
        /// The branch condition.
        condition: Expr,
        /// Statements executed when the condition is truthy.
        then_body: Vec<Self>,
        /// Statements executed otherwise.
        else_body: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `while` loop.
    While {
        /// Condition re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A standalone expression evaluated for its effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Let { line, .. }
            | Self::Print { line, .. }
            | Self::Fun { line, .. }
            | Self::If { line, .. }
            | Self::IfElse { line, .. }
            | Self::While { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication or string repetition (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Numeric identity (e.g. `+x`).
    Plus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Plus => write!(f, "+"),
        }
    }
}
