/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed variant type covering every construct of the language:
/// literals, variable references, sequencing, assignment, conditionals,
/// lambdas, calls, and binary operations. Nodes are immutable trees produced
/// once by the parser; the evaluator never mutates them. Ownership is
/// tree-exclusive: no sharing, no cycles.
///
/// Every node records the 1-based source line of the token that introduced
/// it, for located runtime errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.14`.
    NumberLit {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    StringLit {
        /// The literal text, quotes stripped.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    BoolLit {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    VarRef {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An ordered sequence of expressions; evaluates to the last one.
    Sequence {
        /// The expressions, in evaluation order.
        exprs: Vec<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An assignment `target = value`.
    ///
    /// The target must be a `VarRef`; the evaluator checks this, not the
    /// parser.
    Assign {
        /// The assignment target.
        target: Box<Self>,
        /// The value expression.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Conditional expression with an optional else branch.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression evaluated when the condition is truthy.
        then_branch: Box<Self>,
        /// Expression evaluated otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A lambda expression: parameter names and a body.
    Lambda {
        /// The parameter names, in positional order.
        params: Vec<String>,
        /// The body expression, evaluated at call time.
        body:   Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A call: callee expression applied to positional arguments.
    Call {
        /// The expression producing the function value.
        callee:    Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A binary operation such as `a + b` or `a <= b`.
    BinaryOp {
        /// The operator symbol as lexed, e.g. `"+"` or `"&&"`.
        operator: String,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use mu_lang::ast::Expr;
    ///
    /// let expr = Expr::VarRef { name: "x".to_string(),
    ///                           line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::NumberLit { line, .. }
            | Self::StringLit { line, .. }
            | Self::BoolLit { line, .. }
            | Self::VarRef { line, .. }
            | Self::Sequence { line, .. }
            | Self::Assign { line, .. }
            | Self::If { line, .. }
            | Self::Lambda { line, .. }
            | Self::Call { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }

    /// A short description of the node's shape, used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::NumberLit { .. } => "number literal",
            Self::StringLit { .. } => "string literal",
            Self::BoolLit { .. } => "boolean literal",
            Self::VarRef { .. } => "variable",
            Self::Sequence { .. } => "sequence",
            Self::Assign { .. } => "assignment",
            Self::If { .. } => "if expression",
            Self::Lambda { .. } => "lambda",
            Self::Call { .. } => "call",
            Self::BinaryOp { .. } => "binary operation",
        }
    }
}
