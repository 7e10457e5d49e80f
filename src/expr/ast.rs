use std::f64::consts;

use smallvec::SmallVec;

/// Named constants available to expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "PI" => Some(Self::Pi),
            "E" => Some(Self::E),
            _ => None,
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => consts::PI,
            Self::E => consts::E,
        }
    }
}

/// The fixed allow-list of callable functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Abs,
    Pow,
    Log,
    Log10,
    Exp,
}

impl Function {
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let function = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            "pow" => Self::Pow,
            "log" => Self::Log,
            "log10" => Self::Log10,
            "exp" => Self::Exp,
            _ => return None,
        };
        Some(function)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Pow => "pow",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Exp => "exp",
        }
    }

    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Pow => 2,
            _ => 1,
        }
    }

    /// Applies the function. `args.len()` equals `arity()`, checked by the parser.
    /// Domain errors surface as NaN or infinities, never as panics.
    fn apply(self, args: &[f64]) -> f64 {
        let a = args.first().copied().unwrap_or(f64::NAN);
        match self {
            Self::Sin => a.sin(),
            Self::Cos => a.cos(),
            Self::Tan => a.tan(),
            Self::Asin => a.asin(),
            Self::Acos => a.acos(),
            Self::Atan => a.atan(),
            Self::Sqrt => a.sqrt(),
            Self::Abs => a.abs(),
            Self::Pow => a.powf(args.get(1).copied().unwrap_or(f64::NAN)),
            Self::Log => a.ln(),
            Self::Log10 => a.log10(),
            Self::Exp => a.exp(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

/// Parsed expression tree over the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable,
    Constant(Constant),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        function: Function,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Evaluates the tree at `x` with IEEE-754 semantics: division by zero
    /// yields infinities and out-of-domain calls yield NaN.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Variable => x,
            Self::Constant(constant) => constant.value(),
            Self::Unary {
                op: UnaryOp::Neg,
                operand,
            } => -operand.eval(x),
            Self::Binary { op, left, right } => op.apply(left.eval(x), right.eval(x)),
            Self::Call { function, args } => {
                let values: SmallVec<[f64; 2]> = args.iter().map(|arg| arg.eval(x)).collect();
                function.apply(&values)
            }
        }
    }
}
