//! Expression AST nodes

use serde::{Deserialize, Serialize};

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Integer literal
    IntLit(i64),
    /// String literal
    StrLit(String),
    /// Boolean literal
    BoolLit(bool),
    /// `nil`
    Nil,

    /// Variable reference
    Var(String),

    /// Binary operation
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },

    /// Unary operation
    Unary { op: UnOp, expr: Box<Expr> },

    /// Function call in expression position (only `inputi` resolves here)
    Call { name: String, args: Vec<Expr> },
}

impl Expr {
    pub fn int(n: i64) -> Self {
        Expr::IntLit(n)
    }

    pub fn str(s: impl Into<String>) -> Self {
        Expr::StrLit(s.into())
    }

    pub fn bool(b: bool) -> Self {
        Expr::BoolLit(b)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn binary(left: Expr, op: BinOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnOp, expr: Expr) -> Self {
        Expr::Unary {
            op,
            expr: Box::new(expr),
        }
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            name: name.into(),
            args,
        }
    }
}

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,

    // Logical
    And,
    Or,
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
            BinOp::Eq => write!(f, "=="),
            BinOp::Ne => write!(f, "!="),
            BinOp::Lt => write!(f, "<"),
            BinOp::Gt => write!(f, ">"),
            BinOp::Le => write!(f, "<="),
            BinOp::Ge => write!(f, ">="),
            BinOp::And => write!(f, "&&"),
            BinOp::Or => write!(f, "||"),
        }
    }
}

/// Unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnOp {
    /// Negation (-)
    Neg,
    /// Logical not (!)
    Not,
}

impl std::fmt::Display for UnOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnOp::Neg => write!(f, "-"),
            UnOp::Not => write!(f, "!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binop_display() {
        assert_eq!(BinOp::Add.to_string(), "+");
        assert_eq!(BinOp::Le.to_string(), "<=");
        assert_eq!(BinOp::And.to_string(), "&&");
        assert_eq!(BinOp::Or.to_string(), "||");
    }

    #[test]
    fn test_unop_display() {
        assert_eq!(UnOp::Neg.to_string(), "-");
        assert_eq!(UnOp::Not.to_string(), "!");
    }

    #[test]
    fn test_binary_constructor_boxes_operands() {
        let expr = Expr::binary(Expr::int(1), BinOp::Sub, Expr::var("x"));
        match expr {
            Expr::Binary { left, op, right } => {
                assert_eq!(*left, Expr::IntLit(1));
                assert_eq!(op, BinOp::Sub);
                assert_eq!(*right, Expr::Var("x".to_string()));
            }
            other => panic!("expected binary, got {other:?}"),
        }
    }

    #[test]
    fn test_expr_json_shape() {
        let expr = Expr::call("inputi", vec![Expr::str("n? ")]);
        let json = serde_json::to_string(&expr).unwrap();
        assert_eq!(json, r#"{"Call":{"name":"inputi","args":[{"StrLit":"n? "}]}}"#);
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
    }
}
