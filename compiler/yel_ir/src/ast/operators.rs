//! Binary and unary operators of the expression language.
//!
//! Keyword spellings (`and`, `div`, `ge`, ...) fold into the same operator
//! as their symbolic form.

/// Binary operators, grouped by precedence level.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Logical
    Or,
    And,

    // Equality
    Eq,
    NotEq,

    // Relational
    Lt,
    Gt,
    LtEq,
    GtEq,
    InstanceOf,

    /// `+=`: string concatenation, not compound assignment.
    Concat,

    // Additive
    Add,
    Sub,

    // Multiplicative
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Canonical source symbol, used in debug output and messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::InstanceOf => "instanceof",
            Self::Concat => "+=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Binding strength. Higher binds tighter.
    ///
    /// - 1: `||` `or`
    /// - 2: `&&` `and`
    /// - 3: `==` `!=` `eq` `ne`
    /// - 4: `<` `>` `<=` `>=` and their keywords, `instanceof`
    /// - 5: `+=`
    /// - 6: `+` `-`
    /// - 7: `*` `/` `%` `div` `mod`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Eq | Self::NotEq => 3,
            Self::Lt | Self::Gt | Self::LtEq | Self::GtEq | Self::InstanceOf => 4,
            Self::Concat => 5,
            Self::Add | Self::Sub => 6,
            Self::Mul | Self::Div | Self::Mod => 7,
        }
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `!x` or `not x`
    Not,
    /// `empty x`
    Empty,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
            Self::Empty => "empty",
        }
    }
}
