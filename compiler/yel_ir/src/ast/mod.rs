//! Expression syntax tree.
//!
//! Nodes live in a flat [`ExprArena`] and refer to each other by
//! [`ExprId`]. Precedence levels that matched no operator never allocate a
//! wrapper node, so `a` is a single `Ident` node rather than a chain of
//! empty binary levels.
//!
//! Category membership is expressed with closed enums: every
//! expression-producing node is an [`ExprKind`] variant, and every
//! postfix form is a [`Suffix`] variant.

mod operators;
mod sexpr;

use std::fmt;

use smallvec::SmallVec;

use crate::Span;

pub use operators::{BinaryOp, UnaryOp};

/// Index into an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Sentinel for "no expression".
    pub const INVALID: ExprId = ExprId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Argument and element lists. Most have four or fewer entries.
pub type ExprList = SmallVec<[ExprId; 4]>;

/// Literal values after cooking.
///
/// Floats are stored as bits so the tree stays `Eq + Hash`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(u64),
    Float(u64),
    /// Unescaped string contents.
    String(String),
    Bool(bool),
    Null,
}

impl Literal {
    #[inline]
    pub fn float(value: f64) -> Self {
        Literal::Float(value.to_bits())
    }

    /// Float value, if this is a float literal.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

/// One `key: value` entry of a map literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MapEntry {
    pub key: ExprId,
    pub value: ExprId,
}

/// Postfix forms attached to an access chain.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Suffix {
    /// `.name` or `.name(args)`.
    Dot {
        name: String,
        args: Option<ExprList>,
        span: Span,
    },
    /// `[index]` or `[index](args)`.
    Bracket {
        index: ExprId,
        args: Option<ExprList>,
        span: Span,
    },
    /// `(args)`.
    Call { args: ExprList, span: Span },
}

impl Suffix {
    pub fn span(&self) -> Span {
        match self {
            Suffix::Dot { span, .. } | Suffix::Bracket { span, .. } | Suffix::Call { span, .. } => {
                *span
            }
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Literal(Literal),
    Ident(String),

    /// `a; b; c`
    Sequence(ExprList),
    /// `target = value`
    Assign { target: ExprId, value: ExprId },
    /// `param -> body`. `param` is an identifier or a tuple of them.
    Lambda { param: ExprId, body: ExprId },
    /// `cond ? then_branch : else_branch`
    Ternary {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary { op: UnaryOp, operand: ExprId },
    /// A primary followed by one or more suffixes.
    Access {
        receiver: ExprId,
        suffixes: Vec<Suffix>,
    },

    /// `(expr)`
    Paren(ExprId),
    /// `(a, b, ...)` with two or more elements.
    Tuple(ExprList),
    /// `[a, b]`
    List(ExprList),
    /// `{k: v, ...}` and `{}`.
    Map(Vec<MapEntry>),
    /// `{a, b}`
    Set(ExprList),
    /// `ns:name(args)(args)...`
    QualifiedCall {
        namespace: String,
        name: String,
        calls: Vec<ExprList>,
    },

    /// Placeholder for input that could not be parsed.
    Error,
}

/// An expression node with its raw-buffer span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Flat storage for one expression tree.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn try_get(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.index())
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.get(id).kind
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get(id).span
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Drop every node allocated at or after `len`.
    ///
    /// Used to discard the nodes of an abandoned speculative parse.
    pub fn truncate(&mut self, len: usize) {
        self.exprs.truncate(len);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExprId, &Expr)> {
        self.exprs
            .iter()
            .enumerate()
            .map(|(i, e)| (ExprId::new(i as u32), e))
    }

    /// Render the subtree at `id` as an S-expression, e.g. `(+ a (* b c))`.
    pub fn to_sexpr(&self, id: ExprId) -> String {
        let mut out = String::new();
        sexpr::write_expr(self, id, &mut out);
        out
    }
}
