//! Compact S-expression rendering for tests and debug logs.

use std::fmt::Write;

use super::{ExprArena, ExprId, ExprKind, ExprList, Literal, Suffix};

pub(super) fn write_expr(arena: &ExprArena, id: ExprId, out: &mut String) {
    let Some(expr) = arena.try_get(id) else {
        out.push_str("<invalid>");
        return;
    };
    match &expr.kind {
        ExprKind::Literal(lit) => write_literal(lit, out),
        ExprKind::Ident(name) => out.push_str(name),
        ExprKind::Sequence(items) => write_list(arena, "seq", items, out),
        ExprKind::Assign { target, value } => write_node(arena, "=", &[*target, *value], out),
        ExprKind::Lambda { param, body } => write_node(arena, "->", &[*param, *body], out),
        ExprKind::Ternary {
            cond,
            then_branch,
            else_branch,
        } => write_node(arena, "?", &[*cond, *then_branch, *else_branch], out),
        ExprKind::Binary { op, left, right } => {
            write_node(arena, op.as_symbol(), &[*left, *right], out);
        }
        ExprKind::Unary { op, operand } => write_node(arena, op.as_symbol(), &[*operand], out),
        ExprKind::Access { receiver, suffixes } => {
            out.push_str("(access ");
            write_expr(arena, *receiver, out);
            for suffix in suffixes {
                out.push(' ');
                write_suffix(arena, suffix, out);
            }
            out.push(')');
        }
        ExprKind::Paren(inner) => write_node(arena, "paren", &[*inner], out),
        ExprKind::Tuple(items) => write_list(arena, "tuple", items, out),
        ExprKind::List(items) => write_list(arena, "list", items, out),
        ExprKind::Set(items) => write_list(arena, "set", items, out),
        ExprKind::Map(entries) => {
            out.push_str("(map");
            for entry in entries {
                out.push_str(" (");
                write_expr(arena, entry.key, out);
                out.push(' ');
                write_expr(arena, entry.value, out);
                out.push(')');
            }
            out.push(')');
        }
        ExprKind::QualifiedCall {
            namespace,
            name,
            calls,
        } => {
            let _ = write!(out, "(call {namespace}:{name}");
            for args in calls {
                out.push(' ');
                write_args(arena, args, out);
            }
            out.push(')');
        }
        ExprKind::Error => out.push_str("<error>"),
    }
}

fn write_literal(lit: &Literal, out: &mut String) {
    match lit {
        Literal::Int(v) => {
            let _ = write!(out, "{v}");
        }
        Literal::Float(bits) => {
            let _ = write!(out, "{:?}", f64::from_bits(*bits));
        }
        Literal::String(s) => {
            let _ = write!(out, "{s:?}");
        }
        Literal::Bool(b) => {
            let _ = write!(out, "{b}");
        }
        Literal::Null => out.push_str("null"),
    }
}

fn write_suffix(arena: &ExprArena, suffix: &Suffix, out: &mut String) {
    match suffix {
        Suffix::Dot { name, args, .. } => {
            out.push('.');
            out.push_str(name);
            if let Some(args) = args {
                write_args(arena, args, out);
            }
        }
        Suffix::Bracket { index, args, .. } => {
            out.push('[');
            write_expr(arena, *index, out);
            out.push(']');
            if let Some(args) = args {
                write_args(arena, args, out);
            }
        }
        Suffix::Call { args, .. } => write_args(arena, args, out),
    }
}

fn write_args(arena: &ExprArena, args: &ExprList, out: &mut String) {
    out.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_expr(arena, *arg, out);
    }
    out.push(')');
}

fn write_node(arena: &ExprArena, head: &str, children: &[ExprId], out: &mut String) {
    out.push('(');
    out.push_str(head);
    for child in children {
        out.push(' ');
        write_expr(arena, *child, out);
    }
    out.push(')');
}

fn write_list(arena: &ExprArena, head: &str, items: &ExprList, out: &mut String) {
    write_node(arena, head, items, out);
}
