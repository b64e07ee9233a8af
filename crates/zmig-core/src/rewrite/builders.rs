//! Node constructors for synthesized code.
//!
//! All synthesized nodes carry `DUMMY_SP` and an empty syntax context; the
//! printer lays them out on its own.

use swc_core::common::{DUMMY_SP, SyntaxContext};
use swc_core::ecma::ast::{
    ArrowExpr, AssignExpr, AssignOp, AssignPatProp, AssignTarget, BinExpr, BinaryOp, BindingIdent,
    BlockStmt, BlockStmtOrExpr, ComputedPropName, Decl, Expr, ExprStmt, Ident, IdentName, IfStmt,
    KeyValueProp, Lit, MemberExpr, MemberProp, ObjectLit, ObjectPat, ObjectPatProp, Pat, Prop,
    PropName, PropOrSpread, ReturnStmt, SimpleAssignTarget, Stmt, Str, UnaryExpr, UnaryOp,
    VarDecl, VarDeclKind, VarDeclarator,
};

use crate::matcher::is_identifier_name;

/// Parameter name bound to the generated JSON schema object.
pub const JSON_SCHEMA: &str = "jsonSchema";
/// Parameter name bound to the zod schema being rendered.
pub const ZOD_SCHEMA: &str = "zodSchema";
/// Local holding the zod definition inside a merged callback.
pub const DEF: &str = "def";

pub fn ident(name: &str) -> Ident {
    Ident::new(name.into(), DUMMY_SP, SyntaxContext::empty())
}

pub fn ident_expr(name: &str) -> Box<Expr> {
    Box::new(Expr::Ident(ident(name)))
}

pub fn str_lit(value: &str) -> Box<Expr> {
    Box::new(Expr::Lit(Lit::Str(Str {
        span: DUMMY_SP,
        value: value.into(),
        raw: None,
    })))
}

/// `obj.prop`, or `obj["prop"]` when `prop` is not a valid identifier.
pub fn member(obj: Box<Expr>, prop: &str) -> MemberExpr {
    let prop = if is_identifier_name(prop) {
        MemberProp::Ident(IdentName::new(prop.into(), DUMMY_SP))
    } else {
        MemberProp::Computed(ComputedPropName {
            span: DUMMY_SP,
            expr: str_lit(prop),
        })
    };
    MemberExpr {
        span: DUMMY_SP,
        obj,
        prop,
    }
}

pub fn member_expr(obj: Box<Expr>, prop: &str) -> Box<Expr> {
    Box::new(Expr::Member(member(obj, prop)))
}

fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::Expr(ExprStmt {
        span: DUMMY_SP,
        expr: Box::new(expr),
    })
}

/// `target = value;`
pub fn assign_stmt(target: MemberExpr, value: Box<Expr>) -> Stmt {
    expr_stmt(Expr::Assign(AssignExpr {
        span: DUMMY_SP,
        op: AssignOp::Assign,
        left: AssignTarget::Simple(SimpleAssignTarget::Member(target)),
        right: value,
    }))
}

/// `delete target;`
pub fn delete_stmt(target: MemberExpr) -> Stmt {
    expr_stmt(Expr::Unary(UnaryExpr {
        span: DUMMY_SP,
        op: UnaryOp::Delete,
        arg: Box::new(Expr::Member(target)),
    }))
}

pub fn return_stmt() -> Stmt {
    Stmt::Return(ReturnStmt {
        span: DUMMY_SP,
        arg: None,
    })
}

pub fn block(stmts: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        stmts,
    }
}

/// `const name = init;`
pub fn const_decl(name: &str, init: Box<Expr>) -> Stmt {
    Stmt::Decl(Decl::Var(Box::new(VarDecl {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        kind: VarDeclKind::Const,
        declare: false,
        decls: vec![VarDeclarator {
            span: DUMMY_SP,
            name: Pat::Ident(BindingIdent {
                id: ident(name),
                type_ann: None,
            }),
            init: Some(init),
            definite: false,
        }],
    })))
}

/// `if (def.type === "<type_name>") { ...body }`
pub fn def_type_guard(type_name: &str, body: Vec<Stmt>) -> Stmt {
    Stmt::If(IfStmt {
        span: DUMMY_SP,
        test: Box::new(Expr::Bin(BinExpr {
            span: DUMMY_SP,
            op: BinaryOp::EqEqEq,
            left: member_expr(ident_expr(DEF), "type"),
            right: str_lit(type_name),
        })),
        cons: Box::new(Stmt::Block(block(body))),
        alt: None,
    })
}

/// `jsonSchema.oneOf = jsonSchema.anyOf; delete jsonSchema.anyOf;`
pub fn flatten_union_stmts() -> Vec<Stmt> {
    vec![
        assign_stmt(
            member(ident_expr(JSON_SCHEMA), "oneOf"),
            member_expr(ident_expr(JSON_SCHEMA), "anyOf"),
        ),
        delete_stmt(member(ident_expr(JSON_SCHEMA), "anyOf")),
    ]
}

/// `({ a, b }) => { ...body }`
pub fn destructuring_arrow(fields: &[&str], body: Vec<Stmt>) -> Box<Expr> {
    let props = fields
        .iter()
        .map(|field| {
            ObjectPatProp::Assign(AssignPatProp {
                span: DUMMY_SP,
                key: BindingIdent {
                    id: ident(field),
                    type_ann: None,
                },
                value: None,
            })
        })
        .collect();

    Box::new(Expr::Arrow(ArrowExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        params: vec![Pat::Object(ObjectPat {
            span: DUMMY_SP,
            props,
            optional: false,
            type_ann: None,
        })],
        body: Box::new(BlockStmtOrExpr::BlockStmt(block(body))),
        is_async: false,
        is_generator: false,
        type_params: None,
        return_type: None,
    }))
}

/// `key: value` object member with an identifier key.
pub fn key_value_prop(key: &str, value: Box<Expr>) -> PropOrSpread {
    PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
        key: PropName::Ident(IdentName::new(key.into(), DUMMY_SP)),
        value,
    })))
}

pub fn object(props: Vec<PropOrSpread>) -> Box<Expr> {
    Box::new(Expr::Object(ObjectLit {
        span: DUMMY_SP,
        props,
    }))
}
