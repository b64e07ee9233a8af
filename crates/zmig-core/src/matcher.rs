//! Structural predicates over syntax nodes.
//!
//! Everything here is read-only and purely syntactic: an identifier named
//! `createSchema` is matched no matter what it is bound to.

use swc_core::ecma::ast::{
    CallExpr, Callee, Expr, KeyValueProp, Lit, MemberProp, ObjectLit, Prop, PropName,
    PropOrSpread, TsEntityName, TsType, TsTypeAnn,
};

/// Legacy one-time setup call, removed wherever it is called.
pub const ACTIVATION_FN: &str = "extendZodWithOpenApi";
/// Legacy schema-metadata method.
pub const LEGACY_METHOD: &str = "openapi";
/// Successor schema-metadata method.
pub const META_METHOD: &str = "meta";
/// Document builder: `createDocument(spec, options?)`.
pub const DOCUMENT_BUILDER: &str = "createDocument";
/// Schema builder: `createSchema(schema, options?)`.
pub const SCHEMA_BUILDER: &str = "createSchema";
/// Declared-type prefix of the annotated object-shape family.
pub const ANNOTATED_TYPE_PREFIX: &str = "ZodOpenApi";

/// Name of the identifier being called, for `name(...)` calls.
pub fn callee_ident(call: &CallExpr) -> Option<&str> {
    match &call.callee {
        Callee::Expr(expr) => match &**expr {
            Expr::Ident(ident) => Some(&*ident.sym),
            _ => None,
        },
        _ => None,
    }
}

pub fn is_call_to(call: &CallExpr, name: &str) -> bool {
    callee_ident(call) == Some(name)
}

/// Method name for `receiver.method(...)` calls.
pub fn callee_method(call: &CallExpr) -> Option<&str> {
    match &call.callee {
        Callee::Expr(expr) => match &**expr {
            Expr::Member(member) => match &member.prop {
                MemberProp::Ident(name) => Some(&*name.sym),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
}

/// Text of an identifier or string-literal key. Computed and numeric keys
/// never match a legacy option.
pub fn prop_name_text(name: &PropName) -> Option<&str> {
    match name {
        PropName::Ident(ident) => Some(&*ident.sym),
        PropName::Str(s) => Some(&*s.value),
        _ => None,
    }
}

pub fn key_value(prop: &PropOrSpread) -> Option<&KeyValueProp> {
    match prop {
        PropOrSpread::Prop(prop) => match &**prop {
            Prop::KeyValue(kv) => Some(kv),
            _ => None,
        },
        PropOrSpread::Spread(_) => None,
    }
}

pub fn key_value_mut(prop: &mut PropOrSpread) -> Option<&mut KeyValueProp> {
    match prop {
        PropOrSpread::Prop(prop) => match &mut **prop {
            Prop::KeyValue(kv) => Some(kv),
            _ => None,
        },
        PropOrSpread::Spread(_) => None,
    }
}

/// Key text of a `key: value` member.
pub fn prop_key(prop: &PropOrSpread) -> Option<&str> {
    key_value(prop).and_then(|kv| prop_name_text(&kv.key))
}

pub fn has_key(prop: &PropOrSpread, name: &str) -> bool {
    prop_key(prop) == Some(name)
}

/// `true`, possibly parenthesized.
pub fn is_true_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Lit(Lit::Bool(b)) => b.value,
        Expr::Paren(paren) => is_true_literal(&paren.expr),
        _ => false,
    }
}

pub fn as_object(expr: &Expr) -> Option<&ObjectLit> {
    match expr {
        Expr::Object(obj) => Some(obj),
        _ => None,
    }
}

pub fn as_object_mut(expr: &mut Expr) -> Option<&mut ObjectLit> {
    match expr {
        Expr::Object(obj) => Some(obj),
        _ => None,
    }
}

/// Value of the first `key: value` member named `name`.
pub fn find_value<'a>(obj: &'a ObjectLit, name: &str) -> Option<&'a Expr> {
    obj.props
        .iter()
        .find(|prop| has_key(prop, name))
        .and_then(key_value)
        .map(|kv| &*kv.value)
}

/// Is this a call to the activation function, optionally wrapped in
/// parentheses or `await`?
pub fn is_activation_call(expr: &Expr) -> bool {
    match expr {
        Expr::Call(call) => is_call_to(call, ACTIVATION_FN),
        Expr::Paren(paren) => is_activation_call(&paren.expr),
        Expr::Await(await_expr) => is_activation_call(&await_expr.arg),
        _ => false,
    }
}

/// Does the annotation name a type from the annotated family, e.g.
/// `ZodOpenApiObject` or `oas.ZodOpenApiObject`?
pub fn is_annotated_type(type_ann: &TsTypeAnn) -> bool {
    let TsType::TsTypeRef(type_ref) = &*type_ann.type_ann else {
        return false;
    };
    let name: &str = match &type_ref.type_name {
        TsEntityName::Ident(ident) => &*ident.sym,
        TsEntityName::TsQualifiedName(qualified) => &*qualified.right.sym,
    };
    name.starts_with(ANNOTATED_TYPE_PREFIX)
}

/// Valid as a plain identifier, i.e. usable after a `.` in member access.
pub fn is_identifier_name(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || first == '$' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c == '$' || c.is_alphanumeric())
}
