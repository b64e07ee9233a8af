//! Override synthesis for factory-call options.
//!
//! `createDocument` and `createSchema` accepted declarative flags
//! (`unionOneOf: true`, `defaultDateSchema: {...}`) that the successor API
//! expresses as a single `override` callback. Both flags on one call merge
//! into one callback with a branch per behaviour:
//!
//! ```text
//! ({ jsonSchema, zodSchema }) => {
//!     const def = zodSchema._zod.def;
//!     if (def.type === "union") { jsonSchema.oneOf = jsonSchema.anyOf; delete jsonSchema.anyOf; return; }
//!     if (def.type === "date") { jsonSchema.type = "string"; return; }
//! }
//! ```

use swc_core::ecma::ast::{Expr, ObjectLit, Stmt};
use tracing::debug;

use super::builders::{
    DEF, JSON_SCHEMA, ZOD_SCHEMA, assign_stmt, const_decl, def_type_guard, destructuring_arrow,
    flatten_union_stmts, ident_expr, key_value_prop, member, member_expr, object, return_stmt,
};
use super::object_props::OVERRIDE;
use crate::counters::{ChangeCounters, Rule};
use crate::matcher::{
    as_object, as_object_mut, has_key, is_true_literal, key_value, key_value_mut, prop_name_text,
};

const UNION_ONE_OF: &str = "unionOneOf";
const DEFAULT_DATE_SCHEMA: &str = "defaultDateSchema";
const OPTS: &str = "opts";

/// Where a factory call expects its override callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryShape {
    /// `createDocument(spec, { override })`
    Document,
    /// `createSchema(schema, { opts: { override } })`
    Schema,
}

impl FactoryShape {
    fn union_rule(self) -> Rule {
        match self {
            FactoryShape::Document => Rule::CreateDocumentUnionOneOfToOverride,
            FactoryShape::Schema => Rule::CreateSchemaUnionOneOfToOverride,
        }
    }

    fn date_rule(self) -> Rule {
        match self {
            FactoryShape::Document => Rule::DefaultDateSchemaToOverride,
            FactoryShape::Schema => Rule::CreateSchemaDefaultDateSchemaToOverride,
        }
    }
}

/// Legacy behaviours found on one options object, pending synthesis.
#[derive(Debug, Default)]
pub struct PendingOverride {
    pub flatten_union: bool,
    /// `(key, value)` pairs of the captured `defaultDateSchema` object, if any.
    pub date_defaults: Option<Vec<(String, Box<Expr>)>>,
}

impl PendingOverride {
    /// Collect the legacy options present at the top level of `obj`.
    pub fn scan(obj: &ObjectLit) -> Self {
        let mut pending = PendingOverride::default();
        for prop in &obj.props {
            let Some(kv) = key_value(prop) else {
                continue;
            };
            match prop_name_text(&kv.key) {
                Some(UNION_ONE_OF) if is_true_literal(&kv.value) => pending.flatten_union = true,
                Some(DEFAULT_DATE_SCHEMA) => {
                    if let Some(schema) = as_object(&kv.value) {
                        pending.date_defaults = Some(date_assignments(schema));
                    }
                }
                _ => {}
            }
        }
        pending
    }

    pub fn is_empty(&self) -> bool {
        !self.flatten_union && self.date_defaults.is_none()
    }

    /// Build the merged callback, bumping one counter per branch emitted.
    pub fn into_callback(self, shape: FactoryShape, counters: &mut ChangeCounters) -> Box<Expr> {
        let mut body = vec![const_decl(
            DEF,
            member_expr(member_expr(ident_expr(ZOD_SCHEMA), "_zod"), "def"),
        )];

        if self.flatten_union {
            let mut branch = flatten_union_stmts();
            branch.push(return_stmt());
            body.push(def_type_guard("union", branch));
            counters.bump(shape.union_rule());
        }

        if let Some(defaults) = self.date_defaults {
            let mut branch: Vec<Stmt> = defaults
                .into_iter()
                .map(|(key, value)| assign_stmt(member(ident_expr(JSON_SCHEMA), &key), value))
                .collect();
            branch.push(return_stmt());
            body.push(def_type_guard("date", branch));
            counters.bump(shape.date_rule());
        }

        destructuring_arrow(&[JSON_SCHEMA, ZOD_SCHEMA], body)
    }
}

/// `key: value` members of a `defaultDateSchema` object. Spread, shorthand,
/// method and computed members carry no static assignment and are skipped.
fn date_assignments(schema: &ObjectLit) -> Vec<(String, Box<Expr>)> {
    schema
        .props
        .iter()
        .filter_map(key_value)
        .filter_map(|kv| prop_name_text(&kv.key).map(|key| (key.to_string(), kv.value.clone())))
        .collect()
}

/// Replace `unionOneOf`/`defaultDateSchema` on a factory options object with
/// a synthesized `override` callback attached where `shape` expects it.
///
/// Returns whether a callback was synthesized. Without a legacy option the
/// object is left untouched.
pub fn synthesize_override(
    obj: &mut ObjectLit,
    shape: FactoryShape,
    counters: &mut ChangeCounters,
) -> bool {
    let pending = PendingOverride::scan(obj);
    if pending.is_empty() {
        return false;
    }

    obj.props
        .retain(|prop| !has_key(prop, UNION_ONE_OF) && !has_key(prop, DEFAULT_DATE_SCHEMA));

    debug!(
        ?shape,
        union = pending.flatten_union,
        date = pending.date_defaults.is_some(),
        "synthesizing override callback"
    );
    let callback = pending.into_callback(shape, counters);

    match shape {
        FactoryShape::Document => attach_override(obj, callback),
        FactoryShape::Schema => {
            let opts = obj
                .props
                .iter_mut()
                .filter(|prop| has_key(prop, OPTS))
                .find_map(|prop| key_value_mut(prop).and_then(|kv| as_object_mut(&mut kv.value)));
            match opts {
                Some(opts) => attach_override(opts, callback),
                None => obj
                    .props
                    .push(key_value_prop(OPTS, object(vec![key_value_prop(OVERRIDE, callback)]))),
            }
        }
    }
    true
}

/// Set `override` on `obj`, replacing the value of an existing member.
fn attach_override(obj: &mut ObjectLit, callback: Box<Expr>) {
    let existing = obj
        .props
        .iter_mut()
        .filter(|prop| has_key(prop, OVERRIDE))
        .find_map(key_value_mut);
    match existing {
        Some(kv) => kv.value = callback,
        None => obj.props.push(key_value_prop(OVERRIDE, callback)),
    }
}
