//! Key renames inside option and metadata object literals.

use swc_core::ecma::ast::{Expr, ObjectLit, PropName};
use tracing::trace;

use super::builders::{JSON_SCHEMA, destructuring_arrow, flatten_union_stmts};
use crate::counters::{ChangeCounters, Rule};
use crate::matcher::{as_object_mut, is_true_literal, key_value_mut, prop_name_text};

/// A fixed `legacy key -> successor key` rename.
#[derive(Debug, Clone, Copy)]
pub struct Rename {
    pub from: &'static str,
    pub to: &'static str,
    pub rule: Rule,
}

/// Renames applied at every level of a metadata object.
pub const METADATA_RENAMES: &[Rename] = &[
    Rename {
        from: "ref",
        to: "id",
        rule: Rule::RefToId,
    },
    Rename {
        from: "refType",
        to: "unusedIO",
        rule: Rule::RefTypeToUnusedIo,
    },
];

/// Renames applied to the top level of `createSchema` options.
pub const SCHEMA_OPTION_RENAMES: &[Rename] = &[
    Rename {
        from: "schemaType",
        to: "io",
        rule: Rule::SchemaTypeToIo,
    },
    Rename {
        from: "componentRefPath",
        to: "schemaComponentRefPath",
        rule: Rule::ComponentRefPath,
    },
    Rename {
        from: "components",
        to: "schemaComponents",
        rule: Rule::ComponentsToSchemaComponents,
    },
];

/// Keys whose values are user payload (sample values, defaults) rather than
/// metadata. Their contents are never rewritten.
const DATA_KEYS: &[&str] = &["example", "examples", "default"];

const EFFECT_TYPE: &str = "effectType";
const UNION_ONE_OF: &str = "unionOneOf";
pub(crate) const OVERRIDE: &str = "override";

/// Replace the text of an identifier or string key, keeping its form.
pub(crate) fn rename_key(key: &mut PropName, to: &str) {
    match key {
        PropName::Ident(ident) => ident.sym = to.into(),
        PropName::Str(s) => {
            s.value = to.into();
            s.raw = None;
        }
        _ => {}
    }
}

/// Apply `table` to the top-level members of `obj` only.
pub fn apply_renames(obj: &mut ObjectLit, table: &[Rename], counters: &mut ChangeCounters) {
    for prop in obj.props.iter_mut() {
        let Some(kv) = key_value_mut(prop) else {
            continue;
        };
        let Some(key) = prop_name_text(&kv.key) else {
            continue;
        };
        if let Some(rename) = table.iter().find(|rename| rename.from == key) {
            trace!(from = rename.from, to = rename.to, "renaming option key");
            rename_key(&mut kv.key, rename.to);
            counters.bump(rename.rule);
        }
    }
}

/// Rewrite a metadata object: `ref`/`refType` renames, `effectType`
/// detection and `unionOneOf: true` replacement, at every nesting level
/// reachable through object and array-of-object values.
pub fn rewrite_metadata(obj: &mut ObjectLit, counters: &mut ChangeCounters) {
    for prop in obj.props.iter_mut() {
        let Some(kv) = key_value_mut(prop) else {
            continue;
        };
        let Some(key) = prop_name_text(&kv.key).map(str::to_owned) else {
            continue;
        };

        if let Some(rename) = METADATA_RENAMES.iter().find(|rename| rename.from == key) {
            rename_key(&mut kv.key, rename.to);
            counters.bump(rename.rule);
        } else if key == EFFECT_TYPE {
            // Commented out textually once the file is printed.
            counters.bump(Rule::EffectTypeCommented);
        } else if key == UNION_ONE_OF && is_true_literal(&kv.value) {
            rename_key(&mut kv.key, OVERRIDE);
            kv.value = destructuring_arrow(&[JSON_SCHEMA], flatten_union_stmts());
            counters.bump(Rule::UnionOneOfToOverride);
            continue;
        }

        if DATA_KEYS.contains(&key.as_str()) {
            continue;
        }
        rewrite_nested(&mut kv.value, counters);
    }
}

fn rewrite_nested(value: &mut Expr, counters: &mut ChangeCounters) {
    if let Some(obj) = as_object_mut(value) {
        rewrite_metadata(obj, counters);
        return;
    }
    if let Expr::Array(array) = value {
        for element in array.elems.iter_mut().flatten() {
            if element.spread.is_some() {
                continue;
            }
            if let Some(obj) = as_object_mut(&mut element.expr) {
                rewrite_metadata(obj, counters);
            }
        }
    }
}
