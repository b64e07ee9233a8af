//! Import statement rewrites for `zod` and `zod-openapi`.

use swc_core::common::DUMMY_SP;
use swc_core::ecma::ast::{
    ImportDecl, ImportSpecifier, ImportStarAsSpecifier, ModuleExportName, Str,
};
use tracing::debug;

use super::builders::ident;
use crate::counters::{ChangeCounters, Rule};
use crate::matcher::ACTIVATION_FN;

const ZOD: &str = "zod";
const ZOD_V4: &str = "zod/v4";
const ZOD_NAMESPACE: &str = "z";
const ZOD_OPENAPI: &str = "zod-openapi";
const ZOD_OPENAPI_EXTEND: &str = "zod-openapi/extend";

/// What should happen to an import declaration after rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportAction {
    Keep,
    Remove,
}

/// Rewrite one import declaration in place. Each declaration bumps its
/// counter at most once.
pub fn rewrite_import(import: &mut ImportDecl, counters: &mut ChangeCounters) -> ImportAction {
    if import.type_only {
        return ImportAction::Keep;
    }

    match &*import.src.value {
        ZOD => {
            if import.specifiers.iter().any(binds_zod_namespace) {
                debug!("normalizing zod import to namespace import from {ZOD_V4}");
                import.specifiers = vec![ImportSpecifier::Namespace(ImportStarAsSpecifier {
                    span: DUMMY_SP,
                    local: ident(ZOD_NAMESPACE),
                })];
                import.src = Box::new(Str {
                    span: DUMMY_SP,
                    value: ZOD_V4.into(),
                    raw: None,
                });
                counters.bump(Rule::ZodImportsMigrated);
            }
            ImportAction::Keep
        }
        ZOD_OPENAPI => {
            let before = import.specifiers.len();
            import.specifiers.retain(|spec| !imports_activation(spec));
            if import.specifiers.len() == before {
                return ImportAction::Keep;
            }
            counters.bump(Rule::ImportsRemoved);
            if import.specifiers.is_empty() {
                ImportAction::Remove
            } else {
                ImportAction::Keep
            }
        }
        // Only the bare side-effect form; anything binding names is left alone.
        ZOD_OPENAPI_EXTEND if import.specifiers.is_empty() => {
            counters.bump(Rule::ImportsRemoved);
            ImportAction::Remove
        }
        _ => ImportAction::Keep,
    }
}

fn export_name(name: &ModuleExportName) -> &str {
    match name {
        ModuleExportName::Ident(ident) => &*ident.sym,
        ModuleExportName::Str(s) => &*s.value,
    }
}

/// `z` bound by `import z`, `import { z }` or `import * as z`.
fn binds_zod_namespace(spec: &ImportSpecifier) -> bool {
    match spec {
        ImportSpecifier::Default(default) => &*default.local.sym == ZOD_NAMESPACE,
        ImportSpecifier::Namespace(namespace) => &*namespace.local.sym == ZOD_NAMESPACE,
        ImportSpecifier::Named(named) => {
            !named.is_type_only
                && &*named.local.sym == ZOD_NAMESPACE
                && named
                    .imported
                    .as_ref()
                    .is_none_or(|imported| export_name(imported) == ZOD_NAMESPACE)
        }
    }
}

fn imports_activation(spec: &ImportSpecifier) -> bool {
    let ImportSpecifier::Named(named) = spec else {
        return false;
    };
    let imported = named
        .imported
        .as_ref()
        .map_or(&*named.local.sym, export_name);
    imported == ACTIVATION_FN
}
