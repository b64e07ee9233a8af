//! The single traversal that drives every tree rewrite.
//!
//! `CallSiteTransformer` recognizes the call shapes of the legacy API and
//! hands their option objects to the property rewriter and the override
//! synthesizer. Activation statements and imports are dropped from their
//! parent list before its children are visited, so no list is edited while
//! it is being walked. Activation calls anywhere else are neutralized in
//! place: a lone statement becomes `{}` and an expression becomes
//! `undefined`.

use swc_core::ecma::ast::{
    CallExpr, Callee, Decl, Expr, ExprOrSpread, MemberProp, ModuleDecl, ModuleItem, ObjectLit,
    Pat, Stmt, VarDeclarator,
};
use swc_core::ecma::visit::{VisitMut, VisitMutWith, noop_visit_mut_type};
use tracing::debug;

use super::builders::{block, ident};
use super::imports::{ImportAction, rewrite_import};
use super::object_props::{SCHEMA_OPTION_RENAMES, apply_renames, rewrite_metadata};
use super::overrides::{FactoryShape, synthesize_override};
use crate::counters::{ChangeCounters, Rule};
use crate::matcher::{
    ACTIVATION_FN, DOCUMENT_BUILDER, LEGACY_METHOD, META_METHOD, SCHEMA_BUILDER, as_object_mut,
    callee_ident, callee_method, is_activation_call, is_annotated_type, is_call_to,
};

/// Visitor applying the call-site and import rules to one module.
///
/// Counters are borrowed so the caller owns them for the whole file.
pub struct CallSiteTransformer<'a> {
    counters: &'a mut ChangeCounters,
}

impl<'a> CallSiteTransformer<'a> {
    pub fn new(counters: &'a mut ChangeCounters) -> Self {
        Self { counters }
    }

    fn rewrite_openapi_call(&mut self, call: &mut CallExpr) {
        if let Callee::Expr(callee) = &mut call.callee
            && let Expr::Member(member) = &mut **callee
            && let MemberProp::Ident(name) = &mut member.prop
        {
            name.sym = META_METHOD.into();
        }
        self.counters.bump(Rule::OpenapiToMeta);

        if let Some(obj) = object_arg(call, 0) {
            rewrite_metadata(obj, self.counters);
        }
    }

    fn rewrite_factory_call(&mut self, call: &mut CallExpr, shape: FactoryShape) {
        if let Some(spec) = object_arg(call, 0) {
            rewrite_metadata(spec, self.counters);
        }
        let Some(options) = object_arg(call, 1) else {
            return;
        };
        if shape == FactoryShape::Schema {
            apply_renames(options, SCHEMA_OPTION_RENAMES, self.counters);
        }
        synthesize_override(options, shape, self.counters);
    }

    fn remove_activation_stmts(&mut self, stmts: &mut Vec<Stmt>) {
        stmts.retain(|stmt| {
            let activation = is_activation_stmt(stmt);
            if activation {
                debug!("removing activation call");
                self.counters.bump(Rule::ExtendCallsRemoved);
            }
            !activation
        });
    }
}

/// Call shapes the transformer dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallShape {
    LegacyMethod,
    Factory(FactoryShape),
    Other,
}

impl CallShape {
    fn of(call: &CallExpr) -> Self {
        if callee_method(call) == Some(LEGACY_METHOD) {
            return CallShape::LegacyMethod;
        }
        match callee_ident(call) {
            Some(DOCUMENT_BUILDER) => CallShape::Factory(FactoryShape::Document),
            Some(SCHEMA_BUILDER) => CallShape::Factory(FactoryShape::Schema),
            _ => CallShape::Other,
        }
    }
}

/// Object-literal argument at `index`, ignoring spread arguments.
fn object_arg(call: &mut CallExpr, index: usize) -> Option<&mut ObjectLit> {
    match call.args.get_mut(index) {
        Some(ExprOrSpread { spread: None, expr }) => as_object_mut(expr),
        _ => None,
    }
}

/// `extendZodWithOpenApi(z);` or `const x = extendZodWithOpenApi(z);`
fn is_activation_stmt(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Expr(expr_stmt) => is_activation_call(&expr_stmt.expr),
        Stmt::Decl(Decl::Var(var)) => match var.decls.as_slice() {
            [decl] => decl.init.as_deref().is_some_and(is_activation_call),
            _ => false,
        },
        _ => false,
    }
}

impl VisitMut for CallSiteTransformer<'_> {
    noop_visit_mut_type!();

    fn visit_mut_module_items(&mut self, items: &mut Vec<ModuleItem>) {
        let counters = &mut *self.counters;
        items.retain_mut(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => {
                rewrite_import(import, counters) == ImportAction::Keep
            }
            ModuleItem::Stmt(stmt) if is_activation_stmt(stmt) => {
                debug!("removing activation call");
                counters.bump(Rule::ExtendCallsRemoved);
                false
            }
            _ => true,
        });

        items.visit_mut_children_with(self);
    }

    fn visit_mut_stmts(&mut self, stmts: &mut Vec<Stmt>) {
        self.remove_activation_stmts(stmts);
        stmts.visit_mut_children_with(self);
    }

    // List members were filtered already; an activation here is a lone
    // statement such as a brace-less `if` body.
    fn visit_mut_stmt(&mut self, stmt: &mut Stmt) {
        let activation =
            matches!(stmt, Stmt::Expr(expr_stmt) if is_activation_call(&expr_stmt.expr));
        if activation {
            debug!("emptying lone activation statement");
            self.counters.bump(Rule::ExtendCallsRemoved);
            *stmt = Stmt::Block(block(Vec::new()));
            return;
        }
        stmt.visit_mut_children_with(self);
    }

    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        expr.visit_mut_children_with(self);

        if matches!(expr, Expr::Call(call) if is_call_to(call, ACTIVATION_FN)) {
            debug!("replacing activation call expression");
            self.counters.bump(Rule::ExtendCallsRemoved);
            *expr = Expr::Ident(ident("undefined"));
        }
    }

    fn visit_mut_call_expr(&mut self, call: &mut CallExpr) {
        call.visit_mut_children_with(self);

        match CallShape::of(call) {
            CallShape::LegacyMethod => {
                debug!("rewriting .openapi() call");
                self.rewrite_openapi_call(call);
            }
            CallShape::Factory(shape) => self.rewrite_factory_call(call, shape),
            CallShape::Other => {}
        }
    }

    fn visit_mut_var_declarator(&mut self, decl: &mut VarDeclarator) {
        decl.visit_mut_children_with(self);

        let Pat::Ident(binding) = &decl.name else {
            return;
        };
        if !binding.type_ann.as_deref().is_some_and(is_annotated_type) {
            return;
        }
        if let Some(obj) = decl.init.as_deref_mut().and_then(as_object_mut) {
            rewrite_metadata(obj, self.counters);
        }
    }
}
