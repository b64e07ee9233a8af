use swc_core::ecma::ast::{Decl, Expr, ModuleItem, Pat, Stmt, VarDeclarator};

use crate::matcher::{
    as_object, callee_ident, callee_method, find_value, is_activation_call, is_annotated_type,
    is_call_to, is_identifier_name, is_true_literal, prop_key,
};
use crate::syntax::{SourceKind, SourceTree};

fn declarator(source: &str) -> VarDeclarator {
    let tree = SourceTree::parse(source, "test.ts", SourceKind::Ts).expect("valid source");
    match tree.module.body.into_iter().next() {
        Some(ModuleItem::Stmt(Stmt::Decl(Decl::Var(var)))) => {
            var.decls.into_iter().next().expect("one declarator")
        }
        other => panic!("expected a variable declaration, got {other:?}"),
    }
}

fn init(source: &str) -> Box<Expr> {
    declarator(source).init.expect("initializer")
}

#[test]
fn matches_identifier_callee() {
    let expr = init("const a = createSchema(schema, {});");
    let Expr::Call(call) = &*expr else {
        panic!("expected call");
    };
    assert_eq!(callee_ident(call), Some("createSchema"));
    assert!(is_call_to(call, "createSchema"));
    assert!(!is_call_to(call, "createDocument"));
    assert_eq!(callee_method(call), None);
}

#[test]
fn matches_method_callee_on_any_receiver() {
    let expr = init("const a = z.string().min(1).openapi({ ref: 'A' });");
    let Expr::Call(call) = &*expr else {
        panic!("expected call");
    };
    assert_eq!(callee_method(call), Some("openapi"));
    assert_eq!(callee_ident(call), None);
}

#[test]
fn computed_method_is_not_matched() {
    let expr = init("const a = schema['openapi']({});");
    let Expr::Call(call) = &*expr else {
        panic!("expected call");
    };
    assert_eq!(callee_method(call), None);
}

#[test]
fn string_and_identifier_keys_match_alike() {
    let expr = init("const a = { ref: 'A', 'refType': 'input', [computed]: 1, ...rest };");
    let obj = as_object(&expr).expect("object literal");
    let keys: Vec<Option<&str>> = obj.props.iter().map(prop_key).collect();
    assert_eq!(keys, vec![Some("ref"), Some("refType"), None, None]);
    assert!(find_value(obj, "refType").is_some());
    assert!(find_value(obj, "missing").is_none());
}

#[test]
fn only_literal_true_is_true() {
    assert!(is_true_literal(&init("const a = true;")));
    assert!(is_true_literal(&init("const a = (true);")));
    assert!(!is_true_literal(&init("const a = false;")));
    assert!(!is_true_literal(&init("const a = 'true';")));
    assert!(!is_true_literal(&init("const a = flag;")));
}

#[test]
fn activation_call_through_await_and_parens() {
    assert!(is_activation_call(&init("const a = extendZodWithOpenApi(z);")));
    assert!(is_activation_call(&init("const a = (extendZodWithOpenApi(z));")));
    assert!(is_activation_call(&init("const a = await extendZodWithOpenApi(z);")));
    assert!(!is_activation_call(&init("const a = lib.extendZodWithOpenApi(z);")));
    assert!(!is_activation_call(&init("const a = extendZodWithOpenApi;")));
}

#[test]
fn annotated_type_prefix() {
    let annotated = |source: &str| {
        let decl = declarator(source);
        let Pat::Ident(binding) = &decl.name else {
            panic!("expected identifier binding");
        };
        binding.type_ann.as_deref().is_some_and(is_annotated_type)
    };
    assert!(annotated("const a: ZodOpenApiObject = {};"));
    assert!(annotated("const a: oas.ZodOpenApiPathsObject = {};"));
    assert!(!annotated("const a: OpenApiObject = {};"));
    assert!(!annotated("const a: Array<ZodOpenApiObject> = [];"));
    assert!(!annotated("const a = {};"));
}

#[test]
fn identifier_names() {
    assert!(is_identifier_name("format"));
    assert!(is_identifier_name("_private"));
    assert!(is_identifier_name("$ref"));
    assert!(!is_identifier_name("x-custom"));
    assert!(!is_identifier_name("1st"));
    assert!(!is_identifier_name(""));
}
