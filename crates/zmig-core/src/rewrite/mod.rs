//! Tree rewrites.
//!
//! Organized by concern:
//! - `builders`: constructors for synthesized nodes
//! - `object_props`: key renames inside metadata and option objects
//! - `overrides`: merging legacy factory flags into one `override` callback
//! - `imports`: `zod` / `zod-openapi` import rewrites
//! - `call_site`: the visitor tying the above to recognized call shapes

pub mod builders;
pub mod call_site;
pub mod imports;
pub mod object_props;
pub mod overrides;

use swc_core::ecma::ast::Module;
use swc_core::ecma::visit::VisitMutWith;

pub use call_site::CallSiteTransformer;
pub use imports::{ImportAction, rewrite_import};
pub use object_props::{apply_renames, rewrite_metadata};
pub use overrides::{FactoryShape, PendingOverride, synthesize_override};

use crate::counters::ChangeCounters;

/// Run every tree rule over `module` in one traversal.
pub fn rewrite_module(module: &mut Module) -> ChangeCounters {
    let mut counters = ChangeCounters::new();
    module.visit_mut_with(&mut CallSiteTransformer::new(&mut counters));
    counters
}
