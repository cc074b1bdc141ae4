use std::path::Path;

use syn::punctuated::Punctuated;
use syn::visit::Visit;
use syn::Token;

use crate::keyedlit;
use crate::literal::CompositeLit;
use crate::oracle::{Scope, TypeDescriptor, TypeOracle};
use crate::rules::Rules;
use crate::types::{Diagnostic, ModulePath};

/// Check every struct literal in a file and hand each finding to `report`.
///
/// `module_path` is the module the file's top-level items live in. Inline
/// `#[cfg(test)]` modules and `#[test]` functions are not visited.
pub fn check_file(
    ast: &syn::File,
    file_path: &Path,
    module_path: &ModulePath,
    oracle: &dyn TypeOracle,
    rules: &Rules,
    report: &mut dyn FnMut(Diagnostic),
) {
    let mut walker = LiteralWalker {
        oracle,
        rules,
        file_path,
        modules: vec![module_path.clone()],
        self_types: Vec::new(),
        report,
    };
    walker.visit_file(ast);
}

struct LiteralWalker<'a> {
    oracle: &'a dyn TypeOracle,
    rules: &'a Rules,
    file_path: &'a Path,
    /// Enclosing modules, innermost last
    modules: Vec<ModulePath>,
    /// Self types of enclosing impls, innermost last
    self_types: Vec<Option<Vec<String>>>,
    report: &'a mut dyn FnMut(Diagnostic),
}

impl<'a> LiteralWalker<'a> {
    fn check(&mut self, lit: CompositeLit) {
        let Some(path) = lit.type_expr.segments() else {
            tracing::trace!(line = lit.position.line, "skipping literal: {}", keyedlit::Rejection::NoTypeName);
            return;
        };

        let Some(ty) = self.type_of(&path) else {
            tracing::trace!(line = lit.position.line, path = %path.join("::"), "skipping literal: type not in crate");
            return;
        };

        if let Err(rejection) =
            keyedlit::check_literal(&lit, &ty, self.rules, self.file_path, &mut *self.report)
        {
            tracing::trace!(line = lit.position.line, ty = %ty.path, "skipping literal: {rejection}");
        }
    }

    fn type_of(&self, path: &[String]) -> Option<TypeDescriptor> {
        let module = self.modules.last()?;
        let self_ty = self.self_types.last().and_then(|ty| ty.as_deref());
        self.oracle.type_of(Scope { module, self_ty }, path)
    }

    /// Whether a call's callee names a tuple struct, making the call a
    /// positional literal.
    fn is_constructor(&self, callee: &syn::ExprPath) -> bool {
        if callee.qself.is_some() {
            return false;
        }
        let path: Vec<String> = callee.path.segments.iter().map(|s| s.ident.to_string()).collect();
        self.type_of(&path).is_some_and(|ty| ty.is_tuple_struct())
    }
}

impl<'a, 'ast> Visit<'ast> for LiteralWalker<'a> {
    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        if is_cfg_test(&node.attrs) {
            return;
        }
        let Some(current) = self.modules.last() else {
            return;
        };
        let child = current.child(&node.ident.to_string());
        self.modules.push(child);
        syn::visit::visit_item_mod(self, node);
        self.modules.pop();
    }

    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        if is_test_item(&node.attrs) {
            return;
        }
        syn::visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_fn(&mut self, node: &'ast syn::ImplItemFn) {
        if is_test_item(&node.attrs) {
            return;
        }
        syn::visit::visit_impl_item_fn(self, node);
    }

    fn visit_item_impl(&mut self, node: &'ast syn::ItemImpl) {
        if is_cfg_test(&node.attrs) {
            return;
        }
        self.self_types.push(self_type_path(&node.self_ty));
        syn::visit::visit_item_impl(self, node);
        self.self_types.pop();
    }

    fn visit_expr_struct(&mut self, node: &'ast syn::ExprStruct) {
        self.check(CompositeLit::from_struct_expr(node));
        syn::visit::visit_expr_struct(self, node);
    }

    fn visit_expr_call(&mut self, node: &'ast syn::ExprCall) {
        if let syn::Expr::Path(callee) = &*node.func {
            if self.is_constructor(callee) {
                self.check(CompositeLit::from_constructor_call(node, callee));
            }
        }
        syn::visit::visit_expr_call(self, node);
    }
}

/// `#[cfg(test)]`, or any `cfg` predicate that only holds under test, such
/// as `all(test, feature = "mock")`.
fn is_cfg_test(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Meta>()
                .is_ok_and(|predicate| requires_test(&predicate))
    })
}

fn requires_test(predicate: &syn::Meta) -> bool {
    match predicate {
        syn::Meta::Path(path) => path.is_ident("test"),
        syn::Meta::List(list) => {
            let Ok(nested) = list.parse_args_with(Punctuated::<syn::Meta, Token![,]>::parse_terminated) else {
                return false;
            };
            if list.path.is_ident("all") {
                nested.iter().any(requires_test)
            } else if list.path.is_ident("any") {
                !nested.is_empty() && nested.iter().all(requires_test)
            } else {
                // not(..) and unknown predicates
                false
            }
        }
        syn::Meta::NameValue(_) => false,
    }
}

/// `#[test]`, `#[tokio::test]` and friends, or anything under `#[cfg(test)]`
fn is_test_item(attrs: &[syn::Attribute]) -> bool {
    is_cfg_test(attrs)
        || attrs
            .iter()
            .any(|attr| attr.path().segments.last().is_some_and(|s| s.ident == "test"))
}

fn self_type_path(ty: &syn::Type) -> Option<Vec<String>> {
    match ty {
        syn::Type::Path(p) if p.qself.is_none() => {
            Some(p.path.segments.iter().map(|s| s.ident.to_string()).collect())
        }
        _ => None,
    }
}
