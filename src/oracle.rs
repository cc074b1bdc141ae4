//! Read-only type information for struct literals.

use crate::resolve::Resolved;
use crate::types::{ItemKind, ModulePath, SymbolTable};

/// One field of a struct, as the rules see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub exported: bool,
    /// Canonical path of the declared type, e.g. `std::time::Duration`
    pub type_identity: String,
}

/// What a literal's type is underneath its name and aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Underlying {
    Struct {
        fields: Vec<FieldDescriptor>,
        is_tuple: bool,
    },
    Enum,
    /// A variant of an enum, e.g. `Shape::Circle { .. }`
    Variant,
    Union,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Declaring path, e.g. `crate::net::Client`
    pub path: String,
    pub underlying: Underlying,
}

impl TypeDescriptor {
    pub fn is_tuple_struct(&self) -> bool {
        matches!(self.underlying, Underlying::Struct { is_tuple: true, .. })
    }
}

/// Where a path is being looked up from.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub module: &'a ModulePath,
    /// Self type path of the enclosing `impl`, if any
    pub self_ty: Option<&'a [String]>,
}

/// Maps a type path written in source to its descriptor.
pub trait TypeOracle {
    fn type_of(&self, scope: Scope<'_>, path: &[String]) -> Option<TypeDescriptor>;
}

impl TypeOracle for SymbolTable {
    fn type_of(&self, scope: Scope<'_>, path: &[String]) -> Option<TypeDescriptor> {
        let expanded;
        let path = match (path.split_first(), scope.self_ty) {
            (Some((first, rest)), Some(self_ty)) if first == "Self" => {
                expanded = self_ty.iter().chain(rest).cloned().collect::<Vec<_>>();
                expanded.as_slice()
            }
            _ => path,
        };

        match self.resolve_type_path(scope.module, path)? {
            Resolved::Variant(item) => Some(TypeDescriptor {
                path: format!("{}::{}", item.module.display(), item.name),
                underlying: Underlying::Variant,
            }),
            Resolved::Item(item) => {
                let underlying = match item.kind {
                    ItemKind::Struct => Underlying::Struct {
                        fields: item
                            .fields
                            .iter()
                            .map(|f| FieldDescriptor {
                                name: f.name.clone(),
                                exported: f.vis.is_exported(),
                                type_identity: self.type_identity(&item.module, &f.ty),
                            })
                            .collect(),
                        is_tuple: item.is_tuple,
                    },
                    ItemKind::Enum => Underlying::Enum,
                    ItemKind::Union => Underlying::Union,
                    // Aliases are followed during resolution
                    ItemKind::TypeAlias => return None,
                };
                Some(TypeDescriptor {
                    path: format!("{}::{}", item.module.display(), item.name),
                    underlying,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer;

    fn module(path: &str) -> ModulePath {
        ModulePath(path.split("::").map(String::from).collect())
    }

    fn table(files: &[(&str, &str)]) -> SymbolTable {
        let mut symbols = SymbolTable::new();
        for (module_name, src) in files {
            let module_path = module(module_name);
            let ast = syn::parse_file(src).unwrap();
            for (path, info) in indexer::index_file(&ast, &module_path) {
                symbols.modules.insert(path, info);
            }
        }
        symbols
    }

    fn lookup(symbols: &SymbolTable, scope: &str, path: &str) -> Option<TypeDescriptor> {
        let scope = module(scope);
        let path: Vec<String> = path.split("::").map(String::from).collect();
        symbols.type_of(
            Scope {
                module: &scope,
                self_ty: None,
            },
            &path,
        )
    }

    fn fields(descriptor: &TypeDescriptor) -> Vec<(&str, bool, &str)> {
        match &descriptor.underlying {
            Underlying::Struct { fields, .. } => fields
                .iter()
                .map(|f| (f.name.as_str(), f.exported, f.type_identity.as_str()))
                .collect(),
            other => panic!("expected a struct, got {other:?}"),
        }
    }

    #[test]
    fn imported_duration_resolves_to_std() {
        let symbols = table(&[(
            "crate",
            "use std::time::Duration; pub struct Client { pub timeout: Duration, cache: Vec<u8> }",
        )]);
        let client = lookup(&symbols, "crate", "Client").unwrap();
        assert_eq!(client.path, "crate::Client");
        assert_eq!(
            fields(&client),
            [
                ("timeout", true, "std::time::Duration"),
                ("cache", false, "Vec < u8 >"),
            ]
        );
    }

    #[test]
    fn duration_spellings_share_one_identity() {
        let symbols = table(&[(
            "crate",
            "use std::time; use core::time::Duration as Span; type Dur = std::time::Duration;
             struct Opts { a: time::Duration, b: Span, c: Dur, d: ::std::time::Duration }",
        )]);
        let opts = lookup(&symbols, "crate", "Opts").unwrap();
        for (name, _, identity) in fields(&opts) {
            assert_eq!(identity, "std::time::Duration", "field {name}");
        }
    }

    #[test]
    fn local_duration_type_is_not_std() {
        let symbols = table(&[(
            "crate",
            "pub struct Duration(u64); pub struct Opts { pub timeout: Duration }",
        )]);
        let opts = lookup(&symbols, "crate", "Opts").unwrap();
        assert_eq!(fields(&opts), [("timeout", true, "crate::Duration")]);
    }

    #[test]
    fn paths_resolve_across_modules() {
        let symbols = table(&[
            ("crate::net", "pub struct Client { pub timeout: u8 }"),
            ("crate::app", "use crate::net::Client as Http; use super::net;"),
        ]);
        for path in ["Http", "net::Client", "crate::net::Client", "super::net::Client"] {
            let found = lookup(&symbols, "crate::app", path);
            assert_eq!(
                found.map(|d| d.path),
                Some("crate::net::Client".to_string()),
                "path {path}"
            );
        }
    }

    #[test]
    fn glob_imports_and_aliases_resolve() {
        let symbols = table(&[
            ("crate::net", "pub struct Client { pub timeout: u8 }"),
            ("crate", "use net::*; pub type Conn = Client;"),
        ]);
        assert!(lookup(&symbols, "crate", "Client").is_some());
        let conn = lookup(&symbols, "crate", "Conn").unwrap();
        assert_eq!(conn.path, "crate::net::Client");
    }

    #[test]
    fn many_external_globs_resolve_quickly() {
        let mut src: String = (0..8).map(|i| format!("use ext{i}::prelude::*; ")).collect();
        src.push_str("pub struct Client { pub timeout: std::time::Duration, pub retries: Retries }");
        let symbols = table(&[("crate", src.as_str()), ("crate::policy", "use super::*; pub struct Holder;")]);

        let started = std::time::Instant::now();
        let client = lookup(&symbols, "crate", "Client").unwrap();
        assert_eq!(
            fields(&client),
            [
                ("timeout", true, "std::time::Duration"),
                ("retries", true, "Retries"),
            ]
        );
        assert!(lookup(&symbols, "crate::policy", "Client").is_some());
        assert!(lookup(&symbols, "crate", "Missing").is_none());
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn enums_and_variants_are_not_structs() {
        let symbols = table(&[(
            "crate",
            "pub enum Shape { Circle { r: u8 } } pub union Bits { a: u32, b: f32 }",
        )]);
        assert_eq!(
            lookup(&symbols, "crate", "Shape::Circle").unwrap().underlying,
            Underlying::Variant
        );
        assert_eq!(lookup(&symbols, "crate", "Shape").unwrap().underlying, Underlying::Enum);
        assert_eq!(lookup(&symbols, "crate", "Bits").unwrap().underlying, Underlying::Union);
    }

    #[test]
    fn external_types_do_not_resolve() {
        let symbols = table(&[("crate", "use reqwest::Client;")]);
        assert!(lookup(&symbols, "crate", "Client").is_none());
        assert!(lookup(&symbols, "crate", "hyper::Server").is_none());
    }

    #[test]
    fn self_resolves_through_the_impl_type() {
        let symbols = table(&[("crate", "pub struct Client { pub timeout: u8 }")]);
        let module = ModulePath::root();
        let self_ty = vec!["Client".to_string()];
        let found = symbols.type_of(
            Scope {
                module: &module,
                self_ty: Some(&self_ty),
            },
            &["Self".to_string()],
        );
        assert_eq!(found.map(|d| d.path), Some("crate::Client".to_string()));
    }
}
