//! Path resolution against the crate symbol table.
//!
//! Only crate-local items are resolved. Anything reached through an external
//! crate comes back as `None`, which callers treat as "not ours to judge".

use crate::types::*;

/// Upper bound on `use` and alias indirections followed for one path.
const MAX_DEPTH: usize = 16;

/// Whether a path head may be looked up through glob imports.
///
/// Paths written in code see glob-imported names. Paths inside `use`
/// declarations start from `crate`, `self`, `super`, a local name or an
/// extern crate, so they are resolved without consulting globs. That keeps
/// each lookup linear in the number of glob imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Globs {
    Search,
    Skip,
}

/// A crate-local type a path resolved to.
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'a> {
    Item(&'a ItemInfo),
    /// A variant of the given enum
    Variant(&'a ItemInfo),
}

#[derive(Debug, Clone)]
enum Target<'a> {
    Module(ModulePath),
    Item(&'a ItemInfo),
    Variant(&'a ItemInfo),
}

impl SymbolTable {
    /// Resolve a type path written inside `module`, following type aliases.
    pub fn resolve_type_path(&self, module: &ModulePath, path: &[String]) -> Option<Resolved<'_>> {
        self.resolve_type_at(module, path, 0)
    }

    /// Canonical identity string of a field type declared in `module`.
    ///
    /// Crate-local types become `crate::...` paths, crate-local aliases are
    /// followed, imports are expanded, and anything that isn't a plain path
    /// keeps its token text.
    pub fn type_identity(&self, module: &ModulePath, ty: &TypeRef) -> String {
        self.type_identity_at(module, ty, 0)
    }

    fn resolve_type_at(&self, module: &ModulePath, path: &[String], depth: usize) -> Option<Resolved<'_>> {
        match self.resolve_in(module, path, Globs::Search, depth)? {
            Target::Item(item) if item.kind == ItemKind::TypeAlias => {
                let target = item.alias_of.as_ref()?.path.as_ref()?;
                self.resolve_type_at(&item.module, target, depth + 1)
            }
            Target::Item(item) => Some(Resolved::Item(item)),
            Target::Variant(item) => Some(Resolved::Variant(item)),
            Target::Module(_) => None,
        }
    }

    fn type_identity_at(&self, module: &ModulePath, ty: &TypeRef, depth: usize) -> String {
        let Some(path) = ty.path.as_ref().filter(|_| !ty.generic) else {
            return ty.text.clone();
        };
        if depth > MAX_DEPTH {
            return ty.text.clone();
        }

        match self.resolve_in(module, path, Globs::Search, depth) {
            Some(Target::Item(item)) => match (&item.kind, &item.alias_of) {
                (ItemKind::TypeAlias, Some(target)) => {
                    self.type_identity_at(&item.module, target, depth + 1)
                }
                _ => format!("{}::{}", item.module.display(), item.name),
            },
            Some(_) => ty.text.clone(),
            None => canonical_external(self.expand_import(module, path)),
        }
    }

    /// Replace the first segment with the path it was imported from.
    fn expand_import(&self, module: &ModulePath, path: &[String]) -> Vec<String> {
        let Some((first, rest)) = path.split_first() else {
            return Vec::new();
        };
        let imported = self.modules.get(module).and_then(|info| {
            info.uses
                .iter()
                .find(|u| !u.is_glob && u.alias == *first)
        });
        match imported {
            Some(use_info) => {
                let mut expanded = use_info.path.clone();
                expanded.extend(rest.iter().cloned());
                expanded
            }
            None => path.to_vec(),
        }
    }

    fn resolve_in(&self, module: &ModulePath, path: &[String], globs: Globs, depth: usize) -> Option<Target<'_>> {
        if depth > MAX_DEPTH {
            return None;
        }
        let (first, rest) = path.split_first()?;
        let mut target = self.resolve_head(module, first, globs, depth)?;
        for segment in rest {
            target = self.step(target, segment, depth)?;
        }
        Some(target)
    }

    /// Resolve the first segment of a path in the scope of `module`.
    fn resolve_head(&self, module: &ModulePath, name: &str, globs: Globs, depth: usize) -> Option<Target<'_>> {
        match name {
            "crate" => return Some(Target::Module(ModulePath::root())),
            "self" => return Some(Target::Module(module.clone())),
            "super" => return module.parent().map(Target::Module),
            _ => {}
        }

        if let Some(target) = self.lookup_name(module, name, depth) {
            return Some(target);
        }
        if globs == Globs::Skip {
            return None;
        }

        // Names brought in by `use some::module::*` or `use SomeEnum::*`
        let info = self.modules.get(module)?;
        info.uses.iter().filter(|u| u.is_glob).find_map(|u| {
            match self.resolve_in(module, &u.path, Globs::Skip, depth + 1)? {
                Target::Module(glob_module) => self
                    .find_in_module(&glob_module, name)
                    .map(Target::Item),
                target @ Target::Item(_) => self.step(target, name, depth + 1),
                Target::Variant(_) => None,
            }
        })
    }

    /// A name declared in, or imported by name into, `module`.
    fn lookup_name(&self, module: &ModulePath, name: &str, depth: usize) -> Option<Target<'_>> {
        if let Some(item) = self.find_in_module(module, name) {
            return Some(Target::Item(item));
        }

        let child = module.child(name);
        if self.modules.contains_key(&child) {
            return Some(Target::Module(child));
        }

        let info = self.modules.get(module)?;
        info.uses
            .iter()
            .filter(|u| !u.is_glob && u.alias == name)
            .find_map(|u| self.resolve_in(module, &u.path, Globs::Skip, depth + 1))
    }

    fn step<'a>(&'a self, target: Target<'a>, segment: &str, depth: usize) -> Option<Target<'a>> {
        match target {
            Target::Module(module) => {
                if segment == "super" {
                    return module.parent().map(Target::Module);
                }
                self.lookup_name(&module, segment, depth)
            }
            Target::Item(item) => match item.kind {
                ItemKind::Enum => item
                    .variants
                    .iter()
                    .any(|v| v.name == segment)
                    .then_some(Target::Variant(item)),
                ItemKind::TypeAlias => {
                    let aliased = item.alias_of.as_ref()?.path.as_ref()?;
                    let resolved = self.resolve_in(&item.module, aliased, Globs::Search, depth + 1)?;
                    self.step(resolved, segment, depth + 1)
                }
                _ => None,
            },
            Target::Variant(_) => None,
        }
    }
}

/// `core` re-exports are the same nominal types as their `std` paths.
fn canonical_external(mut path: Vec<String>) -> String {
    if path.first().is_some_and(|s| s == "core") && path.get(1).is_some_and(|s| s == "time") {
        path[0] = "std".to_string();
    }
    path.join("::")
}
