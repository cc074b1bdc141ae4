use crate::types::*;

/// Index a single parsed file. Inline `mod` blocks get their own entries,
/// so one file can produce several modules.
pub fn index_file(ast: &syn::File, module_path: &ModulePath) -> Vec<(ModulePath, ModuleInfo)> {
    let mut modules = Vec::new();
    index_items(&ast.items, module_path, &mut modules);
    modules
}

fn index_items(
    items: &[syn::Item],
    module_path: &ModulePath,
    modules: &mut Vec<(ModulePath, ModuleInfo)>,
) {
    let mut info = ModuleInfo::default();

    for item in items {
        index_item(item, module_path, &mut info, modules);
    }

    modules.push((module_path.clone(), info));
}

fn index_item(
    item: &syn::Item,
    module_path: &ModulePath,
    info: &mut ModuleInfo,
    modules: &mut Vec<(ModulePath, ModuleInfo)>,
) {
    match item {
        syn::Item::Struct(s) => {
            info.items.push(ItemInfo {
                name: s.ident.to_string(),
                kind: ItemKind::Struct,
                module: module_path.clone(),
                fields: collect_fields(&s.fields),
                is_tuple: matches!(s.fields, syn::Fields::Unnamed(_)),
                variants: Vec::new(),
                alias_of: None,
            });
        }

        syn::Item::Union(u) => {
            info.items.push(ItemInfo {
                name: u.ident.to_string(),
                kind: ItemKind::Union,
                module: module_path.clone(),
                fields: collect_named(&u.fields),
                is_tuple: false,
                variants: Vec::new(),
                alias_of: None,
            });
        }

        syn::Item::Enum(e) => {
            let variants = e
                .variants
                .iter()
                .map(|v| VariantInfo {
                    name: v.ident.to_string(),
                })
                .collect();

            info.items.push(ItemInfo {
                name: e.ident.to_string(),
                kind: ItemKind::Enum,
                module: module_path.clone(),
                fields: Vec::new(),
                is_tuple: false,
                variants,
                alias_of: None,
            });
        }

        syn::Item::Type(t) => {
            info.items.push(ItemInfo {
                name: t.ident.to_string(),
                kind: ItemKind::TypeAlias,
                module: module_path.clone(),
                fields: Vec::new(),
                is_tuple: false,
                variants: Vec::new(),
                alias_of: Some(TypeRef::from_syn(&t.ty)),
            });
        }

        syn::Item::Mod(m) => {
            // Out-of-line modules are indexed from their own files
            if let Some((_, items)) = &m.content {
                let child_path = module_path.child(&m.ident.to_string());
                index_items(items, &child_path, modules);
            }
        }

        syn::Item::Use(u) => {
            collect_use_tree(&u.tree, &mut Vec::new(), info);
        }

        _ => {}
    }
}

fn collect_fields(fields: &syn::Fields) -> Vec<FieldInfo> {
    match fields {
        syn::Fields::Named(named) => collect_named(named),
        syn::Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(index, f)| FieldInfo {
                name: index.to_string(),
                vis: Vis::from_syn(&f.vis),
                ty: TypeRef::from_syn(&f.ty),
            })
            .collect(),
        syn::Fields::Unit => Vec::new(),
    }
}

fn collect_named(named: &syn::FieldsNamed) -> Vec<FieldInfo> {
    named
        .named
        .iter()
        .filter_map(|f| {
            f.ident.as_ref().map(|name| FieldInfo {
                name: name.to_string(),
                vis: Vis::from_syn(&f.vis),
                ty: TypeRef::from_syn(&f.ty),
            })
        })
        .collect()
}

/// Recursively collect use statements from a use tree.
fn collect_use_tree(tree: &syn::UseTree, prefix: &mut Vec<String>, info: &mut ModuleInfo) {
    match tree {
        syn::UseTree::Path(p) => {
            prefix.push(p.ident.to_string());
            collect_use_tree(&p.tree, prefix, info);
            prefix.pop();
        }
        syn::UseTree::Name(n) => {
            // `use foo::{self}` imports `foo` itself
            if n.ident == "self" {
                if let Some(last) = prefix.last() {
                    info.uses.push(UseInfo {
                        path: prefix.clone(),
                        alias: last.clone(),
                        is_glob: false,
                    });
                }
                return;
            }
            let mut path = prefix.clone();
            path.push(n.ident.to_string());
            info.uses.push(UseInfo {
                path,
                alias: n.ident.to_string(),
                is_glob: false,
            });
        }
        syn::UseTree::Rename(r) => {
            let mut path = prefix.clone();
            if r.ident != "self" {
                path.push(r.ident.to_string());
            }
            info.uses.push(UseInfo {
                path,
                alias: r.rename.to_string(),
                is_glob: false,
            });
        }
        syn::UseTree::Glob(_) => {
            info.uses.push(UseInfo {
                path: prefix.clone(),
                alias: String::new(),
                is_glob: true,
            });
        }
        syn::UseTree::Group(g) => {
            for tree in &g.items {
                collect_use_tree(tree, prefix, info);
            }
        }
    }
}
