use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

/// A module path like `crate::net::client`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModulePath(pub Vec<String>);

impl ModulePath {
    pub fn root() -> Self {
        ModulePath(vec!["crate".to_string()])
    }

    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        ModulePath(segments)
    }

    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            return None;
        }
        let mut segments = self.0.clone();
        segments.pop();
        Some(ModulePath(segments))
    }

    pub fn display(&self) -> String {
        self.0.join("::")
    }
}

impl std::fmt::Display for ModulePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Visibility of a field as seen from other crates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vis {
    /// Plain `pub`
    Public,
    /// Private, `pub(crate)`, `pub(super)` or `pub(in ..)`
    Restricted,
}

impl Vis {
    pub fn from_syn(vis: &syn::Visibility) -> Self {
        match vis {
            syn::Visibility::Public(_) => Vis::Public,
            syn::Visibility::Restricted(_) | syn::Visibility::Inherited => Vis::Restricted,
        }
    }

    /// Visible outside the declaring crate.
    pub fn is_exported(&self) -> bool {
        *self == Vis::Public
    }
}

/// Kind of item in the symbol table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Struct,
    Enum,
    Union,
    TypeAlias,
}

/// A type as written in the source, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Token text of the whole type.
    pub text: String,
    /// Path segment idents, for plain paths without a qualified self.
    pub path: Option<Vec<String>>,
    /// Whether any path segment carries generic arguments.
    pub generic: bool,
}

impl TypeRef {
    pub fn from_syn(ty: &syn::Type) -> Self {
        use quote::ToTokens;

        let text = ty.to_token_stream().to_string();
        match ty {
            syn::Type::Path(p) if p.qself.is_none() => TypeRef {
                text,
                path: Some(p.path.segments.iter().map(|s| s.ident.to_string()).collect()),
                generic: p
                    .path
                    .segments
                    .iter()
                    .any(|s| !matches!(s.arguments, syn::PathArguments::None)),
            },
            syn::Type::Paren(p) => TypeRef::from_syn(&p.elem),
            syn::Type::Group(g) => TypeRef::from_syn(&g.elem),
            _ => TypeRef {
                text,
                path: None,
                generic: false,
            },
        }
    }
}

/// A field in a struct. Tuple-struct fields are named by their index.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    pub name: String,
    pub vis: Vis,
    pub ty: TypeRef,
}

/// An enum variant
#[derive(Debug, Clone)]
pub struct VariantInfo {
    pub name: String,
}

/// An item in the symbol table
#[derive(Debug, Clone)]
pub struct ItemInfo {
    pub name: String,
    pub kind: ItemKind,
    pub module: ModulePath,
    /// Fields for structs and unions, in declaration order
    pub fields: Vec<FieldInfo>,
    /// Whether a struct was declared with tuple fields
    pub is_tuple: bool,
    /// Variants for enums
    pub variants: Vec<VariantInfo>,
    /// Target for type aliases
    pub alias_of: Option<TypeRef>,
}

/// A use statement
#[derive(Debug, Clone)]
pub struct UseInfo {
    /// The full path being imported (e.g., `std::time::Duration`)
    pub path: Vec<String>,
    /// The name it's imported as (could be renamed via `as`)
    pub alias: String,
    /// Whether this is a glob import (`use foo::*`)
    pub is_glob: bool,
}

/// All indexed information for a single module
#[derive(Debug, Clone, Default)]
pub struct ModuleInfo {
    pub items: Vec<ItemInfo>,
    pub uses: Vec<UseInfo>,
}

/// The full crate symbol table
#[derive(Debug, Default)]
pub struct SymbolTable {
    pub modules: HashMap<ModulePath, ModuleInfo>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an item in a specific module by name
    pub fn find_in_module(&self, module: &ModulePath, name: &str) -> Option<&ItemInfo> {
        self.modules
            .get(module)
            .and_then(|m| m.items.iter().find(|i| i.name == name))
    }
}

/// A literal that leaves a must-specify field to its default
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    pub message: String,
    /// The unspecified field
    pub field: String,
    /// The literal's type name as written
    pub type_name: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "warning: {msg}\n --> {file}:{line}:{col}",
            msg = self.message,
            file = self.file.display(),
            line = self.line,
            col = self.column,
        )
    }
}

/// A file the analysis could not look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub file: PathBuf,
    pub reason: String,
}

impl std::fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "skipped {}: {}", self.file.display(), self.reason)
    }
}

/// Result of running keyedlit over a crate
#[derive(Debug, Default, Serialize)]
pub struct AnalysisResult {
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,
}

impl AnalysisResult {
    pub fn has_findings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Diagnostics ordered by file, then position. Within one literal the
    /// field declaration order is kept.
    pub fn sorted(&self) -> Vec<&Diagnostic> {
        let mut diagnostics: Vec<_> = self.diagnostics.iter().collect();
        diagnostics.sort_by(|a, b| (&a.file, a.line, a.column).cmp(&(&b.file, b.line, b.column)));
        diagnostics
    }
}
