//! Struct literals lowered out of the syn tree.

use syn::spanned::Spanned;

/// 1-based line and column of a literal's first token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn of(span: proc_macro2::Span) -> Self {
        let start = span.start();
        Position {
            line: start.line,
            column: start.column + 1,
        }
    }
}

/// How the literal's type was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `Client { .. }`
    Simple(String),
    /// `net::Client { .. }`
    Qualified { qualifier: Vec<String>, name: String },
    /// `<T as Trait>::Assoc { .. }`
    Other,
}

impl TypeExpr {
    pub fn from_path(qself: Option<&syn::QSelf>, path: &syn::Path) -> Self {
        if qself.is_some() {
            return TypeExpr::Other;
        }
        let mut idents: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        let Some(name) = idents.pop() else {
            return TypeExpr::Other;
        };
        if idents.is_empty() && path.leading_colon.is_none() {
            TypeExpr::Simple(name)
        } else {
            TypeExpr::Qualified {
                qualifier: idents,
                name,
            }
        }
    }

    /// The name reported in diagnostics, if one can be derived.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            TypeExpr::Simple(name) => Some(name),
            TypeExpr::Qualified { name, .. } => Some(name),
            TypeExpr::Other => None,
        }
    }

    /// Path segments for lookup in the symbol table.
    pub fn segments(&self) -> Option<Vec<String>> {
        match self {
            TypeExpr::Simple(name) => Some(vec![name.clone()]),
            TypeExpr::Qualified { qualifier, name } => {
                let mut segments = qualifier.clone();
                segments.push(name.clone());
                Some(segments)
            }
            TypeExpr::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// `name: value`, shorthand `name`, or `0: value`
    Keyed(String),
    /// A constructor argument
    Positional,
}

/// A `Type { .. }` or `Type(..)` construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeLit {
    pub position: Position,
    pub type_expr: TypeExpr,
    pub elements: Vec<Element>,
}

impl CompositeLit {
    pub fn from_struct_expr(node: &syn::ExprStruct) -> Self {
        let elements = node
            .fields
            .iter()
            .map(|f| match &f.member {
                syn::Member::Named(ident) => Element::Keyed(ident.to_string()),
                syn::Member::Unnamed(index) => Element::Keyed(index.index.to_string()),
            })
            .collect();

        CompositeLit {
            position: Position::of(node.span()),
            type_expr: TypeExpr::from_path(node.qself.as_ref(), &node.path),
            elements,
        }
    }

    /// A call whose callee is a tuple struct's constructor.
    pub fn from_constructor_call(node: &syn::ExprCall, callee: &syn::ExprPath) -> Self {
        CompositeLit {
            position: Position::of(node.span()),
            type_expr: TypeExpr::from_path(callee.qself.as_ref(), &callee.path),
            elements: node.args.iter().map(|_| Element::Positional).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(src: &str) -> CompositeLit {
        let expr: syn::ExprStruct = syn::parse_str(src).unwrap();
        CompositeLit::from_struct_expr(&expr)
    }

    #[test]
    fn simple_path_keeps_its_name() {
        let lit = lower("Client { addr: a, ..Default::default() }");
        assert_eq!(lit.type_expr, TypeExpr::Simple("Client".into()));
        assert_eq!(lit.type_expr.type_name(), Some("Client"));
        assert_eq!(lit.elements, vec![Element::Keyed("addr".into())]);
    }

    #[test]
    fn qualified_path_reports_last_segment() {
        let lit = lower("crate::net::Client::<u8> { timeout }");
        assert_eq!(lit.type_expr.type_name(), Some("Client"));
        assert_eq!(
            lit.type_expr.segments(),
            Some(vec!["crate".into(), "net".into(), "Client".into()])
        );
    }

    #[test]
    fn qualified_self_has_no_name() {
        let lit = lower("<T as Build>::Output { x: 1 }");
        assert_eq!(lit.type_expr, TypeExpr::Other);
        assert_eq!(lit.type_expr.type_name(), None);
    }

    #[test]
    fn index_members_are_keys() {
        let lit = lower("Pair { 0: a, 1: b }");
        assert_eq!(
            lit.elements,
            vec![Element::Keyed("0".into()), Element::Keyed("1".into())]
        );
    }

    #[test]
    fn constructor_arguments_are_positional() {
        let call: syn::ExprCall = syn::parse_str("Pair(a, b)").unwrap();
        let syn::Expr::Path(callee) = &*call.func else {
            panic!("callee should be a path");
        };
        let lit = CompositeLit::from_constructor_call(&call, callee);
        assert_eq!(lit.elements, vec![Element::Positional, Element::Positional]);
    }
}
