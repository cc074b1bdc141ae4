//! keyedlit: flag struct literals that leave timeout and keep-alive fields
//! to a `..base` default.
//!
//! A literal such as `Client { addr, ..Default::default() }` quietly picks up
//! a zero `timeout`, which usually means "wait forever". The check reports
//! every such field so the value is spelled out at the call site. In strict
//! mode every exported field must be spelled out.

pub mod types;
pub mod error;
pub mod config;
pub mod rules;
pub mod literal;
pub mod discovery;
pub mod parser;
pub mod indexer;
pub mod resolve;
pub mod oracle;
pub mod keyedlit;
pub mod walker;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub use config::Config;
pub use error::{Error, Result};
pub use rules::{Mode, Rules};
pub use types::{AnalysisResult, Diagnostic, SkippedFile};

use types::*;

/// Run the keyedlit check over a crate.
///
/// - `crate_root`: path to the crate root directory (containing Cargo.toml)
/// - `changed_files`: optional list of files to report on. Every file is
///   still indexed so types declared elsewhere resolve. If None, all files
///   are checked.
pub fn analyze(crate_root: &Path, changed_files: Option<&[PathBuf]>, rules: &Rules) -> Result<AnalysisResult> {
    if !crate_root.join("Cargo.toml").is_file() {
        return Err(Error::NoManifest(crate_root.to_path_buf()));
    }

    let crate_files = discovery::discover_crate(crate_root);
    let changed_set: Option<HashSet<PathBuf>> =
        changed_files.map(|changed| changed.iter().map(|p| resolve_changed(crate_root, p)).collect());

    let mut result = AnalysisResult::default();

    // ── Pass 1: parse + index every file ──
    let mut symbol_table = SymbolTable::new();
    let mut parsed_files: Vec<(&PathBuf, &ModulePath, syn::File)> = Vec::new();

    for (file_path, module_path) in &crate_files.files {
        let source = match std::fs::read_to_string(file_path) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(file = %file_path.display(), "could not read file: {e}");
                result.skipped.push(SkippedFile {
                    file: file_path.clone(),
                    reason: format!("could not read file: {e}"),
                });
                continue;
            }
        };

        let ast = match parser::parse_file(file_path, &source) {
            Ok(ast) => ast,
            Err(skipped) => {
                tracing::warn!(file = %file_path.display(), "{}", skipped.reason);
                result.skipped.push(skipped);
                continue;
            }
        };

        for (path, info) in indexer::index_file(&ast, module_path) {
            // lib.rs and main.rs share the crate root
            let entry = symbol_table.modules.entry(path).or_default();
            entry.items.extend(info.items);
            entry.uses.extend(info.uses);
        }
        parsed_files.push((file_path, module_path, ast));
    }

    tracing::debug!(
        files = parsed_files.len(),
        modules = symbol_table.modules.len(),
        "indexed crate"
    );

    // ── Pass 2: walk the selected files ──
    for (file_path, module_path, ast) in &parsed_files {
        if changed_set.as_ref().is_some_and(|set| !set.contains(&canonical(file_path))) {
            continue;
        }
        if discovery::is_test_unit(file_path) {
            tracing::debug!(file = %file_path.display(), "skipping test unit");
            continue;
        }

        tracing::debug!(file = %file_path.display(), module = %module_path, "checking file");
        walker::check_file(ast, file_path, module_path, &symbol_table, rules, &mut |diagnostic: Diagnostic| {
            result.diagnostics.push(diagnostic)
        });
    }

    Ok(result)
}

/// Check a single source file as if it were a crate root.
pub fn check_source(file_path: &Path, source: &str, rules: &Rules) -> Result<Vec<Diagnostic>> {
    if discovery::is_test_unit(file_path) {
        return Ok(Vec::new());
    }

    let ast = parser::parse_file(file_path, source).map_err(|skipped| Error::Syntax(skipped.to_string()))?;
    let module_path = ModulePath::root();

    let mut symbol_table = SymbolTable::new();
    for (path, info) in indexer::index_file(&ast, &module_path) {
        symbol_table.modules.insert(path, info);
    }

    let mut diagnostics = Vec::new();
    walker::check_file(&ast, file_path, &module_path, &symbol_table, rules, &mut |diagnostic: Diagnostic| {
        diagnostics.push(diagnostic)
    });
    Ok(diagnostics)
}

/// Changed files may be given relative to the crate root or to the working
/// directory.
fn resolve_changed(crate_root: &Path, file: &Path) -> PathBuf {
    let in_crate = crate_root.join(file);
    if file.is_relative() && in_crate.exists() {
        canonical(&in_crate)
    } else {
        canonical(file)
    }
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
