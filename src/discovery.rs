use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::types::ModulePath;

/// Discovered .rs files mapped to their module paths
#[derive(Debug)]
pub struct CrateFiles {
    /// Map from file path to module path, in path order
    pub files: BTreeMap<PathBuf, ModulePath>,
}

/// Discover all .rs files under a crate's `src/` and map them to module paths.
pub fn discover_crate(root: &Path) -> CrateFiles {
    let src_dir = root.join("src");
    let mut files = BTreeMap::new();

    for entry in WalkDir::new(&src_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path().extension().is_some_and(|ext| ext == "rs")
                && e.file_type().is_file()
        })
    {
        let path = entry.path().to_path_buf();
        if let Some(module_path) = file_to_module_path(&src_dir, &path) {
            files.insert(path, module_path);
        }
    }

    CrateFiles { files }
}

/// Convert a file path relative to src/ into a module path.
///
/// Examples:
///   src/lib.rs            -> crate
///   src/main.rs           -> crate
///   src/net.rs            -> crate::net
///   src/net/mod.rs        -> crate::net
///   src/net/client.rs     -> crate::net::client
fn file_to_module_path(src_dir: &Path, file: &Path) -> Option<ModulePath> {
    let relative = file.strip_prefix(src_dir).ok()?;
    let mut segments = vec!["crate".to_string()];

    let components: Vec<_> = relative.components().collect();

    for (i, component) in components.iter().enumerate() {
        let name = component.as_os_str().to_str()?;

        if i == components.len() - 1 {
            // Last component is the filename
            let stem = Path::new(name).file_stem()?.to_str()?;
            let is_crate_root = i == 0 && (stem == "lib" || stem == "main");
            if stem != "mod" && !is_crate_root {
                segments.push(stem.to_string());
            }
        } else {
            segments.push(name.to_string());
        }
    }

    Some(ModulePath(segments))
}

/// Whether a file holds test-only code by naming convention:
/// `tests.rs`, or a stem ending in `_test` or `_tests`.
pub fn is_test_unit(file: &Path) -> bool {
    file.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem == "tests" || stem.ends_with("_test") || stem.ends_with("_tests"))
}
