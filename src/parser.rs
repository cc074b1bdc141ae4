use std::path::Path;

use crate::types::SkippedFile;

/// Parse a file with syn. Files with syntax errors are reported as skipped,
/// pointing at the first error.
pub fn parse_file(file_path: &Path, source: &str) -> Result<syn::File, SkippedFile> {
    syn::parse_file(source).map_err(|err| {
        let start = err.span().start();
        SkippedFile {
            file: file_path.to_path_buf(),
            reason: format!(
                "syntax error at {}:{}: {err}",
                start.line,
                start.column + 1
            ),
        }
    })
}
