//! Language pack discovery.
//!
//! Scans `<extensions_root>/<extension>/lang/lang.<code>.json`. An extension named
//! `<marker><code>` (e.g. `lang_fr`) is the core pack of that language; any
//! other extension shipping a lang file contributes translations to it.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::core::{
    Catalog, LanguageInfo,
    parsers::json::{LangFile, extract_code},
};

/// Directory inside each extension that holds its lang files.
pub const LANG_DIR: &str = "lang";

/// A lang file that could not be read during discovery.
#[derive(Debug, Clone)]
pub struct DiscoveryWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct DiscoveryResult {
    pub catalog: Catalog,
    pub warnings: Vec<DiscoveryWarning>,
    /// Number of lang files that were parsed successfully.
    pub files_scanned: usize,
}

/// Whether `extension` is the core pack for `code`.
///
/// Codes compare case-insensitively and `_` matches `-`, so `lang_pt_br` is the
/// core pack of `pt-br`.
pub fn is_core_pack(extension: &str, code: &str, marker: &str) -> bool {
    extension
        .strip_prefix(marker)
        .is_some_and(|rest| normalize_code(rest) == normalize_code(code))
}

fn normalize_code(code: &str) -> String {
    code.to_lowercase().replace('_', "-")
}

/// Discover language packs under `extensions_root`, merging them into `seed`.
///
/// A missing root contributes nothing. Extensions and files are visited in
/// file-name order, so later discoveries of a language deterministically win.
pub fn discover(extensions_root: &Path, marker: &str, seed: Catalog) -> DiscoveryResult {
    let mut result = DiscoveryResult {
        catalog: seed,
        ..Default::default()
    };

    let entries = WalkDir::new(extensions_root)
        .min_depth(3)
        .max_depth(3)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file());

    for entry in entries {
        let path = entry.path();
        let Some(code) = extract_code(path) else {
            continue;
        };
        let Some(lang_dir) = path.parent() else {
            continue;
        };
        if lang_dir.file_name().and_then(|n| n.to_str()) != Some(LANG_DIR) {
            continue;
        }
        let Some(extension) = lang_dir
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
        else {
            continue;
        };

        let file = match LangFile::load(path) {
            Ok(Some(file)) => file,
            Ok(None) => continue,
            Err(e) => {
                result.warnings.push(DiscoveryWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                });
                continue;
            }
        };
        result.files_scanned += 1;

        let mut info = LanguageInfo::new(code.as_str(), file.about.name);
        if is_core_pack(extension, &code, marker) {
            info.handle = Some(extension[marker.len()..].to_string());
        } else {
            info.add_extension(extension);
        }
        debug!(
            code = %info.code,
            extension,
            core = info.handle.is_some(),
            "discovered language file"
        );
        result.catalog.merge(info);
    }

    result
}
