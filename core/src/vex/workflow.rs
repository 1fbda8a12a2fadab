use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::model::VexDocument;
use super::transform::normalize_document;
use crate::error::{VexError, VexResult};

/// File name the recursive scan looks for.
pub const VEX_FILE_NAME: &str = "vex.json";
/// Default output file name, written next to each input.
pub const OUTPUT_FILE_NAME: &str = "vex-modificado.json";

/// What the caller needs to know about one processed file.
#[derive(Debug, Clone, Copy)]
pub struct FileOutcome {
    pub all_not_affected: bool,
}

/// Run one file through the whole pipeline: read, decode, rewrite
/// timestamps, encode with 2-space indentation, write. Every error is
/// tagged with the path it occurred on.
pub fn process_file(input: &Path, output: &Path) -> VexResult<FileOutcome> {
    let data = fs::read(input).map_err(|source| VexError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let doc: VexDocument = serde_json::from_slice(&data).map_err(|source| VexError::Decode {
        path: input.to_path_buf(),
        source,
    })?;

    let outcome = normalize_document(doc).map_err(|e| VexError::Timestamp {
        path: input.to_path_buf(),
        field: e.field,
        source: e.source,
    })?;

    let encoded =
        serde_json::to_string_pretty(&outcome.document).map_err(|source| VexError::Encode {
            path: input.to_path_buf(),
            source,
        })?;

    fs::write(output, encoded).map_err(|source| VexError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(FileOutcome {
        all_not_affected: outcome.all_not_affected,
    })
}

/// Find every regular file named `vex.json` under `root`, in walk order.
/// Traversal errors never abort the scan; they are returned alongside the
/// hits so the caller can report them and move on.
pub fn discover_vex_files(root: &Path) -> (Vec<PathBuf>, Vec<walkdir::Error>) {
    let mut files = Vec::new();
    let mut errors = Vec::new();

    for entry in WalkDir::new(root) {
        match entry {
            Ok(e) => {
                if e.file_type().is_file() && e.file_name() == OsStr::new(VEX_FILE_NAME) {
                    files.push(e.into_path());
                }
            }
            Err(err) => errors.push(err),
        }
    }

    (files, errors)
}

/// Sibling `vex-modificado.json` in the same directory as the input.
pub fn output_path_for(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) => dir.join(OUTPUT_FILE_NAME),
        None => PathBuf::from(OUTPUT_FILE_NAME),
    }
}
