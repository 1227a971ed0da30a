use std::path::{Path, PathBuf};

pub use p7m_core::is_p7m_name;

const P7M_SUFFIX: &str = ".p7m";
const PDF_SUFFIX: &str = ".pdf";
const DOUBLE_PDF_SUFFIX: &str = ".pdf.pdf";

/// `doc.p7m` -> `doc.pdf`; `doc.pdf.p7m` -> `doc.pdf`.
///
/// Returns `None` for names without the `.p7m` suffix.
pub fn output_file_name(input_name: &str) -> Option<String> {
    if !is_p7m_name(input_name) {
        return None;
    }
    // ASCII lowercasing keeps byte offsets, so the cut lands on a boundary.
    let stem = &input_name[..input_name.len() - P7M_SUFFIX.len()];
    let mut name = format!("{stem}{PDF_SUFFIX}");
    if name.to_ascii_lowercase().ends_with(DOUBLE_PDF_SUFFIX) {
        name.truncate(name.len() - DOUBLE_PDF_SUFFIX.len());
        name.push_str(PDF_SUFFIX);
    }
    Some(name)
}

/// `<parent-of-input>/<dir_name>`.
pub fn output_dir_for(input: &Path, dir_name: &str) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(dir_name)
}

pub fn output_path_for(input: &Path, dir_name: &str) -> Option<PathBuf> {
    let name = input.file_name()?.to_str()?;
    let file_name = output_file_name(name)?;
    Some(output_dir_for(input, dir_name).join(file_name))
}
