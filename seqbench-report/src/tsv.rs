//! Tab-separated rows

use crate::report::Measurement;

/// `id<TAB>complexity<TAB>length<TAB>elapsed`, without a trailing newline.
///
/// Elapsed seconds use the shortest decimal that round-trips the value.
pub fn format_tsv_row(m: &Measurement) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        m.id, m.complexity, m.length, m.elapsed_secs
    )
}

/// Notice for a record whose search exited non-zero
pub fn format_error_line(id: &str) -> String {
    format!("error from {}", id)
}
