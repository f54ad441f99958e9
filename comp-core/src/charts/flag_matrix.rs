use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::model::Summary;

/// One populated cell of the compliance heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub department: String,
    pub flag: String,
    pub count: u32,
}

/// Department × flag heatmap: the distinct axes observed plus the
/// populated cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlagMatrixView {
    pub departments: Vec<String>,
    pub flags: Vec<String>,
    pub cells: Vec<MatrixCell>,
}

/// Parse a composite `"(department, flag)"` key. Quoting around the parts
/// (as a stringified tuple would carry) is tolerated. Flags contain no
/// comma, so the split anchors on the last `", "`.
fn parse_matrix_key(key: &str) -> Option<(String, String)> {
    let inner = key.strip_prefix('(')?.strip_suffix(')')?;
    let (department, flag) = inner.rsplit_once(", ")?;

    let unquote = |s: &str| s.trim().trim_matches(|c| c == '\'' || c == '"').to_string();
    let department = unquote(department);
    let flag = unquote(flag);
    if department.is_empty() || flag.is_empty() {
        return None;
    }
    Some((department, flag))
}

/// Build the compliance matrix from the summary's composite-keyed counts.
/// Malformed keys are skipped, never fatal.
pub fn flag_matrix(summary: Option<&Summary>) -> FlagMatrixView {
    let Some(summary) = summary else {
        return FlagMatrixView::default();
    };

    let mut departments = BTreeSet::new();
    let mut flags = BTreeSet::new();
    let mut cells = Vec::new();
    let mut skipped = 0usize;

    for (key, count) in &summary.flag_matrix {
        match parse_matrix_key(key) {
            Some((department, flag)) => {
                departments.insert(department.clone());
                flags.insert(flag.clone());
                cells.push(MatrixCell {
                    department,
                    flag,
                    count: *count,
                });
            }
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, "flag matrix skipped malformed composite keys");
    }

    FlagMatrixView {
        departments: departments.into_iter().collect(),
        flags: flags.into_iter().collect(),
        cells,
    }
}
