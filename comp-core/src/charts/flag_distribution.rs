use serde::Serialize;

use crate::model::Summary;

/// Occurrence count for one diagnostic flag tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagCount {
    pub flag: String,
    pub count: u32,
}

/// One entry per distinct flag tag in the summary, in the summary map's
/// (stable) order.
pub fn flag_distribution(summary: Option<&Summary>) -> Vec<FlagCount> {
    let Some(summary) = summary else {
        return Vec::new();
    };

    summary
        .flag_distribution
        .iter()
        .map(|(flag, count)| FlagCount {
            flag: flag.clone(),
            count: *count,
        })
        .collect()
}
