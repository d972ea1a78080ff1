//! Record Planner
//!
//! Selects which records are searched.
//!
//! Filtering options:
//! - Regex pattern matching on record identifier
//! - Limit on the number of records run
//!
//! Input order is always preserved. Read errors pass through the filter so
//! the executor can stop on them.

use regex::Regex;
use seqbench_core::{Record, Result};

/// Record selection for one run
#[derive(Debug, Clone, Default)]
pub struct RecordPlan {
    filter: Option<Regex>,
    limit: Option<usize>,
}

/// Build a plan from an optional identifier pattern and record limit
pub fn build_plan(filter: Option<&str>, limit: Option<usize>) -> anyhow::Result<RecordPlan> {
    let filter = filter
        .map(Regex::new)
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid record filter: {}", e))?;
    Ok(RecordPlan { filter, limit })
}

impl RecordPlan {
    /// Whether a record identifier is selected by the filter
    pub fn matches(&self, id: &str) -> bool {
        self.filter.as_ref().is_none_or(|re| re.is_match(id))
    }

    /// Apply filter and limit to a record stream
    pub fn select<'a, I>(&'a self, records: I) -> impl Iterator<Item = Result<Record>> + 'a
    where
        I: IntoIterator<Item = Result<Record>>,
        I::IntoIter: 'a,
    {
        records
            .into_iter()
            .filter(move |r| match r {
                Ok(record) => self.matches(&record.id),
                Err(_) => true,
            })
            .take(self.limit.unwrap_or(usize::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(ids: &[&str]) -> Vec<Result<Record>> {
        ids.iter().map(|id| Ok(Record::new(*id, "MKT"))).collect()
    }

    fn ids(plan: &RecordPlan, records: Vec<Result<Record>>) -> Vec<String> {
        plan.select(records).map(|r| r.unwrap().id).collect()
    }

    #[test]
    fn test_no_filter_keeps_order() {
        let plan = build_plan(None, None).unwrap();
        assert_eq!(ids(&plan, input(&["c", "a", "b"])), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_regex_filter() {
        let plan = build_plan(Some("^sp\\|"), None).unwrap();
        assert_eq!(
            ids(&plan, input(&["sp|P1", "tr|Q2", "sp|P3"])),
            vec!["sp|P1", "sp|P3"]
        );
    }

    #[test]
    fn test_limit_applies_after_filter() {
        let plan = build_plan(Some("^P"), Some(2)).unwrap();
        assert_eq!(
            ids(&plan, input(&["X0", "P1", "X2", "P3", "P4"])),
            vec!["P1", "P3"]
        );
    }

    #[test]
    fn test_invalid_regex() {
        assert!(build_plan(Some("("), None).is_err());
    }

    #[test]
    fn test_errors_pass_through() {
        let plan = build_plan(Some("^never$"), None).unwrap();
        let records = vec![Err(seqbench_core::CoreError::InvalidFasta {
            line: 1,
            msg: "bad".to_string(),
        })];
        assert_eq!(plan.select(records).count(), 1);
    }
}
