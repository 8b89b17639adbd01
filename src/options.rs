//! Option Set Computation
//!
//! Pure functions that build the dependent field's option list for each
//! refresh branch. Every list starts with exactly one empty option.

use crate::models::{ProgramRecord, SelectOption};

/// Copy of the dependent field's options as they were at startup.
///
/// Captured once and never mutated; it is the source for the
/// "no university selected" branch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Baseline {
    options: Vec<SelectOption>,
}

impl Baseline {
    /// Capture in document order, dropping any `selected` flags
    pub fn capture(options: Vec<SelectOption>) -> Self {
        let options = options
            .into_iter()
            .map(|option| option.with_selected(false))
            .collect();
        Self { options }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }
}

/// Options shown while a request is in flight or after it failed
pub fn placeholder_only(empty_label: &str) -> Vec<SelectOption> {
    vec![SelectOption::empty(empty_label)]
}

/// Options for an empty parent: every non-empty baseline entry in order.
///
/// The previous dependent value is not restored on this branch.
pub fn from_baseline(baseline: &Baseline, empty_label: &str) -> Vec<SelectOption> {
    let mut options = placeholder_only(empty_label);
    options.extend(
        baseline
            .options()
            .iter()
            .filter(|option| !option.is_empty())
            .cloned(),
    );
    options
}

/// Options for a server-filtered list, re-selecting `prior` if a record still carries it.
///
/// Every record becomes one option, in response order. Only the first
/// matching record is marked selected; a record with an empty id is never
/// selected.
pub fn from_records(records: &[ProgramRecord], prior: &str, empty_label: &str) -> Vec<SelectOption> {
    let mut options = placeholder_only(empty_label);
    let mut restored = false;
    for record in records {
        let value = record.value();
        if value.is_empty() {
            log::warn!("Program '{}' has an empty id", record.name);
        }
        let selected = !restored && !prior.is_empty() && value == prior;
        restored |= selected;
        options.push(SelectOption::new(value, record.name.clone()).with_selected(selected));
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn record(id: i64, name: &str) -> ProgramRecord {
        ProgramRecord {
            id: RecordId::Number(id.into()),
            name: name.to_string(),
        }
    }

    fn baseline() -> Baseline {
        Baseline::capture(vec![
            SelectOption::empty("---"),
            SelectOption::new("1", "Law"),
            SelectOption::new("2", "Medicine").with_selected(true),
        ])
    }

    #[test]
    fn test_capture_clears_selection() {
        let baseline = baseline();
        assert_eq!(baseline.len(), 3);
        assert!(baseline.options().iter().all(|o| !o.selected));
    }

    #[test]
    fn test_from_baseline_keeps_order_and_single_empty_head() {
        let options = from_baseline(&baseline(), "---------");
        let pairs: Vec<(&str, &str)> = options
            .iter()
            .map(|o| (o.value.as_str(), o.label.as_str()))
            .collect();
        assert_eq!(pairs, vec![("", "---------"), ("1", "Law"), ("2", "Medicine")]);
    }

    #[test]
    fn test_from_baseline_skips_every_empty_entry() {
        let baseline = Baseline::capture(vec![
            SelectOption::new("7", "Nursing"),
            SelectOption::empty("(none)"),
        ]);
        let options = from_baseline(&baseline, "---------");
        assert_eq!(options.len(), 2);
        assert_eq!(options.iter().filter(|o| o.is_empty()).count(), 1);
        assert!(options[0].is_empty());
    }

    #[test]
    fn test_from_records_preserves_response_order() {
        let records = vec![record(3, "MBA"), record(1, "BSc CS"), record(2, "LLB")];
        let options = from_records(&records, "", "---");
        assert_eq!(options.len(), records.len() + 1);
        for (i, rec) in records.iter().enumerate() {
            assert_eq!(options[i + 1].value, rec.value());
            assert_eq!(options[i + 1].label, rec.name);
        }
        assert!(options.iter().all(|o| !o.selected));
    }

    #[test]
    fn test_from_records_reselects_prior_stringwise() {
        let options = from_records(&[record(10, "BSc CS")], "10", "---");
        assert_eq!(
            options,
            vec![
                SelectOption::empty("---"),
                SelectOption::new("10", "BSc CS").with_selected(true),
            ]
        );
    }

    #[test]
    fn test_from_records_selects_at_most_one() {
        let records = vec![record(4, "Physics"), record(4, "Physics (evening)")];
        let options = from_records(&records, "4", "---");
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
        assert!(options[1].selected);
    }

    #[test]
    fn test_from_records_keeps_empty_ids_unselected() {
        let records = vec![
            ProgramRecord {
                id: RecordId::Number(serde_json::Number::from_f64(10.0).unwrap()),
                name: "BSc CS".to_string(),
            },
            ProgramRecord {
                id: RecordId::Text(String::new()),
                name: "Unnamed".to_string(),
            },
        ];
        let options = from_records(&records, "10", "---");
        assert_eq!(options.len(), records.len() + 1);
        assert!(options[0].is_empty());
        assert_eq!(options[1].value, "10");
        assert!(options[1].selected);
        assert_eq!(options[2].label, "Unnamed");
        assert!(!options[2].selected);
    }

    #[test]
    fn test_from_records_empty_response() {
        assert_eq!(from_records(&[], "10", "---"), placeholder_only("---"));
    }
}
