use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteOption {
    pub label: String,
    pub value: String,
}

/// One option per date, labelled like `Mon, Jan 1` and valued `2024-01-01`.
pub fn date_options(dates: &[NaiveDate]) -> Vec<AutocompleteOption> {
    dates
        .iter()
        .map(|date| AutocompleteOption {
            label: date.format("%a, %b %-d").to_string(),
            value: date.format("%Y-%m-%d").to_string(),
        })
        .collect()
}

/// The option currently selected, if `value` is among `options`.
pub fn find_option<'a>(options: &'a [AutocompleteOption], value: &str) -> Option<&'a AutocompleteOption> {
    options.iter().find(|option| option.value == value)
}
