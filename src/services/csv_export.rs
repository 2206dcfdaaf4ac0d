//! CSV serialization for survey response exports.
//!
//! Records are projected onto a fixed, ordered field list; ids and
//! timestamps are not exported. Values are quoted only when they contain
//! a comma, quote or line break, with embedded quotes doubled. Rows are
//! separated by `\n` with no trailing newline.

use std::borrow::Cow;

use crate::api::SurveyResponse;

/// Exported columns, in header order. Matches the wire names of the
/// survey fields.
pub const EXPORT_FIELDS: [&str; 12] = [
    "name",
    "email",
    "locality",
    "wasteCollectedDaily",
    "segregateWaste",
    "cleanDrains",
    "awareRRR",
    "usedPublicToilet",
    "cleanPublicToilet",
    "awareCTLocation",
    "cleanlinessNeighborhood",
    "cleanlinessCity",
];

/// Serialize responses to CSV with a header row.
///
/// One row per response in the given order; absent optional answers render
/// as empty cells.
pub fn responses_to_csv(responses: &[SurveyResponse]) -> String {
    let mut lines = Vec::with_capacity(responses.len() + 1);
    lines.push(EXPORT_FIELDS.join(","));

    for response in responses {
        let cells: Vec<String> = export_cells(response)
            .iter()
            .map(|cell| escape_cell(cell).into_owned())
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// Project a response onto the export field order.
fn export_cells(response: &SurveyResponse) -> [&str; 12] {
    fn cell(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or("")
    }

    [
        &response.name,
        &response.email,
        &response.locality,
        cell(&response.waste_collected_daily),
        cell(&response.segregate_waste),
        cell(&response.clean_drains),
        cell(&response.aware_rrr),
        cell(&response.used_public_toilet),
        cell(&response.clean_public_toilet),
        cell(&response.aware_ct_location),
        cell(&response.cleanliness_neighborhood),
        cell(&response.cleanliness_city),
    ]
}

/// Quote a cell when it contains a delimiter, quote or line break.
fn escape_cell(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
#[path = "csv_export_tests.rs"]
mod csv_export_tests;
