//! Text and JSON views of the displayed lists.

use std::fmt;

use serde_json::json;

use crate::error::Result;
use crate::model::{Model, Nric};
use crate::storage::adapted::{JsonAdaptedElderly, JsonAdaptedPair, JsonAdaptedVolunteer};

/// Numbered listing of the filtered volunteers and elderly, followed by
/// the pairs.
///
/// Numbers match the indices accepted by the edit and delete commands.
#[must_use]
pub fn render_lists(model: &Model) -> String {
    Lists(model).to_string()
}

struct Lists<'a>(&'a Model);

impl fmt::Display for Lists<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.0;
        let link = model.friendly_link();

        writeln!(f, "Elderly:")?;
        let elderly = model.filtered_elderly();
        if elderly.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (i, person) in elderly.iter().enumerate() {
            writeln!(f, "  {}. {person}", i + 1)?;
            let volunteers = paired_names(link.volunteers_paired_with(&person.nric), |v| {
                link.volunteer_by_nric(v).map(|p| p.name.to_string())
            });
            if !volunteers.is_empty() {
                writeln!(f, "     Paired with: {volunteers}")?;
            }
        }

        writeln!(f, "Volunteers:")?;
        let volunteers = model.filtered_volunteers();
        if volunteers.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (i, person) in volunteers.iter().enumerate() {
            writeln!(f, "  {}. {person}", i + 1)?;
        }

        writeln!(f, "Pairs:")?;
        if link.pairs().is_empty() {
            writeln!(f, "  (none)")?;
        }
        for pair in link.pairs() {
            writeln!(f, "  {pair}")?;
        }
        Ok(())
    }
}

fn paired_names<'a>(
    nrics: impl Iterator<Item = &'a Nric>,
    name_of: impl Fn(&Nric) -> Option<String>,
) -> String {
    nrics.filter_map(name_of).collect::<Vec<_>>().join(", ")
}

/// The filtered lists and all pairs as a JSON document, using the same
/// record layout as the data files.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(model: &Model) -> Result<String> {
    let volunteers: Vec<JsonAdaptedVolunteer> = model
        .filtered_volunteers()
        .into_iter()
        .map(Into::into)
        .collect();
    let elderly: Vec<JsonAdaptedElderly> = model
        .filtered_elderly()
        .into_iter()
        .map(Into::into)
        .collect();
    let pairs: Vec<JsonAdaptedPair> = model
        .friendly_link()
        .pairs()
        .iter()
        .map(Into::into)
        .collect();

    let document = json!({
        "volunteers": volunteers,
        "elderly": elderly,
        "pairs": pairs,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
