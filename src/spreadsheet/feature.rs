// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Placement of whole [`Feature`]s into worksheet cells.

use crate::{
    error::SheetError,
    localization::{Label, Labels},
    model::{Feature, Scenario},
    spreadsheet::{next_row, CellRef, Columns, ScenarioFormatter, Worksheet},
};

/// Writes a [`Feature`] name and description, then its background and every
/// scenario, chaining the row cursor through them.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeatureFormatter {
    columns: Columns,
}

impl FeatureFormatter {
    /// Creates a new [`FeatureFormatter`].
    #[must_use]
    pub const fn new(columns: Columns) -> Self {
        Self { columns }
    }

    /// Writes the given `feature` starting at `row`, returning the first row
    /// left unused.
    ///
    /// [`Labels`] are resolved from [`Feature::language`].
    ///
    /// # Errors
    ///
    /// Propagates any [`Worksheet::set_value()`] failure unchanged.
    pub fn format<W: Worksheet + ?Sized>(
        &self,
        sheet: &mut W,
        feature: &Feature,
        mut row: u32,
    ) -> Result<u32, SheetError> {
        let labels = Labels::for_language(&feature.language);
        tracing::debug!(
            feature = %feature.name,
            language = labels.language().code(),
            row,
            "writing feature to worksheet",
        );

        sheet.set_value(CellRef::new(row, self.columns.feature), &feature.name)?;
        row = next_row(row, self.columns.feature)?;

        let description = feature.description.trim();
        if !description.is_empty() {
            sheet.set_value(CellRef::new(row, self.columns.heading), description)?;
            row = next_row(row, self.columns.heading)?;
        }
        row = next_row(row, self.columns.feature)?;

        let scenarios = ScenarioFormatter::new(self.columns, labels);
        if let Some(background) = &feature.background {
            let named;
            let background = if background.name.is_empty() {
                named = Scenario {
                    name: labels.get(Label::Background).to_owned(),
                    ..background.clone()
                };
                &named
            } else {
                background
            };
            row = scenarios.format(sheet, background, row)?;
        }
        for scenario in &feature.scenarios {
            row = scenarios.format(sheet, scenario, row)?;
        }
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use crate::{model::Step, spreadsheet::Sheet};

    use super::*;

    #[test]
    fn chains_background_and_scenarios() {
        let feature = Feature {
            name: "Eten".into(),
            description: "Over eten".into(),
            language: "nl".into(),
            background: Some(Scenario {
                steps: vec![Step::new("Gegeven ", "een bord")],
                ..Scenario::default()
            }),
            scenarios: vec![
                Scenario { name: "Ontbijt".into(), ..Scenario::default() },
                Scenario { name: "Lunch".into(), ..Scenario::default() },
            ],
            ..Feature::default()
        };
        let mut sheet = Sheet::new("Eten");

        let next = FeatureFormatter::default()
            .format(&mut sheet, &feature, 1)
            .unwrap();

        assert_eq!(sheet.value("A1"), Ok(Some("Eten")));
        assert_eq!(sheet.value("B2"), Ok(Some("Over eten")));
        assert_eq!(sheet.value("B4"), Ok(Some("Achtergrond")));
        assert_eq!(sheet.value("C5"), Ok(Some("Gegeven")));
        assert_eq!(sheet.value("B7"), Ok(Some("Ontbijt")));
        assert_eq!(sheet.value("B9"), Ok(Some("Lunch")));
        assert_eq!(next, 11);
    }
}
