// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion of parsed [`gherkin`] documents into the [`model`].
//!
//! [`model`]: crate::model

use lazy_regex::regex_captures;

use crate::{
    error::TableError,
    model::{self, Example, Feature, Scenario, Step, Table},
};

/// Converts [`gherkin::Feature`]s into [`model::Feature`]s of a fixed
/// language.
///
/// Results are never attached here: they come from test runs, not from
/// `.feature` files.
#[derive(Clone, Debug)]
pub struct Mapper {
    language: String,
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new(model::DEFAULT_LANGUAGE)
    }
}

impl Mapper {
    /// Creates a new [`Mapper`] tagging features with the given `language`
    /// code.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self { language: language.into() }
    }

    /// Creates a new [`Mapper`] for the given `.feature` source text, using
    /// its `# language: xx` header comment when present.
    #[must_use]
    pub fn detect(source: &str) -> Self {
        source
            .lines()
            .map(str::trim)
            .take_while(|l| l.is_empty() || l.starts_with('#'))
            .find_map(|l| {
                regex_captures!(r"^#\s*language\s*:\s*([A-Za-z_-]+)$", l)
                    .map(|(_, code)| code)
            })
            .map_or_else(Self::default, Self::new)
    }

    /// Returns the language code this [`Mapper`] tags features with.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Converts the given parsed `feature`.
    ///
    /// Scenarios nested into rules are appended after the top-level ones.
    ///
    /// # Errors
    ///
    /// If any data table or examples table is ragged.
    pub fn map(
        &self,
        feature: &gherkin::Feature,
    ) -> Result<Feature, TableError> {
        let background = feature
            .background
            .as_ref()
            .map(|bg| {
                Ok::<_, TableError>(Scenario {
                    description: trimmed(bg.description.clone()),
                    steps: steps(&bg.steps)?,
                    ..Scenario::default()
                })
            })
            .transpose()?;

        let scenarios = feature
            .scenarios
            .iter()
            .chain(feature.rules.iter().flat_map(|r| &r.scenarios))
            .map(scenario)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!(
            feature = %feature.name,
            language = %self.language,
            scenarios = scenarios.len(),
            "mapped feature",
        );

        Ok(Feature {
            name: feature.name.clone(),
            description: trimmed(feature.description.clone()),
            language: self.language.clone(),
            tags: feature.tags.clone(),
            background,
            scenarios,
            result: None,
        })
    }
}

fn scenario(scenario: &gherkin::Scenario) -> Result<Scenario, TableError> {
    let examples = scenario
        .examples
        .iter()
        .filter_map(|ex| {
            let table = ex.table.as_ref()?;
            Some(Table::from_rows(&table.rows).map(|table| Example {
                name: trimmed(ex.name.clone()),
                description: trimmed(ex.description.clone()),
                table,
            }))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Scenario {
        name: scenario.name.clone(),
        description: trimmed(scenario.description.clone()),
        tags: scenario.tags.clone(),
        steps: steps(&scenario.steps)?,
        examples,
        result: None,
    })
}

fn steps(steps: &[gherkin::Step]) -> Result<Vec<Step>, TableError> {
    steps
        .iter()
        .map(|s| {
            Ok::<_, TableError>(Step {
                table: s
                    .table
                    .as_ref()
                    .map(|t| Table::from_rows(&t.rows))
                    .transpose()?,
                doc_string: s.docstring.clone(),
                ..Step::new(s.keyword.as_str(), s.value.as_str())
            })
        })
        .collect()
}

/// Trims optional free-form text, treating absence as empty.
fn trimmed(text: impl Into<Option<String>>) -> String {
    text.into()
        .map(|t| t.trim().to_owned())
        .unwrap_or_default()
}
