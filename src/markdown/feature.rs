// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Markdown rendering of a [`Feature`].

use std::fmt;

use crate::{
    localization::{Label, Labels},
    markdown::{
        scenario::{push_description, push_steps, tag_line},
        ScenarioBlock,
    },
    model::Feature,
    style::Style,
};

/// Markdown rendering of a [`Feature`] with its background and scenarios.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeatureBlock {
    lines: Vec<String>,
}

impl FeatureBlock {
    /// Composes the block of the given `feature`.
    ///
    /// [`Labels`] are resolved from [`Feature::language`].
    #[must_use]
    pub fn new(feature: &Feature, style: &Style) -> Self {
        let labels = Labels::for_language(&feature.language);
        tracing::debug!(
            feature = %feature.name,
            language = labels.language().code(),
            scenarios = feature.scenarios.len(),
            "composing Markdown feature",
        );

        let mut lines = Vec::new();

        if let Some(tags) = tag_line(&feature.tags, style) {
            lines.push(tags);
            lines.push(String::new());
        }
        lines.push(style.feature_heading(
            &feature.name,
            feature.result.filter(|r| r.is_reportable()),
        ));

        push_description(&mut lines, &feature.description);

        if let Some(background) = &feature.background {
            let name = if background.name.is_empty() {
                labels.get(Label::Background)
            } else {
                background.name.as_str()
            };
            lines.push(String::new());
            lines.push(style.background_heading(name));
            push_description(&mut lines, &background.description);
            push_steps(&mut lines, &background.steps, style, &labels);
        }

        for scenario in &feature.scenarios {
            lines.push(String::new());
            let block = ScenarioBlock::new(scenario, style, &labels);
            lines.extend(block.lines().iter().cloned());
        }

        Self { lines }
    }

    /// Returns the rendered lines of this [`FeatureBlock`].
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for FeatureBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Scenario, Step, TestResult};

    use super::*;

    #[test]
    fn renders_description_background_and_scenarios() {
        let feature = Feature {
            name: "Eating".into(),
            description: "  In order to live\n  I eat  ".into(),
            tags: vec!["food".into()],
            background: Some(Scenario {
                steps: vec![Step::new("Given ", "a plate")],
                ..Scenario::default()
            }),
            scenarios: vec![Scenario {
                name: "Breakfast".into(),
                result: Some(TestResult::Failed),
                ..Scenario::default()
            }],
            ..Feature::default()
        };

        let block = FeatureBlock::new(&feature, &Style::default());

        assert_eq!(
            block.lines(),
            [
                "*`food`*",
                "",
                "## Eating",
                "",
                "In order to live",
                "I eat",
                "",
                "### Background",
                "",
                "> **Given** a plate",
                "",
                "### ![Failed](fail.png) Breakfast",
            ],
        );
    }

    #[test]
    fn background_heading_is_localized() {
        let feature = Feature {
            name: "Eten".into(),
            language: "nl".into(),
            background: Some(Scenario::default()),
            ..Feature::default()
        };

        let block = FeatureBlock::new(&feature, &Style::default());

        assert_eq!(block.lines(), ["## Eten", "", "### Achtergrond"]);
    }
}
