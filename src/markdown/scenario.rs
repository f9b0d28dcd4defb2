// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Markdown rendering of a [`Scenario`].

use std::fmt;

use itertools::Itertools as _;

use crate::{
    escape,
    localization::Labels,
    markdown::TableBlock,
    model::{Example, Scenario, Step},
    style::Style,
};

/// Markdown rendering of a single [`Scenario`].
///
/// Lines go in this order: tags (if any) with a blank line, the heading, the
/// description (if any) after a blank line, then a blank line with the steps
/// (if any), and finally each [`Example`] as a blank line and its heading,
/// its description (if any) after a blank line, a blank line and its table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScenarioBlock {
    lines: Vec<String>,
}

impl ScenarioBlock {
    /// Composes the block of the given `scenario`.
    #[must_use]
    pub fn new(scenario: &Scenario, style: &Style, labels: &Labels) -> Self {
        tracing::trace!(scenario = %scenario.name, "composing Markdown block");

        let mut lines = Vec::new();

        if let Some(tags) = tag_line(&scenario.tags, style) {
            lines.push(tags);
            lines.push(String::new());
        }

        lines.push(
            style.scenario_heading(&scenario.name, scenario.reportable_result()),
        );
        push_description(&mut lines, &scenario.description);

        push_steps(&mut lines, &scenario.steps, style, labels);

        for example in &scenario.examples {
            push_example(&mut lines, example, style, labels);
        }

        Self { lines }
    }

    /// Returns the rendered lines of this [`ScenarioBlock`].
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for ScenarioBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Renders `tags` as a single line, or [`None`] if there are no `tags`.
pub(super) fn tag_line(tags: &[String], style: &Style) -> Option<String> {
    (!tags.is_empty()).then(|| tags.iter().map(|t| style.tag(t)).join(" "))
}

/// Appends a blank line followed by the trimmed lines of `description`, if it
/// is not blank.
pub(super) fn push_description(lines: &mut Vec<String>, description: &str) {
    let description = description.trim();
    if description.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.extend(
        description.lines().map(|l| escape::markdown(l.trim()).into_owned()),
    );
}

/// Appends a blank line followed by all the `steps`, if there are any.
pub(super) fn push_steps(
    lines: &mut Vec<String>,
    steps: &[Step],
    style: &Style,
    labels: &Labels,
) {
    if steps.is_empty() {
        return;
    }

    lines.push(String::new());
    for step in steps {
        lines.push(style.step(
            &escape::markdown(step.native_keyword.trim_end()),
            &escape::markdown(&step.name),
        ));

        if let Some(table) = &step.table {
            lines.extend(TableBlock::new(table, style, labels, false).into_lines());
        }
        if let Some(doc) = &step.doc_string {
            lines.push("> ```".into());
            lines.extend(doc.lines().map(|l| format!("> {l}")));
            lines.push("> ```".into());
        }
    }
}

/// Appends the given `example` heading and its table.
fn push_example(
    lines: &mut Vec<String>,
    example: &Example,
    style: &Style,
    labels: &Labels,
) {
    lines.push(String::new());
    lines.push(style.example_heading(&example.name));
    push_description(lines, &example.description);
    lines.push(String::new());
    lines.extend(
        TableBlock::new(&example.table, style, labels, false).into_lines(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_line_joins_with_space() {
        let tags = vec!["a".to_owned(), "b".to_owned()];

        assert_eq!(
            tag_line(&tags, &Style::default()).as_deref(),
            Some("*`a`* *`b`*"),
        );
        assert_eq!(tag_line(&[], &Style::default()), None);
    }

    #[test]
    fn step_arguments_follow_step_line() {
        let scenario = Scenario {
            name: "args".into(),
            steps: vec![Step {
                table: Some(crate::Table::from_rows([["k"], ["<v>"]]).unwrap()),
                doc_string: Some("line 1\nline 2".into()),
                ..Step::new("Given ", "a step")
            }],
            ..Scenario::default()
        };

        let block =
            ScenarioBlock::new(&scenario, &Style::default(), &Labels::default());

        assert_eq!(
            block.lines(),
            [
                "### args",
                "",
                "> **Given** a step",
                "> | k |",
                "> | --- |",
                r"> | \<v\> |",
                "> ```",
                "> line 1",
                "> line 2",
                "> ```",
            ],
        );
    }

    #[test]
    fn descriptions_follow_their_headings() {
        let scenario = Scenario {
            name: "Described".into(),
            description: "  Checks <limits>\n  twice ".into(),
            steps: vec![Step::new("Then ", "done")],
            examples: vec![Example {
                name: "Edges".into(),
                description: "Only the edges".into(),
                table: crate::Table::from_rows([["n"], ["0"]]).unwrap(),
            }],
            ..Scenario::default()
        };

        let block =
            ScenarioBlock::new(&scenario, &Style::default(), &Labels::default());

        assert_eq!(
            block.lines(),
            [
                "### Described",
                "",
                r"Checks \<limits\>",
                "twice",
                "",
                "> **Then** done",
                "",
                "#### Edges",
                "",
                "Only the edges",
                "",
                "> | n |",
                "> | --- |",
                "> | 0 |",
            ],
        );
    }

}
