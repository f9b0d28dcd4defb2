// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Templates shaping Markdown output.
//!
//! Templates use positional `{0}` and `{1}` slots. Every template kind needs
//! an exact set of slots, checked once by [`StyleConfig::validate()`], so
//! rendering itself can't fail.

use std::{collections::BTreeSet, fmt};

use derive_more::with_trait::Display;
use lazy_regex::regex;
#[cfg(feature = "serde")]
use serde::Deserialize;
use smart_default::SmartDefault;

use crate::{error::StyleError, layout::ResultMarkers, model::TestResult};

/// Named template of a [`Style`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum TemplateKind {
    /// Heading of the whole document.
    #[display("TitleFormat")]
    Title,

    /// Heading of a feature.
    #[display("FeatureHeadingFormat")]
    FeatureHeading,

    /// Heading of a feature background.
    #[display("BackgroundHeadingFormat")]
    BackgroundHeading,

    /// Heading of a scenario.
    #[display("ScenarioHeadingFormat")]
    ScenarioHeading,

    /// Heading of an examples block.
    #[display("ExampleHeadingFormat")]
    ExampleHeading,

    /// Single tag.
    #[display("TagFormat")]
    Tag,

    /// Step line: `{0}` is the keyword, `{1}` is the step text.
    #[display("StepFormat")]
    Step,
}

impl TemplateKind {
    /// Number of slots a template of this kind must use.
    #[must_use]
    pub const fn slots(self) -> usize {
        match self {
            Self::Step => 2,
            Self::Title
            | Self::FeatureHeading
            | Self::BackgroundHeading
            | Self::ScenarioHeading
            | Self::ExampleHeading
            | Self::Tag => 1,
        }
    }
}

/// Validated template string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Template {
    kind: TemplateKind,
    raw: String,
}

impl Template {
    /// Validates the given `raw` template string as a [`Template`] of the
    /// provided `kind`.
    ///
    /// # Errors
    ///
    /// - If `raw` references a slot beyond [`TemplateKind::slots()`].
    /// - If `raw` doesn't reference every slot [`TemplateKind::slots()`]
    ///   requires.
    pub fn new(
        kind: TemplateKind,
        raw: impl Into<String>,
    ) -> Result<Self, StyleError> {
        let raw = raw.into();
        let expected = kind.slots();

        let mut used = BTreeSet::new();
        for cap in regex!(r"\{(\d+)\}").captures_iter(&raw) {
            let index = cap[1].parse::<usize>().unwrap_or(usize::MAX);
            if index >= expected {
                return Err(StyleError::UnknownSlot { template: kind, index });
            }
            _ = used.insert(index);
        }
        if used.len() != expected {
            return Err(StyleError::SlotMismatch {
                template: kind,
                expected,
                found: used.len(),
            });
        }

        Ok(Self { kind, raw })
    }

    /// Returns the [`TemplateKind`] of this [`Template`].
    #[must_use]
    pub const fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Substitutes `args` into the slots of this [`Template`].
    fn render(&self, args: &[&str]) -> String {
        debug_assert_eq!(args.len(), self.kind.slots(), "{}", self.kind);

        regex!(r"\{(\d+)\}")
            .replace_all(&self.raw, |cap: &lazy_regex::Captures<'_>| {
                cap[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| args.get(i).copied())
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Raw, not yet validated [`Style`] configuration.
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "PascalCase"))]
pub struct StyleConfig {
    /// [`TemplateKind::Title`] template.
    #[default(String::from("# {0}"))]
    pub title_format: String,

    /// [`TemplateKind::FeatureHeading`] template.
    #[default(String::from("## {0}"))]
    pub feature_heading_format: String,

    /// [`TemplateKind::BackgroundHeading`] template.
    #[default(String::from("### {0}"))]
    pub background_heading_format: String,

    /// [`TemplateKind::ScenarioHeading`] template.
    #[default(String::from("### {0}"))]
    pub scenario_heading_format: String,

    /// [`TemplateKind::ExampleHeading`] template.
    #[default(String::from("#### {0}"))]
    pub example_heading_format: String,

    /// [`TemplateKind::Tag`] template.
    #[default(String::from("*`{0}`*"))]
    pub tag_format: String,

    /// [`TemplateKind::Step`] template.
    #[default(String::from("> **{0}** {1}"))]
    pub step_format: String,

    /// Markers of row and heading results.
    #[cfg_attr(feature = "serde", serde(skip))]
    #[default(ResultMarkers::markdown())]
    pub markers: ResultMarkers,
}

impl StyleConfig {
    /// Validates this [`StyleConfig`] into a [`Style`].
    ///
    /// # Errors
    ///
    /// If any template doesn't use exactly the slots of its [`TemplateKind`].
    pub fn validate(self) -> Result<Style, StyleError> {
        Ok(Style {
            title: Template::new(TemplateKind::Title, self.title_format)?,
            feature_heading: Template::new(
                TemplateKind::FeatureHeading,
                self.feature_heading_format,
            )?,
            background_heading: Template::new(
                TemplateKind::BackgroundHeading,
                self.background_heading_format,
            )?,
            scenario_heading: Template::new(
                TemplateKind::ScenarioHeading,
                self.scenario_heading_format,
            )?,
            example_heading: Template::new(
                TemplateKind::ExampleHeading,
                self.example_heading_format,
            )?,
            tag: Template::new(TemplateKind::Tag, self.tag_format)?,
            step: Template::new(TemplateKind::Step, self.step_format)?,
            markers: self.markers,
        })
    }
}

/// Validated set of Markdown templates and result markers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Style {
    title: Template,
    feature_heading: Template,
    background_heading: Template,
    scenario_heading: Template,
    example_heading: Template,
    tag: Template,
    step: Template,
    markers: ResultMarkers,
}

impl Default for Style {
    fn default() -> Self {
        StyleConfig::default().validate().unwrap_or_else(|e| {
            unreachable!("default `StyleConfig` must be valid: {e}")
        })
    }
}

impl Style {
    /// Returns the [`ResultMarkers`] of this [`Style`].
    #[must_use]
    pub const fn markers(&self) -> &ResultMarkers {
        &self.markers
    }

    /// Formats the document title.
    #[must_use]
    pub fn title(&self, text: &str) -> String {
        self.title.render(&[text])
    }

    /// Formats a feature heading, prefixed with its result marker, if any.
    #[must_use]
    pub fn feature_heading(
        &self,
        name: &str,
        result: Option<TestResult>,
    ) -> String {
        self.feature_heading.render(&[&self.with_marker(name, result)])
    }

    /// Formats a background heading.
    #[must_use]
    pub fn background_heading(&self, name: &str) -> String {
        self.background_heading.render(&[name])
    }

    /// Formats a scenario heading, prefixed with its result marker, if any.
    #[must_use]
    pub fn scenario_heading(
        &self,
        name: &str,
        result: Option<TestResult>,
    ) -> String {
        self.scenario_heading.render(&[&self.with_marker(name, result)])
    }

    /// Formats an examples heading.
    #[must_use]
    pub fn example_heading(&self, name: &str) -> String {
        self.example_heading.render(&[name])
    }

    /// Formats a single tag.
    #[must_use]
    pub fn tag(&self, tag: &str) -> String {
        self.tag.render(&[tag])
    }

    /// Formats a step line out of an already escaped `keyword` and `text`.
    #[must_use]
    pub fn step(&self, keyword: &str, text: &str) -> String {
        self.step.render(&[keyword, text])
    }

    /// Prefixes `name` with the marker of `result` as `"{marker} {name}"`.
    fn with_marker(&self, name: &str, result: Option<TestResult>) -> String {
        match self.markers.marker(result) {
            Some(marker) => format!("{marker} {name}"),
            None => name.to_owned(),
        }
    }
}
