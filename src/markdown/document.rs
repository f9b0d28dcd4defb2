// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Whole Markdown document assembled out of [`FeatureBlock`]s.

use std::fmt;

use chrono::NaiveDateTime;

use crate::{
    localization::{Label, Labels},
    markdown::FeatureBlock,
    model::Feature,
    style::Style,
};

/// Markdown document: a title, an optional generation time line and one
/// [`FeatureBlock`] per [`Feature`].
#[derive(Clone, Debug)]
pub struct Document<'s> {
    style: &'s Style,
    labels: Labels,
    generated_at: Option<NaiveDateTime>,
    features: Vec<FeatureBlock>,
}

impl<'s> Document<'s> {
    /// Creates an empty [`Document`] whose own labels (title, generation
    /// time) are taken from the given `labels`.
    #[must_use]
    pub const fn new(style: &'s Style, labels: Labels) -> Self {
        Self { style, labels, generated_at: None, features: Vec::new() }
    }

    /// Stamps this [`Document`] with its generation time.
    #[must_use]
    pub fn generated_at(mut self, at: NaiveDateTime) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Appends the given `feature` to this [`Document`].
    #[must_use]
    pub fn feature(mut self, feature: &Feature) -> Self {
        self.push(feature);
        self
    }

    /// Appends the given `feature` to this [`Document`] in place.
    pub fn push(&mut self, feature: &Feature) {
        self.features.push(FeatureBlock::new(feature, self.style));
    }

    /// Returns the number of features in this [`Document`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Checks whether this [`Document`] has no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.style.title(self.labels.get(Label::Title)))?;
        if let Some(at) = self.generated_at {
            writeln!(f)?;
            writeln!(f, "{}", self.labels.generated_on(at))?;
        }
        for feature in &self.features {
            writeln!(f)?;
            write!(f, "{feature}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::Scenario;

    use super::*;

    #[test]
    fn empty_document_has_only_title() {
        let style = Style::default();

        let doc = Document::new(&style, Labels::default());

        assert!(doc.is_empty());
        assert_eq!(doc.to_string(), "# Features\n");
    }

    #[test]
    fn assembles_title_timestamp_and_features() {
        let style = Style::default();
        let at = NaiveDate::from_ymd_opt(2018, 12, 24)
            .and_then(|d| d.and_hms_opt(18, 30, 0))
            .unwrap();
        let feature = Feature {
            name: "Greeting".into(),
            scenarios: vec![Scenario {
                name: "Hello".into(),
                ..Scenario::default()
            }],
            ..Feature::default()
        };

        let doc = Document::new(&style, Labels::for_language("nl"))
            .generated_at(at)
            .feature(&feature);

        assert_eq!(doc.len(), 1);
        assert_eq!(
            doc.to_string(),
            "# Functionaliteiten\n\
             \n\
             Gegenereerd op: 24 december 2018 om 18:30:00\n\
             \n\
             ## Greeting\n\
             \n\
             ### Hello\n",
        );
    }
}
