// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Localized fixed labels of generated documents.
//!
//! Formatters never look labels up by themselves: a resolved [`Labels`] set is
//! handed to them explicitly.

use std::str::FromStr;

use chrono::{Locale, NaiveDateTime};
use derive_more::with_trait::Display;

use crate::{error::LocalizationError, model::DEFAULT_LANGUAGE};

/// Key of a fixed label.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Label {
    /// Title of the whole document.
    Title,

    /// [`chrono`] format string of the generation time line.
    GenerationDateTime,

    /// Heading of an examples table.
    Examples,

    /// Heading of a feature background.
    Background,

    /// Caption of a tags cell.
    Tags,

    /// Header of the result column.
    Result,

    /// [`TestResult::Passed`] marker.
    ///
    /// [`TestResult::Passed`]: crate::TestResult::Passed
    Passed,

    /// [`TestResult::Failed`] marker.
    ///
    /// [`TestResult::Failed`]: crate::TestResult::Failed
    Failed,

    /// [`TestResult::Inconclusive`] marker.
    ///
    /// [`TestResult::Inconclusive`]: crate::TestResult::Inconclusive
    Inconclusive,
}

impl Label {
    /// All the existing [`Label`]s.
    pub const ALL: [Self; 9] = [
        Self::Title,
        Self::GenerationDateTime,
        Self::Examples,
        Self::Background,
        Self::Tags,
        Self::Result,
        Self::Passed,
        Self::Failed,
        Self::Inconclusive,
    ];
}

impl FromStr for Label {
    type Err = LocalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| LocalizationError::unknown_label(s))
    }
}

/// Language having its own label translations.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Language {
    /// `en`, the fallback of every other language.
    #[default]
    English,

    /// `nl`.
    Dutch,

    /// `de`.
    German,

    /// `fr`.
    French,
}

impl Language {
    /// Resolves a [`Language`] out of the given language `code`.
    ///
    /// Matching is case-insensitive, and regional codes (`nl-BE`, `fr_CA`)
    /// resolve to their primary language.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::English),
            "nl" => Some(Self::Dutch),
            "de" => Some(Self::German),
            "fr" => Some(Self::French),
            _ => None,
        }
    }

    /// Returns the primary language code of this [`Language`].
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => DEFAULT_LANGUAGE,
            Self::Dutch => "nl",
            Self::German => "de",
            Self::French => "fr",
        }
    }

    /// Returns the [`Locale`] used for month and day names in this
    /// [`Language`].
    #[must_use]
    pub const fn locale(self) -> Locale {
        match self {
            Self::English => Locale::en_US,
            Self::Dutch => Locale::nl_NL,
            Self::German => Locale::de_DE,
            Self::French => Locale::fr_FR,
        }
    }

    /// Translates the given [`Label`] into this [`Language`], if a translation
    /// exists.
    const fn translate(self, label: Label) -> Option<&'static str> {
        use Label as L;

        Some(match (self, label) {
            (Self::English, label) => english(label),

            (Self::Dutch, L::Title) => "Functionaliteiten",
            (Self::Dutch, L::GenerationDateTime) => {
                "Gegenereerd op: %d %B %Y om %-H:%M:%S"
            }
            (Self::Dutch, L::Examples) => "Voorbeelden",
            (Self::Dutch, L::Background) => "Achtergrond",
            (Self::Dutch, L::Result) => "Resultaat",
            (Self::Dutch, L::Passed) => "Geslaagd",
            (Self::Dutch, L::Failed) => "Mislukt",
            (Self::Dutch, L::Inconclusive) => "Onbeslist",

            (Self::German, L::Title) => "Funktionalitäten",
            (Self::German, L::GenerationDateTime) => {
                "Erstellt am: %d %B %Y um %-H:%M:%S"
            }
            (Self::German, L::Examples) => "Beispiele",
            (Self::German, L::Background) => "Grundlage",
            (Self::German, L::Result) => "Ergebnis",
            (Self::German, L::Passed) => "Bestanden",
            (Self::German, L::Failed) => "Fehlgeschlagen",
            (Self::German, L::Inconclusive) => "Unbestimmt",

            (Self::French, L::Title) => "Fonctionnalités",
            (Self::French, L::GenerationDateTime) => {
                "Généré le : %d %B %Y à %-H:%M:%S"
            }
            (Self::French, L::Examples) => "Exemples",
            (Self::French, L::Background) => "Contexte",
            (Self::French, L::Tags) => "Étiquettes",
            (Self::French, L::Result) => "Résultat",
            (Self::French, L::Passed) => "Réussi",
            (Self::French, L::Failed) => "Échoué",
            (Self::French, L::Inconclusive) => "Non concluant",

            // "Tags" is used as is in Dutch and German.
            (Self::Dutch | Self::German, L::Tags) => return None,
        })
    }
}

/// English labels, the total fallback table.
const fn english(label: Label) -> &'static str {
    match label {
        Label::Title => "Features",
        Label::GenerationDateTime => "Generated on: %d %B %Y at %-H:%M:%S",
        Label::Examples => "Examples",
        Label::Background => "Background",
        Label::Tags => "Tags",
        Label::Result => "Result",
        Label::Passed => "Passed",
        Label::Failed => "Failed",
        Label::Inconclusive => "Inconclusive",
    }
}

/// Label set resolved for a single [`Language`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Labels {
    language: Language,
}

impl Labels {
    /// Resolves [`Labels`] for the given language `code`, falling back to
    /// English for unsupported codes.
    #[must_use]
    pub fn for_language(code: &str) -> Self {
        let language = Language::from_code(code).unwrap_or_else(|| {
            tracing::debug!(
                code,
                fallback = DEFAULT_LANGUAGE,
                "no labels for language, falling back",
            );
            Language::English
        });
        Self { language }
    }

    /// Returns the [`Language`] these [`Labels`] are resolved for.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns the text of the given [`Label`].
    #[must_use]
    pub const fn get(&self, label: Label) -> &'static str {
        match self.language.translate(label) {
            Some(text) => text,
            None => english(label),
        }
    }

    /// Returns the text of the [`Label`] named by the given `key`.
    ///
    /// # Errors
    ///
    /// If `key` names no [`Label`].
    pub fn by_key(&self, key: &str) -> Result<&'static str, LocalizationError> {
        key.parse().map(|label| self.get(label))
    }

    /// Renders the generation time line for the given `at` moment, naming
    /// months in the [`Language`] of these [`Labels`].
    #[must_use]
    pub fn generated_on(&self, at: NaiveDateTime) -> String {
        at.and_utc()
            .format_localized(
                self.get(Label::GenerationDateTime),
                self.language.locale(),
            )
            .to_string()
    }
}
