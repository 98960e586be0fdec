//! Per-card request options with shared defaults.

use std::collections::BTreeMap;

use prank_core::{ConfigError, PrankConfig, RequestOptions};

/// Options for one scoring run.
///
/// `shared` applies to every card; a card's own entry is overlaid on top of
/// it key by key.
#[derive(Debug, Clone, Default)]
pub struct CardOptions {
    shared: RequestOptions,
    per_card: BTreeMap<String, RequestOptions>,
}

impl CardOptions {
    pub fn new(shared: RequestOptions) -> Self {
        Self {
            shared,
            per_card: BTreeMap::new(),
        }
    }

    /// Set the options of `card_name`, replacing any previous entry.
    pub fn with(mut self, card_name: impl Into<String>, options: RequestOptions) -> Self {
        self.per_card.insert(card_name.into(), options);
        self
    }

    /// Per-card options from the `[cards.<name>]` tables of `config`.
    pub fn from_config(config: &PrankConfig) -> Result<Self, ConfigError> {
        let mut options = Self::default();
        for name in config.cards.keys() {
            options = options.with(name.clone(), config.card_options(name)?);
        }
        Ok(options)
    }

    pub fn shared(&self) -> &RequestOptions {
        &self.shared
    }

    /// Effective options for `card_name`.
    pub fn for_card(&self, card_name: &str) -> RequestOptions {
        match self.per_card.get(card_name) {
            Some(own) => self.shared.overlay(own),
            None => self.shared.clone(),
        }
    }

    pub fn card_names(&self) -> impl Iterator<Item = &str> {
        self.per_card.keys().map(String::as_str)
    }
}
