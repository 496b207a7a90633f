//! Language session: current language, persistence and the render pass.
//!
//! The session owns the page, the loaded dictionary and the current language.
//! The only mutators are [`LanguageSession::start`] and the switch sequence
//! ([`LanguageSession::begin_switch`] then [`LanguageSession::commit`], or both
//! through [`LanguageSession::switch_to`]).
//!
//! Switches are sequenced by a generation counter. Every `begin_switch` stamps
//! a new ticket; a result committed with an older ticket is discarded, so a
//! slow response from a superseded switch can never overwrite a newer one.

pub mod persist;

use ego_tree::NodeId;
use futures::future::join_all;

use crate::accordion;
use crate::binder;
use crate::chrome::{self, media, menu};
use crate::config::SiteConfig;
use crate::content::Dictionary;
use crate::content::loader::{DictionarySource, LoadError};
use crate::language::Language;
use crate::page::{Effect, Page};
use crate::render::{self, RenderContext};

pub use persist::{FileLanguageStore, LanguageStore, MemoryLanguageStore};

/// Alert shown when a dictionary cannot be loaded.
pub const FATAL_ALERT: &str = "שגיאה בטעינת האתר. פתח את ה Console לפרטים.";

/// Proof of a started switch; commit the load result with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchTicket {
    language: Language,
    generation: u64,
}

impl SwitchTicket {
    /// Target language of the switch.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }
}

/// Result of committing a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The page now shows the requested language.
    Applied,
    /// A newer switch started meanwhile; the result was discarded.
    Stale,
}

/// Session over one page.
pub struct LanguageSession<L, S> {
    page: Page,
    config: SiteConfig,
    source: L,
    store: S,
    current: Language,
    dictionary: Option<Dictionary>,
    generation: u64,
}

impl<L: DictionarySource, S: LanguageStore> LanguageSession<L, S> {
    /// What: Create a session and wire the page chrome.
    ///
    /// Inputs:
    /// - `page`: Parsed skeleton
    /// - `config`: Site configuration
    /// - `source`: Dictionary provider
    /// - `store`: Persisted-language slot
    ///
    /// Details:
    /// - Chrome handlers are registered here, exactly once per session.
    /// - Nothing is rendered until [`Self::start`].
    pub fn new(mut page: Page, config: SiteConfig, source: L, store: S) -> Self {
        chrome::wire(&mut page, &config);
        let current = page.current_language();
        Self {
            page,
            config,
            source,
            store,
            current,
            dictionary: None,
            generation: 0,
        }
    }

    /// What: Language chosen at startup before any validation.
    ///
    /// Output:
    /// - Persisted code if supported, else the configured default, else [`Language::FALLBACK`].
    #[must_use]
    pub fn initial_language(&self) -> Language {
        self.store
            .load()
            .as_deref()
            .and_then(Language::from_code)
            .or_else(|| self.config.default_language())
            .unwrap_or(Language::FALLBACK)
    }

    /// What: Render the initial language.
    ///
    /// Output:
    /// - The language rendered.
    ///
    /// # Errors
    /// - Returns [`LoadError`] when the initial dictionary cannot be loaded; the
    ///   page is left untouched and callers should surface [`FATAL_ALERT`].
    ///
    /// Details:
    /// - With `preloadLanguages`, every dictionary is fetched up front; when the
    ///   initial language has none, the session falls back to
    ///   [`Language::FALLBACK`] and persists that correction.
    pub async fn start(&mut self) -> Result<Language, LoadError> {
        let mut language = self.initial_language();
        tracing::info!(lang = language.code(), "[Session] Starting");

        let dictionary = if self.config.preload_languages {
            let loads = join_all(Language::ALL.iter().map(|l| self.source.load(*l))).await;
            let mut loaded: Vec<(Language, Result<Dictionary, LoadError>)> =
                Language::ALL.iter().copied().zip(loads).collect();
            for (l, result) in &loaded {
                if let Err(e) = result {
                    tracing::warn!(lang = l.code(), error = %e, "[Session] Preload failed");
                }
            }
            let has = |l: Language, loaded: &[(Language, Result<Dictionary, LoadError>)]| {
                loaded.iter().any(|(k, r)| *k == l && r.is_ok())
            };
            if !has(language, &loaded) && language != Language::FALLBACK {
                tracing::warn!(
                    lang = language.code(),
                    fallback = Language::FALLBACK.code(),
                    "[Session] No dictionary for initial language, falling back"
                );
                language = Language::FALLBACK;
                self.store.save(language.code());
            }
            let index = loaded.iter().position(|(k, _)| *k == language);
            match index.map(|i| loaded.swap_remove(i).1) {
                Some(result) => result,
                None => self.source.load(language).await,
            }
        } else {
            self.source.load(language).await
        };

        match dictionary {
            Ok(dictionary) => {
                self.generation += 1;
                self.apply(language, dictionary);
                Ok(language)
            }
            Err(e) => {
                tracing::error!(lang = language.code(), error = %e, "[Session] Initial load failed");
                Err(e)
            }
        }
    }

    /// What: Start a switch: persist the code and stamp a ticket.
    ///
    /// Details:
    /// - Any ticket issued earlier becomes stale.
    pub fn begin_switch(&mut self, language: Language) -> SwitchTicket {
        self.store.save(language.code());
        self.stamp(language)
    }

    /// Issue the next ticket without touching the store.
    fn stamp(&mut self, language: Language) -> SwitchTicket {
        self.generation += 1;
        tracing::debug!(lang = language.code(), generation = self.generation, "[Session] Switch started");
        SwitchTicket {
            language,
            generation: self.generation,
        }
    }

    /// What: Finish a switch with its load result.
    ///
    /// Output:
    /// - [`SwitchOutcome::Applied`] after a full render pass,
    ///   [`SwitchOutcome::Stale`] when a newer switch exists (result dropped,
    ///   errors included).
    ///
    /// # Errors
    /// - Returns the [`LoadError`] of a current ticket; the page is unchanged.
    pub fn commit(
        &mut self,
        ticket: SwitchTicket,
        result: Result<Dictionary, LoadError>,
    ) -> Result<SwitchOutcome, LoadError> {
        if ticket.generation != self.generation {
            tracing::debug!(
                lang = ticket.language.code(),
                ticket = ticket.generation,
                latest = self.generation,
                "[Session] Discarding stale switch result"
            );
            return Ok(SwitchOutcome::Stale);
        }
        match result {
            Ok(dictionary) => {
                self.apply(ticket.language, dictionary);
                Ok(SwitchOutcome::Applied)
            }
            Err(e) => {
                tracing::error!(lang = ticket.language.code(), error = %e, "[Session] Switch failed");
                Err(e)
            }
        }
    }

    /// What: Switch to `language`: persist, load, then render.
    ///
    /// # Errors
    /// - Returns [`LoadError`] when the dictionary cannot be loaded; the
    ///   previous rendering stays in place.
    pub async fn switch_to(&mut self, language: Language) -> Result<SwitchOutcome, LoadError> {
        let ticket = self.begin_switch(language);
        let result = self.source.load(language).await;
        self.commit(ticket, result)
    }

    /// What: Render `language` without remembering it as the user's choice.
    ///
    /// Details:
    /// - Sequenced like [`Self::switch_to`]; used for batch output of every
    ///   language, which must not overwrite the persisted selection.
    ///
    /// # Errors
    /// - Returns [`LoadError`] when the dictionary cannot be loaded.
    pub async fn render_unpersisted(&mut self, language: Language) -> Result<SwitchOutcome, LoadError> {
        let ticket = self.stamp(language);
        let result = self.source.load(language).await;
        self.commit(ticket, result)
    }

    /// What: Click `node` and perform any requested language switch.
    ///
    /// Output:
    /// - The page's effects, followed by [`FATAL_ALERT`] when a requested switch failed.
    pub async fn click(&mut self, node: NodeId) -> Vec<Effect> {
        let mut effects = self.page.click(node);
        let switches: Vec<Language> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::SwitchLanguage(l) => Some(*l),
                _ => None,
            })
            .collect();
        for language in switches {
            if self.switch_to(language).await.is_err() {
                effects.push(Effect::Alert(FATAL_ALERT.to_owned()));
            }
        }
        effects
    }

    /// What: Click the element with `id`; nothing happens when it is absent.
    pub async fn click_id(&mut self, id: &str) -> Vec<Effect> {
        match self.page.dom().by_id(id) {
            Some(node) => self.click(node).await,
            None => Vec::new(),
        }
    }

    /// Full render pass for an already loaded dictionary.
    fn apply(&mut self, language: Language, dictionary: Dictionary) {
        let ctx = RenderContext {
            config: &self.config,
            language,
        };
        let bound = binder::apply(self.page.dom_mut(), &dictionary, language, &self.config.site_title);
        render::render_all(self.page.dom_mut(), &dictionary, &ctx);
        let widgets = accordion::bind(&mut self.page);
        menu::bind_links(&mut self.page);
        let images = media::populate_images(self.page.dom_mut(), &self.config);
        menu::close(self.page.dom_mut());
        self.page.prune_detached();
        self.current = language;
        self.dictionary = Some(dictionary);
        tracing::info!(
            lang = language.code(),
            bound,
            widgets,
            images,
            "[Session] Rendered page"
        );
    }

    /// The page.
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// The page, mutably (checkbox state, scrolling).
    pub const fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Language of the last applied render.
    #[must_use]
    pub const fn current(&self) -> Language {
        self.current
    }

    /// Dictionary of the last applied render.
    #[must_use]
    pub const fn dictionary(&self) -> Option<&Dictionary> {
        self.dictionary.as_ref()
    }

    /// Site configuration.
    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Persisted-language store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Dictionary source, mutably.
    pub const fn source_mut(&mut self) -> &mut L {
        &mut self.source
    }

    /// Serialize the page.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.page.to_html()
    }
}
