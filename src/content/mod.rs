//! Per-language content dictionary and its typed section views.
//!
//! A dictionary is one JSON document supplying every piece of visible text for a
//! language. It is kept as a raw [`serde_json::Value`] so that free-form
//! placeholder bindings can walk it by dotted path, while renderers read it
//! through the typed accessors in [`sections`].
//!
//! Every accessor is total. Missing sections, missing fields and values of the
//! wrong type all read as absent; nothing here returns an error once the
//! document has been parsed.

pub mod loader;
pub mod sections;

use serde_json::Value;

use sections::{
    About, Contact, Documents, Donate, Help, Hero, Knowledge, Meta, Nav, OrphanWeek, Rights,
    Services, Statistics, Story, Transparency, Volunteer,
};

/// Shared `null` used when a section is absent.
static NULL: Value = Value::Null;

/// A parsed content dictionary for one language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    /// What: Wrap an already-parsed JSON document.
    #[must_use]
    pub const fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// What: Parse a dictionary from JSON text.
    ///
    /// # Errors
    /// - Returns the `serde_json` error when `text` is not valid JSON.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self::from_value)
    }

    /// The raw document.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.root
    }

    /// What: Top-level section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.root.get(name)
    }

    /// Section value, or `null` when absent.
    fn section_or_null(&self, name: &str) -> &Value {
        self.section(name).unwrap_or(&NULL)
    }

    /// What: Resolve a dotted key such as `hero.title` segment by segment.
    ///
    /// Inputs:
    /// - `path`: Dot-separated key; numeric segments index into arrays.
    ///
    /// Output:
    /// - `Some(value)` when every segment resolves, `None` as soon as one is absent.
    #[must_use]
    pub fn lookup_path(&self, path: &str) -> Option<&Value> {
        if path.trim().is_empty() {
            return None;
        }
        path.split('.').try_fold(&self.root, |acc, segment| match acc {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// What: Resolve a dotted key to display text.
    ///
    /// Output:
    /// - Text for string, number or boolean leaves; `None` for absent keys and
    ///   for objects, arrays or `null`.
    #[must_use]
    pub fn lookup_text(&self, path: &str) -> Option<String> {
        self.lookup_path(path).and_then(crate::util::scalar_text)
    }

    /// Document metadata, present only when the dictionary has a `meta` object.
    #[must_use]
    pub fn meta(&self) -> Option<Meta> {
        self.section("meta")
            .filter(|v| v.is_object())
            .map(Meta::from_json)
    }

    /// Navigation labels.
    #[must_use]
    pub fn nav(&self) -> Nav {
        Nav::from_json(self.section_or_null("nav"))
    }

    /// Hero section.
    #[must_use]
    pub fn hero(&self) -> Hero {
        Hero::from_json(self.section_or_null("hero"))
    }

    /// About section.
    #[must_use]
    pub fn about(&self) -> About {
        About::from_json(self.section_or_null("about"))
    }

    /// Services section.
    #[must_use]
    pub fn services(&self) -> Services {
        Services::from_json(self.section_or_null("services"))
    }

    /// Story section.
    #[must_use]
    pub fn story(&self) -> Story {
        Story::from_json(self.section_or_null("story"))
    }

    /// Help section.
    #[must_use]
    pub fn help(&self) -> Help {
        Help::from_json(self.section_or_null("help"))
    }

    /// Volunteer section.
    #[must_use]
    pub fn volunteer(&self) -> Volunteer {
        Volunteer::from_json(self.section_or_null("volunteer"))
    }

    /// Donate section.
    #[must_use]
    pub fn donate(&self) -> Donate {
        Donate::from_json(self.section_or_null("donate"))
    }

    /// Knowledge section.
    #[must_use]
    pub fn knowledge(&self) -> Knowledge {
        Knowledge::from_json(self.section_or_null("knowledge"))
    }

    /// Statistics section.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::from_json(self.section_or_null("statistics"))
    }

    /// Rights section.
    #[must_use]
    pub fn rights(&self) -> Rights {
        Rights::from_json(self.section_or_null("rights"))
    }

    /// Transparency section.
    #[must_use]
    pub fn transparency(&self) -> Transparency {
        Transparency::from_json(self.section_or_null("transparency"))
    }

    /// Orphan-week section.
    #[must_use]
    pub fn orphan_week(&self) -> OrphanWeek {
        OrphanWeek::from_json(self.section_or_null("orphanWeek"))
    }

    /// Documents section.
    #[must_use]
    pub fn documents(&self) -> Documents {
        Documents::from_json(self.section_or_null("documents"))
    }

    /// Contact section.
    #[must_use]
    pub fn contact(&self) -> Contact {
        Contact::from_json(self.section_or_null("contact"))
    }
}
