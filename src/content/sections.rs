//! Typed views over dictionary sections.
//!
//! Each `from_json` constructor accepts any JSON value. Non-object inputs
//! produce the empty section, non-object array elements are skipped, and
//! fields of the wrong type read as `None`.

use serde_json::Value;

use crate::util::{arrs, records, scalar_of, ss, str_of};

/// Navigation ids in display order; each maps to a label under `nav`.
pub const NAV_IDS: &[&str] = &[
    "about",
    "services",
    "story",
    "help",
    "volunteer",
    "donate",
    "knowledge",
    "statistics",
    "rights",
    "transparency",
    "orphanWeek",
    "documents",
    "contact",
];

/// `meta` block: document title and language attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meta {
    /// Document title.
    pub title: Option<String>,
    /// Value for `<html lang>`.
    pub lang: Option<String>,
    /// Value for `<html dir>`.
    pub dir: Option<String>,
}

impl Meta {
    /// Read from a `meta` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            title: str_of(v, "title"),
            lang: str_of(v, "lang"),
            dir: str_of(v, "dir"),
        }
    }
}

/// Navigation labels keyed by the fixed ids in [`NAV_IDS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nav {
    /// `(id, label)` pairs in [`NAV_IDS`] order, only for ids with a label.
    pub links: Vec<(String, String)>,
}

impl Nav {
    /// Read from a `nav` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        let links = NAV_IDS
            .iter()
            .filter_map(|id| str_of(v, id).map(|label| ((*id).to_owned(), label)))
            .collect();
        Self { links }
    }
}

/// Hero call-to-action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cta {
    /// Action selector (`volunteer`, `help`, `donate`, or an anchor id).
    pub id: Option<String>,
    /// Button text.
    pub label: Option<String>,
}

/// `hero` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hero {
    /// Primary buttons in order.
    pub primary_ctas: Vec<Cta>,
}

impl Hero {
    /// Read from a `hero` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            primary_ctas: records(v, "primaryCtas", |e| {
                e.is_object().then(|| Cta {
                    id: str_of(e, "id"),
                    label: str_of(e, "label"),
                })
            }),
        }
    }
}

/// Titled text block, shared by every card-like record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    /// Heading.
    pub title: Option<String>,
    /// Body text.
    pub text: Option<String>,
}

impl Card {
    /// What: Read a `{title, text}` record.
    #[must_use]
    pub fn from_json(v: &Value) -> Option<Self> {
        v.is_object().then(|| Self {
            title: str_of(v, "title"),
            text: str_of(v, "text"),
        })
    }

    /// What: Read a record whose fields have legacy aliases.
    ///
    /// Details:
    /// - Heading precedence: `title`, then `label`.
    /// - Body precedence: `text`, then `description`.
    /// - Blank values fall through to the alias.
    #[must_use]
    pub fn from_json_with_aliases(v: &Value) -> Option<Self> {
        v.is_object().then(|| Self {
            title: ss(v, &["title", "label"]),
            text: ss(v, &["text", "description"]),
        })
    }
}

/// About pillar; `id` doubles as its icon key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pillar {
    /// Content id, resolved through the icon alias table.
    pub id: Option<String>,
    /// Heading.
    pub title: Option<String>,
    /// Body text.
    pub text: Option<String>,
}

/// `about` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct About {
    /// Intro paragraphs.
    pub intro: Vec<String>,
    /// Pillar cards.
    pub pillars: Vec<Pillar>,
}

impl About {
    /// Read from an `about` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            intro: arrs(v, "intro"),
            pillars: records(v, "pillars", |e| {
                e.is_object().then(|| Pillar {
                    id: str_of(e, "id"),
                    title: str_of(e, "title"),
                    text: str_of(e, "text"),
                })
            }),
        }
    }
}

/// Service card with an icon key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceItem {
    /// Icon key (canonical or alias).
    pub icon: Option<String>,
    /// Heading.
    pub title: Option<String>,
    /// Body text.
    pub text: Option<String>,
}

/// `services` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Services {
    /// Service cards.
    pub items: Vec<ServiceItem>,
}

impl Services {
    /// Read from a `services` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            items: records(v, "items", |e| {
                e.is_object().then(|| ServiceItem {
                    icon: str_of(e, "icon"),
                    title: str_of(e, "title"),
                    text: str_of(e, "text"),
                })
            }),
        }
    }
}

/// `story` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Story {
    /// Story paragraphs.
    pub content: Vec<String>,
}

impl Story {
    /// Read from a `story` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            content: arrs(v, "content"),
        }
    }
}

/// Numbered process step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    /// Display number; numbers and strings are both accepted.
    pub order: Option<String>,
    /// Heading.
    pub title: Option<String>,
    /// Body text.
    pub text: Option<String>,
}

impl Step {
    /// Read a `{order, title, text}` record.
    #[must_use]
    pub fn from_json(v: &Value) -> Option<Self> {
        v.is_object().then(|| Self {
            order: scalar_of(v, "order"),
            title: str_of(v, "title"),
            text: str_of(v, "text"),
        })
    }
}

/// `help` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Steps in given order.
    pub steps: Vec<Step>,
}

impl Help {
    /// Read from a `help` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            steps: records(v, "steps", Step::from_json),
        }
    }
}

/// `volunteer` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Volunteer {
    /// Role cards.
    pub roles: Vec<Card>,
    /// Onboarding steps.
    pub process_steps: Vec<Step>,
}

impl Volunteer {
    /// Read from a `volunteer` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            roles: records(v, "roles", Card::from_json),
            process_steps: records(v, "processSteps", Step::from_json),
        }
    }
}

/// Budget allocation line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    /// Line label.
    pub label: Option<String>,
    /// Share as display text; `Some("0")` for zero, `None` when absent.
    pub percent: Option<String>,
    /// Explanation.
    pub description: Option<String>,
}

impl Allocation {
    /// Read a `{label, percent, description}` record.
    #[must_use]
    pub fn from_json(v: &Value) -> Option<Self> {
        v.is_object().then(|| Self {
            label: str_of(v, "label"),
            percent: scalar_of(v, "percent"),
            description: str_of(v, "description"),
        })
    }
}

/// `donate` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Donate {
    /// Allocation lines.
    pub allocation: Vec<Allocation>,
    /// Ways-to-give cards.
    pub ways_to_give: Vec<Card>,
    /// Text shown when the consent checkbox is unchecked.
    pub legal_alert: Option<String>,
}

impl Donate {
    /// Read from a `donate` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            allocation: records(v, "allocation", Allocation::from_json),
            ways_to_give: records(v, "waysToGive", Card::from_json),
            legal_alert: str_of(v, "legalAlert"),
        }
    }
}

/// `knowledge` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    /// Article cards.
    pub sections: Vec<Card>,
}

impl Knowledge {
    /// Read from a `knowledge` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            sections: records(v, "sections", Card::from_json),
        }
    }
}

/// Headline number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metric {
    /// Caption.
    pub label: Option<String>,
    /// Figure as display text.
    pub value: Option<String>,
}

/// `statistics` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Headline numbers.
    pub metrics: Vec<Metric>,
    /// Interpretation paragraphs.
    pub meaning: Vec<String>,
    /// Age-group list entries.
    pub age_groups: Vec<String>,
}

impl Statistics {
    /// Read from a `statistics` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            metrics: records(v, "metrics", |e| {
                e.is_object().then(|| Metric {
                    label: str_of(e, "label"),
                    value: scalar_of(e, "value"),
                })
            }),
            meaning: arrs(v, "meaning"),
            age_groups: arrs(v, "ageGroups"),
        }
    }
}

/// `rights` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rights {
    /// Right cards (read with title/label and text/description aliases).
    pub items: Vec<Card>,
}

impl Rights {
    /// Read from a `rights` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            items: records(v, "items", Card::from_json_with_aliases),
        }
    }
}

/// `transparency` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transparency {
    /// Allocation lines.
    pub allocation: Vec<Allocation>,
}

impl Transparency {
    /// Read from a `transparency` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            allocation: records(v, "allocation", Allocation::from_json),
        }
    }
}

/// Optional practical block of an orphan-week day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Practical {
    /// A single paragraph.
    Text(String),
    /// A bulleted list.
    Items(Vec<String>),
}

/// One day of orphan week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Day {
    /// Short day label (e.g. weekday).
    pub label: Option<String>,
    /// Heading.
    pub title: Option<String>,
    /// Body text.
    pub text: Option<String>,
    /// Practical tips, when present.
    pub practical: Option<Practical>,
    /// Heading for the practical block.
    pub practical_title: Option<String>,
}

impl Day {
    /// Read a day record.
    #[must_use]
    pub fn from_json(v: &Value) -> Option<Self> {
        if !v.is_object() {
            return None;
        }
        let practical = match v.get("practical") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(Practical::Text(s.clone())),
            Some(Value::Array(_)) => {
                let items = arrs(v, "practical");
                (!items.is_empty()).then_some(Practical::Items(items))
            }
            _ => None,
        };
        Some(Self {
            label: str_of(v, "label"),
            title: str_of(v, "title"),
            text: str_of(v, "text"),
            practical,
            practical_title: str_of(v, "practicalTitle"),
        })
    }
}

/// `orphanWeek` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrphanWeek {
    /// Days in order.
    pub days: Vec<Day>,
}

impl OrphanWeek {
    /// Read from an `orphanWeek` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            days: records(v, "days", Day::from_json),
        }
    }
}

/// `documents` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documents {
    /// Document cards.
    pub items: Vec<Card>,
}

impl Documents {
    /// Read from a `documents` object.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            items: records(v, "items", Card::from_json),
        }
    }
}

/// Kind of contact method, selecting the URI scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactKind {
    /// `mailto:` link with subject/body.
    Email,
    /// `tel:` link.
    Phone,
    /// `wa.me` link with prefilled text.
    WhatsApp,
    /// Plain text; carries the original type string.
    Other(String),
}

impl ContactKind {
    /// What: Classify a free-form `type` field.
    #[must_use]
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_lowercase().as_str() {
            "email" | "mail" | "e-mail" => Self::Email,
            "phone" | "tel" | "telephone" => Self::Phone,
            "whatsapp" => Self::WhatsApp,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Structured contact method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMethod {
    /// Method kind.
    pub kind: ContactKind,
    /// Address, number or free text.
    pub value: String,
    /// Optional caption.
    pub label: Option<String>,
}

/// `contact` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    /// Methods with a value, in order.
    pub methods: Vec<ContactMethod>,
    /// Free-text social platform labels.
    pub social: Vec<String>,
    /// Prefilled `WhatsApp` message.
    pub whatsapp_text: Option<String>,
    /// Mail subject.
    pub email_subject: Option<String>,
    /// Mail body.
    pub email_body: Option<String>,
}

impl Contact {
    /// Read from a `contact` object.
    ///
    /// Details:
    /// - Methods without a usable `value` are skipped.
    /// - A missing `type` is treated as plain text.
    #[must_use]
    pub fn from_json(v: &Value) -> Self {
        Self {
            methods: records(v, "methods", |e| {
                let value = scalar_of(e, "value").filter(|s| !s.trim().is_empty())?;
                Some(ContactMethod {
                    kind: ContactKind::parse(&str_of(e, "type").unwrap_or_default()),
                    value,
                    label: str_of(e, "label"),
                })
            }),
            social: arrs(v, "social"),
            whatsapp_text: str_of(v, "whatsAppText"),
            email_subject: str_of(v, "emailSubject"),
            email_body: str_of(v, "emailBody"),
        }
    }
}
