//! Normalization of free-text social platform labels.

use std::fmt;

/// Canonical social platform key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialKey {
    /// Facebook.
    Facebook,
    /// Instagram.
    Instagram,
    /// `LinkedIn`.
    LinkedIn,
    /// `YouTube`.
    YouTube,
    /// `WhatsApp`.
    WhatsApp,
    /// `TikTok`.
    TikTok,
    /// Telegram.
    Telegram,
    /// Twitter / X.
    Twitter,
    /// E-mail.
    Email,
    /// Anything else.
    Link,
}

impl SocialKey {
    /// Every key, `Link` last.
    pub const ALL: [Self; 10] = [
        Self::Facebook,
        Self::Instagram,
        Self::LinkedIn,
        Self::YouTube,
        Self::WhatsApp,
        Self::TikTok,
        Self::Telegram,
        Self::Twitter,
        Self::Email,
        Self::Link,
    ];

    /// Stable key string; also used as the icon key and the config `social` key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::LinkedIn => "linkedin",
            Self::YouTube => "youtube",
            Self::WhatsApp => "whatsapp",
            Self::TikTok => "tiktok",
            Self::Telegram => "telegram",
            Self::Twitter => "twitter",
            Self::Email => "email",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for SocialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase label fragments per platform, English and Hebrew. Checked in order.
const VARIANTS: &[(SocialKey, &[&str])] = &[
    (SocialKey::Facebook, &["facebook", "פייסבוק", "פיסבוק", "fb.com"]),
    (SocialKey::Instagram, &["instagram", "אינסטגרם", "אינסטגראם", "insta"]),
    (SocialKey::LinkedIn, &["linkedin", "linked in", "לינקדאין", "לינקדין", "לינקד אין"]),
    (SocialKey::YouTube, &["youtube", "you tube", "יוטיוב", "יו טיוב", "יו-טיוב"]),
    (SocialKey::WhatsApp, &["whatsapp", "whats app", "וואטסאפ", "ווטסאפ", "וואצאפ", "וטסאפ"]),
    (SocialKey::TikTok, &["tiktok", "tik tok", "טיקטוק", "טיק טוק"]),
    (SocialKey::Telegram, &["telegram", "טלגרם"]),
    (SocialKey::Twitter, &["twitter", "טוויטר", "טויטר", "x.com"]),
    (SocialKey::Email, &["email", "e-mail", "mail", "אימייל", "מייל", "דוא\"ל", "דואל"]),
];

/// What: Map a free-text platform label to its canonical key.
///
/// Inputs:
/// - `label`: Label as written in the dictionary, in either language.
///
/// Output:
/// - Exactly one [`SocialKey`]; unmatched labels map to [`SocialKey::Link`].
///
/// Details:
/// - Case-insensitive substring match against [`VARIANTS`], first hit wins.
/// - A bare `x` maps to Twitter; `x` inside longer words does not.
#[must_use]
pub fn normalize_social_key(label: &str) -> SocialKey {
    let lowered = label.trim().to_lowercase();
    if lowered == "x" || lowered == "𝕏" {
        return SocialKey::Twitter;
    }
    VARIANTS
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| lowered.contains(n)))
        .map_or(SocialKey::Link, |(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Hebrew and English labels for the same platform agree.
    fn hebrew_and_english_agree() {
        let pairs = [
            ("Facebook", "פייסבוק"),
            ("Instagram", "אינסטגרם"),
            ("LinkedIn", "לינקדאין"),
            ("YouTube", "יוטיוב"),
            ("WhatsApp", "וואטסאפ"),
            ("TikTok", "טיקטוק"),
            ("Telegram", "טלגרם"),
            ("Twitter", "טוויטר"),
            ("Email", "אימייל"),
        ];
        for (en, he) in pairs {
            assert_eq!(normalize_social_key(en), normalize_social_key(he), "{en} vs {he}");
            assert_ne!(normalize_social_key(en), SocialKey::Link, "{en}");
        }
    }

    #[test]
    /// What: Matching ignores case and surrounding text.
    fn case_and_substring() {
        assert_eq!(normalize_social_key("  FACEBOOK page "), SocialKey::Facebook);
        assert_eq!(normalize_social_key("Follow us on Instagram"), SocialKey::Instagram);
        assert_eq!(normalize_social_key("X"), SocialKey::Twitter);
        assert_eq!(normalize_social_key("Xylophone"), SocialKey::Link);
    }

    #[test]
    /// What: Unknown and empty labels normalize to `Link`; output is deterministic.
    fn unknown_is_link_and_total() {
        for label in ["", "   ", "Mastodon", "אתר", "🙂", "\u{0}"] {
            let first = normalize_social_key(label);
            assert_eq!(first, normalize_social_key(label));
            assert!(SocialKey::ALL.contains(&first));
        }
        assert_eq!(normalize_social_key("Mastodon"), SocialKey::Link);
        assert_eq!(normalize_social_key(""), SocialKey::Link);
    }

    #[test]
    /// What: Every social key resolves to a real icon.
    fn keys_resolve_to_icons() {
        for key in SocialKey::ALL {
            assert!(!crate::icons::resolve_icon(key.as_str()).is_empty());
        }
        assert_eq!(crate::icons::canonical_key(SocialKey::WhatsApp.as_str()), "message");
    }
}
