//! Media: the explainer video embed and configured image slots.

use crate::config::SiteConfig;
use crate::dom::Dom;

/// Attribute naming an image slot.
pub const IMAGE_SLOT_ATTR: &str = "data-img";

/// What: Show the embedded video when configured, otherwise the fallback note.
///
/// Details:
/// - Requires `#aiVideoBox`, `#aiVideoIframe` and `#aiVideoNote`; if any is
///   missing nothing changes.
pub fn setup_video(dom: &mut Dom, config: &SiteConfig) {
    let (Some(boxed), Some(iframe), Some(note)) = (
        dom.by_id("aiVideoBox"),
        dom.by_id("aiVideoIframe"),
        dom.by_id("aiVideoNote"),
    ) else {
        return;
    };
    let embed = config
        .assets
        .ai_video_youtube_embed
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());
    match embed {
        Some(url) => {
            dom.set_attr(iframe, "src", url);
            dom.set_flag(boxed, "hidden", false);
            dom.set_flag(note, "hidden", true);
        }
        None => {
            dom.set_flag(boxed, "hidden", true);
            dom.set_flag(note, "hidden", false);
        }
    }
}

/// What: Fill every `[data-img]` element from `assets.images`.
///
/// Output:
/// - Number of slots that received a source.
///
/// Details:
/// - Unknown keys and blank URLs leave the element untouched.
pub fn populate_images(dom: &mut Dom, config: &SiteConfig) -> usize {
    let mut filled = 0;
    for slot in dom.select_attr(IMAGE_SLOT_ATTR) {
        let src = dom
            .attr(slot, IMAGE_SLOT_ATTR)
            .and_then(|key| config.assets.images.get(key.trim()))
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty());
        if let Some(src) = src {
            dom.set_attr(slot, "src", &src);
            filled += 1;
        }
    }
    filled
}
