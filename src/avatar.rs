//! Avatar catalog.
//!
//! Avatars are referenced by URL only; the images live on a third-party
//! generation service and are parameterized by index. The terminal shows a
//! glyph swatch per slot, and the URL is what lands in the game state.

/// Number of avatar slots offered on the welcome screen.
pub const AVATAR_COUNT: usize = 20;

/// Avatars are laid out in a grid this many columns wide.
pub const GRID_COLUMNS: usize = 5;

/// Builds the avatar URL for a slot by substituting `{index}` in the
/// configured template.
pub fn avatar_url(template: &str, index: usize) -> String {
    template.replace("{index}", &index.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_index_into_template() {
        let url = avatar_url("https://api.multiavatar.com/prosol{index}.png", 7);
        assert_eq!(url, "https://api.multiavatar.com/prosol7.png");
    }

    #[test]
    fn urls_are_unique_per_slot() {
        let template = "https://api.multiavatar.com/prosol{index}.png";
        let urls: Vec<String> = (0..AVATAR_COUNT).map(|i| avatar_url(template, i)).collect();
        for (i, url) in urls.iter().enumerate() {
            assert_eq!(urls.iter().position(|u| u == url), Some(i));
        }
    }

    #[test]
    fn template_without_placeholder_is_returned_verbatim() {
        assert_eq!(avatar_url("https://example.com/a.png", 3), "https://example.com/a.png");
    }
}
