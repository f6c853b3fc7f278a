//! Helpers for constructing URLs to static assets that respect the deployment base path.
use tempo_game::Card;

/// Prefix `relative` with the compile-time `PUBLIC_URL`, if any.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router; `None` when hosted at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Image URL for a card, honoring the base path.
#[must_use]
pub fn card_image(card: &Card) -> String {
    asset_path(&card.image)
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempo_game::Category;

    #[test]
    fn card_images_are_root_anchored_without_base() {
        let card = Card::new(12, "EL VOLUNTARIO", Category::Both);
        assert_eq!(card_image(&card), "/deck/12.png");
        assert_eq!(asset_path("deck/3.png"), "/deck/3.png");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            asset_path_with_base("/deck/3.png", "/tempo/"),
            "/tempo/deck/3.png"
        );
        assert_eq!(router_base_with_base("/tempo/"), Some("/tempo".to_string()));
        assert_eq!(router_base_with_base(""), None);
    }
}
