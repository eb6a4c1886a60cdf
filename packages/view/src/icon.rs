//! Category to marker style resolution.

use crime_hotspots_config::MarkersConfig;
use crime_hotspots_incident_models::{CrimeType, MarkerColor};

/// Pixel size of a marker icon.
pub const ICON_SIZE: [u32; 2] = [25, 41];
/// Icon point that sits on the marker's coordinate.
pub const ICON_ANCHOR: [i32; 2] = [12, 41];
/// Popup offset relative to the icon anchor.
pub const POPUP_ANCHOR: [i32; 2] = [1, -34];
/// Pixel size of the shadow image.
pub const SHADOW_SIZE: [u32; 2] = [41, 41];

/// Display style of one map marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: MarkerColor,
    pub icon_url: String,
    pub shadow_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
    pub shadow_size: [u32; 2],
}

/// Dedicated marker color of a known category.
#[must_use]
pub const fn category_color(crime_type: CrimeType) -> MarkerColor {
    match crime_type {
        CrimeType::Theft => MarkerColor::Orange,
        CrimeType::Assault => MarkerColor::Red,
        CrimeType::DomesticViolence => MarkerColor::Purple,
        CrimeType::LandDispute => MarkerColor::Brown,
        CrimeType::Vandalism => MarkerColor::DarkRed,
    }
}

/// Resolves category labels to [`MarkerStyle`]s.
///
/// Total: labels that are not a known [`CrimeType`] get the configured
/// default color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconResolver {
    icon_url_template: String,
    shadow_url: String,
    default_color: MarkerColor,
}

impl IconResolver {
    #[must_use]
    pub fn new(config: &MarkersConfig) -> Self {
        Self {
            icon_url_template: config.icon_url_template.clone(),
            shadow_url: config.shadow_url.clone(),
            default_color: config.default_color,
        }
    }

    /// Color for a category label.
    #[must_use]
    pub fn color(&self, category: &str) -> MarkerColor {
        category
            .parse::<CrimeType>()
            .map_or(self.default_color, category_color)
    }

    /// Full marker style for a category label.
    #[must_use]
    pub fn resolve(&self, category: &str) -> MarkerStyle {
        let color = self.color(category);
        MarkerStyle {
            color,
            icon_url: self.icon_url_template.replace("{color}", color.as_ref()),
            shadow_url: self.shadow_url.clone(),
            icon_size: ICON_SIZE,
            icon_anchor: ICON_ANCHOR,
            popup_anchor: POPUP_ANCHOR,
            shadow_size: SHADOW_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use crime_hotspots_config::AppConfig;

    use super::*;

    fn resolver() -> IconResolver {
        IconResolver::new(&AppConfig::default().markers)
    }

    #[test]
    fn known_categories_have_fixed_colors() {
        let icons = resolver();
        assert_eq!(icons.color("Theft"), MarkerColor::Orange);
        assert_eq!(icons.color("Assault"), MarkerColor::Red);
        assert_eq!(icons.color("Domestic Violence"), MarkerColor::Purple);
        assert_eq!(icons.color("Land Dispute"), MarkerColor::Brown);
        assert_eq!(icons.color("Vandalism"), MarkerColor::DarkRed);
    }

    #[test]
    fn unknown_category_falls_back_to_default() {
        let icons = resolver();
        assert_eq!(icons.color("Arson"), MarkerColor::Blue);
        assert_eq!(icons.color(""), MarkerColor::Blue);
        assert_eq!(icons.color("theft"), MarkerColor::Blue);
    }

    #[test]
    fn default_color_is_configurable() {
        let mut config = AppConfig::default().markers;
        config.default_color = MarkerColor::Grey;
        let icons = IconResolver::new(&config);
        assert_eq!(icons.resolve("Unknown").color, MarkerColor::Grey);
        assert_eq!(icons.resolve("Theft").color, MarkerColor::Orange);
    }

    #[test]
    fn style_fills_icon_url_and_geometry() {
        let style = resolver().resolve("Vandalism");
        assert!(style.icon_url.ends_with("marker-icon-2x-darkred.png"));
        assert!(style.shadow_url.ends_with("marker-shadow.png"));
        assert_eq!(style.icon_size, [25, 41]);
        assert_eq!(style.icon_anchor, [12, 41]);
        assert_eq!(style.popup_anchor, [1, -34]);
        assert_eq!(style.shadow_size, [41, 41]);
    }
}
