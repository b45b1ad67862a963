use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: HashMap<String, ColorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub style: Vec<String>,
}

impl ColorConfig {
    fn new(foreground: &str, style: &[&str]) -> Self {
        Self {
            foreground: Some(foreground.to_string()),
            background: None,
            style: style.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn with_background(mut self, background: &str) -> Self {
        self.background = Some(background.to_string());
        self
    }
}

pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme: String,
    colors_enabled: bool,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut manager = Self {
            themes: HashMap::new(),
            current_theme: "default".to_string(),
            colors_enabled: true,
        };

        manager.load_default_themes();
        manager
    }

    /// A manager whose `apply_style` returns text untouched.
    pub fn without_colors() -> Self {
        Self {
            colors_enabled: false,
            ..Self::new()
        }
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            true
        } else {
            false
        }
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme
    }

    pub fn get_current_theme(&self) -> Option<&Theme> {
        self.themes
            .get(&self.current_theme)
            .or_else(|| self.themes.get("default"))
    }

    /// Looks up a style in the current theme, falling back to the default
    /// theme for entries the current one doesn't define.
    pub fn style_for(&self, style_name: &str) -> Option<&ColorConfig> {
        self.get_current_theme()
            .and_then(|theme| theme.colors.get(style_name))
            .or_else(|| {
                self.themes
                    .get("default")
                    .and_then(|theme| theme.colors.get(style_name))
            })
    }

    pub fn apply_style(&self, text: &str, style_name: &str) -> String {
        if !self.colors_enabled {
            return text.to_string();
        }
        let color_config = self.style_for(style_name);

        let Some(color_config) = color_config else {
            return text.to_string();
        };

        let mut styled = text.normal();

        if let Some(color) = color_config.foreground.as_deref().and_then(parse_color) {
            styled = styled.color(color);
        }
        if let Some(color) = color_config.background.as_deref().and_then(parse_color) {
            styled = styled.on_color(color);
        }

        for style in &color_config.style {
            styled = match style.as_str() {
                "bold" => styled.bold(),
                "italic" => styled.italic(),
                "underline" => styled.underline(),
                "dimmed" => styled.dimmed(),
                "reversed" => styled.reversed(),
                _ => styled,
            };
        }

        styled.to_string()
    }

    pub fn list_themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_theme(&mut self, name: &str, entries: Vec<(&str, ColorConfig)>) {
        let colors = entries
            .into_iter()
            .map(|(key, config)| (key.to_string(), config))
            .collect();

        self.themes.insert(
            name.to_string(),
            Theme {
                name: name.to_string(),
                colors,
            },
        );
    }

    fn load_default_themes(&mut self) {
        self.insert_theme(
            "default",
            vec![
                ("title", ColorConfig::new("cyan", &["bold"])),
                ("hud", ColorConfig::new("yellow", &[])),
                ("tile_hidden", ColorConfig::new("blue", &["bold"])),
                ("tile_revealed", ColorConfig::new("white", &["bold"])),
                ("tile_matched", ColorConfig::new("green", &["bold"]).with_background("black")),
                ("victory", ColorConfig::new("green", &["bold"])),
                ("error", ColorConfig::new("red", &["bold"])),
                ("info", ColorConfig::new("blue", &[])),
                ("hint", ColorConfig::new("bright_black", &["italic"])),
                ("separator", ColorConfig::new("bright_black", &["dimmed"])),
            ],
        );

        self.insert_theme(
            "dark",
            vec![
                ("title", ColorConfig::new("bright_cyan", &["bold"])),
                ("hud", ColorConfig::new("bright_yellow", &[])),
                ("tile_hidden", ColorConfig::new("bright_blue", &["bold"])),
                ("tile_revealed", ColorConfig::new("bright_white", &["bold"])),
                ("tile_matched", ColorConfig::new("bright_green", &["bold"])),
                ("victory", ColorConfig::new("bright_green", &["bold", "underline"])),
                ("error", ColorConfig::new("bright_red", &["bold"])),
            ],
        );

        self.insert_theme(
            "light",
            vec![
                ("title", ColorConfig::new("blue", &["bold"])),
                ("hud", ColorConfig::new("magenta", &[])),
                ("tile_hidden", ColorConfig::new("black", &["bold"])),
                ("tile_revealed", ColorConfig::new("blue", &["bold"])),
                ("tile_matched", ColorConfig::new("green", &["reversed"])),
            ],
        );
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(color_name: &str) -> Option<Color> {
    match color_name.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "bright_black" => Some(Color::BrightBlack),
        "bright_red" => Some(Color::BrightRed),
        "bright_green" => Some(Color::BrightGreen),
        "bright_yellow" => Some(Color::BrightYellow),
        "bright_blue" => Some(Color::BrightBlue),
        "bright_magenta" => Some(Color::BrightMagenta),
        "bright_cyan" => Some(Color::BrightCyan),
        "bright_white" => Some(Color::BrightWhite),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_manager_creation() {
        let manager = ThemeManager::new();
        assert_eq!(manager.current_theme_name(), "default");
        assert_eq!(manager.list_themes(), vec!["dark", "default", "light"]);
    }

    #[test]
    fn test_set_theme() {
        let mut manager = ThemeManager::new();

        assert!(manager.set_theme("dark"));
        assert_eq!(manager.current_theme_name(), "dark");

        assert!(!manager.set_theme("nonexistent"));
        assert_eq!(manager.current_theme_name(), "dark");
    }

    #[test]
    fn test_apply_style() {
        let manager = ThemeManager::new();
        let unstyled = manager.apply_style("Test", "nonexistent");
        assert_eq!(unstyled, "Test");

        let plain = ThemeManager::without_colors();
        assert_eq!(plain.apply_style("12", "tile_hidden"), "12");
    }

    #[test]
    fn test_light_theme_falls_back_to_default_entries() {
        let mut manager = ThemeManager::new();
        manager.set_theme("light");

        let matched = manager.style_for("tile_matched").unwrap();
        assert_eq!(matched.style, vec!["reversed".to_string()]);

        let error = manager.style_for("error").unwrap();
        assert_eq!(error.foreground.as_deref(), Some("red"));
        assert!(manager.style_for("nonexistent").is_none());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color("bright_green"), Some(Color::BrightGreen));
        assert_eq!(parse_color("invalid"), None);
    }
}
