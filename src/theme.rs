// Color schemes per competition

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::render::types::RenderColor;

pub const DEFAULT_THEME: &str = "brasileirao";

/// Alpha of the glow color relative to the accent
const GLOW_ALPHA: f32 = 0.08;

/// One competition's colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub key: &'static str,
    pub name: &'static str,
    /// Background stops at 0, 0.5 and 1
    pub gradient: [RenderColor; 3],
    pub accent: RenderColor,
    /// Accent at low alpha, used for the radial glows
    pub glow: RenderColor,
}

impl Theme {
    fn new(key: &'static str, name: &'static str, gradient: [u32; 3], accent: u32) -> Self {
        let accent = hex(accent);
        Self {
            key,
            name,
            gradient: gradient.map(hex),
            accent,
            glow: accent.with_alpha(GLOW_ALPHA),
        }
    }
}

fn hex(rgb: u32) -> RenderColor {
    RenderColor::rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Immutable table of every known theme
#[derive(Debug)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
    by_key: HashMap<&'static str, usize>,
}

static BUILTIN: Lazy<ThemeRegistry> = Lazy::new(|| {
    ThemeRegistry::new(vec![
        Theme::new("brasileirao", "Brasileirão", [0x002a0a, 0x003d12, 0x00521a], 0xf7d731),
        Theme::new("paulista", "Paulistão", [0x1a0505, 0x2d0a0a, 0x3d0f0f], 0xe02020),
        Theme::new("premier", "Premier League", [0x1a0828, 0x2a0f40, 0x3d195b], 0xff2882),
        Theme::new("ucl", "Champions League", [0x050d24, 0x0a1840, 0x0d1f5c], 0x00a1e4),
        Theme::new("laliga", "La Liga", [0x0a0e1a, 0x121830, 0x1a2248], 0xff6900),
        Theme::new("serie-a", "Serie A", [0x04131f, 0x081e30, 0x0a2a42], 0x02a86c),
        Theme::new("sulamericana", "Copa Sudamericana", [0x1a0800, 0x2d1005, 0x401808], 0xe04428),
        Theme::new("libertadores", "Libertadores", [0x0a1a08, 0x102a0d, 0x183a14], 0xd4a843),
        Theme::new("copa-mundo", "Copa do Mundo", [0x1a0812, 0x2d0d1e, 0x40122a], 0xd4af37),
        Theme::new("copa-italia", "Coppa Italia", [0x041208, 0x08200f, 0x0c3018], 0xcd212a),
        Theme::new("copa-rey", "Copa del Rey", [0x1a0808, 0x301010, 0x481818], 0xfabd00),
        Theme::new("copa-brasil", "Copa do Brasil", [0x00200a, 0x003510, 0x004a18], 0xffcc29),
        Theme::new("europa", "Europa League", [0x0f0800, 0x1a1005, 0x2a1a08], 0xf57a22),
    ])
});

impl ThemeRegistry {
    /// The themes shipped with the crate, built on first use
    pub fn builtin() -> &'static ThemeRegistry {
        &BUILTIN
    }

    fn new(themes: Vec<Theme>) -> Self {
        let by_key = themes
            .iter()
            .enumerate()
            .map(|(i, theme)| (theme.key, i))
            .collect();
        Self { themes, by_key }
    }

    pub fn get(&self, key: &str) -> Option<&Theme> {
        self.by_key.get(key).map(|&i| &self.themes[i])
    }

    /// Look a theme up, silently falling back to the default theme (or the
    /// first registered one) for unknown keys
    pub fn lookup(&self, key: Option<&str>) -> &Theme {
        key.and_then(|k| self.get(k))
            .or_else(|| self.get(DEFAULT_THEME))
            .unwrap_or(&self.themes[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_every_competition() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.iter().count(), 13);
        assert!(registry.get("ucl").is_some());
        assert!(registry.get("copa-brasil").is_some());
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.lookup(Some("nba")).key, "brasileirao");
        assert_eq!(registry.lookup(None).key, "brasileirao");
        assert_eq!(registry.lookup(Some("premier")).key, "premier");
    }

    #[test]
    fn test_glow_is_faint_accent() {
        let theme = ThemeRegistry::builtin().lookup(Some("ucl"));
        assert_eq!(theme.accent.to_rgba8(), [0x00, 0xa1, 0xe4, 255]);
        assert_eq!(theme.glow.with_alpha(1.0), theme.accent);
        assert_eq!(theme.glow.a, 0.08);
    }

    #[test]
    fn test_gradient_stops() {
        let theme = ThemeRegistry::builtin().lookup(Some("brasileirao"));
        assert_eq!(theme.gradient[0].to_rgba8(), [0x00, 0x2a, 0x0a, 255]);
        assert_eq!(theme.gradient[2].to_rgba8(), [0x00, 0x52, 0x1a, 255]);
    }
}
