// Theme palettes and the stylesheet built from them.
use serde::{Deserialize, Serialize};

use crate::state::app_state::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub panel: String,
    pub border: String,
    pub primary: String,
    pub success: String,
    pub danger: String,
}

impl ThemePalette {
    pub fn for_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            panel: "#2a2a2a".to_string(),
            border: "#565656".to_string(),
            primary: "#007acc".to_string(),
            success: "#26a69a".to_string(),
            danger: "#ef5350".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#1f2328".to_string(),
            panel: "#f6f8fa".to_string(),
            border: "#d0d7de".to_string(),
            primary: "#007acc".to_string(),
            success: "#2e7d32".to_string(),
            danger: "#d32f2f".to_string(),
        }
    }

    pub fn stylesheet(&self) -> String {
        format!(
            r#"
body {{ background: {bg}; color: {fg}; font-family: sans-serif; margin: 0; }}
.app {{ max-width: 960px; margin: 0 auto; padding: 16px 24px; }}
.toolbar {{ display: flex; gap: 16px; align-items: center; padding: 8px 0; border-bottom: 1px solid {border}; }}
.field {{ display: flex; flex-direction: column; margin-bottom: 10px; }}
.field input, .field select, .field textarea {{ background: {panel}; color: {fg}; border: 1px solid {border}; padding: 6px; }}
.row {{ display: flex; gap: 12px; }}
.row .field {{ flex: 1; }}
.quote {{ background: {panel}; border: 1px solid {border}; padding: 8px 12px; margin: 8px 0; }}
.record-card {{ background: {panel}; border: 1px solid {border}; margin: 6px 0; padding: 6px 12px; }}
.record-card dl {{ display: grid; grid-template-columns: 180px 1fr; gap: 4px; }}
button {{ background: {primary}; color: #ffffff; border: none; padding: 6px 14px; cursor: pointer; }}
button.danger {{ background: {danger}; }}
button:disabled {{ opacity: 0.5; }}
.notice-success {{ color: {success}; }}
.notice-error {{ color: {danger}; }}
"#,
            bg = self.background,
            fg = self.foreground,
            panel = self.panel,
            border = self.border,
            primary = self.primary,
            success = self.success,
            danger = self.danger,
        )
    }
}
