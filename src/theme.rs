use crate::model::{Color, Item, Size};
use eframe::egui::{self, Color32, CornerRadius, FontId, Frame, Margin, Stroke, TextStyle};

#[derive(Debug, Clone)]
pub struct Theme {
    pub surface_1: Color32,
    pub surface_2: Color32,
    pub surface_3: Color32,
    pub accent_primary: Color32,
    pub accent_muted: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub hover_overlay: Color32,
    pub item_blue: Color32,
    pub item_green: Color32,
    pub item_orange: Color32,
    pub item_dot: Color32,
    pub spacing_4: f32,
    pub spacing_8: f32,
    pub spacing_12: f32,
    pub radius_8: u8,
    pub radius_10: u8,
    pub radius_12: u8,
    pub cell_size: f32,
    pub item_radius_small: f32,
    pub item_radius_large: f32,
    pub chart_height: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface_1: Color32::from_rgb(0x16, 0x1A, 0x20),
            surface_2: Color32::from_rgb(0x1C, 0x22, 0x2B),
            surface_3: Color32::from_rgb(0x22, 0x2A, 0x35),
            accent_primary: Color32::from_rgb(0x3B, 0x82, 0xF6),
            accent_muted: Color32::from_rgb(0x2F, 0x6E, 0xD8),
            success: Color32::from_rgb(0x22, 0xC5, 0x5E),
            warning: Color32::from_rgb(0xF5, 0x9E, 0x0B),
            danger: Color32::from_rgb(0xEF, 0x44, 0x44),
            text_primary: Color32::from_rgb(0xE6, 0xED, 0xF3),
            text_muted: Color32::from_rgb(0x8B, 0x94, 0x9E),
            hover_overlay: Color32::from_rgba_premultiplied(255, 255, 255, 10),
            item_blue: Color32::from_rgb(0x4A, 0x90, 0xE2),
            item_green: Color32::from_rgb(0x4C, 0xAF, 0x50),
            item_orange: Color32::from_rgb(0xFF, 0x98, 0x00),
            item_dot: Color32::from_rgb(0x11, 0x11, 0x11),
            spacing_4: 4.0,
            spacing_8: Self::P8,
            spacing_12: 12.0,
            radius_8: Self::R8,
            radius_10: 10,
            radius_12: Self::R12,
            cell_size: 64.0,
            item_radius_small: 14.0,
            item_radius_large: 24.0,
            chart_height: 36.0,
        }
    }
}

impl Theme {
    pub const R8: u8 = 8;
    pub const R12: u8 = 12;
    pub const P8: f32 = 8.0;

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.surface_1;
        visuals.override_text_color = Some(self.text_primary);
        visuals.widgets.noninteractive.fg_stroke.color = self.text_primary;
        visuals.widgets.noninteractive.bg_fill = self.surface_2;
        visuals.widgets.noninteractive.bg_stroke = Stroke::NONE;
        visuals.widgets.inactive.bg_fill = self.surface_2;
        visuals.widgets.inactive.weak_bg_fill = self.surface_2;
        visuals.widgets.inactive.bg_stroke = Stroke::NONE;
        visuals.widgets.hovered.bg_fill = self.surface_3;
        visuals.widgets.hovered.weak_bg_fill = self.surface_3;
        visuals.widgets.hovered.bg_stroke = Stroke::NONE;
        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.weak_bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::NONE;
        visuals.selection.bg_fill = self.accent_muted;
        visuals.window_fill = self.surface_1;
        visuals.window_corner_radius = CornerRadius::same(self.radius_10);
        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(17.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Monospace, FontId::monospace(13.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(12.0));
        ctx.set_style(style);
    }

    pub fn panel_frame(&self, fill: Color32, inner_padding: i8) -> Frame {
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::same(inner_padding))
            .corner_radius(CornerRadius::same(self.radius_12))
            .stroke(Stroke::NONE)
    }

    pub fn card_frame(&self) -> Frame {
        self.panel_frame(self.surface_2, self.spacing_12 as i8)
    }

    pub fn item_fill(&self, color: Color) -> Color32 {
        match color {
            Color::Blue => self.item_blue,
            Color::Green => self.item_green,
            Color::Orange => self.item_orange,
        }
    }

    pub fn item_radius(&self, item: &Item) -> f32 {
        match item.size {
            Size::Small => self.item_radius_small,
            Size::Large => self.item_radius_large,
        }
    }

    pub fn selected_stroke(&self) -> Stroke {
        Stroke::new(3.0, self.accent_primary)
    }

    /// Green when the selection is on target, amber when close, red otherwise.
    pub fn difference_color(&self, difference: f64) -> Color32 {
        if difference < 0.005 {
            self.success
        } else if difference <= 0.1 {
            self.warning
        } else {
            self.danger
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn difference_color_bands() {
        let theme = Theme::default();
        assert_eq!(theme.difference_color(0.0), theme.success);
        assert_eq!(theme.difference_color(0.05), theme.warning);
        assert_eq!(theme.difference_color(0.6), theme.danger);
    }
}
