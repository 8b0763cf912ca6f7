use eframe::egui::{
    self,
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Ui,
    Visuals,
};

use crate::core::{
    RankTier,
    ScoreTier,
};

const GOLD: Color32 = Color32::from_rgb(255, 215, 0);
const SILVER: Color32 = Color32::from_rgb(192, 192, 192);
const BRONZE: Color32 = Color32::from_rgb(205, 127, 50);

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: Palette::dracula(), light: Palette::dracula_light() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).purple)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).orange
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).cyan
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).comment
    }

    pub fn score_color(&self, ctx: &egui::Context, tier: ScoreTier) -> Color32 {
        match tier {
            ScoreTier::Favorable => self.green(ctx),
            ScoreTier::Warning => self.orange(ctx),
            ScoreTier::Unfavorable => self.red(ctx),
        }
    }

    /// Border and badge color of the top three candidates.
    pub fn rank_color(&self, tier: RankTier) -> Option<Color32> {
        match tier {
            RankTier::Gold => Some(GOLD),
            RankTier::Silver => Some(SILVER),
            RankTier::Bronze => Some(BRONZE),
            RankTier::Unranked => None,
        }
    }

    /// Small rounded label, used for scores, badges, strengths and weaknesses.
    pub fn chip(&self, ui: &mut Ui, text: &str, color: Color32) -> egui::Response {
        egui::Frame::new()
            .fill(color.gamma_multiply(0.18))
            .stroke(Stroke::new(1.0, color))
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(8, 2))
            .show(ui, |ui| ui.label(RichText::new(text).color(color).small()))
            .response
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl Palette {
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            background_lighter: Color32::from_rgb(66, 69, 80),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            comment: Color32::from_rgb(120, 130, 160),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(210, 130, 50),
            green: Color32::from_rgb(50, 160, 90),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(60, 150, 200),
            background_darker: Color32::from_rgb(235, 235, 230),
            background_dark: Color32::from_rgb(245, 245, 240),
            background_light: Color32::from_rgb(255, 255, 250),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn widget(
    default: WidgetVisuals,
    bg: Color32,
    weak_bg: Color32,
    border: Color32,
    fg: Color32,
) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: weak_bg,
        bg_stroke: Stroke { color: border, ..default.bg_stroke },
        fg_stroke: Stroke { color: fg, ..default.fg_stroke },
        ..default
    }
}

fn set_theme_variant(ctx: &egui::Context, p: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };
    let w = &default.widgets;

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    w.noninteractive,
                    p.background,
                    p.background_lighter,
                    p.background_dark,
                    p.foreground,
                ),
                inactive: widget(
                    w.inactive,
                    p.background_light,
                    p.background_lighter,
                    p.background_dark,
                    p.foreground,
                ),
                hovered: widget(w.hovered, p.selection, p.background_lighter, p.cyan, p.foreground),
                active: widget(w.active, p.selection, p.background_light, p.cyan, p.foreground),
                open: widget(w.open, p.background_dark, p.background_lighter, p.purple, p.foreground),
            },
            selection: Selection {
                bg_fill: p.selection,
                stroke: Stroke { color: p.foreground, ..default.selection.stroke },
            },
            hyperlink_color: p.cyan,
            faint_bg_color: if is_dark { p.background_darker } else { p.background_light },
            extreme_bg_color: p.background_darker,
            code_bg_color: p.background_dark,
            error_fg_color: p.red,
            warn_fg_color: p.orange,
            window_shadow: Shadow { color: p.background_darker, ..default.window_shadow },
            window_fill: p.background,
            window_stroke: Stroke { color: p.background_light, ..default.window_stroke },
            panel_fill: p.background_dark,
            popup_shadow: Shadow { color: p.background_dark, ..default.popup_shadow },
            ..default.clone()
        },
    );
}
