use crate::state::ArticleStyleState;

const FALLBACK_FONT_SIZE: f32 = 18.0;
const FALLBACK_CONTENT_WIDTH: f32 = 1394.0;
const PAGE_MARGIN: f32 = 24.0;

const TITLE: &str = "Styling Articles on the Fly";
const BODY: &[&str] = &[
    "Typography carries more of a text than most readers notice. The same \
     paragraph set in a generous serif on warm paper reads as a letter; set in \
     a tight sans on cold white it reads as a manual.",
    "Open the panel with the arrow in the corner, pick a font, a size, the \
     colors and the width of the column, then press Apply to see the article \
     take on the new style. Reset brings back the house defaults.",
    "Edits in the panel stay private until they are applied. Close the panel \
     by clicking anywhere outside it; your staged choices are still there when \
     you open it again.",
];

/// Article style resolved into values egui can draw with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font_family: egui::FontFamily,
    pub font_size: f32,
    pub text_color: egui::Color32,
    pub background: egui::Color32,
    pub content_width: f32,
}

impl ResolvedStyle {
    /// `families` are the font families registered with egui; unknown
    /// families fall back to the proportional font.
    pub fn resolve(style: &ArticleStyleState, families: &[egui::FontFamily]) -> Self {
        let named = egui::FontFamily::Name(style.font_family.value.as_str().into());
        let font_family = if families.contains(&named) {
            named
        } else {
            egui::FontFamily::Proportional
        };
        Self {
            font_family,
            font_size: parse_px(&style.font_size.value).unwrap_or(FALLBACK_FONT_SIZE),
            text_color: parse_color(&style.font_color.value).unwrap_or(egui::Color32::BLACK),
            background: parse_color(&style.background_color.value)
                .unwrap_or(egui::Color32::WHITE),
            content_width: parse_px(&style.content_width.value)
                .unwrap_or(FALLBACK_CONTENT_WIDTH),
        }
    }
}

/// Parses CSS-like pixel lengths such as `18px` or `948`.
pub fn parse_px(raw: &str) -> Option<f32> {
    let raw = raw.trim();
    let number = raw.strip_suffix("px").unwrap_or(raw).trim();
    number.parse::<f32>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

pub fn parse_color(raw: &str) -> Option<egui::Color32> {
    egui::Color32::from_hex(raw.trim()).ok()
}

/// Fills the central panel with the article in the committed style.
pub fn show(ctx: &egui::Context, style: &ArticleStyleState) {
    let families = ctx.fonts(|fonts| fonts.families());
    let resolved = ResolvedStyle::resolve(style, &families);

    let frame = egui::Frame::central_panel(&ctx.style()).fill(resolved.background);
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            let available = ui.available_width();
            let width = resolved.content_width.min(available - 2.0 * PAGE_MARGIN).max(1.0);
            let margin = ((available - width) / 2.0).max(0.0);
            ui.add_space(PAGE_MARGIN * 2.0);
            ui.horizontal(|ui| {
                ui.add_space(margin);
                ui.vertical(|ui| {
                    ui.set_width(width);
                    show_text(ui, &resolved);
                });
            });
        });
    });
}

fn show_text(ui: &mut egui::Ui, style: &ResolvedStyle) {
    let text = |s: &str, scale: f32| {
        egui::RichText::new(s)
            .family(style.font_family.clone())
            .size(style.font_size * scale)
            .color(style.text_color)
    };
    ui.label(text(TITLE, 2.0).strong());
    ui.add_space(style.font_size);
    for &paragraph in BODY {
        ui.label(text(paragraph, 1.0));
        ui.add_space(style.font_size * 0.75);
    }
}
