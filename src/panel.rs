use crate::catalog::StyleCatalog;
use crate::controls::{ControlKind, option_control};
use crate::pointer::PointerHub;
use crate::state::{ArticleStyleState, StyleField, StyleOption};
use crate::visibility::Visibility;

const PANEL_WIDTH: f32 = 340.0;
const TOGGLE_MARGIN: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Reset,
}

/// Side panel that stages article style edits until they are applied.
///
/// The committed style is owned by the caller. The panel copies it once on
/// construction and only reports changes through the `commit` callback given
/// to [`StylePanel::submit`], [`StylePanel::reset`] and [`StylePanel::show`].
/// Later changes to the committed style are not copied back into the staged
/// edits.
pub struct StylePanel {
    visibility: Visibility,
    catalog: StyleCatalog,
    staged: ArticleStyleState,
}

impl StylePanel {
    pub fn new(committed: &ArticleStyleState, catalog: StyleCatalog, hub: PointerHub) -> Self {
        debug_assert!(catalog.contains(committed));
        Self {
            visibility: Visibility::new(hub),
            catalog,
            staged: committed.clone(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn toggle(&mut self) {
        self.visibility.toggle();
        tracing::debug!(open = self.is_open(), "style panel toggled");
    }

    pub fn staged(&self) -> &ArticleStyleState {
        &self.staged
    }

    pub fn set_field(&mut self, field: StyleField, value: StyleOption) {
        tracing::debug!(field = field.key(), value = %value.value, "staged style edit");
        self.staged = self.staged.with_field(field, value);
    }

    /// Hands the staged style to `commit`. The staged style is kept as is.
    pub fn submit(&mut self, commit: &mut dyn FnMut(ArticleStyleState)) {
        tracing::debug!(style = ?self.staged, "applying staged style");
        commit(self.staged.clone());
    }

    /// Restores the default style on both the staged and committed side.
    pub fn reset(&mut self, commit: &mut dyn FnMut(ArticleStyleState)) {
        tracing::debug!("resetting style to defaults");
        let defaults = self.catalog.default_state();
        self.staged = defaults.clone();
        commit(defaults.clone());
    }

    pub fn handle(&mut self, action: FormAction, commit: &mut dyn FnMut(ArticleStyleState)) {
        match action {
            FormAction::Submit => self.submit(commit),
            FormAction::Reset => self.reset(commit),
        }
    }

    /// Draws the toggle button and, while open, the form.
    ///
    /// Must run before the central panel of the frame.
    pub fn show(&mut self, ctx: &egui::Context, commit: &mut dyn FnMut(ArticleStyleState)) {
        self.visibility.sync();

        let mut action = None;
        let mut root = Vec::with_capacity(2);
        if self.is_open() {
            let panel = egui::SidePanel::left("style_panel")
                .resizable(false)
                .exact_width(PANEL_WIDTH)
                .show(ctx, |ui| self.show_form(ui));
            action = panel.inner;
            root.push(panel.response.rect);
        }

        let open = self.is_open();
        let toggle_x = if open {
            PANEL_WIDTH + TOGGLE_MARGIN
        } else {
            TOGGLE_MARGIN
        };
        let toggle = egui::Area::new(egui::Id::new("style_panel_toggle"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(toggle_x, TOGGLE_MARGIN))
            .show(ctx, |ui| {
                let arrow = if open { "◀" } else { "▶" };
                ui.add(egui::Button::new(egui::RichText::new(arrow).size(20.0)).selected(open))
                    .on_hover_text("Article style")
            });
        root.push(toggle.response.rect);
        self.visibility.set_root(root);

        if let Some(action) = action {
            self.handle(action, commit);
        }
        if toggle.inner.clicked() {
            self.toggle();
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) -> Option<FormAction> {
        ui.add_space(TOGGLE_MARGIN);
        ui.heading(egui::RichText::new("SET PARAMETERS").strong());
        ui.add_space(16.0);

        for field in StyleField::ALL {
            if field == StyleField::BackgroundColor {
                ui.separator();
            }
            let picked = option_control(
                ui,
                ControlKind::for_field(field),
                field.key(),
                field.title(),
                self.catalog.options(field),
                self.staged.get(field),
            );
            if let Some(value) = picked {
                self.set_field(field, value);
            }
            ui.add_space(12.0);
        }

        let mut action = None;
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
            ui.add_space(TOGGLE_MARGIN);
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    action = Some(FormAction::Reset);
                }
                let apply = egui::Button::new("Apply").fill(ui.visuals().selection.bg_fill);
                if ui.add(apply).clicked() {
                    action = Some(FormAction::Submit);
                }
            });
        });
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PointerPress;

    fn catalog() -> StyleCatalog {
        StyleCatalog::builtin()
    }

    fn option(field: StyleField, value: &str) -> StyleOption {
        catalog()
            .options(field)
            .iter()
            .find(|o| o.value == value)
            .cloned()
            .unwrap()
    }

    /// A committed style that differs from the defaults in every field.
    fn committed() -> ArticleStyleState {
        ArticleStyleState {
            font_family: option(StyleField::FontFamily, "Merriweather"),
            font_size: option(StyleField::FontSize, "25px"),
            font_color: option(StyleField::FontColor, "#5F34E5"),
            background_color: option(StyleField::BackgroundColor, "#E0D5C6"),
            content_width: option(StyleField::ContentWidth, "948px"),
        }
    }

    fn panel(hub: &PointerHub) -> StylePanel {
        StylePanel::new(&committed(), catalog(), hub.clone())
    }

    #[test]
    fn staged_state_is_seeded_from_committed() {
        let panel = panel(&PointerHub::new());
        assert_eq!(panel.staged(), &committed());
        assert!(!panel.is_open());
    }

    #[test]
    fn set_field_changes_only_that_field() {
        let mut panel = panel(&PointerHub::new());
        let before = panel.staged().clone();
        let red = option(StyleField::FontColor, "#FD2D2D");

        panel.set_field(StyleField::FontColor, red.clone());

        assert_eq!(panel.staged(), &before.with_field(StyleField::FontColor, red));
        assert_eq!(panel.staged().font_family, before.font_family);
        assert_eq!(panel.staged().font_size, before.font_size);
        assert_eq!(panel.staged().background_color, before.background_color);
        assert_eq!(panel.staged().content_width, before.content_width);
    }

    #[test]
    fn set_field_never_commits() {
        let mut panel = panel(&PointerHub::new());
        panel.toggle();
        panel.set_field(StyleField::FontSize, option(StyleField::FontSize, "38px"));
        panel.set_field(StyleField::ContentWidth, option(StyleField::ContentWidth, "1394px"));

        let mut calls = 0;
        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                panel.show(ctx, &mut |_| calls += 1);
            });
        }

        assert_eq!(calls, 0);
        assert_eq!(panel.staged().font_size.value, "38px");
    }

    #[test]
    fn submit_commits_exactly_the_staged_values() {
        let mut panel = panel(&PointerHub::new());
        let blue = option(StyleField::BackgroundColor, "#6FC1FD");
        panel.set_field(StyleField::BackgroundColor, blue.clone());

        let mut commits = Vec::new();
        panel.submit(&mut |state| commits.push(state));

        assert_eq!(commits.len(), 1);
        let sent = &commits[0];
        let seed = committed();
        assert_eq!(sent.font_family, seed.font_family);
        assert_eq!(sent.background_color, blue);
        assert_eq!(sent.font_size, seed.font_size);
        assert_eq!(sent.font_color, seed.font_color);
        assert_eq!(sent.content_width, seed.content_width);
        assert_eq!(panel.staged(), sent);
    }

    #[test]
    fn reset_restores_defaults_on_both_sides() {
        let mut panel = panel(&PointerHub::new());
        panel.set_field(StyleField::FontFamily, option(StyleField::FontFamily, "Days One"));
        panel.set_field(StyleField::FontColor, option(StyleField::FontColor, "#FD24AF"));

        let mut commits = Vec::new();
        panel.reset(&mut |state| commits.push(state));

        let defaults = catalog().default_state().clone();
        assert_eq!(commits, vec![defaults.clone()]);
        assert_eq!(panel.staged(), &defaults);
    }

    #[test]
    fn submit_and_reset_leave_visibility_alone() {
        let hub = PointerHub::new();
        let mut panel = panel(&hub);
        panel.toggle();

        panel.handle(FormAction::Submit, &mut |_| {});
        assert!(panel.is_open());
        panel.handle(FormAction::Reset, &mut |_| {});
        assert!(panel.is_open());
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn panels_on_one_hub_keep_separate_state() {
        let hub = PointerHub::new();
        let mut first = panel(&hub);
        let second = panel(&hub);

        first.toggle();
        first.set_field(StyleField::FontSize, option(StyleField::FontSize, "18px"));

        assert!(!second.is_open());
        assert_eq!(second.staged(), &committed());
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn dropping_open_panel_releases_listener() {
        let hub = PointerHub::new();
        let mut panel = panel(&hub);
        panel.toggle();
        assert_eq!(hub.listener_count(), 1);
        drop(panel);
        assert_eq!(hub.listener_count(), 0);
    }

    fn render_open(panel: &mut StylePanel) {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1200.0, 800.0),
            )),
            ..Default::default()
        };
        // New areas are measured on their first frame.
        for _ in 0..2 {
            let _ = ctx.run(input.clone(), |ctx| {
                panel.show(ctx, &mut |_| {});
            });
        }
    }

    fn press(x: f32, y: f32) -> PointerPress {
        PointerPress {
            pos: egui::pos2(x, y),
        }
    }

    #[test]
    fn rendered_panel_closes_on_outside_press_only() {
        let hub = PointerHub::new();
        let mut panel = panel(&hub);
        panel.toggle();
        render_open(&mut panel);

        hub.dispatch(&press(PANEL_WIDTH / 2.0, 300.0));
        assert!(panel.is_open());

        hub.dispatch(&press(PANEL_WIDTH * 3.0, 300.0));
        assert!(!panel.is_open());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn press_on_toggle_does_not_dismiss() {
        let hub = PointerHub::new();
        let mut panel = panel(&hub);
        panel.toggle();
        render_open(&mut panel);

        hub.dispatch(&press(
            PANEL_WIDTH + TOGGLE_MARGIN + 5.0,
            TOGGLE_MARGIN + 5.0,
        ));
        assert!(panel.is_open());
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn press_in_article_below_toggle_dismisses() {
        let hub = PointerHub::new();
        let mut panel = panel(&hub);
        panel.toggle();
        render_open(&mut panel);

        hub.dispatch(&press(PANEL_WIDTH + TOGGLE_MARGIN + 5.0, 700.0));
        assert!(!panel.is_open());
        assert_eq!(hub.listener_count(), 0);
    }
}
