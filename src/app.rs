use crate::{
    article,
    catalog::StyleCatalog,
    config::AppConfig,
    panel::StylePanel,
    pointer::{PointerHub, PointerPress},
    state::ArticleStyleState,
};

pub struct ArticleApp {
    /// Style the article is rendered with; written only by the panel's commit.
    article_style: ArticleStyleState,
    panel: StylePanel,
    pointer_hub: PointerHub,
    config: AppConfig,
}

impl ArticleApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        catalog: StyleCatalog,
    ) -> Self {
        let article_style = catalog.default_state().clone();
        let pointer_hub = PointerHub::new();
        let panel = StylePanel::new(&article_style, catalog, pointer_hub.clone());
        Self {
            article_style,
            panel,
            pointer_hub,
            config,
        }
    }
}

/// Pointer presses of the current frame, in arrival order.
fn pointer_presses(input: &egui::InputState) -> Vec<PointerPress> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerButton {
                pos, pressed: true, ..
            } => Some(PointerPress { pos: *pos }),
            _ => None,
        })
        .collect()
}

impl eframe::App for ArticleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window size for saving on exit
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_width = Some(rect.width());
            self.config.window_height = Some(rect.height());
        }

        // Presses are checked against the panel region of the previous frame
        for press in ctx.input(pointer_presses) {
            self.pointer_hub.dispatch(&press);
        }

        let article_style = &mut self.article_style;
        self.panel.show(ctx, &mut |next| {
            tracing::info!(
                font = %next.font_family.value,
                size = %next.font_size.value,
                "article style committed"
            );
            *article_style = next;
        });

        article::show(ctx, &self.article_style);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.save();
    }
}
