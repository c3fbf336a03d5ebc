//! Single-choice option controls used by the style panel.

use crate::state::{StyleField, StyleOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Dropdown,
    RadioGroup,
}

impl ControlKind {
    pub fn for_field(field: StyleField) -> Self {
        match field {
            StyleField::FontSize => ControlKind::RadioGroup,
            _ => ControlKind::Dropdown,
        }
    }
}

/// Shows `title` and the `options`, marking `selected`.
///
/// Returns the option the user picked this frame, if any. Only members of
/// `options` are ever returned.
pub fn option_control(
    ui: &mut egui::Ui,
    kind: ControlKind,
    id_salt: &str,
    title: &str,
    options: &[StyleOption],
    selected: &StyleOption,
) -> Option<StyleOption> {
    ui.label(egui::RichText::new(title).strong());
    match kind {
        ControlKind::Dropdown => dropdown(ui, id_salt, options, selected),
        ControlKind::RadioGroup => radio_group(ui, options, selected),
    }
}

fn dropdown(
    ui: &mut egui::Ui,
    id_salt: &str,
    options: &[StyleOption],
    selected: &StyleOption,
) -> Option<StyleOption> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(selected.label.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in options {
                if ui
                    .selectable_label(option == selected, option.label.as_str())
                    .clicked()
                {
                    picked = Some(option.clone());
                }
            }
        });
    picked
}

fn radio_group(
    ui: &mut egui::Ui,
    options: &[StyleOption],
    selected: &StyleOption,
) -> Option<StyleOption> {
    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for option in options {
            if ui.radio(option == selected, option.label.as_str()).clicked() {
                picked = Some(option.clone());
            }
        }
    });
    picked
}
