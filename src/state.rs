use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
/// One selectable choice within a style category.
pub struct StyleOption {
    pub label: String,
    pub value: String,
    /// Display token for the choice, e.g. a font slug.
    #[serde(default)]
    pub token: Option<String>,
}

impl StyleOption {
    pub fn new(label: &str, value: &str, token: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            token: token.map(str::to_string),
        }
    }
}

/// Keys of the five fields of [`ArticleStyleState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl StyleField {
    /// Form order.
    pub const ALL: [StyleField; 5] = [
        StyleField::FontFamily,
        StyleField::FontSize,
        StyleField::FontColor,
        StyleField::BackgroundColor,
        StyleField::ContentWidth,
    ];

    pub fn key(self) -> &'static str {
        match self {
            StyleField::FontFamily => "font_family",
            StyleField::FontSize => "font_size",
            StyleField::FontColor => "font_color",
            StyleField::BackgroundColor => "background_color",
            StyleField::ContentWidth => "content_width",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StyleField::FontFamily => "Font",
            StyleField::FontSize => "Font size",
            StyleField::FontColor => "Font color",
            StyleField::BackgroundColor => "Background color",
            StyleField::ContentWidth => "Content width",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Display style of the article, one option per category.
pub struct ArticleStyleState {
    pub font_family: StyleOption,
    pub font_size: StyleOption,
    pub font_color: StyleOption,
    pub background_color: StyleOption,
    pub content_width: StyleOption,
}

impl ArticleStyleState {
    pub fn get(&self, field: StyleField) -> &StyleOption {
        match field {
            StyleField::FontFamily => &self.font_family,
            StyleField::FontSize => &self.font_size,
            StyleField::FontColor => &self.font_color,
            StyleField::BackgroundColor => &self.background_color,
            StyleField::ContentWidth => &self.content_width,
        }
    }

    fn slot_mut(&mut self, field: StyleField) -> &mut StyleOption {
        match field {
            StyleField::FontFamily => &mut self.font_family,
            StyleField::FontSize => &mut self.font_size,
            StyleField::FontColor => &mut self.font_color,
            StyleField::BackgroundColor => &mut self.background_color,
            StyleField::ContentWidth => &mut self.content_width,
        }
    }

    /// Returns a copy of this state with `field` replaced by `value`.
    pub fn with_field(&self, field: StyleField, value: StyleOption) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = value;
        next
    }
}
