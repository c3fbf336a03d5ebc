use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::state::{ArticleStyleState, StyleField, StyleOption};

/// The choices offered for each style field, plus the state reset restores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCatalog {
    font_families: Vec<StyleOption>,
    font_sizes: Vec<StyleOption>,
    font_colors: Vec<StyleOption>,
    background_colors: Vec<StyleOption>,
    content_widths: Vec<StyleOption>,
    default_state: ArticleStyleState,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    font_families: Vec<StyleOption>,
    font_sizes: Vec<StyleOption>,
    font_colors: Vec<StyleOption>,
    background_colors: Vec<StyleOption>,
    content_widths: Vec<StyleOption>,
    default: DefaultSelection,
}

/// Default choice per field, named by option `value`.
#[derive(Debug, Deserialize)]
struct DefaultSelection {
    font_family: String,
    font_size: String,
    font_color: String,
    background_color: String,
    content_width: String,
}

// (label, value, token)
const FONT_FAMILIES: &[(&str, &str, &str)] = &[
    ("Open Sans", "Open Sans", "open-sans"),
    ("Ubuntu", "Ubuntu", "ubuntu"),
    ("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    ("Days One", "Days One", "days-one"),
    ("Merriweather", "Merriweather", "merriweather"),
];

const FONT_SIZES: &[(&str, &str, &str)] = &[
    ("18px", "18px", "font-size-18"),
    ("25px", "25px", "font-size-25"),
    ("38px", "38px", "font-size-38"),
];

const FONT_COLORS: &[(&str, &str, &str)] = &[
    ("Black", "#000000", "font-black"),
    ("White", "#FFFFFF", "font-white"),
    ("Gray", "#C4C4C4", "font-gray"),
    ("Pink", "#FEAFE8", "font-pink"),
    ("Fuchsia", "#FD24AF", "font-fuchsia"),
    ("Red", "#FD2D2D", "font-red"),
    ("Orange", "#FD5A0A", "font-orange"),
    ("Yellow", "#FFC802", "font-yellow"),
    ("Green", "#80D994", "font-green"),
    ("Blue", "#6FC1FD", "font-blue"),
    ("Purple", "#5F34E5", "font-purple"),
    ("Beige", "#E0D5C6", "font-beige"),
    ("Light gray", "#F5F5F5", "font-light-gray"),
];

const BACKGROUND_COLORS: &[(&str, &str, &str)] = &[
    ("White", "#FFFFFF", "bg-white"),
    ("Black", "#000000", "bg-black"),
    ("Gray", "#C4C4C4", "bg-gray"),
    ("Pink", "#FEAFE8", "bg-pink"),
    ("Fuchsia", "#FD24AF", "bg-fuchsia"),
    ("Red", "#FD2D2D", "bg-red"),
    ("Orange", "#FD5A0A", "bg-orange"),
    ("Yellow", "#FFC802", "bg-yellow"),
    ("Green", "#80D994", "bg-green"),
    ("Blue", "#6FC1FD", "bg-blue"),
    ("Purple", "#5F34E5", "bg-purple"),
    ("Beige", "#E0D5C6", "bg-beige"),
];

const CONTENT_WIDTHS: &[(&str, &str, &str)] = &[
    ("Wide", "1394px", "width-wide"),
    ("Narrow", "948px", "width-narrow"),
];

fn to_options(table: &[(&str, &str, &str)]) -> Vec<StyleOption> {
    table
        .iter()
        .map(|(label, value, token)| StyleOption::new(label, value, Some(*token)))
        .collect()
}

impl StyleCatalog {
    /// Catalog compiled into the binary.
    pub fn builtin() -> Self {
        let font_families = to_options(FONT_FAMILIES);
        let font_sizes = to_options(FONT_SIZES);
        let font_colors = to_options(FONT_COLORS);
        let background_colors = to_options(BACKGROUND_COLORS);
        let content_widths = to_options(CONTENT_WIDTHS);
        let default_state = ArticleStyleState {
            font_family: font_families[0].clone(),
            font_size: font_sizes[0].clone(),
            font_color: font_colors[0].clone(),
            background_color: background_colors[0].clone(),
            content_width: content_widths[0].clone(),
        };
        Self {
            font_families,
            font_sizes,
            font_colors,
            background_colors,
            content_widths,
            default_state,
        }
    }

    /// Reads and validates a TOML catalog file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading style catalog {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid style catalog {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let CatalogFile {
            font_families,
            font_sizes,
            font_colors,
            background_colors,
            content_widths,
            default,
        } = toml::from_str(contents)?;

        check_options(StyleField::FontFamily, &font_families)?;
        check_options(StyleField::FontSize, &font_sizes)?;
        check_options(StyleField::FontColor, &font_colors)?;
        check_options(StyleField::BackgroundColor, &background_colors)?;
        check_options(StyleField::ContentWidth, &content_widths)?;

        let default_state = ArticleStyleState {
            font_family: lookup(StyleField::FontFamily, &font_families, &default.font_family)?,
            font_size: lookup(StyleField::FontSize, &font_sizes, &default.font_size)?,
            font_color: lookup(StyleField::FontColor, &font_colors, &default.font_color)?,
            background_color: lookup(
                StyleField::BackgroundColor,
                &background_colors,
                &default.background_color,
            )?,
            content_width: lookup(
                StyleField::ContentWidth,
                &content_widths,
                &default.content_width,
            )?,
        };
        Ok(Self {
            font_families,
            font_sizes,
            font_colors,
            background_colors,
            content_widths,
            default_state,
        })
    }

    pub fn options(&self, field: StyleField) -> &[StyleOption] {
        match field {
            StyleField::FontFamily => &self.font_families,
            StyleField::FontSize => &self.font_sizes,
            StyleField::FontColor => &self.font_colors,
            StyleField::BackgroundColor => &self.background_colors,
            StyleField::ContentWidth => &self.content_widths,
        }
    }

    pub fn default_state(&self) -> &ArticleStyleState {
        &self.default_state
    }

    /// True when every field of `state` is one of this catalog's choices.
    pub fn contains(&self, state: &ArticleStyleState) -> bool {
        StyleField::ALL
            .iter()
            .all(|&field| self.options(field).contains(state.get(field)))
    }
}

fn lookup(field: StyleField, options: &[StyleOption], value: &str) -> anyhow::Result<StyleOption> {
    match options.iter().find(|o| o.value == value) {
        Some(option) => Ok(option.clone()),
        None => bail!(
            "default {} {:?} is not one of the catalog choices",
            field.key(),
            value
        ),
    }
}

fn check_options(field: StyleField, options: &[StyleOption]) -> anyhow::Result<()> {
    if options.is_empty() {
        bail!("catalog for {} has no choices", field.key());
    }
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.value.as_str()) {
            bail!("catalog for {} lists {:?} twice", field.key(), option.value);
        }
    }
    Ok(())
}
