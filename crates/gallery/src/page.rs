//! In-memory page document.
//!
//! `PageDocument` implements `GalleryView` without a browser. It starts in
//! the same state as the static page before any data arrives, and can be
//! serialised to a complete HTML page at any point.

use crate::card::Card;
use crate::dom::{Control, GalleryView, HIDDEN_CLASS};
use crate::markup::{escape_attr, escape_text};
use pipeline::state::{ALL, CHRONOLOGICAL, RELEASE_DATE};
use std::collections::BTreeSet;

/// One `<option>` of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A `<select>` element and its current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectControl {
    pub options: Vec<SelectOption>,
    pub value: String,
}

impl SelectControl {
    fn new(options: Vec<SelectOption>) -> Self {
        let value = options.first().map(|o| o.value.clone()).unwrap_or_default();
        Self { options, value }
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    fn to_html(&self, id: &str, label: &str) -> String {
        let mut html = format!(
            r#"<div class="col-12 col-md-4">
  <label class="form-label" for="{id}">{label}</label>
  <select id="{id}" class="form-select">
"#,
            id = id,
            label = escape_text(label),
        );
        for option in &self.options {
            let selected = if option.value == self.value { " selected" } else { "" };
            html.push_str(&format!(
                "    <option value=\"{}\"{}>{}</option>\n",
                escape_attr(&option.value),
                selected,
                escape_text(&option.label)
            ));
        }
        html.push_str("  </select>\n</div>\n");
        html
    }
}

/// The gallery page, held in memory.
#[derive(Debug, Clone)]
pub struct PageDocument {
    title: String,
    sort: SelectControl,
    character: SelectControl,
    phase: SelectControl,
    gallery: Vec<Card>,
    empty_state_classes: BTreeSet<String>,
}

impl PageDocument {
    /// A page in its pre-load state: no cards, empty state hidden, and only
    /// the built-in options on each control.
    pub fn new() -> Self {
        Self {
            title: "MCU Movie Gallery".to_string(),
            sort: SelectControl::new(vec![
                SelectOption::new(CHRONOLOGICAL, "Chronological Order"),
                SelectOption::new(RELEASE_DATE, "Release Date"),
            ]),
            character: SelectControl::new(vec![SelectOption::new(ALL, "All Characters")]),
            phase: SelectControl::new(vec![SelectOption::new(ALL, "All Phases")]),
            gallery: Vec::new(),
            empty_state_classes: ["text-center", "text-muted", "py-5", HIDDEN_CLASS]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn control(&self, control: Control) -> &SelectControl {
        match control {
            Control::Sort => &self.sort,
            Control::Character => &self.character,
            Control::Phase => &self.phase,
        }
    }

    fn control_mut(&mut self, control: Control) -> &mut SelectControl {
        match control {
            Control::Sort => &mut self.sort,
            Control::Character => &mut self.character,
            Control::Phase => &mut self.phase,
        }
    }

    /// Cards currently in the gallery container
    pub fn cards(&self) -> &[Card] {
        &self.gallery
    }

    pub fn is_empty_state_visible(&self) -> bool {
        !self.empty_state_classes.contains(HIDDEN_CLASS)
    }

    /// Deliver a poster load error to the card at `index`.
    ///
    /// Returns `true` if the card swapped to the placeholder.
    pub fn report_poster_error(&mut self, index: usize) -> bool {
        self.gallery
            .get_mut(index)
            .map(|card| card.poster.on_load_error())
            .unwrap_or(false)
    }

    /// Serialise the whole page
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str(&format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
  <style>
    body {{ background: #0b0d12; color: #f5f5f5; }}
    .movie-card {{ background: #14181f; border-radius: 12px; overflow: hidden; }}
    .movie-card img {{ width: 100%; aspect-ratio: 2 / 3; object-fit: cover; }}
    .badge-phase {{ background: #e23636; }}
    .badge-character {{ background: #518cca; }}
    .movie-meta {{ font-size: 0.9rem; color: #b0b6c2; }}
  </style>
</head>
<body>
<main class="container py-4">
<h1 class="mb-4">{title}</h1>
<div class="row g-3 mb-4">
"#,
            title = escape_text(&self.title)
        ));

        html.push_str(&self.sort.to_html(Control::Sort.element_id(), "Sort by"));
        html.push_str(&self.character.to_html(Control::Character.element_id(), "Character"));
        html.push_str(&self.phase.to_html(Control::Phase.element_id(), "Phase"));
        html.push_str("</div>\n");

        let classes: Vec<&str> = self.empty_state_classes.iter().map(String::as_str).collect();
        html.push_str(&format!(
            "<div id=\"emptyState\" class=\"{}\">No movies match the selected filters.</div>\n",
            escape_attr(&classes.join(" "))
        ));

        html.push_str("<div id=\"moviesGallery\" class=\"row g-4\">\n");
        for card in &self.gallery {
            html.push_str(&card.to_html());
        }
        html.push_str("</div>\n</main>\n</body>\n</html>\n");
        html
    }
}

impl Default for PageDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryView for PageDocument {
    fn control_value(&self, control: Control) -> String {
        self.control(control).value.clone()
    }

    fn set_control_value(&mut self, control: Control, value: &str) {
        self.control_mut(control).value = value.to_string();
    }

    fn append_option(&mut self, control: Control, value: &str, label: &str) {
        self.control_mut(control)
            .options
            .push(SelectOption::new(value, label));
    }

    fn replace_gallery(&mut self, cards: Vec<Card>) {
        self.gallery = cards;
    }

    fn clear_gallery(&mut self) {
        self.gallery.clear();
    }

    fn set_empty_state_visible(&mut self, visible: bool) {
        if visible {
            self.empty_state_classes.remove(HIDDEN_CLASS);
        } else {
            self.empty_state_classes.insert(HIDDEN_CLASS.to_string());
        }
    }
}
