//! Gallery cards.
//!
//! A `Card` is the display form of one `MovieRecord`: every default has
//! already been substituted, so rendering a card never fails.

use crate::markup::{escape_attr, escape_text, js_string};
use chrono::NaiveDate;
use data_loader::{MovieRecord, ReleaseDate};

/// Poster shown when a movie has no poster, or its poster fails to load
pub const PLACEHOLDER_POSTER: &str = "data:image/svg+xml;charset=UTF-8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='400' height='600'%3E%3Crect fill='%2314181f' width='400' height='600'/%3E%3Ctext x='50%25' y='50%25' fill='%23ffffff' font-size='28' font-family='Helvetica' text-anchor='middle'%3ENo%20Image%3C/text%3E%3C/svg%3E";

/// Character badge text for movies without a main character
pub const DEFAULT_CHARACTER_LABEL: &str = "MCU";

/// Release text for dates that could not be parsed
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Format a date as "May 2, 2008"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Release text for a card
pub fn format_release_date(release_date: &ReleaseDate) -> String {
    release_date
        .date()
        .map(format_date)
        .unwrap_or_else(|| INVALID_DATE_LABEL.to_string())
}

// =============================================================================
// Poster Image
// =============================================================================

/// The poster element of one card, with its load-error handler.
///
/// The first load error swaps the source to the placeholder and disarms the
/// handler, so a failing placeholder cannot trigger another swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterImage {
    src: String,
    fallback_armed: bool,
}

impl PosterImage {
    /// A poster for an optional URL. Without a URL the placeholder is used
    /// straight away and no handler is armed.
    pub fn new(url: Option<&str>) -> Self {
        match url {
            Some(url) if !url.is_empty() => Self {
                src: url.to_string(),
                fallback_armed: true,
            },
            _ => Self {
                src: PLACEHOLDER_POSTER.to_string(),
                fallback_armed: false,
            },
        }
    }

    /// Current image source
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_placeholder(&self) -> bool {
        self.src == PLACEHOLDER_POSTER
    }

    /// Handle a load error. Returns `true` if the source was swapped.
    pub fn on_load_error(&mut self) -> bool {
        if !self.fallback_armed {
            return false;
        }
        self.fallback_armed = false;
        self.src = PLACEHOLDER_POSTER.to_string();
        true
    }

    fn to_html(&self, title: &str) -> String {
        let mut html = format!(
            r#"<img src="{}" alt="Poster for {}""#,
            escape_attr(&self.src),
            escape_attr(title)
        );
        if self.fallback_armed {
            // The handler clears itself before swapping, same as on_load_error
            let handler = format!(
                "this.onerror=null;this.src={};",
                js_string(PLACEHOLDER_POSTER)
            );
            html.push_str(&format!(r#" onerror="{}""#, escape_attr(&handler)));
        }
        html.push('>');
        html
    }
}

// =============================================================================
// Card
// =============================================================================

/// Display data for one movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub poster: PosterImage,
    pub title: String,
    /// Empty when the movie has no phase
    pub phase: String,
    pub character: String,
    pub release: String,
    /// `#3`, or `#?` when the movie has no chronological order
    pub story_order: String,
}

impl Card {
    pub fn from_movie(movie: &MovieRecord) -> Self {
        Self {
            poster: PosterImage::new(movie.poster_url.as_deref()),
            title: movie.title.clone(),
            phase: movie.phase.clone().unwrap_or_default(),
            character: movie
                .main_character
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CHARACTER_LABEL.to_string()),
            release: format_release_date(&movie.release_date),
            story_order: match movie.chronological_order {
                Some(order) => format!("#{}", order),
                None => "#?".to_string(),
            },
        }
    }

    /// Card markup. All field text is escaped.
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="col-12 col-sm-6 col-lg-4 col-xl-3">
  <div class="movie-card h-100">
    {poster}
    <div class="p-3 d-flex flex-column gap-2">
      <div class="d-flex justify-content-between align-items-center">
        <span class="badge badge-phase">{phase}</span>
        <span class="badge badge-character">{character}</span>
      </div>
      <h5 class="mb-1">{title}</h5>
      <div class="movie-meta">
        <div>Release: {release}</div>
        <div>Story Order: {story_order}</div>
      </div>
    </div>
  </div>
</div>
"#,
            poster = self.poster.to_html(&self.title),
            phase = escape_text(&self.phase),
            character = escape_text(&self.character),
            title = escape_text(&self.title),
            release = escape_text(&self.release),
            story_order = escape_text(&self.story_order),
        )
    }
}
