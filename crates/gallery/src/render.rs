//! Rendering into a `GalleryView`.

use crate::card::Card;
use crate::dom::{Control, GalleryView};
use data_loader::MovieRecord;
use pipeline::FilterOptions;
use tracing::debug;

/// Render an ordered list of movies.
///
/// An empty list clears the gallery and reveals the empty state. Otherwise
/// the empty state is hidden and the gallery contents are replaced with one
/// card per movie, in order.
pub fn render_movies<V: GalleryView + ?Sized>(view: &mut V, movies: &[&MovieRecord]) {
    if movies.is_empty() {
        debug!("Nothing to show, revealing empty state");
        view.clear_gallery();
        view.set_empty_state_visible(true);
        return;
    }

    view.set_empty_state_visible(false);
    let cards: Vec<Card> = movies.iter().map(|movie| Card::from_movie(movie)).collect();
    debug!("Rendering {} cards", cards.len());
    view.replace_gallery(cards);
}

/// Add one option per derived label to the character and phase controls.
///
/// The controls already hold their "all" option; labels are appended after
/// it in the order given.
pub fn populate_filters<V: GalleryView + ?Sized>(view: &mut V, options: &FilterOptions) {
    for character in &options.characters {
        view.append_option(Control::Character, character, character);
    }
    for phase in &options.phases {
        view.append_option(Control::Phase, phase, phase);
    }
}
