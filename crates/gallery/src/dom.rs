//! The page elements the gallery reads from and renders into.
//!
//! The gallery does not own the page. It talks to a `GalleryView`, which
//! stands for the gallery container, the empty-state element and the three
//! select controls.

use crate::card::Card;
use std::fmt;

/// Class that hides an element
pub const HIDDEN_CLASS: &str = "d-none";

/// The three select controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Sort,
    Character,
    Phase,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Sort, Control::Character, Control::Phase];

    /// Element id of the control in the page
    pub fn element_id(&self) -> &'static str {
        match self {
            Control::Sort => "sortSelect",
            Control::Character => "characterFilter",
            Control::Phase => "phaseFilter",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// The page collaborators used by the gallery.
pub trait GalleryView {
    /// Current value of a select control
    fn control_value(&self, control: Control) -> String;

    /// Select a value on a control, as a user would
    fn set_control_value(&mut self, control: Control, value: &str);

    /// Append one option at the end of a control's option list
    fn append_option(&mut self, control: Control, value: &str, label: &str);

    /// Replace every child of the gallery container with `cards`
    fn replace_gallery(&mut self, cards: Vec<Card>);

    /// Remove every child of the gallery container
    fn clear_gallery(&mut self);

    /// Show or hide the empty-state element (toggles `HIDDEN_CLASS`)
    fn set_empty_state_visible(&mut self, visible: bool);
}

impl<T: GalleryView + ?Sized> GalleryView for &mut T {
    fn control_value(&self, control: Control) -> String {
        (**self).control_value(control)
    }

    fn set_control_value(&mut self, control: Control, value: &str) {
        (**self).set_control_value(control, value)
    }

    fn append_option(&mut self, control: Control, value: &str, label: &str) {
        (**self).append_option(control, value, label)
    }

    fn replace_gallery(&mut self, cards: Vec<Card>) {
        (**self).replace_gallery(cards)
    }

    fn clear_gallery(&mut self) {
        (**self).clear_gallery()
    }

    fn set_empty_state_visible(&mut self, visible: bool) {
        (**self).set_empty_state_visible(visible)
    }
}
