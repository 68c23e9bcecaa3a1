//! # Gallery Application State
//!
//! `GalleryApp` owns everything a session needs: the loaded dataset, the
//! derived filter options, the current `FilterState`, the engine and the
//! view it renders into. All reads and updates go through its methods.
//!
//! Lifecycle:
//! 1. `start` loads the dataset once
//! 2. filter options are derived and appended to the controls
//! 3. the initial selection is applied and rendered
//! 4. every `on_control_change` re-applies filter + sort + render

use std::time::Instant;

use tracing::{debug, error, info};

use data_loader::{Dataset, DatasetSource, FetchError, MovieRecord};
use pipeline::{derive_filter_options, FilterOptions, FilterSortEngine, FilterState};

use crate::dom::{Control, GalleryView};
use crate::render::{populate_filters, render_movies};

/// A running gallery session
pub struct GalleryApp<V: GalleryView> {
    dataset: Dataset,
    options: FilterOptions,
    filter_state: FilterState,
    engine: FilterSortEngine,
    view: V,
}

impl<V: GalleryView> GalleryApp<V> {
    /// Load the dataset and initialise the page.
    ///
    /// If the load fails the view is never touched: no options are added and
    /// nothing is rendered. Pass `&mut view` to keep the page afterwards.
    pub async fn start(source: &DatasetSource, view: V) -> Result<Self, FetchError> {
        info!("Loading movies from {}", source);
        let dataset = Dataset::load(source).await.map_err(|e| {
            error!("Failed to load movies: {}", e);
            e
        })?;
        Ok(Self::with_dataset(dataset, view))
    }

    /// Initialise the page from an already-loaded dataset.
    pub fn with_dataset(dataset: Dataset, mut view: V) -> Self {
        let options = derive_filter_options(dataset.movies());
        populate_filters(&mut view, &options);
        info!(
            "Derived {} character options and {} phase options",
            options.characters.len(),
            options.phases.len()
        );

        let mut app = Self {
            dataset,
            options,
            filter_state: FilterState::default(),
            engine: FilterSortEngine::default(),
            view,
        };
        app.apply_filters_and_sort();
        app
    }

    /// A user picked `value` on `control`. Re-renders synchronously.
    pub fn on_control_change(&mut self, control: Control, value: &str) {
        debug!("Control {} changed to {:?}", control, value);
        self.view.set_control_value(control, value);
        self.apply_filters_and_sort();
    }

    /// Read the controls into the filter state, then filter, sort and render.
    pub fn apply_filters_and_sort(&mut self) {
        let start = Instant::now();
        self.sync_filter_state();

        let visible = self.engine.apply(self.dataset.movies(), &self.filter_state);
        render_movies(&mut self.view, &visible);

        debug!(
            "Rendered {} of {} movies in {:?}",
            visible.len(),
            self.dataset.len(),
            start.elapsed()
        );
    }

    /// The ordered subset for the current selections
    pub fn visible_movies(&self) -> Vec<&MovieRecord> {
        self.engine.apply(self.dataset.movies(), &self.filter_state)
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter_state
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn sync_filter_state(&mut self) {
        let state = FilterState::from_control_values(
            &self.view.control_value(Control::Sort),
            &self.view.control_value(Control::Character),
            &self.view.control_value(Control::Phase),
        );
        if state != self.filter_state {
            debug!("Filter state changed: {:?}", state);
            self.filter_state = state;
        }
    }
}
