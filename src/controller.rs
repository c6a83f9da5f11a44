// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! View controller: renders views and keeps them in sync with history.
//!
//! The controller owns the navigation state, the history and the mount point.
//! `show_*` calls made on behalf of the user push history entries; calls made
//! in response to browser navigation (load, back, forward) never do.

use crate::config::RouterConfig;
use crate::history::{HistoryState, NavigationHistory};
use crate::io::media;
use crate::models::{catalog::ProjectCatalog, category::Category};
use crate::mount::RenderTarget;
use crate::navigation::{classify_link, Dispatch, LinkAction, NavigationIntent};
use crate::render::{detail, grid};
use maud::Markup;
use std::sync::Arc;

/// Section id of the featured grid.
const FEATURED_SECTION: &str = "featured";

/// State carried between navigations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Category the visitor last browsed, remembered on project entries.
    pub current_category: Option<String>,
}

/// The view currently rendered into the mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Featured,
    Category(String),
    Project(String),
}

/// Routes navigation to one of the three portfolio views.
pub struct ViewController<H, T> {
    catalog: Arc<ProjectCatalog>,
    history: H,
    target: T,
    config: RouterConfig,
    state: NavigationState,
    view: Option<View>,
}

impl<H: NavigationHistory, T: RenderTarget> ViewController<H, T> {
    /// Create a controller with the default configuration.
    pub fn new(catalog: Arc<ProjectCatalog>, history: H, target: T) -> Self {
        Self::with_config(catalog, history, target, RouterConfig::default())
    }

    pub fn with_config(catalog: Arc<ProjectCatalog>, history: H, target: T, config: RouterConfig) -> Self {
        Self {
            catalog,
            history,
            target,
            config,
            state: NavigationState::default(),
            view: None,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Replace the mount point content. Returns false when there is no mount point.
    fn render(&mut self, markup: Markup, view: View) -> bool {
        if !self.target.is_attached() {
            log::warn!("No mount point, skipping render of {:?}", view);
            return false;
        }
        self.target.replace_content(markup.into_string());
        self.view = Some(view);
        true
    }

    /// Show the featured projects grid.
    pub fn show_featured(&mut self, push_state: bool) {
        log::info!("Showing featured page, push state: {}", push_state);
        let markup = grid::project_grid(FEATURED_SECTION, self.catalog.featured());
        self.render(markup, View::Featured);

        if push_state {
            let title = self.config.featured_title.clone();
            self.history.push(HistoryState::default(), &title, "/");
        }
    }

    /// Show the grid for `category`. Unknown categories render an empty grid.
    pub fn show_category(&mut self, category: &str, push_state: bool) {
        log::info!("Showing category: {}, push state: {}", category, push_state);
        self.state.current_category = Some(category.to_string());

        let markup = grid::project_grid(category, self.catalog.in_category(category));
        self.render(markup, View::Category(category.to_string()));

        if push_state {
            self.history
                .push(HistoryState::category(category), category, &format!("#{}", category));
        }
    }

    /// Show the detail page for `project_id`. Unknown ids are ignored.
    pub fn show_project(&mut self, project_id: &str, push_state: bool) {
        log::info!("Showing project: {}, push state: {}", project_id, push_state);
        let Some(project) = self.catalog.find(project_id) else {
            log::debug!("No project with id {}", project_id);
            return;
        };

        let markup = detail::project_page(project);
        let title = project.title.clone();
        self.render(markup, View::Project(project_id.to_string()));

        if push_state {
            let state = HistoryState::project(project_id, self.state.current_category.clone());
            self.history.push(state, &title, &format!("#{}", project_id));
        }
    }

    /// React to browser-driven navigation using the current location.
    ///
    /// `state` is the state of the entry being navigated to, if any. Never
    /// pushes history.
    pub fn handle_navigation(&mut self, state: Option<&HistoryState>) {
        let location = self.history.location().clone();
        log::debug!("Handling navigation to {}", location);
        let fragment = location.fragment();

        if let Some(category) = Category::from_fragment(fragment) {
            self.show_category(category.as_str(), false);
        } else if !fragment.is_empty() {
            // Only project entries restore the category; featured entries leave it alone
            if let Some(category) = state.and_then(|s| s.category.as_deref()).filter(|c| !c.is_empty()) {
                self.state.current_category = Some(category.to_string());
            }
            self.show_project(fragment, false);
        } else if self.config.is_index_path(location.pathname()) {
            self.show_featured(false);
        }
    }

    /// Dispatch a navigation intent from the UI layer.
    pub fn handle(&mut self, intent: NavigationIntent) -> Dispatch {
        match intent {
            NavigationIntent::Load => self.handle_navigation(None),
            NavigationIntent::Pop { state } => self.handle_navigation(state.as_ref()),
            NavigationIntent::Click { href } => match classify_link(&href, &self.config) {
                LinkAction::Passthrough => return Dispatch::AllowDefault,
                LinkAction::Featured => self.show_featured(true),
                LinkAction::Category(category) => self.show_category(category.as_str(), true),
                LinkAction::Project(id) => self.show_project(&id, true),
                LinkAction::Ignore => log::debug!("Ignoring click on {}", href),
            },
            NavigationIntent::MediaError { src } => media::report_load_failure(&src),
        }
        Dispatch::Handled
    }

    /// Go back one history entry and render it. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        let state = match self.history.back() {
            Some(entry) => entry.state.clone(),
            None => return false,
        };
        self.handle_navigation(state.as_ref());
        true
    }

    /// Go forward one history entry and render it. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        let state = match self.history.forward() {
            Some(entry) => entry.state.clone(),
            None => return false,
        };
        self.handle_navigation(state.as_ref());
        true
    }
}
