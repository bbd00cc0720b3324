//! Stateful table view: one per open table
//!
//! Holds every view input in one place. Each input change goes through a
//! setter that also decides whether the page resets, and `render` is the only
//! path that produces output.

use serde::Deserialize;
use tracing::debug;

use super::pipeline::{
    filter_cameras, render_page, total_pages, LocationFilter, PageSize, StatusFilter, ViewPage,
    ViewQuery,
};
use crate::store::StoreSnapshot;

/// A single user action against a table view
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ViewCommand {
    Search { term: String },
    FilterStatus { status: StatusFilter },
    FilterLocation { location: LocationFilter },
    GoToPage { page: usize },
    NextPage,
    PreviousPage,
    SetPageSize { page_size: PageSize },
    ResetFilters,
}

#[derive(Debug, Clone)]
pub struct TableView {
    query: ViewQuery,
    page: usize,
    page_size: PageSize,
    seen_revision: Option<u64>,
}

impl TableView {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            query: ViewQuery::default(),
            page: 1,
            page_size,
            seen_revision: None,
        }
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.query.search != term {
            self.query.search = term;
            self.page = 1;
        }
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        if self.query.status != status {
            self.query.status = status;
            self.page = 1;
        }
    }

    pub fn set_location_filter(&mut self, location: LocationFilter) {
        if self.query.location != location {
            self.query.location = location;
            self.page = 1;
        }
    }

    pub fn reset_filters(&mut self) {
        self.set_search(String::new());
        self.set_status_filter(StatusFilter::All);
        self.set_location_filter(LocationFilter::All);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Move to page `page`; ignored outside `1..=total_pages`
    pub fn go_to_page(&mut self, page: usize, snapshot: &StoreSnapshot) -> bool {
        self.sync(snapshot);
        let filtered = filter_cameras(&snapshot.cameras, &self.query).len();
        let total = total_pages(filtered, self.page_size);
        if page < 1 || page > total {
            debug!("Ignoring page {} outside 1..={}", page, total);
            return false;
        }
        self.page = page;
        true
    }

    /// Apply a command; returns false when it was ignored
    pub fn apply(&mut self, command: ViewCommand, snapshot: &StoreSnapshot) -> bool {
        self.sync(snapshot);
        match command {
            ViewCommand::Search { term } => self.set_search(term),
            ViewCommand::FilterStatus { status } => self.set_status_filter(status),
            ViewCommand::FilterLocation { location } => self.set_location_filter(location),
            ViewCommand::GoToPage { page } => return self.go_to_page(page, snapshot),
            ViewCommand::NextPage => return self.go_to_page(self.page.saturating_add(1), snapshot),
            ViewCommand::PreviousPage => {
                return self.go_to_page(self.page.saturating_sub(1), snapshot)
            }
            ViewCommand::SetPageSize { page_size } => self.set_page_size(page_size),
            ViewCommand::ResetFilters => self.reset_filters(),
        }
        true
    }

    pub fn render(&mut self, snapshot: &StoreSnapshot) -> ViewPage {
        self.sync(snapshot);
        render_page(snapshot, &self.query, self.page, self.page_size)
    }

    /// A changed record list sends the view back to the first page
    fn sync(&mut self, snapshot: &StoreSnapshot) {
        if self.seen_revision != Some(snapshot.revision) {
            if self.seen_revision.is_some() && self.page != 1 {
                debug!(
                    "Record list changed (revision {}), back to page 1",
                    snapshot.revision
                );
            }
            self.seen_revision = Some(snapshot.revision);
            self.page = 1;
        }
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
