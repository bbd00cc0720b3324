//! Pure derivation of the visible table from a store snapshot
//!
//! search → status filter → location filter → page slice. Filtering is
//! stable, nothing is re-sorted, and out-of-range pages produce an empty
//! slice instead of an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::camera::{Camera, CameraHealth, CameraId, CameraStatus, Connectivity};
use crate::constants::view::{ALL, DEFAULT_PAGE_SIZE, PAGE_SIZES};
use crate::store::StoreSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(CameraStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: CameraStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationFilter {
    #[default]
    All,
    Exact(String),
}

impl LocationFilter {
    pub fn accepts(&self, location: &str) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Exact(wanted) => wanted == location,
        }
    }
}

impl From<String> for LocationFilter {
    fn from(value: String) -> Self {
        if value == ALL {
            LocationFilter::All
        } else {
            LocationFilter::Exact(value)
        }
    }
}

impl From<LocationFilter> for String {
    fn from(filter: LocationFilter) -> Self {
        match filter {
            LocationFilter::All => ALL.to_string(),
            LocationFilter::Exact(location) => location,
        }
    }
}

/// One of the page sizes the pager offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(DEFAULT_PAGE_SIZE)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if PAGE_SIZES.contains(&value) {
            Ok(PageSize(value))
        } else {
            Err(format!(
                "Page size {} is not one of {:?}",
                value, PAGE_SIZES
            ))
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

/// Search and filter inputs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub location: LocationFilter,
}

impl ViewQuery {
    pub fn matches(&self, camera: &Camera) -> bool {
        matches_search(camera, &normalize_search(&self.search))
            && self.status.accepts(camera.status)
            && self.location.accepts(&camera.location)
    }
}

fn normalize_search(term: &str) -> String {
    term.trim().to_lowercase()
}

fn matches_search(camera: &Camera, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    [
        camera.name.as_str(),
        camera.location.as_str(),
        camera.recorder_or_empty(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
}

/// Records passing the query, in input order
pub fn filter_cameras<'a>(cameras: &'a [Camera], query: &ViewQuery) -> Vec<&'a Camera> {
    let term = normalize_search(&query.search);
    cameras
        .iter()
        .filter(|camera| matches_search(camera, &term))
        .filter(|camera| query.status.accepts(camera.status))
        .filter(|camera| query.location.accepts(&camera.location))
        .collect()
}

/// Page count for display; an empty set still has one page
pub fn total_pages(filtered_count: usize, page_size: PageSize) -> usize {
    filtered_count.div_ceil(page_size.get()).max(1)
}

/// Index range of `page` within the filtered set, clamped to its length
pub fn page_bounds(filtered_count: usize, page: usize, page_size: PageSize) -> Range<usize> {
    let size = page_size.get();
    let start = page
        .saturating_sub(1)
        .saturating_mul(size)
        .min(filtered_count);
    let end = page.saturating_mul(size).min(filtered_count).max(start);
    start..end
}

/// Display projection of one camera
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraRow {
    pub id: CameraId,
    pub name: String,
    pub location: String,
    pub recorder: String,
    pub tasks: String,
    pub status: CameraStatus,
    pub current_status: Option<Connectivity>,
    pub health: CameraHealth,
    pub has_warning: bool,
    /// Status update in flight; the toggle control should be disabled
    pub busy: bool,
    pub toggle_hint: &'static str,
}

impl CameraRow {
    pub fn from_camera(camera: &Camera, busy: bool) -> Self {
        Self {
            id: camera.id,
            name: camera.name.clone(),
            location: camera.location.clone(),
            recorder: camera.recorder_label(),
            tasks: camera.tasks_label(),
            status: camera.status,
            current_status: camera.current_status,
            health: camera.health,
            has_warning: camera.has_warning,
            busy,
            toggle_hint: match camera.status {
                CameraStatus::Active => "Deactivate",
                CameraStatus::Inactive => "Activate",
            },
        }
    }
}

/// Everything the table needs to draw one page
#[derive(Debug, Clone, Serialize)]
pub struct ViewPage {
    pub rows: Vec<CameraRow>,
    pub query: ViewQuery,
    pub page: usize,
    pub page_size: PageSize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    /// 1-based display range, 0..0 when the page is empty
    pub first_item: usize,
    pub last_item: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub locations: Vec<String>,
    pub revision: u64,
}

pub fn render_page(
    snapshot: &StoreSnapshot,
    query: &ViewQuery,
    page: usize,
    page_size: PageSize,
) -> ViewPage {
    let filtered = filter_cameras(&snapshot.cameras, query);
    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count, page_size);
    let bounds = page_bounds(filtered_count, page, page_size);

    let (first_item, last_item) = if bounds.is_empty() {
        (0, 0)
    } else {
        (bounds.start + 1, bounds.end)
    };

    // Neighbours only exist for a page inside 1..=total_pages
    let in_range = (1..=total_pages).contains(&page);

    let rows = filtered[bounds]
        .iter()
        .map(|camera| CameraRow::from_camera(camera, snapshot.updating.contains(&camera.id)))
        .collect();

    ViewPage {
        rows,
        query: query.clone(),
        page,
        page_size,
        total_pages,
        filtered_count,
        total_count: snapshot.cameras.len(),
        first_item,
        last_item,
        has_previous: in_range && page > 1,
        has_next: in_range && page < total_pages,
        locations: snapshot.locations.to_vec(),
        revision: snapshot.revision,
    }
}
