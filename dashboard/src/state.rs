//! Immutable application state, built once at startup.

use worldcup::{ChoroplethFigure, Dataset, DatasetError, WinSummary};

use crate::layout::PageLayout;

/// Everything the handlers read. Never mutated after construction; shared
/// across sessions behind an `Arc`.
#[derive(Debug)]
pub struct AppState {
    pub dataset: Dataset,
    pub summary: WinSummary,
    /// The map does not depend on either selector, so it is built once.
    pub figure: ChoroplethFigure,
    pub layout: PageLayout,
}

impl AppState {
    /// Load the baked-in finals table and derive every view from it.
    pub fn build() -> Result<Self, DatasetError> {
        Ok(Self::from_dataset(Dataset::load()?))
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        let summary = WinSummary::from_dataset(&dataset);
        let figure = ChoroplethFigure::from_summary(&summary);
        let layout = PageLayout::build(&dataset, &summary, &figure);
        Self {
            dataset,
            summary,
            figure,
            layout,
        }
    }
}
