use crate::error::Error;

use super::mode::{AccessMode, ElementAccessMode};
use super::selection::{ResolvedSelection, SelectionProfile};
use super::spec::{truncate_positions, IndexSpec};

pub type Resolved = (ResolvedSelection, SelectionProfile);

/// Resolution of a single index argument against one dimension
///
/// A check knows where its argument sits in the index list, as several rules
/// differ between single-index (linear) and multi-dimensional access.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionCheck {
    pub(super) mode: AccessMode,
    pub(super) dimension: usize,
    pub(super) num_positions: usize,
    pub(super) list_like: bool,
}

impl PositionCheck {
    pub fn new(mode: AccessMode, dimension: usize, num_positions: usize) -> Self {
        PositionCheck {
            mode,
            dimension,
            num_positions,
            list_like: false,
        }
    }

    pub fn with_list_like(mut self, list_like: bool) -> Self {
        self.list_like = list_like;
        self
    }

    /// Zero-based position of the checked argument in the index list
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn is_multi_dimension(&self) -> bool {
        self.num_positions > 1
    }

    pub(super) fn replace(&self) -> bool {
        self.mode.is_replace()
    }

    pub fn check(&self, dim_size: u32, position: &IndexSpec) -> Result<Resolved, Error> {
        // positions are stored as i32, so every in-bounds position must be too
        if dim_size > i32::MAX as u32 {
            return Err(Error::ResultTooLong);
        }

        use ElementAccessMode::*;
        match (self.mode.element, position) {
            (_, IndexSpec::Missing) => Ok((
                ResolvedSelection::KeepAll(dim_size),
                SelectionProfile::selecting(dim_size),
            )),
            (Subset, IndexSpec::Logical(x)) => self.subset_logical(dim_size, x),
            (Subset, IndexSpec::Integer(x)) => self.subset_integer(dim_size, x),
            (Subset, IndexSpec::Double(x)) => self.subset_integer(dim_size, &truncate_positions(x)),
            (Subscript, IndexSpec::Logical(x)) => self.subscript_logical(dim_size, x),
            (Subscript, IndexSpec::Integer(x)) => self.subscript_integer(dim_size, x),
            (Subscript, IndexSpec::Double(x)) => {
                self.subscript_integer(dim_size, &truncate_positions(x))
            }
        }
    }
}

pub(super) fn count(n: usize) -> Result<u32, Error> {
    u32::try_from(n).map_err(|_| Error::ResultTooLong)
}
