use crate::error::Error;
use crate::object::coercion::CoercibleInto;
use crate::object::types::{Integer, Logical};
use crate::object::OptionNA;

use super::check::{PositionCheck, Resolved};
use super::selection::{ResolvedSelection, SelectionProfile, NA_INDEX};

/// Subscript (`[[`) resolution
///
/// Every successful resolution selects exactly one position.
///
impl PositionCheck {
    pub(super) fn subscript_logical(
        &self,
        dim_size: u32,
        position: &[Logical],
    ) -> Result<Resolved, Error> {
        match position {
            [value] => self.subscript_value(dim_size, (*value).coerce_into()),
            [OptionNA::Some(true), _] => Err(Error::SelectMoreThanOne),
            [_, _] | [] => Err(Error::SelectLessThanOne),
            _ => Err(Error::SelectMoreThanOne),
        }
    }

    pub(super) fn subscript_integer(
        &self,
        dim_size: u32,
        position: &[Integer],
    ) -> Result<Resolved, Error> {
        match position {
            [value] => self.subscript_value(dim_size, *value),
            [] | [OptionNA::Some(0), _] => Err(Error::SelectLessThanOne),
            _ => Err(Error::SelectMoreThanOne),
        }
    }

    fn subscript_value(&self, dim_size: u32, value: Integer) -> Result<Resolved, Error> {
        let mut profile = SelectionProfile::selecting(1);
        let position = match value {
            OptionNA::Some(v) if v > 0 => {
                // only a single-index replace may grow the container
                if v as u32 > dim_size && (!self.replace() || self.is_multi_dimension()) {
                    return Err(Error::SubscriptBounds);
                }
                profile.max_out_of_bounds_index = v;
                v
            }
            OptionNA::NA => {
                self.subscript_na(dim_size)?;
                profile.contains_na = true;
                NA_INDEX
            }
            OptionNA::Some(-2) if dim_size == 2 => 1,
            OptionNA::Some(-1) if dim_size == 2 => 2,
            OptionNA::Some(0) => return Err(Error::SelectLessThanOne),
            OptionNA::Some(_) => return Err(Error::InvalidNegativeSubscript),
        };

        Ok((ResolvedSelection::indices(vec![position]), profile))
    }

    /// Decide whether an `NA` subscript may pass through
    fn subscript_na(&self, dim_size: u32) -> Result<(), Error> {
        if self.replace() {
            if self.is_multi_dimension() {
                Err(Error::SubscriptBoundsSub)
            } else if dim_size < 2 {
                Err(Error::SelectLessThanOneInOneIndex)
            } else {
                Err(Error::SelectMoreThanOneInOneIndex)
            }
        } else if !self.is_multi_dimension() && self.list_like {
            // lists yield NULL for a missing subscript
            Ok(())
        } else {
            Err(Error::SubscriptBounds)
        }
    }
}
