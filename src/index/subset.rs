use hashbrown::HashSet;

use crate::error::Error;
use crate::object::types::{Integer, Logical};
use crate::object::OptionNA;

use super::check::{count, PositionCheck, Resolved};
use super::selection::{ResolvedSelection, SelectionProfile, NA_INDEX};

fn is_multiple_of(a: usize, b: usize) -> bool {
    b != 0 && a % b == 0
}

/// Count selections of a recycled logical pattern without recycling it
fn recycled_count(pattern: &[Logical], length: usize) -> usize {
    let selected = pattern
        .iter()
        .filter(|i| !matches!(i, OptionNA::Some(false)))
        .count();

    if is_multiple_of(length, pattern.len()) {
        selected * (length / pattern.len())
    } else {
        let rem = length % pattern.len();
        let partial = pattern[..rem]
            .iter()
            .filter(|i| !matches!(i, OptionNA::Some(false)))
            .count();
        selected * (length / pattern.len()) + partial
    }
}

/// Summary of a single scan over integer positions
#[derive(Debug, Default)]
struct Scan {
    seen_positive: bool,
    seen_negative: bool,
    seen_na: bool,
    out_of_bounds: usize,
    zeros: usize,
    max_out_of_bounds: i32,
}

impl Scan {
    fn new(dim_size: u32, position: &[Integer]) -> Self {
        let mut scan = Scan::default();
        for value in position {
            match *value {
                OptionNA::Some(v) if v > 0 => {
                    scan.seen_positive = true;
                    if v as u32 > dim_size {
                        scan.out_of_bounds += 1;
                        scan.max_out_of_bounds = scan.max_out_of_bounds.max(v);
                    }
                }
                OptionNA::Some(0) => scan.zeros += 1,
                OptionNA::Some(v) => {
                    scan.seen_negative = true;
                    if v.unsigned_abs() > dim_size {
                        scan.out_of_bounds += 1;
                    }
                }
                OptionNA::NA => scan.seen_na = true,
            }
        }
        scan
    }
}

/// Subset (`[`) resolution
impl PositionCheck {
    pub(super) fn subset_logical(
        &self,
        dim_size: u32,
        position: &[Logical],
    ) -> Result<Resolved, Error> {
        let mut profile = SelectionProfile {
            max_out_of_bounds_index: i32::try_from(position.len())
                .map_err(|_| Error::ResultTooLong)?,
            ..Default::default()
        };

        if position.is_empty() {
            return Ok((ResolvedSelection::empty(), profile));
        }

        let mut length = dim_size as usize;
        if length < position.len() {
            if self.is_multi_dimension() {
                return Err(Error::LogicalSubscriptTooLong);
            }
            length = position.len();
        }

        let mut positions = Vec::new();
        let mut na_values = Vec::new();
        for (i, value) in position.iter().cycle().take(length).enumerate() {
            match value {
                OptionNA::Some(true) => positions.push(i as i32 + 1),
                OptionNA::NA => {
                    na_values.push(positions.len());
                    positions.push(i as i32 + 1);
                }
                OptionNA::Some(false) => (),
            }
        }

        let selected = recycled_count(position, length);
        debug_assert_eq!(selected, positions.len());

        profile.selected_count = count(selected)?;
        profile.contains_na = !na_values.is_empty();
        Ok((
            ResolvedSelection::Indices {
                positions,
                na_values,
            },
            profile,
        ))
    }

    pub(super) fn subset_integer(
        &self,
        dim_size: u32,
        position: &[Integer],
    ) -> Result<Resolved, Error> {
        let scan = Scan::new(dim_size, position);

        if scan.seen_positive || scan.seen_na {
            if self.is_multi_dimension() && scan.out_of_bounds > 0 {
                return Err(Error::SubscriptBounds);
            }
            if scan.seen_negative {
                return Err(Error::OnlyZeroCanBeMixedWithNegative);
            }

            let na_for_out_of_bounds = !self.replace() && scan.out_of_bounds > 0;
            let profile = SelectionProfile {
                selected_count: count(position.len() - scan.zeros)?,
                max_out_of_bounds_index: scan.max_out_of_bounds,
                contains_na: scan.seen_na || na_for_out_of_bounds,
            };

            let positions = position
                .iter()
                .filter_map(|value| match *value {
                    OptionNA::Some(0) => None,
                    OptionNA::Some(v) if na_for_out_of_bounds && v as u32 > dim_size => {
                        Some(NA_INDEX)
                    }
                    OptionNA::Some(v) => Some(v),
                    OptionNA::NA => Some(NA_INDEX),
                })
                .collect();

            Ok((ResolvedSelection::indices(positions), profile))
        } else if scan.seen_negative {
            Ok(exclude(dim_size, position))
        } else {
            Ok((ResolvedSelection::empty(), SelectionProfile::default()))
        }
    }
}

/// Build an exclusion mask from negative (and zero) positions
fn exclude(dim_size: u32, position: &[Integer]) -> Resolved {
    let excluded: HashSet<i32> = position
        .iter()
        .filter_map(|value| match *value {
            OptionNA::Some(v) if v < 0 && v.unsigned_abs() <= dim_size => Some(-v),
            _ => None,
        })
        .collect();

    let profile = SelectionProfile::selecting(dim_size - excluded.len() as u32);
    (
        ResolvedSelection::ExclusionMask { dim_size, excluded },
        profile,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::index::{AccessMode, IndexSpec};

    fn subset(dim_size: u32, spec: IndexSpec) -> Result<Resolved, Error> {
        PositionCheck::new(AccessMode::SUBSET, 0, 1).check(dim_size, &spec)
    }

    fn subset_nd(dim_size: u32, spec: IndexSpec) -> Result<Resolved, Error> {
        PositionCheck::new(AccessMode::SUBSET, 0, 2).check(dim_size, &spec)
    }

    fn subset_replace(dim_size: u32, spec: IndexSpec) -> Result<Resolved, Error> {
        PositionCheck::new(AccessMode::SUBSET.replace(), 0, 1).check(dim_size, &spec)
    }

    fn excluding(dim_size: u32, excluded: &[i32]) -> ResolvedSelection {
        ResolvedSelection::ExclusionMask {
            dim_size,
            excluded: excluded.iter().copied().collect(),
        }
    }

    #[test]
    fn negative_excludes() {
        let (selection, profile) = subset(4, IndexSpec::from(vec![-1])).unwrap();
        assert_eq!(selection, excluding(4, &[1]));
        assert_eq!(profile.selected_count, 3);
        assert!(!profile.contains_na);
    }

    #[test]
    fn negative_with_zero_and_duplicates() {
        let (selection, profile) = subset(5, IndexSpec::from(vec![0, -2, -2, -5, -9])).unwrap();
        assert_eq!(selection, excluding(5, &[2, 5]));
        assert_eq!(profile.selected_count, 3);
    }

    #[test]
    fn zero_selects_nothing() {
        let (selection, profile) = subset(4, IndexSpec::from(vec![0])).unwrap();
        assert_eq!(selection, ResolvedSelection::empty());
        assert_eq!(profile.selected_count, 0);
        assert!(!profile.contains_na);
    }

    #[test]
    fn empty_selects_nothing() {
        let (selection, profile) = subset(4, IndexSpec::Integer(vec![])).unwrap();
        assert_eq!(selection, ResolvedSelection::empty());
        assert_eq!(profile, SelectionProfile::default());
    }

    #[test]
    fn positives_keep_order_and_drop_zeros() {
        let (selection, profile) = subset(4, IndexSpec::from(vec![3, 0, 1, 3])).unwrap();
        assert_eq!(selection, ResolvedSelection::indices(vec![3, 1, 3]));
        assert_eq!(profile.selected_count, 3);
        assert_eq!(profile.max_out_of_bounds_index, 0);
    }

    #[test]
    fn out_of_bounds_extract_is_na() {
        let (selection, profile) = subset(4, IndexSpec::from(vec![5])).unwrap();
        assert_eq!(selection, ResolvedSelection::indices(vec![NA_INDEX]));
        assert_eq!(profile.selected_count, 1);
        assert!(profile.contains_na);
        assert_eq!(profile.max_out_of_bounds_index, 5);
    }

    #[test]
    fn out_of_bounds_replace_keeps_position() {
        let (selection, profile) = subset_replace(4, IndexSpec::from(vec![2, 7, 6])).unwrap();
        assert_eq!(selection, ResolvedSelection::indices(vec![2, 7, 6]));
        assert!(!profile.contains_na);
        assert_eq!(profile.max_out_of_bounds_index, 7);
    }

    #[test]
    fn out_of_bounds_multi_dimension() {
        assert_eq!(subset_nd(4, IndexSpec::from(vec![1, 5])), Err(Error::SubscriptBounds));
    }

    #[test]
    fn na_integer() {
        let spec = IndexSpec::Integer(vec![OptionNA::Some(2), OptionNA::NA]);
        let (selection, profile) = subset(4, spec).unwrap();
        assert_eq!(selection, ResolvedSelection::indices(vec![2, NA_INDEX]));
        assert_eq!(profile.selected_count, 2);
        assert!(profile.contains_na);
    }

    #[test]
    fn all_na_integer() {
        let spec = IndexSpec::Integer(vec![OptionNA::NA, OptionNA::NA]);
        let (selection, profile) = subset(4, spec).unwrap();
        assert_eq!(selection, ResolvedSelection::indices(vec![NA_INDEX, NA_INDEX]));
        assert_eq!(profile.selected_count, 2);
        assert!(profile.contains_na);
    }

    #[test]
    fn mixed_signs() {
        let res = subset(4, IndexSpec::from(vec![1, -2]));
        assert_eq!(res, Err(Error::OnlyZeroCanBeMixedWithNegative));
    }

    #[test]
    fn na_mixed_with_negative() {
        let spec = IndexSpec::Integer(vec![OptionNA::NA, OptionNA::Some(-1)]);
        assert_eq!(subset(4, spec), Err(Error::OnlyZeroCanBeMixedWithNegative));
    }

    #[test]
    fn logical_recycled() {
        let (selection, profile) = subset(4, IndexSpec::from(vec![true, false])).unwrap();
        assert_eq!(selection, ResolvedSelection::indices(vec![1, 3]));
        assert_eq!(profile.selected_count, 2);
        assert_eq!(profile.max_out_of_bounds_index, 2);
    }

    #[test]
    fn logical_recycled_partially() {
        let spec = IndexSpec::from(vec![true, true, false]);
        let (selection, profile) = subset(5, spec).unwrap();
        assert_eq!(selection, ResolvedSelection::indices(vec![1, 2, 4, 5]));
        assert_eq!(profile.selected_count, 4);
    }

    #[test]
    fn logical_with_na() {
        let spec = IndexSpec::Logical(vec![OptionNA::Some(true), OptionNA::NA]);
        let (selection, profile) = subset(4, spec).unwrap();
        assert_eq!(
            selection,
            ResolvedSelection::Indices {
                positions: vec![1, 2, 3, 4],
                na_values: vec![1, 3],
            }
        );
        assert_eq!(profile.selected_count, 4);
        assert!(profile.contains_na);
    }

    #[test]
    fn logical_longer_than_vector() {
        let spec = IndexSpec::from(vec![false, true, false, true]);
        let (selection, profile) = subset(2, spec).unwrap();
        assert_eq!(selection, ResolvedSelection::indices(vec![2, 4]));
        assert_eq!(profile.selected_count, 2);
        assert_eq!(profile.max_out_of_bounds_index, 4);
    }

    #[test]
    fn logical_longer_than_dimension() {
        let spec = IndexSpec::from(vec![true, true, true]);
        assert_eq!(subset_nd(2, spec), Err(Error::LogicalSubscriptTooLong));
    }

    #[test]
    fn logical_all_false() {
        let (selection, profile) = subset(3, IndexSpec::from(vec![false])).unwrap();
        assert_eq!(selection, ResolvedSelection::empty());
        assert_eq!(profile.selected_count, 0);
    }

    #[test]
    fn logical_empty() {
        let (selection, profile) = subset(3, IndexSpec::Logical(vec![])).unwrap();
        assert_eq!(selection, ResolvedSelection::empty());
        assert_eq!(profile.selected_count, 0);
    }

    #[test]
    fn double_truncated() {
        let (selection, _) = subset(4, IndexSpec::from(vec![1.9, 3.1])).unwrap();
        assert_eq!(selection, ResolvedSelection::indices(vec![1, 3]));
    }

    #[test]
    fn double_small_negative_excludes_first() {
        let (selection, profile) = subset(4, IndexSpec::from(vec![-0.5])).unwrap();
        assert_eq!(selection, excluding(4, &[1]));
        assert_eq!(profile.selected_count, 3);
    }

    #[test]
    fn double_infinite_is_na() {
        let (selection, profile) = subset(4, IndexSpec::from(vec![f64::INFINITY])).unwrap();
        assert_eq!(selection, ResolvedSelection::indices(vec![NA_INDEX]));
        assert!(profile.contains_na);
    }

    #[test]
    fn double_nan_with_negative() {
        let res = subset(4, IndexSpec::from(vec![f64::NAN, -1.0]));
        assert_eq!(res, Err(Error::OnlyZeroCanBeMixedWithNegative));
    }

    #[test]
    fn recycled_count_matches() {
        let pattern = vec![OptionNA::Some(true), OptionNA::NA, OptionNA::Some(false)];
        assert_eq!(recycled_count(&pattern, 9), 6);
        assert_eq!(recycled_count(&pattern, 7), 5);
        assert_eq!(recycled_count(&pattern, 3), 2);
    }
}
