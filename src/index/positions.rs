use std::fmt::Display;

use tracing::{debug, trace};

use crate::error::{Error, Mismatch};
use crate::object::{Container, Obj};

use super::check::PositionCheck;
use super::mode::AccessMode;
use super::selection::{ResolvedSelection, SelectionProfile};
use super::spec::{classify, IndexSpec};

/// Resolved positions of a complete access
///
/// Holds one selection and one profile per index argument, together with the
/// aggregate profile of the whole (Cartesian) selection.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Positions {
    mode: AccessMode,
    selections: Vec<ResolvedSelection>,
    profiles: Vec<SelectionProfile>,
    profile: SelectionProfile,
}

impl Positions {
    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    pub fn selections(&self) -> &[ResolvedSelection] {
        &self.selections
    }

    pub fn profiles(&self) -> &[SelectionProfile] {
        &self.profiles
    }

    pub fn profile(&self) -> SelectionProfile {
        self.profile
    }

    pub fn selected_count(&self) -> u32 {
        self.profile.selected_count
    }

    pub fn contains_na(&self) -> bool {
        self.profile.contains_na
    }

    pub fn max_out_of_bounds_index(&self) -> i32 {
        self.profile.max_out_of_bounds_index
    }

    pub fn dimensions(&self) -> usize {
        self.selections.len()
    }

    /// Whether the access is a plain `x[]`, touching every element
    pub fn is_missing(&self) -> bool {
        matches!(self.selections.as_slice(), [ResolvedSelection::KeepAll(_)])
    }

    pub fn into_parts(self) -> (Vec<ResolvedSelection>, SelectionProfile) {
        (self.selections, self.profile)
    }

    /// Zero-based linear offsets of the selected elements
    ///
    /// Offsets follow column-major order, so the first dimension varies
    /// fastest. `None` marks elements that read as missing. For a replacement
    /// the offsets may point past the end of the container. Offsets are
    /// produced lazily, one element at a time.
    ///
    pub fn offsets<C>(&self, container: &C) -> Offsets<'_>
    where
        C: Container + ?Sized,
    {
        let dims = container.dims().unwrap_or_default();
        let mut stride = 1_usize;
        let mut axes = Vec::with_capacity(self.selections.len());

        for (i, selection) in self.selections.iter().enumerate() {
            let mut iter = selection.iter();
            let Some(current) = iter.next() else {
                return Offsets::empty();
            };

            axes.push(Axis {
                stride,
                selection,
                iter,
                current,
            });

            // a single index always walks the flat view
            stride = stride.saturating_mul(dims.get(i).copied().unwrap_or(1) as usize);
        }

        Offsets { axes, done: false }
    }
}

struct Axis<'a> {
    stride: usize,
    selection: &'a ResolvedSelection,
    iter: Box<dyn Iterator<Item = Option<u32>> + 'a>,
    current: Option<u32>,
}

/// Iterator over the linear offsets of a [`Positions`]
pub struct Offsets<'a> {
    axes: Vec<Axis<'a>>,
    done: bool,
}

impl Offsets<'_> {
    fn empty() -> Self {
        Offsets {
            axes: Vec::new(),
            done: true,
        }
    }
}

impl Iterator for Offsets<'_> {
    type Item = Option<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let offset = self.axes.iter().try_fold(0_usize, |acc, axis| {
            axis.current.map(|p| acc + (p as usize - 1) * axis.stride)
        });

        // odometer over every axis, first axis turning fastest
        self.done = true;
        for axis in self.axes.iter_mut() {
            if let Some(next) = axis.iter.next() {
                axis.current = next;
                self.done = false;
                break;
            }

            axis.iter = axis.selection.iter();
            if let Some(first) = axis.iter.next() {
                axis.current = first;
            }
        }

        Some(offset)
    }
}

impl Display for Positions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (selection, profile)) in self.selections.iter().zip(&self.profiles).enumerate() {
            writeln!(f, "[{}] {selection}  ({profile})", i + 1)?;
        }
        write!(f, "{} {}", self.mode, self.profile)
    }
}

/// Resolve raw index arguments against a container
pub fn resolve<C>(container: &C, args: &[Obj], mode: AccessMode) -> Result<Positions, Error>
where
    C: Container + ?Sized,
{
    let positions = classify(args)?;
    resolve_positions(container, &positions, mode)
}

/// Resolve classified index arguments against a container
///
/// A single index is resolved against the flat view of the container,
/// whatever its dimensions. Otherwise there must be exactly one index per
/// dimension. An empty index list behaves like `x[]`.
///
pub fn resolve_positions<C>(
    container: &C,
    positions: &[IndexSpec],
    mode: AccessMode,
) -> Result<Positions, Error>
where
    C: Container + ?Sized,
{
    let missing = [IndexSpec::Missing];
    let positions = if positions.is_empty() {
        &missing[..]
    } else {
        positions
    };

    let dim_sizes = verify_dimensions(container, positions.len(), mode)?;
    let n = positions.len();

    let mut selections = Vec::with_capacity(n);
    let mut profiles = Vec::with_capacity(n);
    for (i, (position, &dim_size)) in positions.iter().zip(&dim_sizes).enumerate() {
        let check = PositionCheck::new(mode, i, n).with_list_like(container.is_list_like());
        let (selection, profile) = check.check(dim_size, position).map_err(|e| {
            debug!(
                dimension = check.dimension(),
                dim_size,
                mode = %mode,
                error = %e,
                "index resolution failed"
            );
            e.in_dimension(check.dimension())
        })?;

        trace!(
            dimension = i,
            dim_size,
            kind = position.type_name(),
            selected = profile.selected_count,
            contains_na = profile.contains_na,
            "resolved index"
        );

        selections.push(selection);
        profiles.push(profile);
    }

    let profile = aggregate(&profiles)?;
    Ok(Positions {
        mode,
        selections,
        profiles,
        profile,
    })
}

/// Sizes of the dimensions each index applies to
fn verify_dimensions<C>(container: &C, n: usize, mode: AccessMode) -> Result<Vec<u32>, Error>
where
    C: Container + ?Sized,
{
    if n == 1 {
        return Ok(vec![container.len()]);
    }

    match container.dims() {
        Some(dims) if dims.len() == n => Ok(dims.to_vec()),
        _ => {
            debug!(arguments = n, dims = ?container.dims(), "index arity mismatch");
            Err(dimensions_error(n, mode))
        }
    }
}

fn dimensions_error(n: usize, mode: AccessMode) -> Error {
    let mismatch = match (mode.is_replace(), mode.is_subset()) {
        (true, true) if n == 2 => Mismatch::IncorrectSubscriptsMatrix,
        (true, true) => Mismatch::IncorrectSubscripts,
        (true, false) => Mismatch::ImproperSubscript,
        (false, false) => Mismatch::IncorrectSubscripts,
        (false, true) => Mismatch::IncorrectDimensions,
    };
    Error::DimensionMismatch(mismatch)
}

/// Combine per-dimension profiles into the profile of the whole selection
pub fn aggregate(profiles: &[SelectionProfile]) -> Result<SelectionProfile, Error> {
    if let [profile] = profiles {
        return Ok(*profile);
    }

    let selected_count = profiles
        .iter()
        .try_fold(1_u32, |acc, p| acc.checked_mul(p.selected_count))
        .ok_or(Error::ResultTooLong)?;

    Ok(SelectionProfile {
        selected_count,
        // out of bounds positions are an error for multi-dimensional access
        max_out_of_bounds_index: 0,
        contains_na: profiles.iter().any(|p| p.contains_na),
    })
}
