/// Index resolution
///
/// Turns the arguments of `x[...]` and `x[[...]]` into normalized, one-based
/// selections per dimension. Arguments are first classified into an
/// [`IndexSpec`], then each is checked against the size of the dimension it
/// applies to, and finally the per-dimension profiles are aggregated.
///
/// ```
/// use rindex::index::{resolve, AccessMode, ResolvedSelection};
/// use rindex::object::{Obj, Shape, Vector};
///
/// let x = Shape::vector(4);
/// let i = Obj::from(Vector::from(vec![true, false]));
/// let positions = resolve(&x, &[i], AccessMode::SUBSET).unwrap();
///
/// assert_eq!(positions.selections(), &[ResolvedSelection::indices(vec![1, 3])]);
/// assert_eq!(positions.selected_count(), 2);
/// ```
///
mod check;
pub use check::*;

mod mode;
pub use mode::*;

mod positions;
pub use positions::*;

mod selection;
pub use selection::*;

mod spec;
pub use spec::*;

mod subscript;
mod subset;
