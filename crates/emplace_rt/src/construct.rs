/// Initializer invoked by [`AllocationScope::emplace`](crate::AllocationScope::emplace).
///
/// `Args` is the tuple of forwarded constructor arguments: `()` for none,
/// `(A0,)` for one, `(A0, A1)` for two, and so on. A type may implement
/// `Construct` for as many argument lists as it has constructors.
///
/// ```
/// use emplace_rt::{unchecked_new2, Construct};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Construct<(i64, i64)> for Point {
///     fn construct((x, y): (i64, i64)) -> Self {
///         Point { x, y }
///     }
/// }
///
/// let p = unchecked_new2::<Point, i64, i64>(3, 4);
/// assert_eq!(p.x + p.y, 7);
/// ```
///
/// A panicking initializer unwinds through the enclosing scope, which
/// releases the reserved storage.
pub trait Construct<Args>: Sized {
    fn construct(args: Args) -> Self;
}
