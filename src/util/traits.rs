/// Allows any sized value to be moved into an [Option] without wrapping it in `Some()`, in the
/// same style that [result_extensions::ResultExtensions] provides `to_ok()` and `to_err()`.
pub trait OptionExtensions
where
    Self: Sized,
{
    fn to_some(self) -> Option<Self> {
        Some(self)
    }
}
// Any type that implements Sized can be converted to an Option with this function
impl<T> OptionExtensions for T {}
