/// A state slice that changes only through actions.
///
/// `reduce` takes the current snapshot by value and returns the next one, so
/// a caller never sees a half-applied transition.
pub trait Reducer: Default {
    type Action;

    fn reduce(self, action: Self::Action) -> Self;
}
