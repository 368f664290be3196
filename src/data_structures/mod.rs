pub mod frontier;

pub use frontier::*;

pub type ActionList<T> = smallvec::SmallVec<[T; 8]>;

#[macro_export]
macro_rules! action_list {
    () => {
        $crate::smallvec::SmallVec::<[_; 8]>::new()
    };
    ($($e : expr),+ $(,)?) => {
        $crate::smallvec::smallvec![$($e),+]
    }
}
