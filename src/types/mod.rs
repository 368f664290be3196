pub mod direction;
pub mod grid;
pub mod position;

pub use direction::*;
pub use grid::*;
pub use position::*;

pub type DirectionSet = enumset::EnumSet<Direction>;

#[macro_export]
macro_rules! direction_set {
    () => {
        {
            let ds: $crate::enumset::EnumSet::<$crate::types::Direction> = $crate::enumset::EnumSet::new();
            ds
        }
    };
    ($($x: expr),+ $(,)?) => {
        {
            let mut ds: $crate::enumset::EnumSet::<$crate::types::Direction> = $crate::enumset::EnumSet::new();
            $(
                ds.insert($x);
            )+
            ds
        }
    };
}
