pub(crate) mod iter;
pub(crate) mod timezone;

pub use iter::MaybeIter;
pub use timezone::Timezone;
