pub(crate) mod ring;

pub mod iter;
