pub(crate) mod lifecycle;
pub(crate) mod ring;
