pub(crate) mod carousel;
pub(crate) mod controller;
pub(crate) mod slider;
