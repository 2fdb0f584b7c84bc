pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod grid;
pub(crate) mod validate;
