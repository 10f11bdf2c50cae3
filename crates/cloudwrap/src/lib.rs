#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use cloudwrap_linalg as linalg;

#[doc(inline)]
pub use cloudwrap_transform as transform;

#[doc(inline)]
pub use cloudwrap_viz as viz;
