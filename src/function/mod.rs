pub mod colormap;
pub mod convert;
pub mod depth;

pub use colormap::*;
pub use convert::*;
pub use depth::*;
