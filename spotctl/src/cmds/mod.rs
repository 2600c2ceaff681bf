pub use light::*;
pub use list::*;
pub use nearest::*;

mod light;
mod list;
mod nearest;
