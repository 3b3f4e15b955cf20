mod descriptor;
mod source;
mod value;

pub use descriptor::*;
pub use source::*;
pub use value::*;
