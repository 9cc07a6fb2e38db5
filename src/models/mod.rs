mod archive;
mod blog;
mod entry;

pub use archive::*;
pub use blog::*;
pub use entry::*;
