// Posts: the corpus entities and how they get loaded from disk.

pub mod handle;
pub mod loader;
pub mod post;

pub use handle::Handle;
pub use post::Post;
