pub mod editing;
pub mod io;
pub mod models;
pub mod session;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{block_list::*, commands::*, patch::*};
pub use io::*;
pub use models::*;
pub use session::*;
