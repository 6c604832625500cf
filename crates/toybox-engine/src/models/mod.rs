pub mod block;
pub mod limits;
pub mod source_file;

pub use block::{BlockKind, ContentBlock, ImageAsset, ImageBlock, TextBlock};
pub use limits::BlockLimits;
pub use source_file::SourceFile;
