use std::fmt;

use crate::models::SourceFile;

/// Discriminant of a [`ContentBlock`], used in rejections and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Text,
    Image,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Text => f.write_str("text"),
            BlockKind::Image => f.write_str("image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub order: usize,
    pub content: String,
}

/// Image metadata held by the editor.
///
/// `url` and `public_id` are filled in once the backend has stored the upload;
/// `source_file` is the local pick that never leaves this machine as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageAsset {
    pub source_file: Option<SourceFile>,
    pub url: Option<String>,
    pub public_id: Option<String>,
    pub caption: String,
    pub alt: String,
}

impl ImageAsset {
    pub fn from_source(source_file: Option<SourceFile>) -> Self {
        Self {
            source_file,
            ..Self::default()
        }
    }

    /// A local file is attached but the backend has not returned a URL for it yet
    pub fn is_pending_upload(&self) -> bool {
        self.source_file.is_some() && self.url.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlock {
    pub order: usize,
    pub image: ImageAsset,
}

/// One unit of story or blog content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text(TextBlock),
    Image(ImageBlock),
}

impl ContentBlock {
    pub fn text(content: impl Into<String>) -> Self {
        ContentBlock::Text(TextBlock {
            order: 0,
            content: content.into(),
        })
    }

    pub fn image(image: ImageAsset) -> Self {
        ContentBlock::Image(ImageBlock { order: 0, image })
    }

    pub fn order(&self) -> usize {
        match self {
            ContentBlock::Text(block) => block.order,
            ContentBlock::Image(block) => block.order,
        }
    }

    pub(crate) fn set_order(&mut self, order: usize) {
        match self {
            ContentBlock::Text(block) => block.order = order,
            ContentBlock::Image(block) => block.order = order,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Text(_) => BlockKind::Text,
            ContentBlock::Image(_) => BlockKind::Image,
        }
    }

    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            ContentBlock::Text(block) => Some(block),
            ContentBlock::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageBlock> {
        match self {
            ContentBlock::Image(block) => Some(block),
            ContentBlock::Text(_) => None,
        }
    }
}
