pub const DEFAULT_MAX_BLOCKS: usize = 50;
pub const DEFAULT_MAX_TEXT_CHARS: usize = 5000;
pub const DEFAULT_MAX_CAPTION_CHARS: usize = 200;

/// Bounds applied to a block list while editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLimits {
    pub max_blocks: usize,
    pub max_text_chars: usize,
    pub max_caption_chars: usize,
}

impl Default for BlockLimits {
    fn default() -> Self {
        Self {
            max_blocks: DEFAULT_MAX_BLOCKS,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_caption_chars: DEFAULT_MAX_CAPTION_CHARS,
        }
    }
}

impl BlockLimits {
    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = max_blocks;
        self
    }

    pub(crate) fn clamp_text(&self, content: String) -> String {
        truncate_chars(content, self.max_text_chars)
    }

    pub(crate) fn clamp_caption(&self, caption: String) -> String {
        truncate_chars(caption, self.max_caption_chars)
    }
}

/// Cut a string to at most `max` characters, always on a char boundary
fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((byte_idx, _)) = s.char_indices().nth(max) {
        s.truncate(byte_idx);
    }
    s
}
