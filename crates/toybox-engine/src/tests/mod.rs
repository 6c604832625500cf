use crate::editing::BlockList;
use crate::models::{BlockLimits, ContentBlock};

/// Create a list of text blocks with the given contents
pub fn text_list(contents: &[&str]) -> BlockList {
    let blocks = contents.iter().map(|c| ContentBlock::text(*c)).collect();
    BlockList::from_ordered_blocks(blocks, BlockLimits::default())
}

pub fn orders(list: &BlockList) -> Vec<usize> {
    list.blocks().iter().map(ContentBlock::order).collect()
}

/// Text content per block, `[image]` for image blocks
pub fn contents(list: &BlockList) -> Vec<String> {
    list.blocks()
        .iter()
        .map(|block| match block {
            ContentBlock::Text(text) => text.content.clone(),
            ContentBlock::Image(_) => "[image]".to_string(),
        })
        .collect()
}
