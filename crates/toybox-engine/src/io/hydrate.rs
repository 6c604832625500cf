use log::debug;

use crate::editing::BlockList;
use crate::io::{BlockRecord, RecordError, parse_records};
use crate::models::{BlockLimits, ContentBlock, ImageAsset, TextBlock};

#[derive(Debug, thiserror::Error)]
pub enum HydrateError {
    #[error("record holds {count} blocks, more than the limit of {max}")]
    TooManyBlocks { count: usize, max: usize },

    #[error("text block at order {order} has {len} characters (limit {max})")]
    TextTooLong { order: usize, len: usize, max: usize },

    #[error("image caption at order {order} has {len} characters (limit {max})")]
    CaptionTooLong { order: usize, len: usize, max: usize },

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl BlockList {
    /// Populate a list from persisted records when an existing story or blog is opened.
    ///
    /// Records are stable-sorted by `order` and re-numbered, so gaps or duplicate
    /// orders in stored data are healed. Data that the editor itself could never
    /// produce (too many blocks, over-long text) is rejected.
    pub fn hydrate(records: Vec<BlockRecord>, limits: BlockLimits) -> Result<Self, HydrateError> {
        if records.len() > limits.max_blocks {
            return Err(HydrateError::TooManyBlocks {
                count: records.len(),
                max: limits.max_blocks,
            });
        }

        let mut records = records;
        records.sort_by_key(BlockRecord::order);

        let blocks = records
            .into_iter()
            .map(|record| block_from_record(record, &limits))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("hydrated block list with {} blocks", blocks.len());
        Ok(BlockList::from_ordered_blocks(blocks, limits))
    }

    /// Hydrate straight from the JSON array returned by the backend
    pub fn hydrate_json(json: &str, limits: BlockLimits) -> Result<Self, HydrateError> {
        let records = parse_records(json)?;
        Self::hydrate(records, limits)
    }
}

fn block_from_record(record: BlockRecord, limits: &BlockLimits) -> Result<ContentBlock, HydrateError> {
    match record {
        BlockRecord::Text { order, content } => {
            let len = content.chars().count();
            if len > limits.max_text_chars {
                return Err(HydrateError::TextTooLong {
                    order,
                    len,
                    max: limits.max_text_chars,
                });
            }
            Ok(ContentBlock::Text(TextBlock { order, content }))
        }
        BlockRecord::Image { order, image } => {
            let len = image.caption.chars().count();
            if len > limits.max_caption_chars {
                return Err(HydrateError::CaptionTooLong {
                    order,
                    len,
                    max: limits.max_caption_chars,
                });
            }
            Ok(ContentBlock::image(ImageAsset::from(image)))
        }
    }
}
