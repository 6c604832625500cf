use std::ops::Range;

use log::{debug, warn};

use crate::editing::{Cmd, Direction, ImagePatch, Outcome, Patch, Rejection};
use crate::io::BlockRecord;
use crate::models::{BlockKind, BlockLimits, ContentBlock, ImageAsset, SourceFile};

/// An image block whose local file still has to be sent with the next save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingUpload<'a> {
    pub index: usize,
    pub source_file: &'a SourceFile,
}

/// Ordered, re-indexable list of content blocks for one editing session.
///
/// `order` of every block equals its position after every applied command.
/// Commands that would break that, or the `max_blocks` bound, are ignored and
/// reported through the returned [`Patch`].
#[derive(Debug, Clone, PartialEq)]
pub struct BlockList {
    blocks: Vec<ContentBlock>,
    limits: BlockLimits,
    /// Incremented on each applied edit
    version: u64,
}

impl Default for BlockList {
    fn default() -> Self {
        Self::new(BlockLimits::default())
    }
}

impl BlockList {
    pub fn new(limits: BlockLimits) -> Self {
        Self {
            blocks: Vec::new(),
            limits,
            version: 0,
        }
    }

    /// Build from blocks already in display order, re-numbering them
    pub(crate) fn from_ordered_blocks(blocks: Vec<ContentBlock>, limits: BlockLimits) -> Self {
        let mut list = Self {
            blocks,
            limits,
            version: 0,
        };
        list.renumber_from(0);
        list
    }

    /// Apply a command to the list
    ///
    /// Never fails: a command that cannot be applied leaves the list as it was
    /// and comes back as [`Outcome::Ignored`] with the same version.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let result = match cmd {
            Cmd::AppendText => self.push(ContentBlock::text(String::new())),
            Cmd::AppendImage { source_file } => {
                self.push(ContentBlock::image(ImageAsset::from_source(source_file)))
            }
            Cmd::RemoveAt { index } => self.remove(index),
            Cmd::Move { index, direction } => self.swap_adjacent(index, direction),
            Cmd::UpdateText { index, content } => self.set_text(index, content),
            Cmd::UpdateImageMeta { index, patch } => self.merge_image(index, patch),
        };

        match result {
            Ok(changed) => {
                self.version += 1;
                debug!(
                    "block edit applied to positions {:?}, version {}",
                    changed, self.version
                );
                Patch {
                    outcome: Outcome::Applied { changed },
                    version: self.version,
                }
            }
            Err(rejection) => {
                if matches!(rejection, Rejection::CapacityExceeded { .. }) {
                    warn!("block edit ignored: {rejection}");
                } else {
                    debug!("block edit ignored: {rejection}");
                }
                Patch {
                    outcome: Outcome::Ignored(rejection),
                    version: self.version,
                }
            }
        }
    }

    pub fn append_text(&mut self) -> Patch {
        self.apply(Cmd::AppendText)
    }

    pub fn append_image(&mut self, source_file: Option<SourceFile>) -> Patch {
        self.apply(Cmd::AppendImage { source_file })
    }

    pub fn remove_at(&mut self, index: usize) -> Patch {
        self.apply(Cmd::RemoveAt { index })
    }

    pub fn move_block(&mut self, index: usize, direction: Direction) -> Patch {
        self.apply(Cmd::Move { index, direction })
    }

    pub fn update_text_content(&mut self, index: usize, content: impl Into<String>) -> Patch {
        self.apply(Cmd::UpdateText {
            index,
            content: content.into(),
        })
    }

    pub fn update_image_meta(&mut self, index: usize, patch: ImagePatch) -> Patch {
        self.apply(Cmd::UpdateImageMeta { index, patch })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.blocks.len() >= self.limits.max_blocks
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn get(&self, index: usize) -> Option<&ContentBlock> {
        self.blocks.get(index)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn limits(&self) -> BlockLimits {
        self.limits
    }

    /// Image blocks holding a local file the backend has not stored yet
    pub fn pending_uploads(&self) -> Vec<PendingUpload<'_>> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(index, block)| match block {
                ContentBlock::Image(img) if img.image.is_pending_upload() => {
                    img.image.source_file.as_ref().map(|source_file| PendingUpload {
                        index,
                        source_file,
                    })
                }
                _ => None,
            })
            .collect()
    }

    /// Records for the backend, sorted by `order`, without local file handles
    pub fn serialize(&self) -> Vec<BlockRecord> {
        let mut records: Vec<BlockRecord> = self.blocks.iter().map(BlockRecord::from).collect();
        records.sort_by_key(|record| record.order());
        records
    }

    fn push(&mut self, mut block: ContentBlock) -> Result<Range<usize>, Rejection> {
        if self.is_full() {
            return Err(Rejection::CapacityExceeded {
                max: self.limits.max_blocks,
            });
        }
        let index = self.blocks.len();
        block.set_order(index);
        self.blocks.push(block);
        Ok(index..index + 1)
    }

    fn remove(&mut self, index: usize) -> Result<Range<usize>, Rejection> {
        self.check_index(index)?;
        self.blocks.remove(index);
        self.renumber_from(index);
        Ok(index..self.blocks.len())
    }

    fn swap_adjacent(
        &mut self,
        index: usize,
        direction: Direction,
    ) -> Result<Range<usize>, Rejection> {
        self.check_index(index)?;
        let target = direction
            .target(index, self.blocks.len())
            .ok_or(Rejection::AtBoundary { index, direction })?;

        self.blocks.swap(index, target);
        let (low, high) = (index.min(target), index.max(target));
        self.blocks[low].set_order(low);
        self.blocks[high].set_order(high);
        Ok(low..high + 1)
    }

    fn set_text(&mut self, index: usize, content: String) -> Result<Range<usize>, Rejection> {
        let limits = self.limits;
        let len = self.blocks.len();
        match self.blocks.get_mut(index) {
            Some(ContentBlock::Text(block)) => {
                block.content = limits.clamp_text(content);
                Ok(index..index + 1)
            }
            Some(ContentBlock::Image(_)) => Err(Rejection::VariantMismatch {
                index,
                expected: BlockKind::Text,
            }),
            None => Err(Rejection::IndexOutOfRange { index, len }),
        }
    }

    fn merge_image(&mut self, index: usize, patch: ImagePatch) -> Result<Range<usize>, Rejection> {
        let limits = self.limits;
        let len = self.blocks.len();
        let image = match self.blocks.get_mut(index) {
            Some(ContentBlock::Image(block)) => &mut block.image,
            Some(ContentBlock::Text(_)) => {
                return Err(Rejection::VariantMismatch {
                    index,
                    expected: BlockKind::Image,
                });
            }
            None => return Err(Rejection::IndexOutOfRange { index, len }),
        };

        if let Some(source_file) = patch.source_file {
            if patch.url.is_none() {
                image.url = None;
                image.public_id = None;
            }
            image.source_file = Some(source_file);
        }
        if let Some(url) = patch.url {
            image.url = Some(url).filter(|url| !url.is_empty());
        }
        if let Some(public_id) = patch.public_id {
            image.public_id = Some(public_id).filter(|id| !id.is_empty());
        }
        if let Some(caption) = patch.caption {
            image.caption = limits.clamp_caption(caption);
        }
        if let Some(alt) = patch.alt {
            image.alt = alt;
        }
        Ok(index..index + 1)
    }

    fn check_index(&self, index: usize) -> Result<(), Rejection> {
        if index < self.blocks.len() {
            Ok(())
        } else {
            Err(Rejection::IndexOutOfRange {
                index,
                len: self.blocks.len(),
            })
        }
    }

    fn renumber_from(&mut self, start: usize) {
        for (position, block) in self.blocks.iter_mut().enumerate().skip(start) {
            block.set_order(position);
        }
    }
}
