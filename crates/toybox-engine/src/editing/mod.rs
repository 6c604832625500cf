/*!
 * # Block Editing Core
 *
 * The story and blog editors author content as an ordered list of blocks,
 * each either a text paragraph or an image with caption/alt metadata.
 *
 * ## Architecture Overview
 *
 * ### 1. Single owner, synchronous edits
 * - A [`BlockList`] is owned by exactly one editing session
 * - Every edit runs to completion through `&mut self`; the last edit wins
 *
 * ### 2. Command-Based Editing
 * - All edits are represented as **Commands** (`Cmd` enum)
 * - `BlockList::apply` runs a command and returns a [`Patch`]
 * - Convenience methods (`append_text`, `move_block`, ...) build the command for you
 *
 * ### 3. Contiguous ordering
 * - Each block carries an `order` equal to its position
 * - Every applied command re-numbers the affected tail so `order` is always `0..len`
 *
 * ### 4. Edits never fail
 * - Invalid edits (list full, bad index, moving past either end, editing the
 *   wrong variant) leave the list untouched
 * - The [`Patch`] reports them as a [`Rejection`] instead of an error
 *
 * ## Usage Pattern
 *
 * ```rust
 * use toybox_engine::editing::*;
 * use toybox_engine::models::BlockLimits;
 *
 * let mut list = BlockList::new(BlockLimits::default());
 * list.append_text();
 * list.update_text_content(0, "Once upon a time...");
 * list.append_image(None);
 *
 * let patch = list.move_block(0, Direction::Down);
 * assert!(patch.is_applied());
 *
 * let records = list.serialize();
 * assert_eq!(records.len(), 2);
 * ```
 */

pub mod block_list;
pub mod commands;
pub mod patch;

pub use block_list::{BlockList, PendingUpload};
pub use commands::{Cmd, Direction, ImagePatch};
pub use patch::{Outcome, Patch, Rejection};
