use crate::editing::BlockList;
use crate::io::{RecordError, records_to_json};
use crate::models::SourceFile;

pub const DEFAULT_BLOCKS_FIELD: &str = "contentBlocks";
pub const DEFAULT_IMAGE_FIELD_PREFIX: &str = "blockImage_";

/// Multipart field names used by the backend's create/update endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNaming {
    pub blocks_field: String,
    pub image_field_prefix: String,
}

impl Default for FieldNaming {
    fn default() -> Self {
        Self {
            blocks_field: DEFAULT_BLOCKS_FIELD.to_string(),
            image_field_prefix: DEFAULT_IMAGE_FIELD_PREFIX.to_string(),
        }
    }
}

impl FieldNaming {
    pub fn image_field(&self, index: usize) -> String {
        format!("{}{}", self.image_field_prefix, index)
    }
}

/// A file part of the save request, keyed by the block's position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field_name: String,
    pub block_index: usize,
    pub source_file: SourceFile,
}

/// Layout of the multipart form posted on save.
///
/// The crate only plans the form; the page controller owns the HTTP client
/// and reads the file bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub blocks_field: String,
    pub blocks_json: String,
    pub files: Vec<FilePart>,
}

impl Submission {
    pub fn build(list: &BlockList, naming: &FieldNaming) -> Result<Self, RecordError> {
        let blocks_json = records_to_json(&list.serialize())?;
        let files = list
            .pending_uploads()
            .into_iter()
            .map(|pending| FilePart {
                field_name: naming.image_field(pending.index),
                block_index: pending.index,
                source_file: pending.source_file.clone(),
            })
            .collect();

        Ok(Self {
            blocks_field: naming.blocks_field.clone(),
            blocks_json,
            files,
        })
    }
}
