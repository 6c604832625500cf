use serde::{Deserialize, Serialize};

use crate::models::{ContentBlock, ImageAsset};

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid block records: {0}")]
    Json(#[from] serde_json::Error),
}

/// One block as exchanged with the backend, tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockRecord {
    Text {
        order: usize,
        #[serde(default)]
        content: String,
    },
    Image {
        order: usize,
        #[serde(default)]
        image: ImageRecord,
    },
}

/// Image fields of a record; the local file handle is never part of it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub alt: String,
}

impl BlockRecord {
    pub fn order(&self) -> usize {
        match self {
            BlockRecord::Text { order, .. } | BlockRecord::Image { order, .. } => *order,
        }
    }
}

impl From<&ContentBlock> for BlockRecord {
    fn from(block: &ContentBlock) -> Self {
        match block {
            ContentBlock::Text(text) => BlockRecord::Text {
                order: text.order,
                content: text.content.clone(),
            },
            ContentBlock::Image(img) => BlockRecord::Image {
                order: img.order,
                image: ImageRecord::from(&img.image),
            },
        }
    }
}

impl From<&ImageAsset> for ImageRecord {
    fn from(asset: &ImageAsset) -> Self {
        Self {
            url: asset.url.clone(),
            public_id: asset.public_id.clone(),
            caption: asset.caption.clone(),
            alt: asset.alt.clone(),
        }
    }
}

impl From<ImageRecord> for ImageAsset {
    /// Empty strings from the backend mean "not uploaded"
    fn from(record: ImageRecord) -> Self {
        Self {
            source_file: None,
            url: record.url.filter(|url| !url.is_empty()),
            public_id: record.public_id.filter(|id| !id.is_empty()),
            caption: record.caption,
            alt: record.alt,
        }
    }
}

pub fn parse_records(json: &str) -> Result<Vec<BlockRecord>, RecordError> {
    Ok(serde_json::from_str(json)?)
}

pub fn records_to_json(records: &[BlockRecord]) -> Result<String, RecordError> {
    Ok(serde_json::to_string(records)?)
}

pub fn records_to_json_pretty(records: &[BlockRecord]) -> Result<String, RecordError> {
    Ok(serde_json::to_string_pretty(records)?)
}
