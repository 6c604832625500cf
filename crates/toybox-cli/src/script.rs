use std::path::PathBuf;

use anyhow::{Result, bail};
use serde::Deserialize;
use toybox_engine::{Cmd, Direction, ImagePatch, SourceFile};

/// One step of an edit script, as written in the JSON file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    AppendText,
    AppendImage {
        #[serde(default)]
        source_file: Option<PathBuf>,
    },
    RemoveAt {
        index: usize,
    },
    Move {
        index: usize,
        delta: i64,
    },
    UpdateText {
        index: usize,
        content: String,
    },
    UpdateImageMeta {
        index: usize,
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        alt: Option<String>,
        #[serde(default)]
        source_file: Option<PathBuf>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        public_id: Option<String>,
    },
}

impl EditOp {
    pub fn into_cmd(self) -> Result<Cmd> {
        let cmd = match self {
            EditOp::AppendText => Cmd::AppendText,
            EditOp::AppendImage { source_file } => Cmd::AppendImage {
                source_file: source_file.map(SourceFile::new),
            },
            EditOp::RemoveAt { index } => Cmd::RemoveAt { index },
            EditOp::Move { index, delta } => {
                let Some(direction) = Direction::from_delta(delta) else {
                    bail!("move delta must be -1 or 1, got {delta}");
                };
                Cmd::Move { index, direction }
            }
            EditOp::UpdateText { index, content } => Cmd::UpdateText { index, content },
            EditOp::UpdateImageMeta {
                index,
                caption,
                alt,
                source_file,
                url,
                public_id,
            } => Cmd::UpdateImageMeta {
                index,
                patch: ImagePatch {
                    caption,
                    alt,
                    source_file: source_file.map(SourceFile::new),
                    url,
                    public_id,
                },
            },
        };
        Ok(cmd)
    }
}

pub fn parse_script(json: &str) -> Result<Vec<EditOp>> {
    Ok(serde_json::from_str(json)?)
}
