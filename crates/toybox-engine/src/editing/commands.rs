use crate::models::SourceFile;

/// Direction of a single-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards index 0 (delta -1)
    Up,
    /// Towards the end of the list (delta +1)
    Down,
}

impl Direction {
    /// Map an integer delta from a UI control; only -1 and +1 are moves
    pub fn from_delta(delta: i64) -> Option<Self> {
        match delta {
            -1 => Some(Direction::Up),
            1 => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn delta(self) -> i64 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }

    /// Index the block at `index` would swap with, if it exists in a list of `len`
    pub(crate) fn target(self, index: usize, len: usize) -> Option<usize> {
        if index >= len {
            return None;
        }
        match self {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1).filter(|&target| target < len),
        }
    }
}

/// Partial update of an image block; `None` fields are left alone.
///
/// Attaching a new `source_file` without a `url` clears the previously uploaded
/// `url` and `public_id`, since they describe the old picture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePatch {
    pub caption: Option<String>,
    pub alt: Option<String>,
    pub source_file: Option<SourceFile>,
    pub url: Option<String>,
    pub public_id: Option<String>,
}

impl ImagePatch {
    pub fn caption(caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            ..Self::default()
        }
    }

    pub fn alt(alt: impl Into<String>) -> Self {
        Self {
            alt: Some(alt.into()),
            ..Self::default()
        }
    }

    /// Patch recording a finished upload
    pub fn uploaded(url: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            public_id: Some(public_id.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.caption.is_none()
            && self.alt.is_none()
            && self.source_file.is_none()
            && self.url.is_none()
            && self.public_id.is_none()
    }
}

/// Commands that can be applied to a block list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    AppendText,
    AppendImage {
        source_file: Option<SourceFile>,
    },
    RemoveAt {
        index: usize,
    },
    Move {
        index: usize,
        direction: Direction,
    },
    UpdateText {
        index: usize,
        content: String,
    },
    UpdateImageMeta {
        index: usize,
        patch: ImagePatch,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1, Some(Direction::Up))]
    #[case(1, Some(Direction::Down))]
    #[case(0, None)]
    #[case(2, None)]
    #[case(-5, None)]
    fn test_from_delta(#[case] delta: i64, #[case] expected: Option<Direction>) {
        assert_eq!(Direction::from_delta(delta), expected);
    }

    #[rstest]
    #[case(Direction::Up, 0, 3, None)]
    #[case(Direction::Up, 2, 3, Some(1))]
    #[case(Direction::Down, 2, 3, None)]
    #[case(Direction::Down, 0, 3, Some(1))]
    #[case(Direction::Down, 5, 3, None)]
    #[case(Direction::Up, 5, 3, None)]
    #[case(Direction::Up, 0, 0, None)]
    fn test_target(
        #[case] direction: Direction,
        #[case] index: usize,
        #[case] len: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(direction.target(index, len), expected);
    }

    #[test]
    fn test_delta_matches_from_delta() {
        for direction in [Direction::Up, Direction::Down] {
            assert_eq!(Direction::from_delta(direction.delta()), Some(direction));
        }
    }

    #[test]
    fn test_image_patch_constructors() {
        assert!(ImagePatch::default().is_empty());
        assert!(!ImagePatch::caption("A red train").is_empty());

        let uploaded = ImagePatch::uploaded("https://cdn/x.png", "toys/x");
        assert_eq!(uploaded.url.as_deref(), Some("https://cdn/x.png"));
        assert_eq!(uploaded.public_id.as_deref(), Some("toys/x"));
        assert!(uploaded.caption.is_none());
    }
}
