//! End-to-end editing sessions: hydrate a stored story, edit it the way the
//! authoring page does, and check what would be posted back.

use pretty_assertions::assert_eq;
use toybox_engine::{
    BlockLimits, BlockList, BlockRecord, ContentBlock, Direction, FieldNaming, ImagePatch,
    Rejection, SourceFile, Submission,
};

const STORED_STORY: &str = r#"[
    {"type": "image", "order": 2, "image": {"url": "https://cdn.example.com/ark.jpg", "publicId": "stories/ark", "caption": "The ark", "alt": "A wooden ark"}},
    {"type": "text", "order": 0, "content": "Noah built a boat."},
    {"type": "text", "order": 5, "content": "The animals came two by two."}
]"#;

fn orders(list: &BlockList) -> Vec<usize> {
    list.blocks().iter().map(ContentBlock::order).collect()
}

fn texts(list: &BlockList) -> Vec<Option<&str>> {
    list.blocks()
        .iter()
        .map(|b| b.as_text().map(|t| t.content.as_str()))
        .collect()
}

#[test]
fn editing_a_stored_story_produces_a_contiguous_payload() {
    let mut list = BlockList::hydrate_json(STORED_STORY, BlockLimits::default()).unwrap();
    assert_eq!(orders(&list), vec![0, 1, 2]);

    list.append_image(Some(SourceFile::new("giraffes.png")));
    list.update_image_meta(3, ImagePatch::caption("Two giraffes"));
    list.move_block(3, Direction::Up);
    list.remove_at(0);

    assert_eq!(orders(&list), vec![0, 1, 2]);
    let submission = Submission::build(&list, &FieldNaming::default()).unwrap();
    assert_eq!(submission.files.len(), 1);
    assert_eq!(submission.files[0].field_name, "blockImage_1");

    insta::assert_json_snapshot!(list.serialize(), @r#"
    [
      {
        "type": "image",
        "order": 0,
        "image": {
          "url": "https://cdn.example.com/ark.jpg",
          "publicId": "stories/ark",
          "caption": "The ark",
          "alt": "A wooden ark"
        }
      },
      {
        "type": "image",
        "order": 1,
        "image": {
          "caption": "Two giraffes",
          "alt": ""
        }
      },
      {
        "type": "text",
        "order": 2,
        "content": "The animals came two by two."
      }
    ]
    "#);
}

#[test]
fn swapping_text_and_image() {
    let mut list = BlockList::default();
    list.append_text();
    list.update_text_content(0, "a");
    list.append_image(Some(SourceFile::new("img1.png")));

    list.move_block(0, Direction::Down);

    assert_eq!(texts(&list), vec![None, Some("a")]);
    assert_eq!(orders(&list), vec![0, 1]);
}

#[test]
fn full_list_ignores_appends() {
    let mut list = BlockList::default();
    for _ in 0..50 {
        assert!(list.append_text().is_applied());
    }

    let patch = list.append_text();

    assert_eq!(list.len(), 50);
    assert_eq!(
        patch.rejection(),
        Some(&Rejection::CapacityExceeded { max: 50 })
    );
}

#[test]
fn removing_the_middle_of_three() {
    let mut list = BlockList::default();
    for (i, content) in ["a", "b", "c"].into_iter().enumerate() {
        list.append_text();
        list.update_text_content(i, content);
    }

    list.remove_at(1);

    assert_eq!(texts(&list), vec![Some("a"), Some("c")]);
    assert_eq!(orders(&list), vec![0, 1]);
}

#[test]
fn random_walk_of_edits_keeps_orders_contiguous() {
    let mut list = BlockList::new(BlockLimits::default().with_max_blocks(8));
    // Deterministic pseudo-random sequence of edits
    let mut seed: u64 = 0x5eed;
    for _ in 0..500 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let pick = (seed >> 33) as usize;
        let index = pick % 10;
        match pick % 5 {
            0 => list.append_text(),
            1 => list.append_image(None),
            2 => list.remove_at(index),
            3 => list.move_block(index, Direction::Up),
            _ => list.move_block(index, Direction::Down),
        };

        assert!(list.len() <= 8);
        let expected: Vec<usize> = (0..list.len()).collect();
        assert_eq!(orders(&list), expected);
        let serialized: Vec<usize> = list.serialize().iter().map(BlockRecord::order).collect();
        assert_eq!(serialized, expected);
    }
}
