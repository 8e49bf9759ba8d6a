//! Then step definitions
//!
//! Steps that verify outcomes and assertions.

use cucumber::then;

use crate::world::TafqitWorld;

#[then(expr = "the words are {string}")]
fn assert_words(world: &mut TafqitWorld, expected: String) {
    assert_eq!(world.words(), expected);
}

#[then(expr = "the words end with {string}")]
fn assert_words_end_with(world: &mut TafqitWorld, suffix: String) {
    let words = world.words();
    assert!(
        words.ends_with(&suffix),
        "Expected {words:?} to end with {suffix:?}"
    );
}

#[then(expr = "the words start with {string}")]
fn assert_words_start_with(world: &mut TafqitWorld, prefix: String) {
    let words = world.words();
    assert!(
        words.starts_with(&prefix),
        "Expected {words:?} to start with {prefix:?}"
    );
}

#[then(expr = "the words do not contain {string}")]
fn assert_words_do_not_contain(world: &mut TafqitWorld, fragment: String) {
    let words = world.words();
    assert!(
        !words.contains(&fragment),
        "Expected {words:?} not to contain {fragment:?}"
    );
}

#[then(expr = "it fails with {word}")]
fn assert_error_kind(world: &mut TafqitWorld, kind: String) {
    assert!(
        world.result.is_none(),
        "Expected an error, got {:?}",
        world.result
    );
    assert_eq!(world.error_kind(), Some(kind.as_str()));
}
