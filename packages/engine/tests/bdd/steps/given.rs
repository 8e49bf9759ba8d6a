//! Given step definitions
//!
//! Steps that set up the options for a scenario.

use cucumber::{gherkin::Step, given};
use tafqit_engine::{GrammaticalCase, HundredSpelling, WordifyOptions};

use crate::helpers::options_table::parse_options_table;
use crate::world::TafqitWorld;

#[given("the default options")]
fn default_options(world: &mut TafqitWorld) {
    world.options = WordifyOptions::default();
}

#[given("the options:")]
fn options_from_table(world: &mut TafqitWorld, step: &Step) {
    if let Some(table) = &step.table {
        world.options = parse_options_table(table)
            .unwrap_or_else(|e| panic!("Invalid options table: {e}"));
    }
}

#[given(expr = "the option {word} is enabled")]
fn enable_option(world: &mut TafqitWorld, name: String) {
    let options = world.options;
    world.options = match name.as_str() {
        "feminineSubject" => options.with_feminine_subject(true),
        "insertComma" => options.with_comma(true),
        "splitHundredWord" => options.with_split_hundred_word(true),
        "useBillionsNaming" => options.with_billions_naming(true),
        "trailingTextFollows" => options.with_trailing_text(true),
        other => panic!("Unknown boolean option: {other}"),
    };
}

#[given(expr = "the option {word} is disabled")]
fn disable_option(world: &mut TafqitWorld, name: String) {
    let options = world.options;
    world.options = match name.as_str() {
        "feminineSubject" => options.with_feminine_subject(false),
        "insertComma" => options.with_comma(false),
        "splitHundredWord" => options.with_split_hundred_word(false),
        "useBillionsNaming" => options.with_billions_naming(false),
        "trailingTextFollows" => options.with_trailing_text(false),
        other => panic!("Unknown boolean option: {other}"),
    };
}

#[given(expr = "the grammatical case is {string}")]
fn set_case(world: &mut TafqitWorld, case: String) {
    match case.parse::<GrammaticalCase>() {
        Ok(case) => world.options = world.options.with_case(case),
        Err(e) => world.error = Some(e),
    }
}

#[given(expr = "the hundred spelling is {string}")]
fn set_hundred_spelling(world: &mut TafqitWorld, spelling: String) {
    match spelling.parse::<HundredSpelling>() {
        Ok(spelling) => world.options = world.options.with_hundred_spelling(spelling),
        Err(e) => world.error = Some(e),
    }
}
