//! When step definitions
//!
//! Steps that wordify numbers.

use cucumber::when;

use crate::world::TafqitWorld;

#[when(expr = "the number {string} is wordified")]
fn wordify_digits(world: &mut TafqitWorld, number: String) {
    world.wordify(number);
}

#[when(expr = "the integer {int} is wordified")]
fn wordify_integer(world: &mut TafqitWorld, number: i64) {
    world.wordify(number);
}

#[when(expr = "10 to the power {int} is wordified")]
fn wordify_power_of_ten(world: &mut TafqitWorld, exponent: usize) {
    world.wordify(format!("1{}", "0".repeat(exponent)));
}

#[when(expr = "10 to the power {int} minus 1 is wordified")]
fn wordify_power_of_ten_minus_one(world: &mut TafqitWorld, exponent: usize) {
    world.wordify("9".repeat(exponent));
}
