//! Constrained random password generator.

use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;

use crate::charset::{DIGITS, LOWER, SPECIAL, UPPER};

/// Length of generated passwords, in characters.
pub const GENERATED_LENGTH: usize = 16;

/// Generates a password with the thread-local RNG.
///
/// Hardened builds wanting an OS-backed source can call
/// [`generate_with`] with `rand::rngs::OsRng` instead; the class-coverage
/// and shuffle behavior is identical under any source.
pub fn generate() -> SecretString {
    generate_with(&mut rand::thread_rng())
}

/// Generates a [`GENERATED_LENGTH`]-character password from the supplied
/// random source.
///
/// The output always contains at least one uppercase letter, one lowercase
/// letter, one digit and one symbol: the first four positions are seeded
/// with one draw per class, the rest drawn from the union, and the whole
/// sequence shuffled to remove the positional bias of the seeding.
pub fn generate_with<R: Rng>(rng: &mut R) -> SecretString {
    let mut chars: Vec<char> = vec![
        pick(UPPER, rng),
        pick(LOWER, rng),
        pick(DIGITS, rng),
        pick(SPECIAL, rng),
    ];

    let union: String = [UPPER, LOWER, DIGITS, SPECIAL].concat();
    while chars.len() < GENERATED_LENGTH {
        chars.push(pick(&union, rng));
    }

    // Fisher-Yates
    chars.shuffle(rng);

    SecretString::new(chars.into_iter().collect::<String>().into())
}

// Class sets are ASCII, so byte indexing is safe.
fn pick<R: Rng>(set: &str, rng: &mut R) -> char {
    set.as_bytes()[rng.gen_range(0..set.len())] as char
}
