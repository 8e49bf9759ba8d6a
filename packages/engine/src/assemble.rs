//! Joining group phrases into the final text

use crate::grammar::{AND, LIST_COMMA};

/// Join group phrases, most significant first, with "and".
///
/// Each item is `(phrase, is_last_effective)`. Empty phrases (zero groups)
/// contribute nothing, and nothing after the last effective group is
/// emitted, so the result never starts or ends with a separator. With
/// `comma` set, each "and" is preceded by an Arabic comma.
pub fn assemble<'a, I>(phrases: I, comma: bool) -> String
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    let separator = if comma {
        format!("{LIST_COMMA}{AND}")
    } else {
        AND.to_string()
    };

    let mut text = String::new();
    for (phrase, is_last_effective) in phrases {
        if !phrase.is_empty() {
            if !text.is_empty() {
                text.push_str(&separator);
            }
            text.push_str(phrase);
        }
        if is_last_effective {
            break;
        }
    }
    text
}
