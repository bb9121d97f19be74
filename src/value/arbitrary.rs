use super::Value;

use quickcheck::{Arbitrary, Gen};

// Generators limited to the forms whose external representation reads back
// exactly: fixnums, booleans, escape-free strings, symbols and flat lists
// of those.

const SYMBOL_INITIALS: &[char] = &[
    'a', 'b', 'c', 'k', 'x', 'y', 'z', '<', '=', '>', '!', '?', '*', '_',
];

const SYMBOL_SUBSEQUENTS: &[char] = &[
    'a', 'b', 'c', 'k', 'x', 'y', 'z', '<', '=', '>', '!', '?', '*', '_', '0', '1', '9',
];

const STRING_CHARS: &[char] = &[
    'a', 'b', 'c', 'x', 'y', 'z', 'A', 'Z', '0', '7', ' ', '(', ')', '.', '\'',
];

fn arbitrary_symbol(gen: &mut Gen) -> String {
    let mut name = String::new();
    name.push(*gen.choose(SYMBOL_INITIALS).unwrap());
    for _ in 0..(usize::arbitrary(gen) % 6) {
        name.push(*gen.choose(SYMBOL_SUBSEQUENTS).unwrap());
    }
    name
}

fn arbitrary_string(gen: &mut Gen) -> String {
    let mut s = String::new();
    for _ in 0..(usize::arbitrary(gen) % 10) {
        s.push(*gen.choose(STRING_CHARS).unwrap());
    }
    s
}

fn arbitrary_atom(gen: &mut Gen) -> Value {
    match gen.choose(&[1, 2, 3, 4]).unwrap() {
        1 => Value::fixnum(i64::arbitrary(gen)),
        2 => Value::boolean(bool::arbitrary(gen)),
        3 => Value::string(arbitrary_string(gen)),
        _ => Value::symbol(arbitrary_symbol(gen)),
    }
}

impl Arbitrary for Value {
    fn arbitrary(gen: &mut Gen) -> Self {
        if let Some(true) = gen.choose(&[true, false, false, false]) {
            let elements = (0..(usize::arbitrary(gen) % 5))
                .map(|_| arbitrary_atom(gen))
                .collect::<Vec<_>>();
            Value::list(elements)
        } else {
            arbitrary_atom(gen)
        }
    }
}
