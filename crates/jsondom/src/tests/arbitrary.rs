use alloc::string::String;

use quickcheck::{Arbitrary, Gen};

use crate::{Array, Map, Number, Value};

#[derive(Debug, Copy, Clone, PartialEq)]
struct FiniteF64(f64);

impl Arbitrary for FiniteF64 {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }
        Self(value)
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            // Containers shrink the depth allowance; leaves are scalar-only.
            let variants = if depth == 0 { 5 } else { 7 };
            match usize::arbitrary(g) % variants {
                0 => Value::Null,
                1 => Value::Boolean(bool::arbitrary(g)),
                2 => Value::Integer(i64::arbitrary(g)),
                3 => Value::Number(Number::from_f64(FiniteF64::arbitrary(g).0).unwrap()),
                4 => Value::String(String::arbitrary(g)),
                5 => {
                    let len = usize::arbitrary(g) % 4;
                    let mut items = Array::new();
                    for _ in 0..len {
                        items.push(gen_val(g, depth - 1));
                    }
                    Value::Array(items)
                }
                _ => {
                    let len = usize::arbitrary(g) % 4;
                    let mut map = Map::new();
                    for _ in 0..len {
                        map.insert(String::arbitrary(g), gen_val(g, depth - 1));
                    }
                    Value::Object(map)
                }
            }
        }

        let depth = usize::arbitrary(g) % 3;
        gen_val(g, depth)
    }
}
