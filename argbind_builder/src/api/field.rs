use crate::api::capture::*;
use crate::model::ValueKind;

/// A single-value binding into caller owned storage.
///
/// Each variant holds a typed mutable reference, so conversion is decided by the variant rather than at runtime.
/// All variants may be built with `.into()` from the corresponding `&mut` reference.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{Slot, ValueKind};
///
/// let mut verbose: bool = false;
/// let slot: Slot = (&mut verbose).into();
/// assert_eq!(slot.kind(), ValueKind::Flag);
/// ```
#[derive(Debug)]
pub enum Slot<'a> {
    /// A boolean flag.
    Flag(&'a mut bool),
    /// A free text value.
    Text(&'a mut String),
    /// An `i8` value.
    I8(&'a mut i8),
    /// An `i16` value.
    I16(&'a mut i16),
    /// An `i32` value.
    I32(&'a mut i32),
    /// An `i64` value.
    I64(&'a mut i64),
    /// An `isize` value.
    Isize(&'a mut isize),
    /// A `u8` value.
    U8(&'a mut u8),
    /// A `u16` value.
    U16(&'a mut u16),
    /// A `u32` value.
    U32(&'a mut u32),
    /// A `u64` value.
    U64(&'a mut u64),
    /// A `usize` value.
    Usize(&'a mut usize),
    /// An `f32` value.
    F32(&'a mut f32),
    /// An `f64` value.
    F64(&'a mut f64),
}

impl<'a> Slot<'a> {
    /// The kind of value this slot accepts.
    pub fn kind(&self) -> ValueKind {
        match self {
            Slot::Flag(_) => ValueKind::Flag,
            Slot::Text(_) => ValueKind::Text,
            Slot::I8(_) | Slot::I16(_) | Slot::I32(_) | Slot::I64(_) | Slot::Isize(_) => {
                ValueKind::Integer
            }
            Slot::U8(_) | Slot::U16(_) | Slot::U32(_) | Slot::U64(_) | Slot::Usize(_) => {
                ValueKind::Unsigned
            }
            Slot::F32(_) | Slot::F64(_) => ValueKind::Float,
        }
    }

    /// Convert `token` per the slot kind and store it.
    /// Nothing is stored when the conversion fails, including when the value is out of range for the slot's width.
    pub(crate) fn set(&mut self, token: &str) -> Result<(), InvalidConversion> {
        match self {
            Slot::Flag(variable) => **variable = coerce_flag(token)?,
            Slot::Text(variable) => **variable = token.to_string(),
            Slot::I8(variable) => **variable = coerce_signed(token)?,
            Slot::I16(variable) => **variable = coerce_signed(token)?,
            Slot::I32(variable) => **variable = coerce_signed(token)?,
            Slot::I64(variable) => **variable = coerce_signed(token)?,
            Slot::Isize(variable) => **variable = coerce_signed(token)?,
            Slot::U8(variable) => **variable = coerce_unsigned(token)?,
            Slot::U16(variable) => **variable = coerce_unsigned(token)?,
            Slot::U32(variable) => **variable = coerce_unsigned(token)?,
            Slot::U64(variable) => **variable = coerce_unsigned(token)?,
            Slot::Usize(variable) => **variable = coerce_unsigned(token)?,
            Slot::F32(variable) => **variable = coerce_float(token)?,
            Slot::F64(variable) => **variable = coerce_float(token)?,
        };
        Ok(())
    }

    /// Mark a flag as present.
    pub(crate) fn raise(&mut self) {
        match self {
            Slot::Flag(variable) => **variable = true,
            _ => unreachable!("internal error - only a flag slot may be raised"),
        }
    }
}

impl<'a> From<&'a mut bool> for Slot<'a> {
    fn from(value: &'a mut bool) -> Self {
        Slot::Flag(value)
    }
}

impl<'a> From<&'a mut String> for Slot<'a> {
    fn from(value: &'a mut String) -> Self {
        Slot::Text(value)
    }
}

/// A many-value binding into caller owned storage, used by variadic arguments.
#[derive(Debug)]
pub enum Sequence<'a> {
    /// Free text values.
    Text(&'a mut Vec<String>),
    /// `i8` values.
    I8(&'a mut Vec<i8>),
    /// `i16` values.
    I16(&'a mut Vec<i16>),
    /// `i32` values.
    I32(&'a mut Vec<i32>),
    /// `i64` values.
    I64(&'a mut Vec<i64>),
    /// `isize` values.
    Isize(&'a mut Vec<isize>),
    /// `u8` values.
    U8(&'a mut Vec<u8>),
    /// `u16` values.
    U16(&'a mut Vec<u16>),
    /// `u32` values.
    U32(&'a mut Vec<u32>),
    /// `u64` values.
    U64(&'a mut Vec<u64>),
    /// `usize` values.
    Usize(&'a mut Vec<usize>),
    /// `f32` values.
    F32(&'a mut Vec<f32>),
    /// `f64` values.
    F64(&'a mut Vec<f64>),
}

impl<'a> Sequence<'a> {
    /// The kind of each value in this sequence.
    pub fn kind(&self) -> ValueKind {
        match self {
            Sequence::Text(_) => ValueKind::Text,
            Sequence::I8(_)
            | Sequence::I16(_)
            | Sequence::I32(_)
            | Sequence::I64(_)
            | Sequence::Isize(_) => ValueKind::Integer,
            Sequence::U8(_)
            | Sequence::U16(_)
            | Sequence::U32(_)
            | Sequence::U64(_)
            | Sequence::Usize(_) => ValueKind::Unsigned,
            Sequence::F32(_) | Sequence::F64(_) => ValueKind::Float,
        }
    }

    /// Replace the sequence contents with the converted `tokens`, in order.
    ///
    /// On failure, reports the offset of the failing token alongside the conversion error and leaves the sequence untouched.
    pub(crate) fn assign(
        &mut self,
        tokens: &[(usize, String)],
    ) -> Result<(), (usize, InvalidConversion)> {
        match self {
            Sequence::Text(variable) => {
                **variable = tokens.iter().map(|(_, token)| token.clone()).collect();
            }
            Sequence::I8(variable) => **variable = convert_all(tokens, coerce_signed)?,
            Sequence::I16(variable) => **variable = convert_all(tokens, coerce_signed)?,
            Sequence::I32(variable) => **variable = convert_all(tokens, coerce_signed)?,
            Sequence::I64(variable) => **variable = convert_all(tokens, coerce_signed)?,
            Sequence::Isize(variable) => **variable = convert_all(tokens, coerce_signed)?,
            Sequence::U8(variable) => **variable = convert_all(tokens, coerce_unsigned)?,
            Sequence::U16(variable) => **variable = convert_all(tokens, coerce_unsigned)?,
            Sequence::U32(variable) => **variable = convert_all(tokens, coerce_unsigned)?,
            Sequence::U64(variable) => **variable = convert_all(tokens, coerce_unsigned)?,
            Sequence::Usize(variable) => **variable = convert_all(tokens, coerce_unsigned)?,
            Sequence::F32(variable) => **variable = convert_all(tokens, coerce_float)?,
            Sequence::F64(variable) => **variable = convert_all(tokens, coerce_float)?,
        };
        Ok(())
    }
}

fn convert_all<T>(
    tokens: &[(usize, String)],
    convert: impl Fn(&str) -> Result<T, InvalidConversion>,
) -> Result<Vec<T>, (usize, InvalidConversion)> {
    tokens
        .iter()
        .map(|(offset, token)| convert(token).map_err(|error| (*offset, error)))
        .collect()
}

impl<'a> From<&'a mut Vec<String>> for Sequence<'a> {
    fn from(value: &'a mut Vec<String>) -> Self {
        Sequence::Text(value)
    }
}

macro_rules! numeric_from {
    ($($variant:ident => $type:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $type> for Slot<'a> {
                fn from(value: &'a mut $type) -> Self {
                    Slot::$variant(value)
                }
            }

            impl<'a> From<&'a mut Vec<$type>> for Sequence<'a> {
                fn from(value: &'a mut Vec<$type>) -> Self {
                    Sequence::$variant(value)
                }
            }
        )*
    };
}

numeric_from! {
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    Isize => isize,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    Usize => usize,
    F32 => f32,
    F64 => f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn offsets(tokens: &[&str]) -> Vec<(usize, String)> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| (i, token.to_string()))
            .collect()
    }

    #[test]
    fn slot_kinds() {
        let mut flag = false;
        let mut text = String::default();
        let mut integer: i64 = 0;
        let mut unsigned: u64 = 0;
        let mut float: f64 = 0.0;

        assert_eq!(Slot::from(&mut flag).kind(), ValueKind::Flag);
        assert_eq!(Slot::from(&mut text).kind(), ValueKind::Text);
        assert_eq!(Slot::from(&mut integer).kind(), ValueKind::Integer);
        assert_eq!(Slot::from(&mut unsigned).kind(), ValueKind::Unsigned);
        assert_eq!(Slot::from(&mut float).kind(), ValueKind::Float);
    }

    #[test]
    fn slot_set() {
        let mut text = String::default();
        Slot::from(&mut text).set("Hello World!").unwrap();
        assert_eq!(text, "Hello World!");

        let mut integer: i64 = 0;
        Slot::from(&mut integer).set("-69").unwrap();
        assert_eq!(integer, -69);

        let mut unsigned: u64 = 0;
        Slot::from(&mut unsigned).set("123").unwrap();
        assert_eq!(unsigned, 123);

        let mut float: f64 = 0.0;
        Slot::from(&mut float).set("0.5").unwrap();
        assert_eq!(float, 0.5);

        let mut flag = true;
        Slot::from(&mut flag).set("false").unwrap();
        assert!(!flag);
    }

    #[rstest]
    #[case("255", Ok(255))]
    #[case("256", Err(()))]
    #[case("-1", Err(()))]
    fn slot_set_narrow(#[case] token: &str, #[case] expected: Result<u8, ()>) {
        // Setup
        let mut narrow: u8 = 7;

        // Execute
        let result = Slot::from(&mut narrow).set(token);

        // Verify
        match expected {
            Ok(value) => {
                result.unwrap();
                assert_eq!(narrow, value);
            }
            Err(()) => {
                assert_matches!(result.unwrap_err(), InvalidConversion::Integer { kind: ValueKind::Unsigned, .. });
                assert_eq!(narrow, 7);
            }
        }
    }

    #[test]
    fn slot_widths() {
        let mut small: i8 = 0;
        let mut medium: i32 = 0;
        let mut size: usize = 0;
        let mut single: f32 = 0.0;

        Slot::from(&mut small).set("-128").unwrap();
        Slot::from(&mut medium).set("70000").unwrap();
        Slot::from(&mut size).set("12").unwrap();
        Slot::from(&mut single).set("0.5").unwrap();

        assert_eq!(small, -128);
        assert_eq!(medium, 70000);
        assert_eq!(size, 12);
        assert_eq!(single, 0.5);
        assert_matches!(
            Slot::from(&mut small).set("128").unwrap_err(),
            InvalidConversion::Integer { kind: ValueKind::Integer, .. }
        );
    }

    #[test]
    fn slot_set_invalid_keeps_value() {
        // Setup
        let mut integer: i64 = 7;

        // Execute
        let error = Slot::from(&mut integer).set("seven").unwrap_err();

        // Verify
        assert_eq!(error.token(), "seven");
        assert_eq!(integer, 7);
    }

    #[test]
    fn slot_raise() {
        let mut flag = false;
        Slot::from(&mut flag).raise();
        assert!(flag);
    }

    #[test]
    #[should_panic]
    fn slot_raise_non_flag() {
        let mut text = String::default();
        Slot::from(&mut text).raise();
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec!["a"], vec!["a"])]
    #[case(vec!["b", "a", "-v"], vec!["b", "a", "-v"])]
    fn sequence_text(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        // Setup
        let mut variable: Vec<String> = vec!["initial".to_string()];

        // Execute
        Sequence::from(&mut variable)
            .assign(&offsets(&tokens))
            .unwrap();

        // Verify
        assert_eq!(variable, expected);
    }

    #[test]
    fn sequence_numbers() {
        let mut integers: Vec<i64> = Vec::default();
        Sequence::from(&mut integers)
            .assign(&offsets(&["1", "-2", "3"]))
            .unwrap();
        assert_eq!(integers, vec![1, -2, 3]);

        let mut unsigneds: Vec<u64> = Vec::default();
        Sequence::from(&mut unsigneds)
            .assign(&offsets(&["4", "5"]))
            .unwrap();
        assert_eq!(unsigneds, vec![4, 5]);

        let mut floats: Vec<f64> = Vec::default();
        Sequence::from(&mut floats)
            .assign(&offsets(&["0.25"]))
            .unwrap();
        assert_eq!(floats, vec![0.25]);

        let mut sizes: Vec<usize> = Vec::default();
        Sequence::from(&mut sizes)
            .assign(&offsets(&["6", "7"]))
            .unwrap();
        assert_eq!(sizes, vec![6, 7]);
        assert_eq!(Sequence::from(&mut sizes).kind(), ValueKind::Unsigned);
    }

    #[test]
    fn sequence_invalid() {
        // Setup
        let mut variable: Vec<u64> = vec![9];

        // Execute
        let (offset, error) = Sequence::from(&mut variable)
            .assign(&offsets(&["1", "2", "x"]))
            .unwrap_err();

        // Verify
        assert_eq!(offset, 2);
        assert_eq!(error.token(), "x");
        assert_eq!(variable, vec![9]);
    }
}
