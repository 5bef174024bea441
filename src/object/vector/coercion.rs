use std::str::FromStr;

use super::OptionNA;

/// Element types an atomic vector can hold
pub trait AtomicMode {}

pub trait CoercibleInto<T>: Sized {
    fn coerce_into(self) -> T;
}

impl CoercibleInto<OptionNA<bool>> for OptionNA<bool> {
    #[inline]
    fn coerce_into(self) -> OptionNA<bool> {
        self
    }
}

impl CoercibleInto<OptionNA<f64>> for OptionNA<f64> {
    #[inline]
    fn coerce_into(self) -> OptionNA<f64> {
        self
    }
}

impl CoercibleInto<OptionNA<i32>> for OptionNA<i32> {
    #[inline]
    fn coerce_into(self) -> OptionNA<i32> {
        self
    }
}

impl CoercibleInto<OptionNA<i32>> for OptionNA<f64> {
    #[inline]
    fn coerce_into(self) -> OptionNA<i32> {
        match self {
            OptionNA::Some(i) if i.is_nan() => OptionNA::NA,
            OptionNA::Some(i) => OptionNA::Some(i as i32),
            OptionNA::NA => OptionNA::NA,
        }
    }
}

impl CoercibleInto<OptionNA<i32>> for OptionNA<bool> {
    #[inline]
    fn coerce_into(self) -> OptionNA<i32> {
        self.map(|i| i as i32)
    }
}

impl CoercibleInto<OptionNA<f64>> for OptionNA<i32> {
    #[inline]
    fn coerce_into(self) -> OptionNA<f64> {
        self.map(|i| i as f64)
    }
}

impl CoercibleInto<OptionNA<f64>> for OptionNA<bool> {
    #[inline]
    fn coerce_into(self) -> OptionNA<f64> {
        self.map(|i| i as i32 as f64)
    }
}

impl CoercibleInto<OptionNA<bool>> for OptionNA<f64> {
    #[inline]
    fn coerce_into(self) -> OptionNA<bool> {
        match self {
            OptionNA::Some(i) if i.is_nan() => OptionNA::NA,
            OptionNA::Some(i) => OptionNA::Some(i != 0.0),
            OptionNA::NA => OptionNA::NA,
        }
    }
}

impl CoercibleInto<OptionNA<bool>> for OptionNA<i32> {
    #[inline]
    fn coerce_into(self) -> OptionNA<bool> {
        self.map(|i| i != 0)
    }
}

impl<T> CoercibleInto<OptionNA<T>> for OptionNA<String>
where
    T: FromStr,
{
    fn coerce_into(self) -> OptionNA<T> {
        match self {
            OptionNA::Some(s) => s.parse().map_or(OptionNA::NA, |i| OptionNA::Some(i)),
            OptionNA::NA => OptionNA::NA,
        }
    }
}

impl CoercibleInto<OptionNA<String>> for OptionNA<bool> {
    fn coerce_into(self) -> OptionNA<String> {
        self.map(|i| if i { "TRUE" } else { "FALSE" }.to_string())
    }
}

impl CoercibleInto<OptionNA<String>> for OptionNA<i32> {
    fn coerce_into(self) -> OptionNA<String> {
        self.map(|i| format!("{}", i))
    }
}

impl CoercibleInto<OptionNA<String>> for OptionNA<f64> {
    fn coerce_into(self) -> OptionNA<String> {
        self.map(|i| format!("{}", i))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn double_nan_to_integer_is_na() {
        let x: OptionNA<i32> = OptionNA::Some(f64::NAN).coerce_into();
        assert_eq!(x, OptionNA::NA);
    }

    #[test]
    fn double_to_integer_truncates() {
        let x: OptionNA<i32> = OptionNA::Some(-2.7).coerce_into();
        assert_eq!(x, OptionNA::Some(-2));
    }

    #[test]
    fn character_to_integer_parses() {
        let x: OptionNA<i32> = OptionNA::Some("12".to_string()).coerce_into();
        let y: OptionNA<i32> = OptionNA::Some("twelve".to_string()).coerce_into();
        assert_eq!(x, OptionNA::Some(12));
        assert_eq!(y, OptionNA::NA);
    }

    #[test]
    fn logical_to_character_is_uppercase() {
        let x: OptionNA<String> = OptionNA::Some(true).coerce_into();
        assert_eq!(x, OptionNA::Some("TRUE".to_string()));
    }
}
