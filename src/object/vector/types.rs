use super::coercion::AtomicMode;
use super::OptionNA;

pub type Double = OptionNA<f64>;
impl AtomicMode for Double {}

pub type Integer = OptionNA<i32>;
impl AtomicMode for Integer {}

pub type Logical = OptionNA<bool>;
impl AtomicMode for Logical {}

pub type Character = OptionNA<String>;
impl AtomicMode for Character {}
