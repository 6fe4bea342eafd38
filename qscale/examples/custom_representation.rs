//! Custom representation example: a derived newtype with explicit promotion from `i32`.

use qscale::length::{Kilometers, Meters};
use qscale::{ConvertFrom, Promote, Representation};

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Representation)]
struct Micros(i64);

impl ConvertFrom<i32> for Micros {
    fn convert_from(value: i32) -> Self {
        Micros(i64::from(value))
    }
}

impl Promote<i32> for Micros {
    type Output = Micros;
}

fn main() {
    let route = Kilometers::<Micros>::from_count(Micros(3)) + Meters::<i32>::new(250);
    assert_eq!(route.count(), Micros(3250));

    let checked = Meters::<Micros>::from_count(Micros(i64::MAX)).checked_add(Meters::<Micros>::new(1i32));
    assert!(checked.is_err());
}
