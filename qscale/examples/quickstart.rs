//! Minimal end-to-end example: same-scale and mixed-scale arithmetic on integer counts.

use qscale::length::{Kilometers, Meters};

fn main() {
    let a = Meters::<i32>::new(1);
    let b = Meters::<i32>::new(2);
    assert_eq!(a + b, Meters::<i32>::new(3));

    let total = Kilometers::<i32>::new(1) + Meters::<i32>::new(500);
    assert_eq!(total.count(), 1500);
    assert_eq!(Meters::<i32>::new(1000), Kilometers::<i32>::new(1));

    let laps: i32 = Kilometers::<i32>::new(2) / Meters::<i32>::new(400);
    assert_eq!(laps, 5);

    let precise = Meters::<f64>::from_quantity(Meters::<i32>::new(3));
    assert_eq!(precise.count(), 3.0);
}
