//! Mixed-ratio example: the result of combining two scales is the coarsest scale dividing both.

#![recursion_limit = "256"]

use qscale::time::{Hours, Milliseconds, Minutes, Seconds};
use qscale::typenum::{U1, U2, U3};
use qscale::{Common, Quantity, Ratio};

type Halves = Quantity<i64, Ratio<U1, U2>>;
type Thirds = Quantity<i64, Ratio<U1, U3>>;

fn main() {
    let shift: Minutes<i64> = Hours::<i64>::new(7i64) + Minutes::<i64>::new(45i64);
    assert_eq!(shift.count(), 465);

    let lap: Common<Seconds<i64>, Milliseconds<i64>> = Seconds::<i64>::new(61i64) + Milliseconds::<i64>::new(250i64);
    assert_eq!(lap.count(), 61_250);

    // 1/2 + 1/3 is counted in sixths.
    let sixths = Halves::new(1i64) + Thirds::new(1i64);
    assert_eq!(sixths.count(), 5);

    let average = Hours::<f64>::new(1.0) / 4i32;
    assert_eq!(Minutes::<i32>::new(15), average);
}
