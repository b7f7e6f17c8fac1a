use std::env;

use calpoint::{PointInTime, Preset};


fn main() {
    let now = PointInTime::now();
    println!("It is {} in UTC", now.format_utc("EEEE d MMMM yyyy, HH:mm:ss"));
    println!("It is {} in your local time zone", now.format("EEEE d MMMM yyyy, HH:mm:ss"));

    for preset in Preset::ALL.iter() {
        println!("{:>18}  {}", format!("{:?}", preset), now.format_preset(*preset));
    }

    for arg in env::args().skip(1) {
        match PointInTime::parse(&arg) {
            Some(when) => println!("{} is {} ({} days from today)", arg, when, when.start_of_day().difference_in_days(&now.start_of_day())),
            None       => println!("Error: {:?} is not a point in time", arg),
        }
    }
}
