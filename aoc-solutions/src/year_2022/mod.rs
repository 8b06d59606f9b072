pub mod day_13;
