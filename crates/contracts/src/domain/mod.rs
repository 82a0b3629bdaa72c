pub mod day_navigator;
