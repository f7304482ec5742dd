pub mod screen_state;

#[cfg(test)]
mod screen_state_test;
