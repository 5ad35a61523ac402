mod common;

mod test_actions;
