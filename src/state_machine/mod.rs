pub mod view_sm;
