pub mod random_lists;
