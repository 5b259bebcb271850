pub mod use_table;
