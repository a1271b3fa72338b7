pub mod controller_meta;
