pub mod jsx;
