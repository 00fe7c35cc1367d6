pub mod property_map;
