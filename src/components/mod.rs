pub mod panels;
pub mod route_map;
