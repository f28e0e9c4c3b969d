pub mod render_map;
