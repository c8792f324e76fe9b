pub mod buffer;
pub mod formatter;
pub mod render;
pub mod series_look;
pub mod updater;
