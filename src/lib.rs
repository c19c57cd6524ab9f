pub mod color;
pub mod commands;
pub mod logging;
pub mod now_playing;
pub mod overlay;
pub mod poller;
pub mod screen;
pub mod settings;
