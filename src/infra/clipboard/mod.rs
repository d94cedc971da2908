mod system;

pub use system::ArboardClipboard;
