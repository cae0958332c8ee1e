pub mod channel;
pub mod extract;
pub mod fetch;

// Exporting the channel-level operation for convenience
pub use channel::video_links;
