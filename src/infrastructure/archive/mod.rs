mod sink;
mod streamer;

pub use sink::ChannelSink;
pub use streamer::{ArchiveStreamer, EntryError, FinalizeError};
