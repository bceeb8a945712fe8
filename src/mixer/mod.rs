/// Symmetric lookup of combinations
pub mod resolver;
/// Image URL formatting
pub mod url;
pub mod config;
pub mod errors;
/// The [EmojiMixer] itself
pub mod emoji_mixer;

pub use emoji_mixer::EmojiMixer;
