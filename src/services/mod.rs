pub mod permalink;
pub mod slug;
