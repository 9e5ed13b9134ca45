mod channel_card;
mod space_card;
mod video_card;

pub use channel_card::*;
pub use space_card::*;
pub use video_card::*;
