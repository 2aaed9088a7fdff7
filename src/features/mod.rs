pub mod about;
pub mod catalog;
pub mod onboarding;
pub mod playback;
pub mod share;
pub mod storage;
pub mod tally;
