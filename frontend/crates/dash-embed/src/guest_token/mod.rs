mod client;
mod guest_token;
mod provider;

pub use client::GuestTokenClient;
pub use guest_token::GuestToken;
pub use provider::{GuestTokenProvider, UserTokenProvider};
