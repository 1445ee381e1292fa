pub use client::AlphaVantageClient;

mod client;
mod response;
