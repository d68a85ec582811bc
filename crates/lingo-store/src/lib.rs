mod client;

pub use client::WordStoreClient;
