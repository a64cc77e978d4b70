mod browser;
mod fetcher;

pub use browser::*;
pub use fetcher::*;
