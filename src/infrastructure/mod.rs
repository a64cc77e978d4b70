mod browser_paginated;
mod fetcher_rest;
mod fetcher_retrier;
mod renderer_text;

pub use browser_paginated::*;
pub use fetcher_rest::*;
pub use fetcher_retrier::*;
pub use renderer_text::*;
