mod utils;
mod verification;
