pub mod batch;
pub mod extractor;
pub mod fetcher;
pub mod io;
pub mod pacing;
pub mod transport;

pub use batch::*;
pub use extractor::*;
pub use fetcher::*;
pub use io::*;
pub use pacing::*;
pub use transport::*;
