mod tend_error;

pub use tend_error::{TendError, TendResult};
