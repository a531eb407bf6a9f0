//! Response envelopes shared by the handlers.

mod response;

pub use response::{ApiResponse, Created, ListResponse, MessageResponse, NoContent};
