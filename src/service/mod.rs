//! PublicationService: validated operations over a `PublicationRepository`.

mod publications;
mod validation;
pub use publications::{Download, PublicationService};
pub use validation::{decode_content, UploadValidator};
