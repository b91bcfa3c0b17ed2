pub mod signature_pad;

pub use signature_pad::{SignatureOutcome, SignaturePad};
