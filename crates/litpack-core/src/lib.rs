pub mod error;
pub mod validate;

pub mod codegen;
pub mod digest;
pub mod escape;
pub mod ident;

pub use crate::codegen::Generator;
pub use crate::escape::EscapeStyle;
pub use crate::ident::derive_identifier;
