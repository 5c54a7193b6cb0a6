#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod digest;
mod error;
mod signature;
mod signing;
mod verifying;

pub use crate::{
    digest::Digest,
    error::{Error, Result},
    signature::Signature,
    signing::SigningKey,
    verifying::VerifyingKey,
};
pub use weierstrass;
