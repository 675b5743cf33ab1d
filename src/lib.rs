pub mod error;
pub mod imagenet;
