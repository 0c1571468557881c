pub(crate) mod instance;

#[doc(inline)]
pub use instance::KnapsackInstance;
