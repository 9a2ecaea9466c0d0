// Logging shim. With the `logging` feature this forwards to the `log` crate,
// otherwise it expands to nothing and the arguments are never evaluated.

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::trace!($($tt)*);
        }
    };
}
