pub(crate) use completions::Completions;
pub(crate) use convert::Convert;

mod completions;
mod convert;
