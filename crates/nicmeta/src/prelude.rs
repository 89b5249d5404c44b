pub(crate) use crate::error::{NicmetaError, NicmetaResult, bail};
pub(crate) use crate::progress::ProgressBarBuilder;
pub(crate) use crate::vocab::Vocabulary;
