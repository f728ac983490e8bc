//! [`Handler`] definitions.

use std::future::Future;

/// Handler executing some operation described by its `Args`.
///
/// Commands and queries of the whole back office are expressed through
/// this single seam, so callers stay decoupled from the executors.
pub trait Handler<Args = ()> {
    /// Value produced by a successful execution.
    type Ok;

    /// Error of a failed execution.
    type Err;

    /// Executes this [`Handler`] with the provided `args`.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
